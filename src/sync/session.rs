//! Viewer session: playback state plus both tracks, driven by media signals and user input.

use super::media::{MediaSignal, MediaTarget};
use super::seek::{PlaybackState, SeekCoordinator};
use super::sync_loop::{sync_at, whole_seconds, SyncOutcome};
use crate::data::{Track, TrackRole};

/// Forward nudge applied when seeking to a segment, so the target lands inside it
/// rather than on the previous segment's exclusive end.
pub const SEEK_NUDGE_SECONDS: f64 = 0.001;

pub fn segment_seek_target(start: f64) -> f64 {
    start + SEEK_NUDGE_SECONDS
}

#[derive(Debug, Clone)]
pub struct ViewerSession {
    state: PlaybackState,
    transcript: Track,
    commentary: Track,
}

impl ViewerSession {
    /// `url_time` is the `t` parameter present when the page loaded.
    pub fn new(transcript: Track, commentary: Track, url_time: Option<f64>) -> Self {
        let state = PlaybackState {
            url_time: url_time.filter(|t| *t >= 0.0).map(whole_seconds),
            ..PlaybackState::default()
        };
        Self {
            state,
            transcript,
            commentary,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn track(&self, role: TrackRole) -> &Track {
        match role {
            TrackRole::Transcript => &self.transcript,
            TrackRole::Commentary => &self.commentary,
        }
    }

    pub fn active_index(&self, role: TrackRole) -> Option<usize> {
        match role {
            TrackRole::Transcript => self.state.last_transcript_index,
            TrackRole::Commentary => self.state.last_commentary_index,
        }
    }

    /// Route one media lifecycle signal.
    ///
    /// `url_time` is only consulted for the first metadata signal.
    pub fn handle_media_signal<M: MediaTarget>(
        &mut self,
        signal: MediaSignal,
        media: &mut M,
        url_time: Option<f64>,
    ) -> Option<SyncOutcome> {
        match signal {
            MediaSignal::MetadataLoaded => {
                if self.state.initial_seek_applied {
                    return None;
                }
                SeekCoordinator::apply_initial_deep_link(&mut self.state, media, url_time);
                let now = media.current_time();
                Some(self.sync(if now.is_finite() { now } else { 0.0 }))
            }
            MediaSignal::TimeAdvanced | MediaSignal::SeekCompleted => {
                Some(self.sync(media.current_time()))
            }
            MediaSignal::CanPlay
            | MediaSignal::DataLoaded
            | MediaSignal::DurationKnown
            | MediaSignal::Progress => self.try_apply_pending(media),
        }
    }

    pub fn request_seek<M: MediaTarget>(
        &mut self,
        media: &mut M,
        seconds: f64,
    ) -> Option<SyncOutcome> {
        let applied = SeekCoordinator::request_seek(&mut self.state, media, seconds)?;
        Some(self.sync(applied))
    }

    pub fn seek_to_segment<M: MediaTarget>(
        &mut self,
        media: &mut M,
        role: TrackRole,
        index: usize,
    ) -> Option<SyncOutcome> {
        let start = self.track(role).segments().get(index)?.start;
        self.request_seek(media, segment_seek_target(start))
    }

    pub fn try_apply_pending<M: MediaTarget>(&mut self, media: &mut M) -> Option<SyncOutcome> {
        let applied = SeekCoordinator::try_apply_pending(&mut self.state, media)?;
        Some(self.sync(applied))
    }

    /// History navigation: the URL's `t` becomes a user seek.
    ///
    /// The URL mirror always follows the restored URL, so a URL without `t` gets one
    /// written back on the next sync pass.
    pub fn navigate_to_url_time<M: MediaTarget>(
        &mut self,
        media: &mut M,
        url_time: Option<f64>,
    ) -> Option<SyncOutcome> {
        let seconds = url_time.filter(|t| t.is_finite());
        self.state.url_time = seconds.filter(|t| *t >= 0.0).map(whole_seconds);
        self.request_seek(media, seconds?)
    }

    pub fn sync(&mut self, cur_time: f64) -> SyncOutcome {
        sync_at(&mut self.state, &self.transcript, &self.commentary, cur_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Segment;
    use crate::sync::media::fake::FakeMedia;
    use crate::sync::media::ReadyState;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment {
            start,
            end: Some(end),
            speaker: None,
            text: text.to_string(),
        }
    }

    fn session(url_time: Option<f64>) -> ViewerSession {
        ViewerSession::new(
            Track::new(
                TrackRole::Transcript,
                vec![seg(0.0, 3.2, "A"), seg(3.2, 8.5, "B"), seg(8.5, 14.1, "C")],
            ),
            Track::new(TrackRole::Commentary, vec![seg(0.0, 8.5, "hook")]),
            url_time,
        )
    }

    #[test]
    fn clicking_a_segment_nudges_past_its_start() {
        let mut session = session(None);
        let mut media = FakeMedia::seekable(60.0);

        let outcome = session
            .seek_to_segment(&mut media, TrackRole::Transcript, 2)
            .unwrap();
        assert_eq!(media.seeks, vec![8.501]);
        assert_eq!(outcome.transcript_index, Some(2));
        assert_eq!(outcome.url_time, Some(8));
    }

    #[test]
    fn seeking_to_unknown_segment_does_nothing() {
        let mut session = session(None);
        let mut media = FakeMedia::seekable(60.0);

        assert!(session
            .seek_to_segment(&mut media, TrackRole::Commentary, 5)
            .is_none());
        assert!(media.seeks.is_empty());
    }

    #[test]
    fn deep_link_survives_early_readiness_then_applies_once() {
        let mut session = session(Some(10.0));
        let mut media = FakeMedia {
            ready: ReadyState::HaveMetadata,
            ..FakeMedia::loading()
        };

        let outcome = session
            .handle_media_signal(MediaSignal::MetadataLoaded, &mut media, Some(10.0))
            .unwrap();
        assert_eq!(outcome.clock, "00:00");
        assert_eq!(session.state().pending_seek, Some(10.0));

        assert!(session
            .handle_media_signal(MediaSignal::Progress, &mut media, None)
            .is_none());

        media.seekable = Some((0.0, 60.0));
        let outcome = session
            .handle_media_signal(MediaSignal::CanPlay, &mut media, None)
            .unwrap();
        assert_eq!(outcome.transcript_index, Some(2));
        assert_eq!(outcome.url_time, Some(10));

        assert!(session
            .handle_media_signal(MediaSignal::MetadataLoaded, &mut media, Some(10.0))
            .is_none());
        assert!(session
            .handle_media_signal(MediaSignal::DurationKnown, &mut media, None)
            .is_none());
        assert_eq!(media.seeks, vec![10.0]);
    }

    #[test]
    fn click_before_metadata_beats_the_deep_link() {
        let mut session = session(Some(10.0));
        let mut media = FakeMedia::loading();

        assert!(session
            .seek_to_segment(&mut media, TrackRole::Transcript, 1)
            .is_none());

        media = FakeMedia::seekable(60.0);
        session.handle_media_signal(MediaSignal::MetadataLoaded, &mut media, Some(10.0));
        assert_eq!(media.seeks, vec![3.201]);
        assert_eq!(session.active_index(TrackRole::Transcript), Some(1));
    }

    #[test]
    fn time_updates_drive_highlighting() {
        let mut session = session(None);
        let mut media = FakeMedia::seekable(60.0);

        media.time = 4.0;
        let outcome = session
            .handle_media_signal(MediaSignal::TimeAdvanced, &mut media, None)
            .unwrap();
        assert_eq!(outcome.transcript_index, Some(1));
        assert_eq!(outcome.commentary_index, Some(0));

        media.time = 30.0;
        let outcome = session
            .handle_media_signal(MediaSignal::SeekCompleted, &mut media, None)
            .unwrap();
        assert_eq!(outcome.transcript_index, Some(2));
        assert_eq!(outcome.commentary_index, None);
        assert_eq!(session.active_index(TrackRole::Commentary), Some(0));
    }

    #[test]
    fn history_navigation_is_a_user_seek() {
        let mut session = session(Some(3.0));
        let mut media = FakeMedia::seekable(60.0);

        let outcome = session
            .navigate_to_url_time(&mut media, Some(9.0))
            .unwrap();
        assert!(session.state().user_initiated_seek);
        assert_eq!(outcome.url_time, None);
        assert_eq!(media.seeks, vec![9.0]);

        assert!(session.navigate_to_url_time(&mut media, None).is_none());
    }

    #[test]
    fn returning_to_a_url_without_time_rewrites_it_next_tick() {
        let mut session = session(None);
        let mut media = FakeMedia::seekable(60.0);

        media.time = 42.3;
        let outcome = session
            .handle_media_signal(MediaSignal::TimeAdvanced, &mut media, None)
            .unwrap();
        assert_eq!(outcome.url_time, Some(42));

        assert!(session.navigate_to_url_time(&mut media, None).is_none());
        assert_eq!(session.state().url_time, None);

        media.time = 42.8;
        let outcome = session
            .handle_media_signal(MediaSignal::TimeAdvanced, &mut media, None)
            .unwrap();
        assert_eq!(outcome.url_time, Some(42));
    }

    #[test]
    fn negative_url_time_clears_the_mirror_but_still_seeks() {
        let mut session = session(Some(20.0));
        let mut media = FakeMedia::seekable(60.0);

        let outcome = session
            .navigate_to_url_time(&mut media, Some(-3.0))
            .unwrap();
        assert_eq!(media.seeks, vec![0.0]);
        assert_eq!(outcome.url_time, Some(0));
    }

    #[test]
    fn initial_url_time_seeds_the_mirror() {
        assert_eq!(session(Some(125.7)).state().url_time, Some(125));
        assert_eq!(session(Some(-4.0)).state().url_time, None);
        assert_eq!(session(None).state().url_time, None);
    }
}
