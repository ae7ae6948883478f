//! Per-tick reconciliation of playback time with highlight and URL state.

use super::locator::active_segment_index;
use super::seek::PlaybackState;
use crate::data::Track;

/// What the UI has to change after one sync pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncOutcome {
    pub clock: String,
    /// New transcript highlight, only when it moved.
    pub transcript_index: Option<usize>,
    /// New commentary highlight, only when it moved.
    pub commentary_index: Option<usize>,
    /// New URL `t` value, only when it changed.
    pub url_time: Option<u64>,
}

impl SyncOutcome {
    pub fn highlight_changed(&self) -> bool {
        self.transcript_index.is_some() || self.commentary_index.is_some()
    }
}

/// Format seconds as `MM:SS`. Negative and non-finite input shows `00:00`.
pub fn format_clock(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let mins = total / 60;
    let secs = total % 60;
    format!("{mins:02}:{secs:02}")
}

/// Floor to whole seconds, treating negative and non-finite input as zero.
pub fn whole_seconds(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds < 0.0 {
        return 0;
    }
    seconds.floor() as u64
}

/// Run one sync pass at `cur_time`.
///
/// A track whose lookup finds nothing keeps its previous highlight; clearing it would
/// flicker through silence gaps.
pub fn sync_at(
    state: &mut PlaybackState,
    transcript: &Track,
    commentary: &Track,
    cur_time: f64,
) -> SyncOutcome {
    state.current_time = cur_time;

    let transcript_index = advance_highlight(
        &mut state.last_transcript_index,
        active_segment_index(transcript.segments(), cur_time),
    );
    let commentary_index = advance_highlight(
        &mut state.last_commentary_index,
        active_segment_index(commentary.segments(), cur_time),
    );

    let floored = whole_seconds(cur_time);
    let url_time = if state.url_time != Some(floored) {
        state.url_time = Some(floored);
        Some(floored)
    } else {
        None
    };

    SyncOutcome {
        clock: format_clock(cur_time),
        transcript_index,
        commentary_index,
        url_time,
    }
}

fn advance_highlight(last: &mut Option<usize>, found: Option<usize>) -> Option<usize> {
    let index = found?;
    if *last == Some(index) {
        return None;
    }
    *last = Some(index);
    Some(index)
}

/// Scroll offset that vertically centers an element inside its scroll container,
/// clamped to the container's scrollable extent.
pub fn centered_scroll_top(
    element_top: f64,
    element_height: f64,
    container_height: f64,
    scroll_height: f64,
) -> f64 {
    let target = element_top - container_height / 2.0 + element_height / 2.0;
    let max_scroll = (scroll_height - container_height).max(0.0);
    target.clamp(0.0, max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Segment, TrackRole};

    fn seg(start: f64, end: f64) -> Segment {
        Segment {
            start,
            end: Some(end),
            speaker: None,
            text: String::new(),
        }
    }

    fn tracks() -> (Track, Track) {
        (
            Track::new(
                TrackRole::Transcript,
                vec![seg(0.0, 3.2), seg(3.2, 8.5), seg(10.0, 14.1)],
            ),
            Track::new(TrackRole::Commentary, vec![seg(0.0, 8.5), seg(8.5, 20.0)]),
        )
    }

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(125.0), "02:05");
        assert_eq!(format_clock(59.99), "00:59");
        assert_eq!(format_clock(6000.0), "100:00");
    }

    #[test]
    fn clock_clamps_negative_and_nan() {
        assert_eq!(format_clock(-5.0), "00:00");
        assert_eq!(format_clock(f64::NAN), "00:00");
        assert_eq!(format_clock(f64::INFINITY), "00:00");
    }

    #[test]
    fn first_pass_highlights_both_tracks() {
        let (transcript, commentary) = tracks();
        let mut state = PlaybackState::default();

        let outcome = sync_at(&mut state, &transcript, &commentary, 1.0);
        assert_eq!(outcome.clock, "00:01");
        assert_eq!(outcome.transcript_index, Some(0));
        assert_eq!(outcome.commentary_index, Some(0));
        assert_eq!(outcome.url_time, Some(1));
        assert_eq!(state.current_time, 1.0);
    }

    #[test]
    fn unchanged_highlight_is_not_reported_again() {
        let (transcript, commentary) = tracks();
        let mut state = PlaybackState::default();

        sync_at(&mut state, &transcript, &commentary, 1.0);
        let outcome = sync_at(&mut state, &transcript, &commentary, 1.4);
        assert!(!outcome.highlight_changed());
        assert_eq!(outcome.url_time, None);

        let outcome = sync_at(&mut state, &transcript, &commentary, 3.5);
        assert_eq!(outcome.transcript_index, Some(1));
        assert_eq!(outcome.commentary_index, None);
        assert_eq!(outcome.url_time, Some(3));
    }

    #[test]
    fn gap_keeps_previous_highlight() {
        let (transcript, commentary) = tracks();
        let mut state = PlaybackState::default();

        sync_at(&mut state, &transcript, &commentary, 5.0);
        let outcome = sync_at(&mut state, &transcript, &commentary, 9.0);
        assert_eq!(outcome.transcript_index, None);
        assert_eq!(state.last_transcript_index, Some(1));
        assert_eq!(outcome.commentary_index, Some(1));
    }

    #[test]
    fn empty_tracks_never_highlight() {
        let empty_a = Track::new(TrackRole::Transcript, Vec::new());
        let empty_b = Track::new(TrackRole::Commentary, Vec::new());
        let mut state = PlaybackState::default();

        let outcome = sync_at(&mut state, &empty_a, &empty_b, 12.0);
        assert!(!outcome.highlight_changed());
        assert_eq!(state.last_transcript_index, None);
        assert_eq!(outcome.clock, "00:12");
    }

    #[test]
    fn url_time_is_floored() {
        let (transcript, commentary) = tracks();
        let mut state = PlaybackState::default();

        let outcome = sync_at(&mut state, &transcript, &commentary, 125.7);
        assert_eq!(outcome.url_time, Some(125));
    }

    #[test]
    fn url_time_matching_stored_value_is_not_rewritten() {
        let (transcript, commentary) = tracks();
        let mut state = PlaybackState {
            url_time: Some(42),
            ..PlaybackState::default()
        };

        let outcome = sync_at(&mut state, &transcript, &commentary, 42.9);
        assert_eq!(outcome.url_time, None);
    }

    #[test]
    fn scroll_target_centers_and_clamps() {
        assert_eq!(centered_scroll_top(500.0, 40.0, 200.0, 2000.0), 420.0);
        assert_eq!(centered_scroll_top(10.0, 40.0, 200.0, 2000.0), 0.0);
        assert_eq!(centered_scroll_top(1980.0, 40.0, 200.0, 2000.0), 1800.0);
        assert_eq!(centered_scroll_top(50.0, 20.0, 400.0, 300.0), 0.0);
    }
}
