//! Viewer controller: bridges the sync session with Dioxus signals and the page.

use crate::components::audio_manager::{
    center_line, current_href, media_current_time, replace_url_time, with_media,
};
use crate::data::TrackRole;
use crate::sync::{read_time_param, whole_seconds, MediaSignal, SyncOutcome, ViewerSession};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Highlighted line per track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveLines {
    pub transcript: Option<usize>,
    pub commentary: Option<usize>,
}

impl ActiveLines {
    pub fn get(&self, role: TrackRole) -> Option<usize> {
        match role {
            TrackRole::Transcript => self.transcript,
            TrackRole::Commentary => self.commentary,
        }
    }

    fn set(&mut self, role: TrackRole, index: usize) {
        match role {
            TrackRole::Transcript => self.transcript = Some(index),
            TrackRole::Commentary => self.commentary = Some(index),
        }
    }
}

#[derive(Clone)]
pub struct ViewerController {
    session: Rc<RefCell<ViewerSession>>,
    pub active: Signal<ActiveLines>,
    pub clock: Signal<String>,
    pub follow: Signal<bool>,
}

impl ViewerController {
    pub fn new(
        session: Rc<RefCell<ViewerSession>>,
        active: Signal<ActiveLines>,
        clock: Signal<String>,
        follow: Signal<bool>,
    ) -> Self {
        Self {
            session,
            active,
            clock,
            follow,
        }
    }

    pub fn handle_media_signal(&mut self, signal: MediaSignal) {
        let url_time = match signal {
            MediaSignal::MetadataLoaded => read_time_param(&current_href()),
            _ => None,
        };
        let session = self.session.clone();
        let outcome = with_media(|media| {
            session
                .borrow_mut()
                .handle_media_signal(signal, media, url_time)
        })
        .flatten();
        if let Some(outcome) = outcome {
            self.apply(outcome);
        }
    }

    /// Seek to the start of a segment (click or keyboard activation).
    pub fn seek_to_segment(&mut self, role: TrackRole, index: usize) {
        let session = self.session.clone();
        let outcome = with_media(|media| session.borrow_mut().seek_to_segment(media, role, index))
            .flatten();
        if let Some(outcome) = outcome {
            self.apply(outcome);
        }
    }

    /// Back/forward navigation: seek to whatever `t` the restored URL carries.
    pub fn navigate_to_current_url(&mut self) {
        let url_time = read_time_param(&current_href());
        let session = self.session.clone();
        let outcome =
            with_media(|media| session.borrow_mut().navigate_to_url_time(media, url_time))
                .flatten();
        if let Some(outcome) = outcome {
            self.apply(outcome);
        }
    }

    /// Whole seconds to put in a shared link.
    pub fn share_seconds(&self) -> u64 {
        let fallback = self.session.borrow().state().current_time;
        whole_seconds(media_current_time().unwrap_or(fallback))
    }

    pub fn recenter_if_following(&self) {
        if !*self.follow.peek() {
            return;
        }
        let session = self.session.borrow();
        for role in [TrackRole::Transcript, TrackRole::Commentary] {
            if let Some(index) = session.active_index(role) {
                center_line(role, index);
            }
        }
    }

    fn apply(&mut self, outcome: SyncOutcome) {
        if *self.clock.peek() != outcome.clock {
            self.clock.set(outcome.clock.clone());
        }

        if outcome.highlight_changed() {
            debug!(
                transcript = ?outcome.transcript_index,
                commentary = ?outcome.commentary_index,
                "highlight moved"
            );
        }

        let follow = *self.follow.peek();
        for (role, moved) in [
            (TrackRole::Transcript, outcome.transcript_index),
            (TrackRole::Commentary, outcome.commentary_index),
        ] {
            let Some(index) = moved else {
                continue;
            };
            self.active.write().set(role, index);
            if follow {
                center_line(role, index);
            }
        }

        if let Some(seconds) = outcome.url_time {
            replace_url_time(seconds);
        }
    }
}
