//! Seek coordination: one pending request, applied once the media can seek.
//!
//! A request is held in a single slot until the media reports metadata and a seekable
//! range. Media backends often announce readiness before seeking actually works, so
//! `try_apply_pending` is cheap to call repeatedly and does nothing until it can succeed.

use super::media::MediaTarget;
use dioxus::logger::tracing::{debug, info};

/// Distance kept from the end of the seekable range; some backends reject or round
/// a seek to the exact end.
pub const SEEK_END_MARGIN_SECONDS: f64 = 0.05;

/// Page-lifetime playback state.
///
/// Only the seek coordinator and the sync loop write to it, one event at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub current_time: f64,
    /// Overwritten, never queued.
    pub pending_seek: Option<f64>,
    pub user_initiated_seek: bool,
    pub initial_seek_applied: bool,
    pub last_transcript_index: Option<usize>,
    pub last_commentary_index: Option<usize>,
    /// Last value written to (or read from) the URL `t` parameter.
    pub url_time: Option<u64>,
}

/// Clamp a target into `[start, max(start, end - margin)]`.
pub fn clamp_into_range(target: f64, range: (f64, f64)) -> f64 {
    let (start, end) = range;
    let upper = start.max(end - SEEK_END_MARGIN_SECONDS);
    target.max(start).min(upper)
}

pub struct SeekCoordinator;

impl SeekCoordinator {
    /// Queue a user seek and try to apply it right away.
    ///
    /// Returns the committed time when the seek was applied immediately.
    pub fn request_seek<M: MediaTarget>(
        state: &mut PlaybackState,
        media: &mut M,
        seconds: f64,
    ) -> Option<f64> {
        if !seconds.is_finite() {
            return None;
        }
        state.user_initiated_seek = true;
        state.pending_seek = Some(seconds);
        Self::try_apply_pending(state, media)
    }

    /// Apply the pending seek if the media can take it.
    pub fn try_apply_pending<M: MediaTarget>(
        state: &mut PlaybackState,
        media: &mut M,
    ) -> Option<f64> {
        let target = state.pending_seek?;
        if !media.is_seekable() {
            return None;
        }
        let range = media.first_seekable_range()?;

        let clamped = clamp_into_range(target, range);
        media.set_current_time(clamped);
        state.current_time = media.current_time();
        state.pending_seek = None;
        debug!(requested = target, applied = state.current_time, "seek applied");
        Some(state.current_time)
    }

    /// Queue the deep-link time from the URL, at most once per page.
    ///
    /// A user seek that happened first wins; the latch is set even when there is
    /// nothing to apply so later metadata events never revisit the URL.
    pub fn apply_initial_deep_link<M: MediaTarget>(
        state: &mut PlaybackState,
        media: &mut M,
        url_time: Option<f64>,
    ) -> Option<f64> {
        if state.initial_seek_applied {
            return None;
        }
        state.initial_seek_applied = true;

        if let Some(seconds) = url_time.filter(|t| t.is_finite()) {
            if !state.user_initiated_seek {
                info!(seconds, "queueing deep-link seek");
                state.pending_seek = Some(seconds);
            }
        }
        Self::try_apply_pending(state, media)
    }
}
