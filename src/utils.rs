//! DOM id helpers for SyncScript track panels.

use crate::data::TrackRole;

/// Id of the scrollable list container for a track.
pub fn track_container_id(role: TrackRole) -> String {
    format!("{}-track", role.key())
}

/// Id of one rendered line inside a track.
pub fn line_dom_id(role: TrackRole, index: usize) -> String {
    format!("{}-line-{index}", role.key())
}
