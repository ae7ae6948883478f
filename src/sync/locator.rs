//! Time-to-segment lookup used to drive highlighting.

use crate::data::Segment;

/// Find the segment active at `t`.
///
/// Scans in order and returns the first segment whose `[start, end)` interval holds `t`,
/// so overlapping segments resolve to whichever comes first. The final segment is treated
/// as open-ended: any `t` at or past its start falls back to it when nothing else matches.
pub fn active_segment_index(segments: &[Segment], t: f64) -> Option<usize> {
    let last = segments.len().checked_sub(1)?;

    for (index, segment) in segments.iter().enumerate() {
        if segment.contains(t) {
            return Some(index);
        }
    }

    if t >= segments[last].start {
        Some(last)
    } else {
        None
    }
}
