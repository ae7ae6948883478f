use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Width of the interval covered by a segment that has no `end`.
pub const ZERO_DURATION_EPSILON: f64 = 0.01;

/// Number of distinct speaker badge colours before slots repeat.
pub const MAX_BADGE_COLORS: usize = 6;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Segment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: f64,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Segment {
    /// Exclusive end of the segment, falling back to a near-zero span after `start`.
    pub fn effective_end(&self) -> f64 {
        self.end.unwrap_or(self.start + ZERO_DURATION_EPSILON)
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t < self.effective_end()
    }

    pub fn speaker_label(&self) -> Option<&str> {
        self.speaker
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackRole {
    Transcript,
    Commentary,
}

impl TrackRole {
    pub fn key(self) -> &'static str {
        match self {
            Self::Transcript => "transcript",
            Self::Commentary => "comment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Transcript => "Transcript",
            Self::Commentary => "Commentary",
        }
    }
}

/// A read-only sequence of segments ordered by start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    role: TrackRole,
    segments: Vec<Segment>,
}

impl Track {
    pub fn new(role: TrackRole, mut segments: Vec<Segment>) -> Self {
        segments.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { role, segments }
    }

    pub fn role(&self) -> TrackRole {
        self.role
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewerSettings {
    #[serde(default = "default_follow")]
    pub follow: bool,
    #[serde(default = "default_copy_confirm_ms", alias = "copyConfirmMs")]
    pub copy_confirm_ms: u32,
}

fn default_follow() -> bool {
    true
}

fn default_copy_confirm_ms() -> u32 {
    1000
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            follow: default_follow(),
            copy_confirm_ms: default_copy_confirm_ms(),
        }
    }
}

/// Payload describing one recording and its two text tracks.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ViewerData {
    #[serde(default, alias = "audioSrc")]
    pub audio_src: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub transcript: Vec<Segment>,
    #[serde(default)]
    pub commentary: Vec<Segment>,
    #[serde(default)]
    pub settings: ViewerSettings,
}

impl ViewerData {
    pub fn into_tracks(self) -> (Track, Track) {
        (
            Track::new(TrackRole::Transcript, self.transcript),
            Track::new(TrackRole::Commentary, self.commentary),
        )
    }
}

/// Speaker name to badge colour slot, assigned in order of first appearance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpeakerPalette {
    slots: HashMap<String, usize>,
}

impl SpeakerPalette {
    pub fn from_tracks(tracks: &[&Track]) -> Self {
        let mut slots = HashMap::new();
        let mut seen = 0usize;
        for segment in tracks.iter().flat_map(|track| track.segments()) {
            let Some(name) = segment.speaker_label() else {
                continue;
            };
            if !slots.contains_key(name) {
                slots.insert(name.to_string(), seen % MAX_BADGE_COLORS);
                seen += 1;
            }
        }
        Self { slots }
    }

    pub fn slot(&self, speaker: &str) -> Option<usize> {
        self.slots.get(speaker).copied()
    }

    pub fn badge_class(&self, speaker: &str) -> String {
        match self.slot(speaker) {
            Some(slot) => format!("badge badge-{slot}"),
            None => "badge".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spoken(start: f64, speaker: &str) -> Segment {
        Segment {
            start,
            end: Some(start + 1.0),
            speaker: Some(speaker.to_string()),
            text: String::new(),
        }
    }

    #[test]
    fn null_start_and_text_read_as_defaults() {
        let segment: Segment =
            serde_json::from_str(r#"{"start": null, "end": 2.0, "text": null}"#).unwrap();
        assert_eq!(segment.start, 0.0);
        assert_eq!(segment.end, Some(2.0));
        assert_eq!(segment.text, "");

        let segment: Segment = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(segment.start, 0.0);
        assert_eq!(segment.text, "hi");
    }

    #[test]
    fn track_sorts_by_start() {
        let track = Track::new(
            TrackRole::Transcript,
            vec![spoken(8.5, "a"), spoken(0.0, "b"), spoken(3.2, "c")],
        );
        let starts: Vec<f64> = track.segments().iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0.0, 3.2, 8.5]);
    }

    #[test]
    fn missing_end_defaults_to_epsilon() {
        let segment = Segment {
            start: 4.0,
            ..Segment::default()
        };
        assert!((segment.effective_end() - 4.01).abs() < 1e-9);
        assert!(segment.contains(4.0));
        assert!(!segment.contains(4.01));
    }

    #[test]
    fn blank_speaker_has_no_label() {
        let segment = Segment {
            speaker: Some("   ".to_string()),
            ..Segment::default()
        };
        assert_eq!(segment.speaker_label(), None);
    }

    #[test]
    fn palette_assigns_slots_by_first_appearance_across_tracks() {
        let transcript = Track::new(
            TrackRole::Transcript,
            vec![spoken(0.0, "SPEAKER_00"), spoken(1.0, "SPEAKER_01"), spoken(2.0, "SPEAKER_00")],
        );
        let commentary = Track::new(TrackRole::Commentary, vec![spoken(0.0, "Host")]);
        let palette = SpeakerPalette::from_tracks(&[&transcript, &commentary]);

        assert_eq!(palette.slot("SPEAKER_00"), Some(0));
        assert_eq!(palette.slot("SPEAKER_01"), Some(1));
        assert_eq!(palette.slot("Host"), Some(2));
        assert_eq!(palette.badge_class("Host"), "badge badge-2");
        assert_eq!(palette.badge_class("nobody"), "badge");
    }

    #[test]
    fn palette_cycles_after_max_colors() {
        let segments = (0..8).map(|i| spoken(i as f64, &format!("S{i}"))).collect();
        let track = Track::new(TrackRole::Transcript, segments);
        let palette = SpeakerPalette::from_tracks(&[&track]);

        assert_eq!(palette.slot("S5"), Some(5));
        assert_eq!(palette.slot("S6"), Some(0));
        assert_eq!(palette.slot("S7"), Some(1));
    }
}
