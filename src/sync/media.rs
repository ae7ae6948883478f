//! The media element as seen by the synchronization core.

/// `HTMLMediaElement.readyState` ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    HaveNothing,
    HaveMetadata,
    HaveCurrentData,
    HaveFutureData,
    HaveEnoughData,
}

impl ReadyState {
    pub fn from_level(level: u16) -> Self {
        match level {
            0 => Self::HaveNothing,
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            _ => Self::HaveEnoughData,
        }
    }
}

/// Playback object the seek coordinator drives.
pub trait MediaTarget {
    fn ready_state(&self) -> ReadyState;

    /// First `[start, end)` pair reported as seekable, if any.
    fn first_seekable_range(&self) -> Option<(f64, f64)>;

    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    fn is_seekable(&self) -> bool {
        self.ready_state() >= ReadyState::HaveMetadata && self.first_seekable_range().is_some()
    }
}

/// Media lifecycle events the viewer subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaSignal {
    MetadataLoaded,
    TimeAdvanced,
    SeekCompleted,
    CanPlay,
    DataLoaded,
    DurationKnown,
    Progress,
}

impl MediaSignal {
    pub const ALL: [MediaSignal; 7] = [
        MediaSignal::MetadataLoaded,
        MediaSignal::TimeAdvanced,
        MediaSignal::SeekCompleted,
        MediaSignal::CanPlay,
        MediaSignal::DataLoaded,
        MediaSignal::DurationKnown,
        MediaSignal::Progress,
    ];

    pub fn event_name(self) -> &'static str {
        match self {
            Self::MetadataLoaded => "loadedmetadata",
            Self::TimeAdvanced => "timeupdate",
            Self::SeekCompleted => "seeked",
            Self::CanPlay => "canplay",
            Self::DataLoaded => "loadeddata",
            Self::DurationKnown => "durationchange",
            Self::Progress => "progress",
        }
    }
}
