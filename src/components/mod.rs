//! The components module contains all shared components for the viewer.

mod app;
pub(crate) mod audio_manager;
mod toolbar;
mod track_panel;
mod viewer_controller;

pub use app::*;
pub use audio_manager::AudioBinding;
pub use toolbar::*;
pub use track_panel::*;
pub use viewer_controller::*;
