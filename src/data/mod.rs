//! Viewer payload: segments, tracks, settings, and how they are loaded.

mod loader;
mod models;

pub use loader::*;
pub use models::*;
