//! Audio Manager - Binds the page's audio element to the viewer session.
//! Media and window events are forwarded to the controller outside the render cycle.

// Shared imports, media adapters, and browser-only utility helpers.
include!("shared_types_and_web_helpers.rs");
// Native (non-wasm) binding: no media element, seeks stay pending.
include!("controller_native.rs");
// Web (wasm) binding: media signal and window listener registration.
include!("controller_web.rs");
// Public playback utility API.
include!("playback_api.rs");
