// Shared imports, media adapters, and browser-specific helper utilities.
use crate::data::TrackRole;
use crate::sync::{MediaTarget, ReadyState};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::ViewerController;
#[cfg(target_arch = "wasm32")]
use crate::sync::{centered_scroll_top, with_time_param, MediaSignal};
#[cfg(target_arch = "wasm32")]
use crate::utils::{line_dom_id, track_container_id};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, warn};
#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::info;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlElement, ScrollBehavior, ScrollToOptions};

pub const AUDIO_ELEMENT_ID: &str = "syncscript-audio";

/// The page's audio element, seen through the seek coordinator's interface.
#[cfg(target_arch = "wasm32")]
pub struct WebMedia {
    audio: HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl MediaTarget for WebMedia {
    fn ready_state(&self) -> ReadyState {
        ReadyState::from_level(self.audio.ready_state())
    }

    fn first_seekable_range(&self) -> Option<(f64, f64)> {
        let ranges = self.audio.seekable();
        if ranges.length() == 0 {
            return None;
        }
        let start = ranges.start(0).ok()?;
        let end = ranges.end(0).ok()?;
        Some((start, end))
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }
}

/// Media stand-in for targets without a browser audio element. Never seekable.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct DetachedMedia {
    time: f64,
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaTarget for DetachedMedia {
    fn ready_state(&self) -> ReadyState {
        ReadyState::HaveNothing
    }

    fn first_seekable_range(&self) -> Option<(f64, f64)> {
        None
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }
}

#[cfg(target_arch = "wasm32")]
pub type ActiveMedia = WebMedia;

#[cfg(not(target_arch = "wasm32"))]
pub type ActiveMedia = DetachedMedia;

/// Find the rendered audio element, creating one if the markup has none.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    warn!("audio element #{AUDIO_ELEMENT_ID} missing, appending one to <body>");
    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_controls(true);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Scroll a track container so one of its lines sits in the vertical middle.
#[cfg(target_arch = "wasm32")]
fn web_center_line(role: TrackRole, index: usize) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let container = document.get_element_by_id(&track_container_id(role));
    let line = document
        .get_element_by_id(&line_dom_id(role, index))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let (Some(container), Some(line)) = (container, line) else {
        warn!(track = role.key(), index, "cannot center missing line");
        return;
    };

    let top = centered_scroll_top(
        f64::from(line.offset_top()),
        f64::from(line.offset_height()),
        f64::from(container.client_height()),
        f64::from(container.scroll_height()),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}

#[cfg(target_arch = "wasm32")]
fn web_replace_url_time(seconds: u64) {
    let Some(win) = window() else {
        return;
    };
    let Ok(href) = win.location().href() else {
        return;
    };
    let next = with_time_param(&href, seconds);
    if let Ok(history) = win.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&next));
    }
}

#[cfg(target_arch = "wasm32")]
async fn web_write_clipboard(text: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let navigator = win.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &"clipboard".into()) else {
        return false;
    };
    if clipboard.is_null() || clipboard.is_undefined() {
        return false;
    }
    let Some(write_text) = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
    else {
        return false;
    };
    let Some(promise) = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Promise>().ok())
    else {
        return false;
    };
    wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
}
