// Public playback utility API consumed by the viewer controller and toolbar.

/// Run `f` against the page's media element.
#[cfg(target_arch = "wasm32")]
pub fn with_media<R>(f: impl FnOnce(&mut ActiveMedia) -> R) -> Option<R> {
    let audio = get_or_create_audio_element()?;
    let mut media = WebMedia { audio };
    Some(f(&mut media))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn with_media<R>(f: impl FnOnce(&mut ActiveMedia) -> R) -> Option<R> {
    let mut media = DetachedMedia::default();
    Some(f(&mut media))
}

/// Current playback position of the media element, if there is one.
pub fn media_current_time() -> Option<f64> {
    with_media(|media| media.current_time()).filter(|t| t.is_finite())
}

/// Full URL of the current page.
#[cfg(target_arch = "wasm32")]
pub fn current_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_href() -> String {
    String::new()
}

/// Reflect the playback position into the URL without adding a history entry.
#[cfg(target_arch = "wasm32")]
pub fn replace_url_time(seconds: u64) {
    web_replace_url_time(seconds);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace_url_time(_seconds: u64) {}

/// Smoothly center a rendered line inside its track container.
#[cfg(target_arch = "wasm32")]
pub fn center_line(role: TrackRole, index: usize) {
    web_center_line(role, index);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn center_line(_role: TrackRole, _index: usize) {}

/// Write text to the system clipboard. Returns `false` on any failure.
#[cfg(target_arch = "wasm32")]
pub async fn copy_to_clipboard(text: String) -> bool {
    web_write_clipboard(&text).await
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_to_clipboard(_text: String) -> bool {
    false
}

/// Wait without blocking the event loop.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_ms: u32) {}
