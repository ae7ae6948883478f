#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioBinding(audio_src: String) -> Element {
    use_hook(move || {
        info!(
            source = %audio_src,
            "no browser media element on this target; seeks stay pending"
        );
    });

    rsx! {}
}
