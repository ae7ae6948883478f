/// Loads the recording and subscribes the viewer to media and window events.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioBinding(audio_src: String) -> Element {
    let controller = use_context::<ViewerController>();

    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            warn!("no document available, audio binding skipped");
            return;
        };

        // Source is set here only, then load() starts the metadata pipeline.
        if !audio_src.trim().is_empty() {
            audio.set_src(&audio_src);
            audio.load();
        }

        let runtime = Runtime::current();

        for signal in MediaSignal::ALL {
            let mut controller = controller.clone();
            let runtime = runtime.clone();
            let callback = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controller.handle_media_signal(signal);
            }) as Box<dyn FnMut()>);
            let _ = audio.add_event_listener_with_callback(
                signal.event_name(),
                callback.as_ref().unchecked_ref(),
            );
            callback.forget();
        }
        debug!(count = MediaSignal::ALL.len(), "media signals registered");

        let Some(win) = window() else {
            return;
        };

        let popstate_cb = {
            let mut controller = controller.clone();
            let runtime = runtime.clone();
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controller.navigate_to_current_url();
            }) as Box<dyn FnMut()>)
        };
        let resize_cb = {
            let controller = controller.clone();
            let runtime = runtime.clone();
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controller.recenter_if_following();
            }) as Box<dyn FnMut()>)
        };

        let _ = win
            .add_event_listener_with_callback("popstate", popstate_cb.as_ref().unchecked_ref());
        let _ =
            win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        popstate_cb.forget();
        resize_cb.forget();
    });

    rsx! {}
}
