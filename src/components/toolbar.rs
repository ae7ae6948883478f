//! Header controls: elapsed readout, follow toggle, and shareable link copy.

use crate::components::audio_manager::{copy_to_clipboard, current_href, sleep_ms};
use crate::components::ViewerController;
use crate::sync::with_time_param;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

const COPY_LABEL: &str = "Copy timestamped link";
const COPIED_LABEL: &str = "Copied ✓";

#[component]
pub fn Toolbar(title: String, copy_confirm_ms: u32) -> Element {
    let controller = use_context::<ViewerController>();
    let clock = controller.clock;
    let mut follow = controller.follow;
    let copy_label = use_signal(|| COPY_LABEL.to_string());

    let on_follow_change = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            follow.set(evt.checked());
            controller.recenter_if_following();
        }
    };

    let on_copy_link = {
        let controller = controller.clone();
        let mut copy_label = copy_label.clone();
        move |_| {
            let link = with_time_param(&current_href(), controller.share_seconds());
            spawn(async move {
                if !copy_to_clipboard(link).await {
                    debug!("clipboard write failed");
                    return;
                }
                copy_label.set(COPIED_LABEL.to_string());
                sleep_ms(copy_confirm_ms).await;
                copy_label.set(COPY_LABEL.to_string());
            });
        }
    };

    rsx! {
        header { class: "toolbar",
            h1 { class: "toolbar-title", "{title}" }
            div { class: "toolbar-controls",
                span { class: "now", title: "Elapsed", "{clock}" }
                label { class: "follow",
                    input {
                        r#type: "checkbox",
                        checked: follow(),
                        onchange: on_follow_change,
                    }
                    "Follow"
                }
                button { class: "copy-link", onclick: on_copy_link, "{copy_label}" }
            }
        }
    }
}
