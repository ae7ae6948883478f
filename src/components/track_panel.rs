use crate::components::ViewerController;
use crate::data::{SpeakerPalette, Track};
use crate::sync::format_clock;
use crate::utils::{line_dom_id, track_container_id};
use dioxus::prelude::*;

fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(value) => value == " ",
        _ => false,
    }
}

/// One scrollable, seekable list of timestamped lines.
#[component]
pub fn TrackPanel(track: Track, palette: SpeakerPalette) -> Element {
    let controller = use_context::<ViewerController>();
    let role = track.role();
    let active_index = controller.active.read().get(role);
    let label = role.label();

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "{label}" }
            div {
                id: track_container_id(role),
                class: "track",
                role: "list",
                if track.is_empty() {
                    p { class: "track-empty", "No {label.to_lowercase()} lines." }
                }
                for (index, segment) in track.segments().iter().enumerate() {
                    div {
                        key: "{index}",
                        id: line_dom_id(role, index),
                        class: if active_index == Some(index) { "line active" } else { "line" },
                        role: "listitem",
                        tabindex: "0",
                        "data-start": "{segment.start}",
                        onclick: {
                            let mut controller = controller.clone();
                            move |_| controller.seek_to_segment(role, index)
                        },
                        onkeydown: {
                            let mut controller = controller.clone();
                            move |evt: KeyboardEvent| {
                                if is_activation_key(&evt.key()) {
                                    evt.prevent_default();
                                    controller.seek_to_segment(role, index);
                                }
                            }
                        },
                        span { class: "stamp", "{format_clock(segment.start)}" }
                        if let Some(speaker) = segment.speaker_label() {
                            span { class: palette.badge_class(speaker), "{speaker}" }
                            span { class: "sep", ": " }
                        }
                        span { class: "text", "{segment.text}" }
                    }
                }
            }
        }
    }
}
