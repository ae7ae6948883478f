use crate::components::audio_manager::{current_href, AUDIO_ELEMENT_ID};
use crate::components::{ActiveLines, AudioBinding, Toolbar, TrackPanel, ViewerController};
use crate::data::{load_viewer_data, SpeakerPalette, TrackRole, ViewerData};
use crate::sync::{format_clock, read_time_param, ViewerSession};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const DEFAULT_TITLE: &str = "Transcript";

/// Loads the viewer payload, then hands off to the viewer.
#[component]
pub fn ViewerShell() -> Element {
    let mut viewer_data = use_signal(|| None::<Result<ViewerData, String>>);

    use_effect(move || {
        spawn(async move {
            let loaded = load_viewer_data().await.map_err(|err| {
                warn!("failed to load viewer data: {err}");
                err.to_string()
            });
            viewer_data.set(Some(loaded));
        });
    });

    match viewer_data() {
        None => rsx! {
            div { class: "status", "Loading transcript..." }
        },
        Some(Err(error)) => rsx! {
            div { class: "status status-error",
                p { "Unable to load transcript data." }
                p { class: "status-detail", "{error}" }
            }
        },
        Some(Ok(data)) => rsx! {
            Viewer { data }
        },
    }
}

#[component]
fn Viewer(data: ViewerData) -> Element {
    let session = use_hook(|| {
        let (transcript, commentary) = data.clone().into_tracks();
        let url_time = read_time_param(&current_href());
        if let Some(seconds) = url_time {
            info!(seconds, "page opened with a deep link");
        }
        Rc::new(RefCell::new(ViewerSession::new(transcript, commentary, url_time)))
    });

    let active = use_signal(ActiveLines::default);
    let clock = use_signal(|| format_clock(0.0));
    let follow = use_signal(|| data.settings.follow);
    let controller =
        use_hook(|| ViewerController::new(session.clone(), active, clock, follow));
    use_context_provider(|| controller.clone());

    let (transcript, commentary, palette) = use_hook(|| {
        let session = session.borrow();
        let transcript = session.track(TrackRole::Transcript).clone();
        let commentary = session.track(TrackRole::Commentary).clone();
        let palette = SpeakerPalette::from_tracks(&[&transcript, &commentary]);
        info!(
            transcript = transcript.len(),
            commentary = commentary.len(),
            "tracks ready"
        );
        (transcript, commentary, palette)
    });

    let title = data
        .title
        .clone()
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    rsx! {
        div { class: "viewer",
            Toolbar { title, copy_confirm_ms: data.settings.copy_confirm_ms }
            audio {
                id: AUDIO_ELEMENT_ID,
                class: "player",
                controls: true,
                preload: "metadata",
            }
            AudioBinding { audio_src: data.audio_src.clone() }
            main { class: "tracks",
                TrackPanel { track: transcript, palette: palette.clone() }
                TrackPanel { track: commentary, palette }
            }
        }
    }
}
