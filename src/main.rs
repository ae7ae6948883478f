use dioxus::prelude::*;

mod components;
mod data;
mod sync;
mod utils;

use components::ViewerShell;

const VIEWER_CSS: Asset = asset!("/assets/styling/viewer.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "SyncScript" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#1f2430" }

        document::Stylesheet { href: VIEWER_CSS }

        ViewerShell {}
    }
}
