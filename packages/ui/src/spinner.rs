use dioxus::prelude::*;

/// Small rotating ring shown inside buttons while a request is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner", aria_hidden: "true" }
    }
}
