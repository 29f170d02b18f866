use dioxus::prelude::*;

use crate::{ActivityLogToggle, LogoutButton};

/// Title bar shared by both dashboards.
#[component]
pub fn DashboardHeader(title: String, busy: bool, on_signed_out: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "dashboard-header",
            h1 { "{title}" }
            div {
                class: "dashboard-header-actions",
                ActivityLogToggle {}
                LogoutButton { disabled: busy, on_signed_out: move |_| on_signed_out.call(()) }
            }
        }
    }
}
