use dioxus::prelude::*;
use ui::views::{AdminDashboardView, UserDashboardView};

use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        AdminDashboardView {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn UserDashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        UserDashboardView {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
