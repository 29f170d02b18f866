use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Layout for the dashboards. Without a token, or once the backend answers
/// 401, the visitor is sent to `/login`.
#[component]
pub fn RequireAuth() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if !auth().authenticated {
            tracing::debug!("no session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    if !auth().authenticated {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
