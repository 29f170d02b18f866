use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn RequireAuth() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if !auth().authenticated {
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
