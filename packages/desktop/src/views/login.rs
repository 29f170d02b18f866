use dioxus::prelude::*;
use ui::use_auth;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if let (true, Some(role)) = (state.authenticated, state.role) {
            nav.replace(Route::dashboard(role));
        }
    });

    rsx! {
        LoginView {
            on_signed_in: move |role| {
                tracing::info!("signed in as {role}");
                nav.replace(Route::dashboard(role));
            },
        }
    }
}
