use dioxus::prelude::*;

use api::Role;
use ui::components::ToastProvider;
use ui::{ActivityLog, AuthProvider, ToastSettings};
use views::{AdminDashboard, Login, NotFound, RequireAuth, UserDashboard};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(RequireAuth)]
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/user/dashboard")]
        UserDashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Landing page for a role after login.
    fn dashboard(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminDashboard {},
            Role::User => Route::UserDashboard {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);
    use_context_provider(|| Signal::new(ActivityLog::default()));
    use_context_provider(|| Signal::new(ui::make_client(&config)));
    use_context_provider(|| ToastSettings::new(config.ui.toast_duration_secs));

    rsx! {
        document::Stylesheet { href: ui::CONSOLE_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the signed-in user's dashboard, or to `/login`.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let auth = ui::use_auth();
    match auth().role {
        Some(role) if auth().authenticated => nav.replace(Route::dashboard(role)),
        _ => nav.replace(Route::Login {}),
    };
    rsx! {}
}
