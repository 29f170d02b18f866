use api::Role;
use dioxus::prelude::*;
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
    // Reads console.toml from the platform config dir; env vars still win.
    let config = use_hook(ui::load_config);
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    use_context_provider(|| Signal::new(ui::make_client(&config)));
    use_context_provider(|| ui::ToastSettings::new(config.ui.toast_duration_secs));

    rsx! {
        document::Stylesheet { href: ui::CONSOLE_CSS }
        ui::AuthProvider {
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    match auth().role {
        Some(role) if auth().authenticated => nav.replace(Route::dashboard(role)),
        _ => nav.replace(Route::Login {}),
    };

    rsx! {}
}
