//! Email/password sign-in form.

use api::{LoginDraft, Role};
use dioxus::prelude::*;

use crate::{use_api, use_auth, use_feedback, AuthState, Spinner};

/// Login form. Calls `on_signed_in` with the role the backend reported once
/// the token is stored.
#[component]
pub fn LoginView(on_signed_in: EventHandler<Role>) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let feedback = use_feedback();
    let mut draft = use_signal(LoginDraft::default);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let credentials = match draft.peek().validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                feedback.error(e.to_string());
                return;
            }
        };
        spawn(async move {
            loading.set(true);
            let client = api();
            let result = client.login(&credentials).await;
            loading.set(false);
            match result {
                Ok(login) => {
                    draft.write().password.clear();
                    auth.set(AuthState::signed_in(login.role));
                    on_signed_in.call(login.role);
                }
                Err(e) => feedback.api_error(&e, "Error logging in"),
            }
        });
    };

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: handle_submit,

                h2 { "Login" }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    disabled: loading(),
                    value: draft().email,
                    oninput: move |evt| draft.write().email = evt.value(),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    disabled: loading(),
                    value: draft().password,
                    oninput: move |evt| draft.write().password = evt.value(),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        Spinner {}
                        "Signing in..."
                    } else {
                        "Login"
                    }
                }
            }
        }
    }
}
