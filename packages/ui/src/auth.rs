//! Authentication context and hooks for the UI.

use api::{ApiClient, ApiError, Role};
use dioxus::prelude::*;
use store::Session;

/// Authentication state for the application.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    /// Role reported at login. `None` when signed out.
    pub role: Option<Role>,
}

impl AuthState {
    /// Rebuild the state from whatever the token store holds.
    pub fn from_session(session: &Session) -> Self {
        if !session.is_authenticated() {
            return Self::signed_out();
        }
        Self {
            authenticated: true,
            role: Some(session.role().map(|r| Role::parse(&r)).unwrap_or_default()),
        }
    }

    pub fn signed_in(role: Role) -> Self {
        Self {
            authenticated: true,
            role: Some(role),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// State after a failed API call. A 401 means the client has already
    /// dropped the stored token, so the console signs out too.
    pub fn after_failure(self, err: &ApiError) -> Self {
        if err.is_unauthorized() {
            Self::signed_out()
        } else {
            self
        }
    }
}

/// The shared API client, provided at the app root.
pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out, or when the
/// backend rejects the stored token.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Must sit below the API client context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_api();
    let auth_state = use_signal(|| AuthState::from_session(api.peek().session()));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = false)] disabled: bool,
    on_signed_out: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        api.peek().logout();
        auth_state.set(AuthState::signed_out());
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "btn btn-danger",
            disabled: disabled,
            onclick: onclick,
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 14, height: 14 }
            " {label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryTokenStore;

    #[test]
    fn test_state_from_empty_session() {
        let session = Session::new(MemoryTokenStore::new());
        assert_eq!(AuthState::from_session(&session), AuthState::signed_out());
    }

    #[test]
    fn test_state_from_stored_session() {
        let session = Session::new(MemoryTokenStore::new());
        session.sign_in("tok", "admin").unwrap();
        assert_eq!(
            AuthState::from_session(&session),
            AuthState::signed_in(Role::Admin)
        );
    }

    #[test]
    fn test_rejected_session_signs_out() {
        let state = AuthState::signed_in(Role::Admin);
        let expired = ApiError::Unauthorized { message: None };
        assert_eq!(state.after_failure(&expired), AuthState::signed_out());
        assert!(!state.after_failure(&expired).authenticated);
    }

    #[test]
    fn test_other_failures_keep_session() {
        let state = AuthState::signed_in(Role::User);
        let server = ApiError::Server {
            status: 500,
            message: Some("boom".into()),
        };
        assert_eq!(state.after_failure(&server), state);
        assert_eq!(state.after_failure(&ApiError::Network("down".into())), state);
    }

    #[test]
    fn test_token_without_role_defaults_to_user() {
        let store = MemoryTokenStore::new();
        store::TokenStore::set(&store, store::TOKEN_KEY, "tok").unwrap();
        let state = AuthState::from_session(&Session::new(store));
        assert!(state.authenticated);
        assert_eq!(state.role, Some(Role::User));
    }
}
