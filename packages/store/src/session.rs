//! # Session: bearer token persistence over an abstract key/value store
//!
//! The console authenticates every API call with a bearer token handed out by
//! `/auth/login`. The token outlives a page reload, so it is written to a
//! [`TokenStore`]: browser `localStorage` on the web, a small file per key on
//! desktop, or a process-local map in tests.
//!
//! [`Session`] is the only type the rest of the workspace talks to. It knows the
//! two well-known keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | Raw bearer token, exactly as returned by the backend |
//! | [`ROLE_KEY`] (`"role"`) | Role string reported at login (`"admin"` / `"user"`) |
//!
//! Signing out removes both keys. The API client calls [`Session::sign_out`]
//! whenever the backend answers `401 Unauthorized`.

use std::sync::Arc;

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Key under which the role reported at login is persisted.
pub const ROLE_KEY: &str = "role";

/// Errors raised by token store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Synchronous string key/value storage.
///
/// Reads swallow backend failures and report them as a missing value so a
/// broken store degrades to "signed out" instead of crashing the UI.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// Token and role bookkeeping on top of a shared [`TokenStore`].
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The stored bearer token, if any. Empty strings count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The role reported by the backend at the last successful login.
    pub fn role(&self) -> Option<String> {
        self.store.get(ROLE_KEY).filter(|r| !r.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token together with its role.
    pub fn sign_in(&self, token: &str, role: &str) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(ROLE_KEY, role)?;
        tracing::debug!(role, "session stored");
        Ok(())
    }

    /// Forget the token and role.
    pub fn sign_out(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(ROLE_KEY);
        tracing::debug!("session cleared");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
