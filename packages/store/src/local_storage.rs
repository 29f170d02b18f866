//! # Browser `localStorage` token store
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web
//! platform**. Values live in `window.localStorage` under their plain key
//! names, so the token sits at `localStorage["token"]`.
//!
//! The struct is zero-sized: the `Storage` handle is looked up on every call
//! because `web_sys::Storage` is neither `Send` nor `Sync`.

use web_sys::Storage;

use crate::session::{StoreError, TokenStore};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage().ok()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Ok(storage) => {
                let _ = storage.remove_item(key);
            }
            Err(e) => tracing::warn!("Cannot clear {key}: {e}"),
        }
    }
}
