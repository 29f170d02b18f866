//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] whose session lives in the appropriate
//! [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageTokenStore`]
//! - **Desktop** (native): files under the platform data dir via [`store::FileTokenStore`]

use api::ApiClient;
use store::{ClientConfig, Session};

/// Resolve the client configuration for the current platform.
///
/// Web builds use the base URL baked in at compile time. Desktop builds read
/// `console.toml` from the platform config dir and fall back to defaults when
/// it is unreadable.
pub fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::from_build_env()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ClientConfig::load_default().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {e}");
            ClientConfig::default()
        })
    }
}

/// Create a platform-appropriate API client.
pub fn make_client(config: &ClientConfig) -> ApiClient {
    let session = make_session();
    tracing::info!(base_url = %config.api.base_url, "api client ready");
    ApiClient::from_config(config, session)
}

fn make_session() -> Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStorageTokenStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Session::new(store::MemoryTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Session::new(store::FileTokenStore::default_location())
    }
}
