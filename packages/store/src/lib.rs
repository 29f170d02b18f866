pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

pub use config::{ClientConfig, ConfigError};
pub use session::{Session, StoreError, TokenStore, ROLE_KEY, TOKEN_KEY};
