//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps one small file per key so that the desktop client
//! stays signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session/
//!     ├── token          # raw bearer token
//!     └── role           # "admin" or "user"
//! ```
//!
//! ## Platform data directories
//!
//! [`FileTokenStore::default_location`] uses [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/resource-planner/` |
//! | Linux | `~/.local/share/resource-planner/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\resource-planner\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::{StoreError, TokenStore};

/// Directory name used under the platform data dir.
pub const APP_DIR: &str = "resource-planner";

/// Filesystem-backed TokenStore for the desktop client.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at `<data_dir>/resource-planner`, or the working
    /// directory when the platform has no data dir.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::new(base)
    }

    fn session_dir(&self) -> PathBuf {
        self.base.join("session")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.session_dir().join(key)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value.trim_end().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {key} from {:?}: {e}", self.session_dir());
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(self.session_dir())?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Err(e) = std::fs::remove_file(self.key_path(key)) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("Failed to remove {key}: {e}");
            }
        }
    }
}
