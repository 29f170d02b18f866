//! # Client configuration: `console.toml`
//!
//! Decides which backend the console talks to and how long notifications
//! stay on screen.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com"   # trailing slashes are stripped
//!
//! [ui]
//! toast_duration_secs = 4
//! ```
//!
//! ## Base URL resolution
//!
//! The first non-empty value of [`API_BASE_URL_VARS`] wins
//! (`REACT_APP_API_BASE_URL`, then `API_BASE_URL`, then `VITE_API_BASE_URL`).
//! Without one, debug builds use [`DEFAULT_DEV_BASE`] and release builds use
//! [`DEFAULT_PROD_BASE`]. The web client reads the variables at compile time
//! ([`ClientConfig::from_build_env`]); the desktop client reads
//! `console.toml` from the platform config dir and lets the process
//! environment override it ([`ClientConfig::load`]).

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEV_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_PROD_BASE: &str = "https://api.prod.com";

/// Environment variables consulted for the API base URL, in priority order.
pub const API_BASE_URL_VARS: [&str; 3] = [
    "REACT_APP_API_BASE_URL",
    "API_BASE_URL",
    "VITE_API_BASE_URL",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `console.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds a toast stays visible. 0 keeps toasts until dismissed.
    #[serde(default = "default_toast_duration")]
    pub toast_duration_secs: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_secs: default_toast_duration(),
        }
    }
}

fn default_base_url() -> String {
    if cfg!(debug_assertions) {
        DEFAULT_DEV_BASE.to_string()
    } else {
        DEFAULT_PROD_BASE.to_string()
    }
}

fn default_toast_duration() -> u32 {
    4
}

/// Strip trailing slashes so paths can be appended with a single `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl ClientConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = normalize_base_url(url);
        self
    }

    /// Builder method to set the toast duration.
    pub fn with_toast_duration(mut self, secs: u32) -> Self {
        self.ui.toast_duration_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "console.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base = config.api.base_url.clone();
        Ok(config.with_base_url(&base))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Override the base URL with the first non-empty variable from `lookup`.
    pub fn with_env_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let found = API_BASE_URL_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());
        match found {
            Some(url) => self.with_base_url(&url),
            None => self,
        }
    }

    /// Configuration baked in at compile time (web builds).
    pub fn from_build_env() -> Self {
        let baked = [
            option_env!("REACT_APP_API_BASE_URL"),
            option_env!("API_BASE_URL"),
            option_env!("VITE_API_BASE_URL"),
        ];
        Self::default().with_env_overrides(|name| {
            API_BASE_URL_VARS
                .iter()
                .position(|var| *var == name)
                .and_then(|i| baked[i])
                .map(str::to_string)
        })
    }

    /// Read `console.toml` from `dir` (defaults when absent), then apply
    /// process environment overrides.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(dir: &std::path::Path) -> Result<Self, ConfigError> {
        let path = dir.join(Self::filename());
        let config = match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("Loaded client config from {path:?}");
        Ok(config.with_env_overrides(|name| std::env::var(name).ok()))
    }

    /// [`ClientConfig::load`] from `<config_dir>/resource-planner`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(crate::file_store::APP_DIR);
        Self::load(&dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("http://x/api///"), "http://x/api");
        assert_eq!(normalize_base_url(" http://x "), "http://x");
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn test_default_matches_build_profile() {
        let config = ClientConfig::default();
        if cfg!(debug_assertions) {
            assert_eq!(config.api.base_url, DEFAULT_DEV_BASE);
        } else {
            assert_eq!(config.api.base_url, DEFAULT_PROD_BASE);
        }
        assert_eq!(config.ui.toast_duration_secs, 4);
    }

    #[test]
    fn test_env_override_priority() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("API_BASE_URL", "http://second/"),
            ("VITE_API_BASE_URL", "http://third"),
        ]);
        let config = ClientConfig::default()
            .with_env_overrides(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.api.base_url, "http://second");

        let env: HashMap<&str, &str> = HashMap::from([
            ("REACT_APP_API_BASE_URL", "http://first"),
            ("API_BASE_URL", "http://second"),
        ]);
        let config = ClientConfig::default()
            .with_env_overrides(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.api.base_url, "http://first");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = ClientConfig::default()
            .with_base_url("http://configured")
            .with_env_overrides(|name| (name == "API_BASE_URL").then(|| "  ".to_string()));
        assert_eq!(config.api.base_url, "http://configured");
    }

    #[test]
    fn test_toml_roundtrip_and_partial_files() {
        let config = ClientConfig::default()
            .with_base_url("https://api.example.com/")
            .with_toast_duration(10);
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);

        let partial = ClientConfig::from_toml("[api]\nbase_url = \"http://h/api/\"\n").unwrap();
        assert_eq!(partial.api.base_url, "http://h/api");
        assert_eq!(partial.ui.toast_duration_secs, 4);

        assert_eq!(ClientConfig::from_toml("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ClientConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.ui, UiConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ClientConfig::filename()),
            "[ui]\ntoast_duration_secs = 0\n",
        )
        .unwrap();
        let loaded = ClientConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.ui.toast_duration_secs, 0);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ClientConfig::filename()), "[ui\n").unwrap();
        assert!(matches!(
            ClientConfig::load(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
