//! # Application configuration — `trainerhub.toml`
//!
//! Defines the TOML configuration file read at startup (filename:
//! [`AppConfig::FILENAME`] = `"trainerhub.toml"`).
//!
//! ```toml
//! [api]
//! base_url = "https://api.trainerhub.app/api/v1"
//!
//! [search]
//! debounce_ms = 250      # quiet period before a type-ahead lookup fires
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or
//! empty file is equivalent to the default configuration. On the web build
//! there is no filesystem; [`AppConfig::load`] falls back to the defaults
//! (with a compile-time `TRAINERHUB_API_BASE` override for the base URL).

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `trainerhub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Backend connection configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Type-ahead search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period in milliseconds before a scheduled lookup fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
}

fn default_base_url() -> String {
    match option_env!("TRAINERHUB_API_BASE") {
        Some(url) => url.to_string(),
        None => "https://api.trainerhub.app/api/v1".to_string(),
    }
}

fn default_debounce_ms() -> u32 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl AppConfig {
    /// Canonical config filename.
    pub const FILENAME: &'static str = "trainerhub.toml";

    /// Create a config pointing at the given backend base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            search: SearchConfig::default(),
        }
    }

    /// Builder method to set the type-ahead quiet period.
    pub fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.search.debounce_ms = ms;
        self
    }

    /// Parse from TOML; unknown sections are ignored, missing ones default.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load the configuration for the current platform.
    ///
    /// Native builds read [`Self::FILENAME`] from the working directory;
    /// the web build (and a missing or unparseable file) yields the defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(raw) = std::fs::read_to_string(Self::FILENAME) {
                if let Ok(config) = Self::from_toml(&raw) {
                    return config;
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.search.debounce_ms, 250);
        assert!(config.api.base_url.starts_with("http"));
        assert!(!config.api.base_url.ends_with('/'));
    }

    #[test]
    fn test_empty_toml_equals_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"http://localhost:5000/api/v1\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api/v1");
        assert_eq!(config.search.debounce_ms, 250);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::new("https://staging.example.com/api".to_string())
            .with_debounce_ms(100);
        let parsed = AppConfig::from_toml(&config.to_toml()).unwrap();
        assert_eq!(parsed, config);
    }
}
