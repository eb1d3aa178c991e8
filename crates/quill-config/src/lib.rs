//! # quill-config
//!
//! Layered configuration loading for Quill using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUILL_*` prefix, `__` as separator)
//! 2. Project-level `.quill/config.toml`
//! 3. User-level `~/.config/quill/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUILL_DATABASE__PATH` -> `database.path`,
//! `QUILL_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`.
//!
//! # Usage
//!
//! ```no_run
//! use quill_config::QuillConfig;
//!
//! let config = QuillConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QuillConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".quill/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QUILL_").split("__"))
    }

    /// Reject values that would only fail later at open time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty database path or a
    /// zero default limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quill").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = QuillConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.path, ".quill/quill.db");
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut config = QuillConfig::default();
        config.database.path = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.path"));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = QuillConfig::default();
        config.general.default_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "general.default_limit"
        ));
    }
}
