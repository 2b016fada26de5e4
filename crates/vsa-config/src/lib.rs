//! # vsa-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VSA_*` prefix, `__` as separator)
//! 2. Project-level `.vsa/config.toml`
//! 3. User-level `~/.config/vsa/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VSA_STORE__PATH` -> `store.path`, `VSA_MODEL__BACKEND` -> `model.backend`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vsa_config::VsaConfig;
//!
//! let config = VsaConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.store.path);
//! ```

mod dashboard;
mod error;
mod model;
mod store;

pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use model::ModelConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VsaConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl VsaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
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
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".vsa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VSA_").split("__"))
    }

    /// Reject values that would only fail later, deep inside a command.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.store.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.history_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.model.max_length < 8 {
            return Err(ConfigError::InvalidValue {
                field: "model.max_length".to_string(),
                reason: format!("{} is too small to hold a sentence", self.model.max_length),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vsa").join("config.toml"))
    }
}
