//! # snap-config
//!
//! Layered configuration loading for snapgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SNAPGEN_*` prefix, `__` as separator)
//! 2. Project-level `./snapgen.toml`
//! 3. User-level `~/.config/snapgen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SNAPGEN_GENERAL__PRETTIFY` -> `general.prettify`,
//! `SNAPGEN_FORMATTER__COMMAND` -> `formatter.command`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use snap_config::SnapConfig;
//!
//! let config = SnapConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! let catalog = config.catalog();
//! println!("{} fixture types", catalog.len());
//! ```

mod error;
mod fixtures;
mod formatter;
mod general;

pub use error::ConfigError;
pub use fixtures::FixtureEntry;
pub use formatter::FormatterConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use snap_core::{DomainFixture, FixtureCatalog};
use std::path::PathBuf;

/// Project-local config file name, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = "snapgen.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnapConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub formatter: FormatterConfig,
    #[serde(default)]
    pub fixtures: Vec<FixtureEntry>,
}

impl SnapConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers and tests can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SNAPGEN_").split("__"))
    }

    /// Reject values that would make every run fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "general.extensions".into(),
                reason: "at least one file extension is required".into(),
            });
        }
        if self.general.prettify && self.formatter.command.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "formatter.command".into(),
                reason: "a formatter command is required when prettify is enabled".into(),
            });
        }
        for (index, entry) in self.fixtures.iter().enumerate() {
            if [&entry.type_name, &entry.identifier, &entry.path]
                .iter()
                .any(|value| value.trim().is_empty())
            {
                return Err(ConfigError::InvalidValue {
                    field: format!("fixtures[{index}]"),
                    reason: "type_name, identifier and path must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    /// The builtin fixture catalog extended with configured entries.
    pub fn catalog(&self) -> FixtureCatalog {
        FixtureCatalog::builtin().with_entries(self.fixtures.iter().map(DomainFixture::from))
    }

    /// Extensions without a leading dot.
    pub fn extensions(&self) -> Vec<String> {
        self.general
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("snapgen").join("config.toml"))
    }
}
