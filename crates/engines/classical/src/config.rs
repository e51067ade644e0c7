//! Search configuration loaded from TOML.
//!
//! ```toml
//! default_depth = 6
//! tt_size_mb = 64
//! quiescence_max_depth = 4
//! delta_margin = 200
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Depth used by `best_move_default`
    pub default_depth: u8,
    /// Transposition table size in MiB
    pub tt_size_mb: usize,
    /// Hard cap on quiescence plies below the main search
    pub quiescence_max_depth: u8,
    /// Safety margin added to a capture's material gain before delta pruning
    pub delta_margin: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_depth: 6,
            tt_size_mb: 64,
            quiescence_max_depth: 4,
            delta_margin: 200,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded search config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_depth == 0 {
            return Err(ConfigError::Invalid("default_depth must be at least 1".into()));
        }
        if self.tt_size_mb == 0 {
            return Err(ConfigError::Invalid("tt_size_mb must be at least 1".into()));
        }
        if self.delta_margin < 0 {
            return Err(ConfigError::Invalid("delta_margin must not be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
