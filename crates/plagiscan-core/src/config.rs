//! Engine configuration for plagiscan
//!
//! Configuration is a small TOML file:
//!
//! ```toml
//! cluster_threshold = 70
//! flag_threshold = 50
//! ignore_same_student = true
//! ```

pub mod global;
pub mod types;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PlagiscanError, Result};

pub use types::{EngineConfig, DEFAULT_CLUSTER_THRESHOLD, DEFAULT_FLAG_THRESHOLD};

/// Reject percentages outside 0..=100
pub fn validate_threshold(context: &str, value: u8) -> Result<()> {
    if value > 100 {
        crate::bail_invalid!(context, format!("{} (expected 0-100)", value));
    }
    Ok(())
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` path
    Explicit(PathBuf),
    /// Global config file
    Global(PathBuf),
    /// No file found; built-in defaults
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Global(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

impl EngineConfig {
    /// Check every threshold is a valid percentage
    pub fn validate(&self) -> Result<()> {
        validate_threshold("cluster_threshold", self.cluster_threshold)?;
        validate_threshold("flag_threshold", self.flag_threshold)?;
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PlagiscanError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(test)]
    fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlagiscanError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist. Otherwise the global file is used when
    /// present, and built-in defaults when it is not or when no config
    /// directory can be determined.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            debug!(path = %path.display(), "loaded explicit config");
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        match global::global_config_path() {
            Ok(path) if path.exists() => {
                let config = Self::load(&path)?;
                debug!(path = %path.display(), "loaded global config");
                Ok((config, ConfigSource::Global(path)))
            }
            Ok(_) => Ok((Self::default(), ConfigSource::Defaults)),
            Err(e) => {
                debug!(error = %e, "no global config location, using defaults");
                Ok((Self::default(), ConfigSource::Defaults))
            }
        }
    }
}
