//! Configuration for anansi
//!
//! Read from `--config <file>` when given, otherwise from
//! `$ANANSI_CONFIG_DIR/config.toml` or `~/.config/anansi/config.toml` if it
//! exists. Command-line flags override whatever is loaded here.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{AnansiError, Result};

pub use types::{Config, OutputConfig, WalkConfig, DEFAULT_LIMIT};

const CONFIG_DIR: &str = "anansi";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ANANSI_CONFIG_DIR";

impl Config {
    /// Where the configuration lives when no file is named explicitly
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    AnansiError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the explicit file if given, else the default file if it exists,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(&Self::default_path()?),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AnansiError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> Result<()> {
        if self.walk.limit == 0 {
            bail_invalid!("walk.limit", 0);
        }
        Ok(())
    }
}
