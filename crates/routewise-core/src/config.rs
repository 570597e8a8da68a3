//! Configuration for routewise
//!
//! Stored as TOML. Resolution order for the file:
//! 1. an explicit path (`--config`)
//! 2. `$ROUTEWISE_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/routewise/config.toml`
//!
//! A missing file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouteError};
use crate::format::OutputFormat;
use crate::graph::Objective;

pub use types::{OutputConfig, PolicyConfig, RouteConfig};

const CONFIG_DIR: &str = "routewise";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROUTEWISE_CONFIG_DIR";

impl RouteConfig {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RouteError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: RouteConfig = toml::from_str(&content)?;
        config.objective()?;
        config.format()?;
        Ok(config)
    }

    /// Load from `explicit` if given, otherwise from the default location.
    ///
    /// Only the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Configured default objective, validated
    pub fn objective(&self) -> Result<Option<Objective>> {
        self.default_objective
            .as_deref()
            .map(str::parse::<Objective>)
            .transpose()
    }

    /// Configured default output format, validated
    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
    }
}
