// ABOUTME: Configuration types and parsing for srcd.yml.
// ABOUTME: Handles YAML parsing, file discovery, and runtime overrides.

mod purge;

pub use purge::PurgeConfig;

use crate::error::{Error, Result};
use crate::runtime::{RuntimeConfig, RuntimeType};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "srcd.yml";
pub const CONFIG_FILENAME_ALT: &str = "srcd.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".srcd/config.yml";

/// CLI configuration. Every field is optional; a missing file means defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Explicit runtime, skipping socket detection.
    #[serde(default)]
    pub runtime: Option<RuntimeType>,

    /// Explicit socket path for the configured runtime.
    #[serde(default)]
    pub socket: Option<String>,

    #[serde(default)]
    pub purge: PurgeConfig,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Self::from_yaml(&content)
    }

    /// Load the first config file found in `dir`, or defaults if none exists.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }

    /// Runtime overrides for detection.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.purge.image_timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "purge.image_timeout must be greater than zero".to_string(),
            ));
        }
        if self.socket.is_some() && self.runtime.is_none() {
            return Err(Error::InvalidConfig(
                "socket requires runtime to be set".to_string(),
            ));
        }
        Ok(())
    }
}
