// ABOUTME: Application-wide error types for srcd.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::components::{ComponentError, PurgeError};
use crate::runtime::{RuntimeError, RuntimeErrorKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Purge(#[from] PurgeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Suggestion shown under the error when the user can act on it.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Runtime(e) => match e.kind() {
                RuntimeErrorKind::NoRuntimeFound => Some(
                    "start Docker or Podman, or set `runtime` and `socket` in srcd.yml",
                ),
                RuntimeErrorKind::ConnectionFailed => {
                    Some("check that the runtime daemon is running and its socket is readable")
                }
                RuntimeErrorKind::RuntimeOperation => None,
            },
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
