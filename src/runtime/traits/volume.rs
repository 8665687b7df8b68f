// ABOUTME: Volume operations trait for container runtimes.
// ABOUTME: List and remove named volumes.

use super::shared_types::VolumeSummary;
use async_trait::async_trait;

/// Volume operations: list and remove.
#[async_trait]
pub trait VolumeOps: Send + Sync {
    /// List all named volumes.
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError>;

    /// Remove a volume by name.
    async fn remove_volume(&self, name: &str) -> Result<(), VolumeError>;
}

/// Errors from volume operations.
#[derive(Debug, thiserror::Error)]
pub enum VolumeError {
    #[error("volume not found: {0}")]
    NotFound(String),

    #[error("volume in use, cannot remove: {0}")]
    InUse(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
