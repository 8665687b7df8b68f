// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: List containers and forcibly kill them by name.

use super::shared_types::ContainerSummary;
use async_trait::async_trait;

/// Container operations needed for teardown.
#[async_trait]
pub trait ContainerOps: Send + Sync {
    /// List all containers, including stopped ones.
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError>;

    /// Forcibly stop and remove a container by name.
    async fn kill_container(&self, name: &str) -> Result<(), ContainerError>;
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
