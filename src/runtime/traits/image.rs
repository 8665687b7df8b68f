// ABOUTME: Image operations trait for container runtimes.
// ABOUTME: List, pull, check existence, and remove container images.

use super::shared_types::ImageSummary;
use async_trait::async_trait;

/// Image operations: list, pull, check existence, remove.
#[async_trait]
pub trait ImageOps: Send + Sync {
    /// List every local image together with its repository tags.
    async fn list_images(&self) -> Result<Vec<ImageSummary>, ImageError>;

    /// Pull `image:version` from its registry.
    async fn pull_image(&self, image: &str, version: &str) -> Result<(), ImageError>;

    /// Check if `image:version` is present locally.
    async fn image_exists(&self, image: &str, version: &str) -> Result<bool, ImageError>;

    /// Remove an image by reference (`repository:tag`).
    ///
    /// Implementations do not bound the call; callers wrap it in a timeout.
    async fn remove_image(&self, reference: &str) -> Result<(), ImageError>;
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("pull failed: {0}")]
    PullFailed(String),

    #[error("image in use, cannot remove: {0}")]
    InUse(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
