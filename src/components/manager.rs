// ABOUTME: Entry point for listing, installing and checking components.
// ABOUTME: Wraps an injected container runtime and an immutable registry.

use super::error::ComponentError;
use super::filter::{self, Filter};
use super::identity::split_image_reference;
use super::registry::Registry;
use crate::runtime::ContainerRuntime;
use std::time::Duration;

/// Default bound on a single image removal during purge.
pub const DEFAULT_IMAGE_REMOVAL_TIMEOUT: Duration = Duration::from_secs(60);

/// Manages the project's components on a container runtime.
///
/// All operations are sequential; the runtime is the only source of truth for
/// what is installed.
pub struct ComponentManager<R> {
    pub(super) runtime: R,
    pub(super) registry: Registry,
    pub(super) image_removal_timeout: Duration,
}

impl<R: ContainerRuntime> ComponentManager<R> {
    pub fn new(runtime: R, registry: Registry) -> Self {
        Self {
            runtime,
            registry,
            image_removal_timeout: DEFAULT_IMAGE_REMOVAL_TIMEOUT,
        }
    }

    /// Bound each image removal during purge by `timeout`.
    pub fn with_image_removal_timeout(mut self, timeout: Duration) -> Self {
        self.image_removal_timeout = timeout;
        self
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// List installed components as `image:tag`, in the runtime's order.
    ///
    /// Only the first tag of each image is considered, and untagged images are
    /// skipped: dangling layers are never mistaken for components.
    pub async fn list(&self, filters: &[Filter]) -> Result<Vec<String>, ComponentError> {
        let images = self
            .runtime
            .list_images()
            .await
            .map_err(ComponentError::List)?;

        let ownership = self.registry.ownership();
        let owned: Vec<String> = images
            .into_iter()
            .filter_map(|img| img.tags.into_iter().next())
            .filter(|tag| ownership.owns_image(tag))
            .collect();

        Ok(filter::apply(owned, filters))
    }

    /// Pull the component image `id` (`image[:version]`, default `latest`).
    pub async fn install(&self, id: &str) -> Result<(), ComponentError> {
        let (image, version) = self.owned_reference(id)?;
        tracing::debug!(image, version, "installing component");
        self.runtime
            .pull_image(image, version)
            .await
            .map_err(ComponentError::Pull)
    }

    /// Whether the component image `id` is present locally.
    pub async fn is_installed(&self, id: &str) -> Result<bool, ComponentError> {
        let (image, version) = self.owned_reference(id)?;
        self.runtime
            .image_exists(image, version)
            .await
            .map_err(ComponentError::Inspect)
    }

    /// Whether the named component must be recreated on working dir change.
    pub fn is_working_dir_dependant(&self, name: &str) -> bool {
        self.registry.is_working_dir_dependant(name)
    }

    fn owned_reference<'a>(&self, id: &'a str) -> Result<(&'a str, &'a str), ComponentError> {
        if !self.registry.ownership().owns_image(id) {
            return Err(ComponentError::NotOwned(id.to_string()));
        }
        Ok(split_image_reference(id))
    }
}
