// ABOUTME: In-memory container runtime for exercising component orchestration.
// ABOUTME: Records every call, supports per-call failure injection and slow image removal.

use async_trait::async_trait;
use parking_lot::Mutex;
use srcd_engine::runtime::{
    ContainerError, ContainerOps, ContainerSummary, ImageError, ImageOps, ImageSummary,
    VolumeError, VolumeOps, VolumeSummary,
};
use std::time::Duration;

/// A runtime call as seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListImages,
    PullImage(String, String),
    ImageExists(String, String),
    RemoveImage(String),
    ListContainers,
    KillContainer(String),
    ListVolumes,
    RemoveVolume(String),
}

impl Call {
    pub fn pull(image: &str, version: &str) -> Self {
        Call::PullImage(image.to_string(), version.to_string())
    }

    pub fn exists(image: &str, version: &str) -> Self {
        Call::ImageExists(image.to_string(), version.to_string())
    }

    pub fn kill(name: &str) -> Self {
        Call::KillContainer(name.to_string())
    }

    pub fn remove_volume(name: &str) -> Self {
        Call::RemoveVolume(name.to_string())
    }

    pub fn remove_image(reference: &str) -> Self {
        Call::RemoveImage(reference.to_string())
    }
}

#[derive(Default)]
struct State {
    images: Vec<ImageSummary>,
    containers: Vec<ContainerSummary>,
    volumes: Vec<VolumeSummary>,
    calls: Vec<Call>,
    failures: Vec<Call>,
    slow_image_removal: Option<Duration>,
}

#[derive(Default)]
pub struct FakeRuntime {
    state: Mutex<State>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one image per entry, each with the given tags.
    pub fn with_images(self, images: &[&[&str]]) -> Self {
        self.state.lock().images.extend(
            images
                .iter()
                .map(|tags| ImageSummary::tagged(tags.iter().copied())),
        );
        self
    }

    /// Add one container per entry, each with a single reported name.
    pub fn with_containers(self, names: &[&str]) -> Self {
        self.state
            .lock()
            .containers
            .extend(names.iter().map(|n| ContainerSummary::named([*n])));
        self
    }

    pub fn with_container(self, container: ContainerSummary) -> Self {
        self.state.lock().containers.push(container);
        self
    }

    pub fn with_volumes(self, names: &[&str]) -> Self {
        self.state
            .lock()
            .volumes
            .extend(names.iter().map(|n| VolumeSummary::named(*n)));
        self
    }

    /// Fail whenever exactly this call is made.
    pub fn fail_on(self, call: Call) -> Self {
        self.state.lock().failures.push(call);
        self
    }

    /// Make every image removal take `delay` before completing.
    pub fn with_slow_image_removal(self, delay: Duration) -> Self {
        self.state.lock().slow_image_removal = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn called(&self, call: &Call) -> bool {
        self.state.lock().calls.contains(call)
    }

    pub fn image_tags(&self) -> Vec<String> {
        self.state
            .lock()
            .images
            .iter()
            .flat_map(|img| img.tags.iter().cloned())
            .collect()
    }

    pub fn container_names(&self) -> Vec<String> {
        self.state
            .lock()
            .containers
            .iter()
            .flat_map(|c| c.names.iter().cloned())
            .collect()
    }

    pub fn volume_names(&self) -> Vec<String> {
        self.state
            .lock()
            .volumes
            .iter()
            .map(|v| v.name.clone())
            .collect()
    }

    /// Record `call`, returning whether it should fail.
    fn record(&self, call: Call) -> bool {
        let mut state = self.state.lock();
        let fail = state.failures.contains(&call);
        state.calls.push(call);
        fail
    }
}

#[async_trait]
impl ImageOps for FakeRuntime {
    async fn list_images(&self) -> Result<Vec<ImageSummary>, ImageError> {
        if self.record(Call::ListImages) {
            return Err(ImageError::Runtime("image list unavailable".to_string()));
        }
        Ok(self.state.lock().images.clone())
    }

    async fn pull_image(&self, image: &str, version: &str) -> Result<(), ImageError> {
        if self.record(Call::pull(image, version)) {
            return Err(ImageError::PullFailed(format!("{image}:{version}")));
        }
        let tag = format!("{image}:{version}");
        let mut state = self.state.lock();
        if !state.images.iter().any(|img| img.tags.contains(&tag)) {
            state.images.push(ImageSummary::tagged([tag]));
        }
        Ok(())
    }

    async fn image_exists(&self, image: &str, version: &str) -> Result<bool, ImageError> {
        if self.record(Call::exists(image, version)) {
            return Err(ImageError::Runtime("inspect failed".to_string()));
        }
        let tag = format!("{image}:{version}");
        Ok(self
            .state
            .lock()
            .images
            .iter()
            .any(|img| img.tags.contains(&tag)))
    }

    async fn remove_image(&self, reference: &str) -> Result<(), ImageError> {
        if self.record(Call::remove_image(reference)) {
            return Err(ImageError::InUse(reference.to_string()));
        }

        // Copy the delay out so the lock is not held across the sleep.
        let delay = self.state.lock().slow_image_removal;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.state
            .lock()
            .images
            .retain(|img| !img.tags.iter().any(|t| t == reference));
        Ok(())
    }
}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError> {
        if self.record(Call::ListContainers) {
            return Err(ContainerError::Runtime("container list unavailable".to_string()));
        }
        Ok(self.state.lock().containers.clone())
    }

    async fn kill_container(&self, name: &str) -> Result<(), ContainerError> {
        if self.record(Call::kill(name)) {
            return Err(ContainerError::Runtime(format!("cannot kill {name}")));
        }
        self.state
            .lock()
            .containers
            .retain(|c| c.first_name().map(|n| n.trim_start_matches('/')) != Some(name));
        Ok(())
    }
}

#[async_trait]
impl VolumeOps for FakeRuntime {
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError> {
        if self.record(Call::ListVolumes) {
            return Err(VolumeError::Runtime("volume list unavailable".to_string()));
        }
        Ok(self.state.lock().volumes.clone())
    }

    async fn remove_volume(&self, name: &str) -> Result<(), VolumeError> {
        if self.record(Call::remove_volume(name)) {
            return Err(VolumeError::InUse(name.to_string()));
        }
        self.state.lock().volumes.retain(|v| v.name != name);
        Ok(())
    }
}
