// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::{
    ContainerError, ContainerOps, ContainerSummary, ImageError, ImageOps, ImageSummary,
    RuntimeInfo, RuntimeInfoError, RuntimeMetadata, VolumeError, VolumeOps, VolumeSummary,
};
use crate::runtime::types::RuntimeType;
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{
    CreateImageOptions, ListContainersOptions, ListImagesOptions, ListVolumesOptions,
    RemoveContainerOptions, RemoveImageOptions, RemoveVolumeOptions,
};
use futures::StreamExt;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_image_pull_error(e: bollard::errors::Error, image_name: &str) -> ImageError {
    ImageError::PullFailed(format!("{}: {}", image_name, e))
}

fn map_image_remove_error(e: bollard::errors::Error, image_name: &str) -> ImageError {
    match &e {
        bollard::errors::Error::DockerResponseServerError { status_code, .. }
            if *status_code == 404 =>
        {
            ImageError::NotFound(image_name.to_string())
        }
        bollard::errors::Error::DockerResponseServerError { status_code, .. }
            if *status_code == 409 =>
        {
            ImageError::InUse(image_name.to_string())
        }
        _ => ImageError::Runtime(format!("failed to remove {}: {}", image_name, e)),
    }
}

fn map_container_kill_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

fn map_volume_remove_error(e: bollard::errors::Error, name: &str) -> VolumeError {
    match &e {
        bollard::errors::Error::DockerResponseServerError { status_code, .. }
            if *status_code == 404 =>
        {
            VolumeError::NotFound(name.to_string())
        }
        bollard::errors::Error::DockerResponseServerError { status_code, .. }
            if *status_code == 409 =>
        {
            VolumeError::InUse(name.to_string())
        }
        _ => VolumeError::Runtime(format!("failed to remove {}: {}", name, e)),
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    ///
    /// Use with `detect_local()` or `detect_runtime()` to find the socket.
    pub fn connect(info: &super::types::RuntimeInfo) -> Result<Self, RuntimeInfoError> {
        let client =
            Docker::connect_with_unix(&info.socket_path, 120, bollard::API_DEFAULT_VERSION)
                .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(client, info.runtime_type))
    }
}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let info = self
            .client
            .info()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;

        let name = match self.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: info.server_version.unwrap_or_default(),
            api_version: bollard::API_DEFAULT_VERSION.to_string(),
            os: info.operating_system.unwrap_or_default(),
            arch: info.architecture.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client
            .ping()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ImageOps for BollardRuntime {
    async fn list_images(&self) -> Result<Vec<ImageSummary>, ImageError> {
        let opts = ListImagesOptions {
            all: false,
            ..Default::default()
        };

        let images = self
            .client
            .list_images(Some(opts))
            .await
            .map_err(|e| ImageError::Runtime(format!("failed to list images: {}", e)))?;

        Ok(images
            .into_iter()
            .map(|img| ImageSummary {
                tags: img.repo_tags,
            })
            .collect())
    }

    async fn pull_image(&self, image: &str, version: &str) -> Result<(), ImageError> {
        let image_name = format!("{}:{}", image, version);
        tracing::debug!(image = %image_name, "pulling image");

        let opts = CreateImageOptions {
            from_image: Some(image.to_string()),
            tag: Some(version.to_string()),
            ..Default::default()
        };

        // Pull returns a stream of progress updates - consume it
        let mut stream = self.client.create_image(Some(opts), None, None);
        while let Some(result) = stream.next().await {
            result.map_err(|e| map_image_pull_error(e, &image_name))?;
        }

        Ok(())
    }

    async fn image_exists(&self, image: &str, version: &str) -> Result<bool, ImageError> {
        let image_name = format!("{}:{}", image, version);

        match self.client.inspect_image(&image_name).await {
            Ok(_) => Ok(true),
            Err(bollard::errors::Error::DockerResponseServerError {
                status_code: 404, ..
            }) => Ok(false),
            Err(e) => Err(ImageError::Runtime(format!(
                "failed to inspect {}: {}",
                image_name, e
            ))),
        }
    }

    async fn remove_image(&self, reference: &str) -> Result<(), ImageError> {
        let opts = RemoveImageOptions {
            force: true,
            ..Default::default()
        };

        self.client
            .remove_image(reference, Some(opts), None)
            .await
            .map_err(|e| map_image_remove_error(e, reference))?;

        Ok(())
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError> {
        let opts = ListContainersOptions {
            all: true,
            ..Default::default()
        };

        let containers = self
            .client
            .list_containers(Some(opts))
            .await
            .map_err(|e| ContainerError::Runtime(e.to_string()))?;

        Ok(containers
            .into_iter()
            .map(|c| ContainerSummary {
                names: c.names.unwrap_or_default(),
            })
            .collect())
    }

    async fn kill_container(&self, name: &str) -> Result<(), ContainerError> {
        // Forced removal kills a running container and deletes it in one call,
        // which also releases its volumes and image.
        let opts = RemoveContainerOptions {
            force: true,
            ..Default::default()
        };

        self.client
            .remove_container(name, Some(opts))
            .await
            .map_err(map_container_kill_error)
    }
}

#[async_trait]
impl VolumeOps for BollardRuntime {
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError> {
        let response = self
            .client
            .list_volumes(None::<ListVolumesOptions>)
            .await
            .map_err(|e| VolumeError::Runtime(format!("failed to list volumes: {}", e)))?;

        for warning in response.warnings.unwrap_or_default() {
            tracing::warn!("volume list: {}", warning);
        }

        Ok(response
            .volumes
            .unwrap_or_default()
            .into_iter()
            .map(|v| VolumeSummary { name: v.name })
            .collect())
    }

    async fn remove_volume(&self, name: &str) -> Result<(), VolumeError> {
        self.client
            .remove_volume(name, None::<RemoveVolumeOptions>)
            .await
            .map_err(|e| map_volume_remove_error(e, name))
    }
}
