// ABOUTME: Ordered teardown of everything the CLI created on the runtime.
// ABOUTME: Containers first, then volumes, then images; the first failure aborts.

use super::error::{
    KillContainerSnafu, ListContainersSnafu, ListImagesSnafu, ListVolumesSnafu, PurgeError,
    PurgeSnafu, RemoveImageSnafu, RemoveImageTimeoutSnafu, RemoveVolumeSnafu, StageError,
};
use super::identity::container_name;
use super::manager::ComponentManager;
use crate::runtime::ContainerRuntime;
use snafu::ResultExt;
use std::fmt;

/// One step of a purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeStage {
    Containers,
    Volumes,
    Images,
}

impl PurgeStage {
    /// Execution order. Containers go first since a container can hold a
    /// volume or image reference.
    pub const ORDER: [PurgeStage; 3] = [
        PurgeStage::Containers,
        PurgeStage::Volumes,
        PurgeStage::Images,
    ];

    fn objects(self) -> &'static str {
        match self {
            PurgeStage::Containers => "containers",
            PurgeStage::Volumes => "volumes",
            PurgeStage::Images => "images",
        }
    }
}

impl fmt::Display for PurgeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeStage::Containers => write!(f, "unable to remove all containers"),
            PurgeStage::Volumes => write!(f, "unable to remove volumes"),
            PurgeStage::Images => write!(f, "unable to remove all images"),
        }
    }
}

impl<R: ContainerRuntime> ComponentManager<R> {
    /// Remove every owned container, volume and image, in that order.
    ///
    /// There is no rollback: a failure leaves earlier stages done and later
    /// ones untouched, and the error names the stage that failed.
    pub async fn purge(&self) -> Result<(), PurgeError> {
        for stage in PurgeStage::ORDER {
            tracing::info!("removing {}...", stage.objects());
            self.run_stage(stage).await.context(PurgeSnafu { stage })?;
        }
        Ok(())
    }

    async fn run_stage(&self, stage: PurgeStage) -> Result<(), StageError> {
        match stage {
            PurgeStage::Containers => self.remove_containers().await,
            PurgeStage::Volumes => self.remove_volumes().await,
            PurgeStage::Images => self.remove_images().await,
        }
    }

    async fn remove_containers(&self) -> Result<(), StageError> {
        let containers = self
            .runtime
            .list_containers()
            .await
            .context(ListContainersSnafu)?;

        let ownership = self.registry.ownership();
        for container in &containers {
            let Some(reported) = container.first_name() else {
                continue;
            };

            let name = container_name(reported);
            if !ownership.owns_runtime_object(name) {
                continue;
            }

            tracing::info!("removing container {}", name);
            self.runtime
                .kill_container(name)
                .await
                .context(KillContainerSnafu { name })?;
        }

        Ok(())
    }

    async fn remove_volumes(&self) -> Result<(), StageError> {
        let volumes = self.runtime.list_volumes().await.context(ListVolumesSnafu)?;

        let ownership = self.registry.ownership();
        for volume in volumes.iter().filter(|v| ownership.owns_runtime_object(&v.name)) {
            tracing::info!("removing volume {}", volume.name);
            self.runtime
                .remove_volume(&volume.name)
                .await
                .context(RemoveVolumeSnafu {
                    name: volume.name.as_str(),
                })?;
        }

        Ok(())
    }

    async fn remove_images(&self) -> Result<(), StageError> {
        let images = self.list(&[]).await.context(ListImagesSnafu)?;

        let timeout = self.image_removal_timeout;
        for reference in &images {
            tracing::info!("removing image {}", reference);

            // The bound covers this call only; dropping the future on expiry
            // cancels the request.
            match tokio::time::timeout(timeout, self.runtime.remove_image(reference)).await {
                Ok(result) => result.context(RemoveImageSnafu {
                    reference: reference.as_str(),
                })?,
                Err(_) => {
                    return RemoveImageTimeoutSnafu {
                        reference: reference.as_str(),
                        timeout,
                    }
                    .fail();
                }
            }
        }

        Ok(())
    }
}
