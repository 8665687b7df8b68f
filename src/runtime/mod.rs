// ABOUTME: Container runtime capabilities, detection and the bollard-backed client.
// ABOUTME: Auto-detects Docker or Podman, or uses explicit config.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local, detect_runtime};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{
    ContainerError, ContainerOps, ContainerRuntime, ContainerSummary, ImageError, ImageOps,
    ImageSummary, RuntimeInfo as RuntimeInfoTrait, RuntimeInfoError, RuntimeMetadata, VolumeError,
    VolumeOps, VolumeSummary,
};
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};
