// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ImageOps, ContainerOps, VolumeOps, RuntimeInfo and ContainerRuntime.

mod container;
mod image;
mod runtime_info;
mod shared_types;
mod volume;

pub use container::{ContainerError, ContainerOps};
pub use image::{ImageError, ImageOps};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError};
pub use shared_types::*;
pub use volume::{VolumeError, VolumeOps};

/// Every capability the component manager needs from a runtime.
///
/// Implemented automatically for any type providing the individual traits.
pub trait ContainerRuntime: ImageOps + ContainerOps + VolumeOps {}

impl<T: ImageOps + ContainerOps + VolumeOps> ContainerRuntime for T {}
