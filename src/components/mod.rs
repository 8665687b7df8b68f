// ABOUTME: Component registry plus list, install and purge orchestration.
// ABOUTME: Decides which runtime objects belong to the CLI and tears them down in order.

mod error;
pub mod filter;
mod identity;
mod manager;
mod purge;
pub mod registry;

pub use error::{ComponentError, ComponentErrorKind, PurgeError, StageError};
pub use filter::{Filter, ListOptions};
pub use identity::{
    DEFAULT_VERSION, Ownership, container_name, namespace_of, split_image_reference,
};
pub use manager::{ComponentManager, DEFAULT_IMAGE_REMOVAL_TIMEOUT};
pub use purge::PurgeStage;
pub use registry::{BBLFSH_VOLUME, Component, Registry};
