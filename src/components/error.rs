// ABOUTME: Error types for listing, installing and purging components.
// ABOUTME: Purge errors carry the failed stage and the runtime failure behind it.

use super::purge::PurgeStage;
use crate::runtime::{ContainerError, ImageError, VolumeError};
use snafu::Snafu;
use std::time::Duration;

/// Error kind for programmatic handling.
///
/// `Timeout` is a mutation that did not finish; match with
/// [`is_mutation`](Self::is_mutation) to treat both alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentErrorKind {
    /// Identifier outside the project's image namespaces.
    NotOwned,
    /// Listing images, containers or volumes failed.
    RuntimeQuery,
    /// Pulling, killing or removing failed.
    RuntimeMutation,
    /// A bounded image removal did not finish in time.
    Timeout,
}

impl ComponentErrorKind {
    /// Whether the failure happened while changing runtime state.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            ComponentErrorKind::RuntimeMutation | ComponentErrorKind::Timeout
        )
    }
}

/// Errors from listing, installing and checking components.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("not srcd component: {0}")]
    NotOwned(String),

    #[error("could not list components: {0}")]
    List(#[source] ImageError),

    #[error(transparent)]
    Pull(ImageError),

    #[error(transparent)]
    Inspect(ImageError),
}

impl ComponentError {
    pub fn kind(&self) -> ComponentErrorKind {
        match self {
            ComponentError::NotOwned(_) => ComponentErrorKind::NotOwned,
            ComponentError::List(_) | ComponentError::Inspect(_) => {
                ComponentErrorKind::RuntimeQuery
            }
            ComponentError::Pull(_) => ComponentErrorKind::RuntimeMutation,
        }
    }
}

/// Failure inside a single purge stage.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StageError {
    #[snafu(display("failed to list containers: {source}"))]
    ListContainers { source: ContainerError },

    #[snafu(display("failed to kill container {name}: {source}"))]
    KillContainer {
        name: String,
        source: ContainerError,
    },

    #[snafu(display("failed to list volumes: {source}"))]
    ListVolumes { source: VolumeError },

    #[snafu(display("failed to remove volume {name}: {source}"))]
    RemoveVolume { name: String, source: VolumeError },

    #[snafu(display("unable to list images: {source}"))]
    ListImages { source: ComponentError },

    #[snafu(display("failed to remove image {reference}: {source}"))]
    RemoveImage {
        reference: String,
        source: ImageError,
    },

    #[snafu(display("timed out removing image {reference} after {timeout:?}"))]
    RemoveImageTimeout {
        reference: String,
        timeout: Duration,
    },
}

impl StageError {
    pub fn kind(&self) -> ComponentErrorKind {
        match self {
            StageError::ListContainers { .. }
            | StageError::ListVolumes { .. }
            | StageError::ListImages { .. } => ComponentErrorKind::RuntimeQuery,
            StageError::KillContainer { .. }
            | StageError::RemoveVolume { .. }
            | StageError::RemoveImage { .. } => ComponentErrorKind::RuntimeMutation,
            StageError::RemoveImageTimeout { .. } => ComponentErrorKind::Timeout,
        }
    }
}

/// A purge stopped at `stage`; later stages were not attempted.
#[derive(Debug, Snafu)]
#[snafu(display("{stage}: {source}"))]
#[snafu(visibility(pub(crate)))]
pub struct PurgeError {
    stage: PurgeStage,
    source: StageError,
}

impl PurgeError {
    pub fn stage(&self) -> PurgeStage {
        self.stage
    }

    pub fn kind(&self) -> ComponentErrorKind {
        self.source.kind()
    }

    /// The stage failure behind this error.
    pub fn stage_error(&self) -> &StageError {
        &self.source
    }
}
