// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: Summaries of images, containers and volumes plus runtime metadata.

/// A local image as reported by the runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSummary {
    /// Repository tags (`repository:tag`), in the order the runtime reports them.
    /// Dangling images have none.
    pub tags: Vec<String>,
}

impl ImageSummary {
    /// Create a summary with the given tags.
    pub fn tagged<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Summary information about a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSummary {
    /// Names as reported by the runtime, usually with a leading `/`.
    pub names: Vec<String>,
}

impl ContainerSummary {
    /// Create a summary with the given reported names.
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// First reported name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// Summary information about a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeSummary {
    /// Volume name.
    pub name: String,
}

impl VolumeSummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Runtime metadata.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name (e.g., "docker", "podman").
    pub name: String,
    /// Runtime version.
    pub version: String,
    /// API version.
    pub api_version: String,
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
}
