// ABOUTME: Ownership rules for images, containers and volumes.
// ABOUTME: Namespace matching for images, name-prefix matching for runtime objects.

/// Tag used when an image reference carries none.
pub const DEFAULT_VERSION: &str = "latest";

/// Decides which runtime objects belong to the tool.
///
/// Images are owned when their namespace (the segment before the first `/`)
/// is one of `namespaces`. Containers and volumes are owned when their name
/// starts with `name_prefix`. The two rules are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    namespaces: &'static [&'static str],
    name_prefix: &'static str,
}

impl Ownership {
    pub const fn new(namespaces: &'static [&'static str], name_prefix: &'static str) -> Self {
        Self {
            namespaces,
            name_prefix,
        }
    }

    /// Whether an image reference lives in one of the owned namespaces.
    ///
    /// Case-sensitive and untrimmed. A reference without `/` is its own
    /// namespace.
    pub fn owns_image(&self, reference: &str) -> bool {
        self.namespaces.contains(&namespace_of(reference))
    }

    /// Whether a container or volume name carries the tool prefix.
    pub fn owns_runtime_object(&self, name: &str) -> bool {
        name.starts_with(self.name_prefix)
    }

    /// Like [`owns_runtime_object`](Self::owns_runtime_object), for a
    /// container name as the runtime reports it.
    pub fn owns_container(&self, reported_name: &str) -> bool {
        self.owns_runtime_object(container_name(reported_name))
    }
}

/// Namespace of an image reference: everything before the first `/`.
pub fn namespace_of(reference: &str) -> &str {
    reference.split('/').next().unwrap_or(reference)
}

/// Strips the single leading `/` runtimes put in front of container names.
pub fn container_name(reported_name: &str) -> &str {
    reported_name.strip_prefix('/').unwrap_or(reported_name)
}

/// Splits `repository[:tag]` into image and version.
///
/// The version is the segment after the first `:` (anything after a second
/// `:` is dropped) and defaults to `latest`. Ownership is not checked.
pub fn split_image_reference(reference: &str) -> (&str, &str) {
    let mut parts = reference.split(':');
    let image = parts.next().unwrap_or(reference);
    let version = parts.next().unwrap_or(DEFAULT_VERSION);
    (image, version)
}
