// ABOUTME: Catalog of the components the CLI knows how to run.
// ABOUTME: Declares each component once, plus the working-directory-dependent subset.

use super::identity::{DEFAULT_VERSION, Ownership};
use std::borrow::Cow;

/// A known component: the container name it runs under and its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Stable identifier, also used as container name.
    pub name: &'static str,
    /// Image repository.
    pub image: &'static str,
    /// Required version, if the component only works with one.
    pub version: Option<&'static str>,
}

impl Component {
    pub const fn new(name: &'static str, image: &'static str) -> Self {
        Self {
            name,
            image,
            version: None,
        }
    }

    pub const fn pinned(self, version: &'static str) -> Self {
        Self {
            version: Some(version),
            ..self
        }
    }

    /// The required version, or `latest`.
    pub fn version_or_latest(&self) -> &'static str {
        self.version.unwrap_or(DEFAULT_VERSION)
    }

    /// Full `image:version` reference to install.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.image, self.version_or_latest())
    }
}

pub const GITBASE: Component = Component::new("srcd-cli-gitbase", "srcd/gitbase");
pub const GITBASE_WEB: Component = Component::new("srcd-cli-gitbase-web", "srcd/gitbase-web");
pub const BBLFSHD: Component = Component::new("srcd-cli-bblfshd", "bblfsh/bblfshd");
pub const BBLFSH_WEB: Component = Component::new("srcd-cli-bblfsh-web", "bblfsh/web");
pub const PILOSA: Component = Component::new("srcd-cli-pilosa", "pilosa/pilosa").pinned("v0.9.0");

/// Volume holding bblfshd driver storage.
pub const BBLFSH_VOLUME: &str = "srcd-cli-bblfsh-storage";

/// Image namespaces published by the project.
pub const NAMESPACES: &[&str] = &["srcd", "bblfsh", "pilosa"];

/// Prefix of every container and volume the CLI creates.
pub const NAME_PREFIX: &str = "srcd-cli-";

/// The built-in registry.
pub const SRCD: Registry = Registry::new(
    Ownership::new(NAMESPACES, NAME_PREFIX),
    &[GITBASE, GITBASE_WEB, BBLFSHD, BBLFSH_WEB, PILOSA],
    // bblfshd depends on the user dir rather than the working dir, but is
    // recreated on the same trigger.
    &[GITBASE, PILOSA, BBLFSHD],
);

/// Immutable component catalog and ownership rules.
///
/// `working_dir_dependants` lists components whose containers must be
/// recreated whenever the working directory changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
    ownership: Ownership,
    components: &'static [Component],
    working_dir_dependants: &'static [Component],
}

impl Registry {
    pub const fn new(
        ownership: Ownership,
        components: &'static [Component],
        working_dir_dependants: &'static [Component],
    ) -> Self {
        Self {
            ownership,
            components,
            working_dir_dependants,
        }
    }

    pub fn ownership(&self) -> &Ownership {
        &self.ownership
    }

    /// Known components, in declaration order.
    pub fn components(&self) -> &'static [Component] {
        self.components
    }

    pub fn find(&self, name: &str) -> Option<&'static Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn by_image(&self, image: &str) -> Option<&'static Component> {
        self.components.iter().find(|c| c.image == image)
    }

    /// Whether the named component must be recreated when the working
    /// directory changes. Unknown names are not dependants.
    pub fn is_working_dir_dependant(&self, name: &str) -> bool {
        self.working_dir_dependants.iter().any(|c| c.name == name)
    }

    /// Maps a component name to its image reference; anything else is
    /// returned as given.
    pub fn resolve<'a>(&self, id: &'a str) -> Cow<'a, str> {
        match self.find(id) {
            Some(component) => Cow::Owned(component.reference()),
            None => Cow::Borrowed(id),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        SRCD
    }
}
