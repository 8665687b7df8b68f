// ABOUTME: Composable predicates for narrowing component listings.
// ABOUTME: Filters combine with AND semantics and short-circuit on first rejection.

use super::identity::{namespace_of, split_image_reference};
use super::registry::Registry;

/// Predicate over an `image:tag` string.
pub type Filter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Keeps the items every filter accepts, preserving order.
///
/// With no filters everything is kept.
pub fn apply(items: Vec<String>, filters: &[Filter]) -> Vec<String> {
    if filters.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| filters.iter().all(|f| f(item)))
        .collect()
}

/// Accepts images in the given namespace.
pub fn in_namespace(namespace: impl Into<String>) -> Filter {
    let namespace = namespace.into();
    Box::new(move |id: &str| namespace_of(id) == namespace)
}

/// Accepts images whose repository belongs to a registry component.
pub fn known_component(registry: Registry) -> Filter {
    Box::new(move |id: &str| {
        let (image, _) = split_image_reference(id);
        registry.by_image(image).is_some()
    })
}

/// Accepts images tagged with the given version.
pub fn with_version(version: impl Into<String>) -> Filter {
    let version = version.into();
    Box::new(move |id: &str| split_image_reference(id).1 == version)
}

/// Listing narrowing chosen on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub namespace: Option<String>,
    /// Keep only repositories the registry knows.
    pub known: bool,
    pub version: Option<String>,
}

impl ListOptions {
    /// Build the filters, cheapest first.
    pub fn into_filters(self, registry: Registry) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(namespace) = self.namespace {
            filters.push(in_namespace(namespace));
        }
        if let Some(version) = self.version {
            filters.push(with_version(version));
        }
        if self.known {
            filters.push(known_component(registry));
        }
        filters
    }
}
