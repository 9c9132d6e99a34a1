//! The name → markup registry.
//!
//! An [`IconRegistry`] is built once at startup, usually from an
//! [`IconDataset`], and then shared by handle (`Arc<IconRegistry>`) with
//! every consumer. Records can be added or overwritten at any time; they are
//! never removed.

use indexmap::IndexMap;
use parking_lot::RwLock;

use glyphkit_core::logging::targets;

use crate::dataset::IconDataset;

/// Mapping from icon name to raw markup.
///
/// Lookups are exact and case-sensitive. Iteration order is the order in
/// which names were first inserted; overwriting a name keeps its position.
///
/// # Thread Safety
///
/// The map lives behind a `RwLock`, so a shared registry can be read and
/// extended through `&self`. Concurrent inserts of the same name are
/// last-writer-wins.
///
/// # Example
///
/// ```
/// use glyphkit_icons::IconRegistry;
///
/// let registry = IconRegistry::new();
/// registry.insert("dot", r#"<svg width="4" height="4"></svg>"#);
/// assert!(registry.has("dot"));
/// assert_eq!(registry.all_names(), vec!["dot".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct IconRegistry {
    icons: RwLock<IndexMap<String, String>>,
}

impl IconRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded from `dataset`.
    pub fn from_dataset(dataset: &IconDataset) -> Self {
        let registry = Self::new();
        registry.initialize(dataset);
        registry
    }

    /// Populate the registry from `dataset`.
    ///
    /// Records are applied in dataset order; a name seen later overwrites
    /// an earlier one.
    pub fn initialize(&self, dataset: &IconDataset) {
        let mut icons = self.icons.write();
        for (name, markup) in dataset.iter() {
            icons.insert(name.to_string(), markup.to_string());
        }
        tracing::debug!(target: targets::REGISTRY, records = icons.len(), "registry initialized");
    }

    /// Look up the markup for `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.icons.read().get(name).cloned()
    }

    /// Look up `name` and hand the markup to `f` without cloning it.
    pub fn with_markup<F, R>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&str) -> R,
    {
        self.icons.read().get(name).map(|markup| f(markup))
    }

    /// Check whether `name` is registered.
    pub fn has(&self, name: &str) -> bool {
        self.icons.read().contains_key(name)
    }

    /// Snapshot of every registered name, in insertion order.
    pub fn all_names(&self) -> Vec<String> {
        self.icons.read().keys().cloned().collect()
    }

    /// Add or overwrite the record for `name`.
    ///
    /// The markup is stored as given; it is not checked for well-formedness.
    pub fn insert(&self, name: impl Into<String>, markup: impl Into<String>) {
        let name = name.into();
        let previous = self.icons.write().insert(name.clone(), markup.into());
        if previous.is_some() {
            tracing::trace!(target: targets::REGISTRY, %name, "overwrote existing icon");
        } else {
            tracing::trace!(target: targets::REGISTRY, %name, "added icon");
        }
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.read().len()
    }

    /// Whether the registry has no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_get() {
        let registry = IconRegistry::new();
        registry.insert("a", "<svg/>");
        assert_eq!(registry.get("a").as_deref(), Some("<svg/>"));
        assert_eq!(registry.get("b"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = IconRegistry::new();
        registry.insert("Search", "<svg/>");
        assert!(registry.has("Search"));
        assert!(!registry.has("search"));
    }

    #[test]
    fn test_last_insert_wins_and_keeps_position() {
        let registry = IconRegistry::new();
        registry.insert("first", "1");
        registry.insert("second", "2");
        registry.insert("first", "1b");

        assert_eq!(registry.get("first").as_deref(), Some("1b"));
        assert_eq!(registry.all_names(), vec!["first", "second"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_initialize_from_dataset() {
        let mut dataset = IconDataset::new();
        dataset.insert("x", "<svg>x</svg>");
        dataset.insert("y", "<svg>y</svg>");

        let registry = IconRegistry::from_dataset(&dataset);
        assert_eq!(registry.all_names(), vec!["x", "y"]);
        assert_eq!(registry.get("y").as_deref(), Some("<svg>y</svg>"));
    }

    #[test]
    fn test_initialize_overwrites_existing_entries() {
        let registry = IconRegistry::new();
        registry.insert("x", "old");

        let mut dataset = IconDataset::new();
        dataset.insert("x", "new");
        registry.initialize(&dataset);

        assert_eq!(registry.get("x").as_deref(), Some("new"));
    }

    #[test]
    fn test_with_markup_borrows() {
        let registry = IconRegistry::new();
        registry.insert("dot", "<svg></svg>");
        assert_eq!(registry.with_markup("dot", str::len), Some(11));
        assert_eq!(registry.with_markup("nope", str::len), None);
    }
}
