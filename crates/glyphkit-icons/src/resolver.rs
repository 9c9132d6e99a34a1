//! The resolution facade.
//!
//! [`IconResolver`] composes registry lookup, the fallback glyph, and
//! [`resize_markup`] into a single call. It holds a shared handle to the
//! registry and keeps no cache: every call looks the name up again, so
//! records inserted through any handle are visible immediately.

use std::sync::Arc;

use glyphkit_core::logging::targets;

use crate::dataset::IconDataset;
use crate::fallback;
use crate::registry::IconRegistry;
use crate::resize::resize_markup;
use crate::types::TrustedMarkup;

/// Resolves icon names to sized, display-ready markup.
///
/// Cloning a resolver is cheap and yields a handle onto the same registry.
///
/// # Example
///
/// ```
/// use glyphkit_icons::IconResolver;
///
/// let resolver = IconResolver::with_builtin_icons();
/// let markup = resolver.resolve("search", 32);
/// assert!(markup.as_str().starts_with(r#"<svg width="32" height="32""#));
///
/// // Unknown names never fail, they get the fallback glyph.
/// let unknown = resolver.resolve("no-such-icon", 16);
/// assert!(unknown.as_str().contains("currentColor"));
/// ```
#[derive(Debug, Clone)]
pub struct IconResolver {
    registry: Arc<IconRegistry>,
}

impl IconResolver {
    /// Create a resolver over a shared registry.
    pub fn new(registry: Arc<IconRegistry>) -> Self {
        Self { registry }
    }

    /// Create a resolver over a fresh registry seeded from `dataset`.
    pub fn from_dataset(dataset: &IconDataset) -> Self {
        Self::new(Arc::new(IconRegistry::from_dataset(dataset)))
    }

    /// Create a resolver over a fresh registry seeded with the built-in icons.
    pub fn with_builtin_icons() -> Self {
        Self::from_dataset(&IconDataset::builtin())
    }

    /// The registry this resolver reads from.
    pub fn registry(&self) -> &Arc<IconRegistry> {
        &self.registry
    }

    /// Resolve `name` to markup sized to `size`.
    ///
    /// Absent names resolve to the fallback glyph. The size is not
    /// validated.
    pub fn resolve(&self, name: &str, size: u32) -> TrustedMarkup {
        let sized = self
            .registry
            .with_markup(name, |markup| resize_markup(markup, size))
            .unwrap_or_else(|| {
                tracing::debug!(target: targets::RESOLVER, name, "unknown icon, using fallback");
                resize_markup(fallback::default_markup(), size)
            });
        TrustedMarkup::new(sized)
    }

    /// Unsized markup for `name`, or the fallback glyph.
    pub fn markup(&self, name: &str) -> String {
        self.registry
            .get(name)
            .unwrap_or_else(|| fallback::default_markup().to_string())
    }

    /// Snapshot of every registered name, in insertion order.
    pub fn all_names(&self) -> Vec<String> {
        self.registry.all_names()
    }

    /// Check whether `name` is registered.
    pub fn has_icon(&self, name: &str) -> bool {
        self.registry.has(name)
    }

    /// Add or overwrite an icon. Visible to the next `resolve` call.
    ///
    /// The markup becomes display-ready output without escaping; it must
    /// come from a trusted source.
    pub fn add_icon(&self, name: impl Into<String>, markup: impl Into<String>) {
        self.registry.insert(name, markup);
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::with_builtin_icons()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::FALLBACK_MARKUP;

    #[test]
    fn test_resolve_known_icon() {
        let resolver = IconResolver::new(Arc::new(IconRegistry::new()));
        resolver.add_icon("sq", r#"<svg width="10" height="10" viewBox="0 0 10 10"></svg>"#);

        assert_eq!(
            resolver.resolve("sq", 20),
            r#"<svg width="20" height="20" viewBox="0 0 10 10"></svg>"#
        );
    }

    #[test]
    fn test_resolve_unknown_uses_fallback() {
        let resolver = IconResolver::new(Arc::new(IconRegistry::new()));
        assert_eq!(resolver.resolve("missing", 24), FALLBACK_MARKUP);
        assert_eq!(resolver.markup("missing"), FALLBACK_MARKUP);
    }

    #[test]
    fn test_clones_share_registry() {
        let resolver = IconResolver::with_builtin_icons();
        let other = resolver.clone();
        other.add_icon("late", "<svg/>");
        assert!(resolver.has_icon("late"));
        assert_eq!(resolver.all_names().last().map(String::as_str), Some("late"));
    }

    #[test]
    fn test_default_has_builtin_icons() {
        let resolver = IconResolver::default();
        assert!(resolver.has_icon("book-1"));
        assert!(resolver.has_icon("menu"));
    }
}
