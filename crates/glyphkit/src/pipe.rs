//! Function-style icon adapter.
//!
//! [`IconPipe`] is a stateless `(name, size?) -> markup` transform for
//! templates that only need inline markup without a container.

use glyphkit_icons::{DEFAULT_ICON_SIZE, IconResolver, TrustedMarkup};

/// Resolves icons inline, defaulting the size to 24 pixels.
///
/// # Example
///
/// ```
/// use glyphkit::IconPipe;
/// use glyphkit::icons::IconResolver;
///
/// let pipe = IconPipe::new(IconResolver::with_builtin_icons());
/// let default = pipe.transform("maps", None);
/// let large = pipe.transform("maps", 48);
///
/// assert!(default.as_str().starts_with(r#"<svg width="24" height="24""#));
/// assert!(large.as_str().starts_with(r#"<svg width="48" height="48""#));
/// ```
#[derive(Debug, Clone)]
pub struct IconPipe {
    resolver: IconResolver,
    default_size: u32,
}

impl IconPipe {
    /// Create a pipe over `resolver`.
    pub fn new(resolver: IconResolver) -> Self {
        Self {
            resolver,
            default_size: DEFAULT_ICON_SIZE,
        }
    }

    /// Use `size` when [`transform`](Self::transform) is called without one.
    pub fn with_default_size(mut self, size: u32) -> Self {
        self.default_size = size;
        self
    }

    /// The size used when none is given.
    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    /// Resolve `name` at `size`, or at the default size if `size` is `None`.
    pub fn transform(&self, name: &str, size: impl Into<Option<u32>>) -> TrustedMarkup {
        let size = size.into().unwrap_or(self.default_size);
        self.resolver.resolve(name, size)
    }
}
