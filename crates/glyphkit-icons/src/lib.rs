//! Icon resolution and sizing for glyphkit.
//!
//! This crate turns a symbolic icon name into display-ready vector markup:
//!
//! - **Registry**: a shared name → markup map seeded from a static dataset
//!   ([`IconRegistry`], [`IconDataset`])
//! - **Fallback**: a fixed "unknown icon" glyph for absent names
//! - **Sizing**: a textual rewrite of the root `width`/`height` attributes
//!   that leaves `viewBox` and geometry alone ([`resize_markup`])
//! - **Resolution**: lookup → fallback → sizing in one call ([`IconResolver`])
//!
//! Resolution never fails. Unknown names produce the fallback glyph and
//! markup without dimension attributes passes through unchanged.
//!
//! # Trusted markup
//!
//! Resolved markup is returned as [`TrustedMarkup`] and is meant to be
//! inserted into a view without escaping. Only trusted datasets and
//! application code may add icons; nothing here sanitizes markup.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use glyphkit_icons::{IconDataset, IconRegistry, IconResolver};
//!
//! let registry = Arc::new(IconRegistry::from_dataset(&IconDataset::builtin()));
//! let resolver = IconResolver::new(registry.clone());
//!
//! registry.insert("dot", r#"<svg width="4" height="4" viewBox="0 0 4 4"><circle cx="2" cy="2" r="2"/></svg>"#);
//! let markup = resolver.resolve("dot", 12);
//! assert!(markup.as_str().starts_with(r#"<svg width="12" height="12" viewBox="0 0 4 4">"#));
//! ```

mod builtin;
mod config;
mod dataset;
mod error;
mod fallback;
mod registry;
mod resize;
mod resolver;
mod types;

pub use builtin::BUILTIN_ICONS;
pub use config::{DEFAULT_ICON_SIZE, INHERIT_COLOR, IconConfig};
pub use dataset::{IconData, IconDataset};
pub use error::{Error, Result};
pub use fallback::{FALLBACK_MARKUP, default_markup};
pub use registry::IconRegistry;
pub use resize::resize_markup;
pub use resolver::IconResolver;
pub use types::{IconName, IconRecord, TrustedMarkup};
