//! glyphkit: dynamic, resizable vector icons.
//!
//! Icons are stored as raw SVG markup under a symbolic name and resolved on
//! demand at a requested pixel size. Two adapters sit on top of the
//! resolver:
//!
//! - [`DynamicIcon`]: a reactive widget with `name`, `size`, `color`, and
//!   `css_class` inputs that re-resolves only when `name` or `size` change
//! - [`IconPipe`]: a stateless `(name, size?)` transform for inline use
//!
//! [`IconBrowser`] adds a searchable listing of every registered name with
//! clipboard copy.
//!
//! # Getting Started
//!
//! ```
//! use glyphkit::prelude::*;
//!
//! let resolver = IconResolver::with_builtin_icons();
//! let icon = DynamicIcon::builder(resolver.clone()).name("search").size(32).build();
//!
//! icon.set_name("menu");
//! icon.update();
//! println!("{}", icon.render_html());
//!
//! let inline = IconPipe::new(resolver).transform("maps", None);
//! assert!(inline.as_str().contains(r#"width="24""#));
//! ```
//!
//! # Crates
//!
//! - [`glyphkit_core`]: property, signal, and logging primitives
//! - [`glyphkit_icons`]: registry, fallback, sizing, and resolution

pub mod browse;
pub mod pipe;
pub mod platform;
pub mod widget;

pub use glyphkit_core::*;

/// Icon registry, sizing, and resolution.
pub mod icons {
    pub use glyphkit_icons::*;
}

pub use browse::IconBrowser;
pub use pipe::IconPipe;
pub use widget::{ContainerStyle, DynamicIcon, DynamicIconBuilder, IconInputs};

/// Commonly used types.
pub mod prelude {
    pub use crate::browse::IconBrowser;
    pub use crate::pipe::IconPipe;
    pub use crate::platform::ClipboardSink;
    pub use crate::widget::{ContainerStyle, DynamicIcon, DynamicIconBuilder, IconInputs};
    pub use glyphkit_core::{Property, Signal};
    pub use glyphkit_icons::{IconConfig, IconDataset, IconName, IconRegistry, IconResolver, TrustedMarkup};
}
