//! Dynamic icon widget.
//!
//! [`DynamicIcon`] is the tag-style adapter over [`IconResolver`]: it holds
//! the four inputs a host view binds (`name`, `size`, `color`, `css_class`),
//! keeps the currently displayed markup, and renders a sized container
//! around it.
//!
//! # Update cycles
//!
//! Setters only record new input values. The host then calls
//! [`DynamicIcon::update`] once per render cycle, which diffs `name` and
//! `size` against the inputs of the last resolution:
//!
//! - `name` or `size` (or both) changed → resolve exactly once and replace
//!   the displayed markup
//! - only `color` or `css_class` changed → nothing is resolved; the new
//!   values show up directly in [`DynamicIcon::container_style`]
//!
//! Construction, directly or through [`DynamicIconBuilder::build`], resolves
//! exactly once with the initial inputs. Every later resolution, from
//! [`DynamicIcon::update`] or [`DynamicIcon::refresh`], is counted in
//! [`DynamicIcon::resolution_count`].
//!
//! # Example
//!
//! ```
//! use glyphkit::widget::DynamicIcon;
//! use glyphkit::icons::IconResolver;
//!
//! let resolver = IconResolver::with_builtin_icons();
//! let icon = DynamicIcon::builder(resolver)
//!     .name("search")
//!     .size(32)
//!     .color("#333")
//!     .build();
//!
//! icon.set_name("menu");
//! assert!(icon.update());
//! assert!(icon.markup().as_str().starts_with(r#"<svg width="32" height="32""#));
//!
//! icon.set_color("#000");
//! assert!(!icon.update());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use glyphkit_core::logging::targets;
use glyphkit_core::{Property, Signal};
use glyphkit_icons::{IconConfig, IconResolver, TrustedMarkup};

/// The inputs a resolution was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedInputs {
    name: String,
    size: u32,
}

/// Styling applied to the icon's host container.
///
/// The container is sized as well as the markup, so the icon occupies the
/// requested box even if its markup carries no dimension attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStyle {
    /// Container width and height, in pixels.
    pub size: u32,
    /// Container text color. `currentColor` strokes and fills pick this up.
    pub color: String,
    /// Free-form class list for the container.
    pub css_class: String,
}

impl ContainerStyle {
    /// Inline CSS declarations for the container.
    pub fn to_css(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; color: {color}",
            size = self.size,
            color = self.color
        )
    }
}

/// A batch of input changes applied in one update cycle.
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconInputs {
    /// New icon name.
    pub name: Option<String>,
    /// New size.
    pub size: Option<u32>,
    /// New container color.
    pub color: Option<String>,
    /// New container class list.
    pub css_class: Option<String>,
}

impl IconInputs {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the container color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the container class list.
    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }
}

/// A widget that displays a named icon at a given size and color.
///
/// # Trusted output
///
/// [`render_html`](Self::render_html) embeds the resolved markup without
/// escaping it. Only register icons from trusted sources.
pub struct DynamicIcon {
    resolver: IconResolver,

    /// Icon name input.
    name: Property<String>,
    /// Size input, in pixels.
    size: Property<u32>,
    /// Container color input.
    color: Property<String>,
    /// Container class input.
    css_class: Property<String>,

    /// Inputs of the last resolution.
    resolved: RwLock<ResolvedInputs>,
    /// Currently displayed markup.
    markup: RwLock<TrustedMarkup>,
    /// Number of resolutions performed, including the initial one.
    resolutions: AtomicUsize,

    /// Signal emitted with the new markup whenever an update cycle
    /// re-resolves the icon.
    pub icon_changed: Signal<TrustedMarkup>,
}

/// Collects initial inputs for a [`DynamicIcon`].
///
/// Nothing is resolved until [`build`](Self::build), which resolves exactly
/// once with the final inputs.
#[derive(Debug, Clone)]
pub struct DynamicIconBuilder {
    resolver: IconResolver,
    name: String,
    size: u32,
    color: String,
    css_class: String,
}

impl DynamicIconBuilder {
    fn new(resolver: IconResolver) -> Self {
        let config = IconConfig::default();
        Self {
            resolver,
            name: config.default_name,
            size: config.default_size,
            color: config.default_color,
            css_class: String::new(),
        }
    }

    /// Take the name, size, and color from `config`.
    pub fn config(mut self, config: &IconConfig) -> Self {
        self.name = config.default_name.clone();
        self.size = config.default_size;
        self.color = config.default_color.clone();
        self
    }

    /// Set the initial icon name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the initial color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the initial container class list.
    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Resolve the initial inputs and create the widget.
    pub fn build(self) -> DynamicIcon {
        let inputs = ResolvedInputs {
            name: self.name,
            size: self.size,
        };
        let markup = self.resolver.resolve(&inputs.name, inputs.size);
        tracing::debug!(target: targets::BINDING, name = %inputs.name, size = inputs.size, "initial resolution");

        DynamicIcon {
            resolver: self.resolver,
            name: Property::new(inputs.name.clone()),
            size: Property::new(inputs.size),
            color: Property::new(self.color),
            css_class: Property::new(self.css_class),
            resolved: RwLock::new(inputs),
            markup: RwLock::new(markup),
            resolutions: AtomicUsize::new(1),
            icon_changed: Signal::new(),
        }
    }
}

impl DynamicIcon {
    /// Create an icon with the default inputs (`book-1`, 24, `currentColor`).
    pub fn new(resolver: IconResolver) -> Self {
        Self::builder(resolver).build()
    }

    /// Create an icon whose initial inputs come from `config`.
    pub fn with_config(resolver: IconResolver, config: &IconConfig) -> Self {
        Self::builder(resolver).config(config).build()
    }

    /// Start building an icon with non-default initial inputs.
    pub fn builder(resolver: IconResolver) -> DynamicIconBuilder {
        DynamicIconBuilder::new(resolver)
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Current icon name.
    pub fn name(&self) -> String {
        self.name.get()
    }

    /// Set the icon name. Takes effect on the next [`update`](Self::update).
    ///
    /// Returns `true` if the value changed.
    pub fn set_name(&self, name: impl Into<String>) -> bool {
        self.name.set(name.into())
    }

    /// Current size.
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Set the size. Takes effect on the next [`update`](Self::update).
    ///
    /// Returns `true` if the value changed.
    pub fn set_size(&self, size: u32) -> bool {
        self.size.set(size)
    }

    /// Current container color.
    pub fn color(&self) -> String {
        self.color.get()
    }

    /// Set the container color. Never triggers re-resolution.
    pub fn set_color(&self, color: impl Into<String>) -> bool {
        self.color.set(color.into())
    }

    /// Current container class list.
    pub fn css_class(&self) -> String {
        self.css_class.get()
    }

    /// Set the container class list. Never triggers re-resolution.
    pub fn set_css_class(&self, css_class: impl Into<String>) -> bool {
        self.css_class.set(css_class.into())
    }

    /// Apply a batch of input changes and run one update cycle.
    ///
    /// Returns `true` if the icon was re-resolved.
    pub fn apply(&self, inputs: IconInputs) -> bool {
        if let Some(name) = inputs.name {
            self.set_name(name);
        }
        if let Some(size) = inputs.size {
            self.set_size(size);
        }
        if let Some(color) = inputs.color {
            self.set_color(color);
        }
        if let Some(css_class) = inputs.css_class {
            self.set_css_class(css_class);
        }
        self.update()
    }

    // =========================================================================
    // Update cycle
    // =========================================================================

    /// Whether `name` or `size` differ from the inputs of the last resolution.
    pub fn needs_resolution(&self) -> bool {
        *self.resolved.read() != self.current_inputs()
    }

    /// Run one update cycle.
    ///
    /// Re-resolves exactly once if `name` or `size` changed since the last
    /// resolution, and emits [`icon_changed`](Self::icon_changed). Returns
    /// `true` if a resolution happened.
    pub fn update(&self) -> bool {
        let inputs = self.current_inputs();
        {
            let resolved = self.resolved.read();
            if *resolved == inputs {
                tracing::trace!(target: targets::BINDING, "name and size unchanged, skipping resolution");
                return false;
            }
        }

        let markup = self.resolver.resolve(&inputs.name, inputs.size);
        tracing::debug!(target: targets::BINDING, name = %inputs.name, size = inputs.size, "re-resolved icon");

        *self.markup.write() = markup.clone();
        *self.resolved.write() = inputs;
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.icon_changed.emit(markup);
        true
    }

    /// Force a resolution with the current inputs.
    ///
    /// Useful after the registry entry for the current name was replaced,
    /// since registry changes are not an update-cycle input.
    pub fn refresh(&self) {
        let inputs = self.current_inputs();
        let markup = self.resolver.resolve(&inputs.name, inputs.size);
        *self.markup.write() = markup.clone();
        *self.resolved.write() = inputs;
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.icon_changed.emit(markup);
    }

    fn current_inputs(&self) -> ResolvedInputs {
        ResolvedInputs {
            name: self.name.get(),
            size: self.size.get(),
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// The currently displayed markup.
    pub fn markup(&self) -> TrustedMarkup {
        self.markup.read().clone()
    }

    /// Number of resolutions performed so far, including construction.
    pub fn resolution_count(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }

    /// Container styling from the current inputs.
    pub fn container_style(&self) -> ContainerStyle {
        ContainerStyle {
            size: self.size.get(),
            color: self.color.get(),
            css_class: self.css_class.get(),
        }
    }

    /// Render the container and its markup as an HTML fragment.
    ///
    /// The class and style attribute values are escaped; the markup is
    /// inserted verbatim.
    pub fn render_html(&self) -> String {
        let style = self.container_style();
        let class_attr = if style.css_class.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", escape_attr(&style.css_class))
        };
        format!(
            "<div{class_attr} style=\"{}\">{}</div>",
            escape_attr(&style.to_css()),
            self.markup.read()
        )
    }
}

impl std::fmt::Debug for DynamicIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicIcon")
            .field("name", &self.name.get())
            .field("size", &self.size.get())
            .field("color", &self.color.get())
            .field("css_class", &self.css_class.get())
            .field("resolutions", &self.resolution_count())
            .finish()
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
