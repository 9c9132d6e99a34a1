//! Icon widgets.
//!
//! [`DynamicIcon`] binds name, size, color, and class inputs to resolved
//! markup, re-resolving only when the name or size changes.

mod dynamic_icon;

pub use dynamic_icon::{ContainerStyle, DynamicIcon, DynamicIconBuilder, IconInputs};
