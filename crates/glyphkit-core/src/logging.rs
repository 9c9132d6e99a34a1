//! Logging facilities for glyphkit.
//!
//! glyphkit uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("glyphkit_icons::resolver=debug")
//!         .init();
//! }
//! ```
//!
//! The constants in [`targets`] are the exact target strings every crate in
//! the workspace logs under, so they can be used directly in filter
//! directives.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "glyphkit_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "glyphkit_core::property";
    /// Icon registry target (initialization, inserts).
    pub const REGISTRY: &str = "glyphkit_icons::registry";
    /// Resolution facade and size rewriter target.
    pub const RESOLVER: &str = "glyphkit_icons::resolver";
    /// Dataset and configuration loading target.
    pub const LOADER: &str = "glyphkit_icons::loader";
    /// Reactive binding layer of the icon widget.
    pub const BINDING: &str = "glyphkit::binding";
    /// Browse model and clipboard actions.
    pub const BROWSE: &str = "glyphkit::browse";
}

/// Every target defined in [`targets`], in declaration order.
pub const ALL_TARGETS: &[&str] = &[
    targets::SIGNAL,
    targets::PROPERTY,
    targets::REGISTRY,
    targets::RESOLVER,
    targets::LOADER,
    targets::BINDING,
    targets::BROWSE,
];

/// Build an `EnvFilter`-style directive string enabling every glyphkit
/// target at `level`.
///
/// ```
/// use glyphkit_core::logging::directive_for_all;
///
/// let directive = directive_for_all("debug");
/// assert!(directive.contains("glyphkit_icons::resolver=debug"));
/// ```
pub fn directive_for_all(level: &str) -> String {
    ALL_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_crate_prefixed() {
        for target in ALL_TARGETS {
            assert!(target.starts_with("glyphkit"), "{target}");
            assert!(target.contains("::"), "{target}");
        }
    }

    #[test]
    fn test_directive_for_all() {
        let directive = directive_for_all("trace");
        assert_eq!(directive.split(',').count(), ALL_TARGETS.len());
        assert!(directive.starts_with("glyphkit_core::signal=trace"));
        assert!(directive.ends_with("glyphkit::browse=trace"));
    }
}
