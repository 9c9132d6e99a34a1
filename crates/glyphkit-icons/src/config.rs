//! Default inputs for icon adapters.
//!
//! ```
//! use glyphkit_icons::IconConfig;
//!
//! let config = IconConfig::from_toml_str("default_size = 32").unwrap();
//! assert_eq!(config.default_size, 32);
//! assert_eq!(config.default_name, "book-1");
//! ```

use serde::Deserialize;

use glyphkit_core::logging::targets;

use crate::error::Result;
use crate::types::IconName;

/// Size used when a caller does not supply one.
pub const DEFAULT_ICON_SIZE: u32 = 24;

/// Color value that makes the icon follow the surrounding text color.
pub const INHERIT_COLOR: &str = "currentColor";

/// Initial values for the `name`, `size`, and `color` adapter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Icon shown before a caller picks one.
    pub default_name: String,
    /// Rendered box size, in pixels.
    pub default_size: u32,
    /// Container text color.
    pub default_color: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            default_name: IconName::BOOK_1.to_string(),
            default_size: DEFAULT_ICON_SIZE,
            default_color: INHERIT_COLOR.to_string(),
        }
    }
}

impl IconConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(
            target: targets::LOADER,
            default_name = %config.default_name,
            default_size = config.default_size,
            "loaded icon config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = IconConfig::default();
        assert_eq!(config.default_name, "book-1");
        assert_eq!(config.default_size, 24);
        assert_eq!(config.default_color, "currentColor");
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(IconConfig::from_toml_str("").unwrap(), IconConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = IconConfig::from_toml_str(
            r##"
            default_name = "search"
            default_size = 32
            default_color = "#333"
            "##,
        )
        .unwrap();
        assert_eq!(config.default_name, "search");
        assert_eq!(config.default_size, 32);
        assert_eq!(config.default_color, "#333");
    }

    #[test]
    fn test_bad_type_is_config_error() {
        let err = IconConfig::from_toml_str(r#"default_size = "big""#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
