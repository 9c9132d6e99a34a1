//! Error types for dataset and configuration loading.
//!
//! Resolution itself never fails; these errors only arise at the edges where
//! external text is turned into a dataset or a configuration.

use std::path::PathBuf;

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading icon data or configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dataset document could not be decoded.
    #[error("Invalid icon dataset: {message}")]
    Dataset { message: String },

    /// Configuration document could not be decoded.
    #[error("Invalid icon configuration: {message}")]
    Config { message: String },

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a dataset error.
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::dataset(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.message())
    }
}
