//! System clipboard access.
//!
//! [`ClipboardSink`] is the seam the browse model copies through. The
//! [`Clipboard`] implementation wraps the `arboard` crate and is available
//! with the `clipboard` feature (on by default).
//!
//! # Example
//!
//! ```ignore
//! use glyphkit::platform::{Clipboard, ClipboardSink};
//!
//! if let Ok(mut clipboard) = Clipboard::new() {
//!     clipboard.set_text("book-1").ok();
//! }
//! ```
//!
//! # Platform Notes
//!
//! - **Windows**: Uses the Win32 clipboard API
//! - **macOS**: Uses NSPasteboard
//! - **Linux**: Uses X11 selections or Wayland data-control protocol

use std::fmt;

/// Error type for clipboard operations.
#[derive(Debug)]
pub struct ClipboardError {
    message: String,
}

impl ClipboardError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard error: {}", self.message)
    }
}

impl std::error::Error for ClipboardError {}

#[cfg(feature = "clipboard")]
impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Anything that can receive copied text.
pub trait ClipboardSink {
    /// Replace the sink's contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Cross-platform clipboard access.
///
/// Create an instance when needed and drop it after use.
///
/// # Thread Safety
///
/// While `Clipboard` is `Send`, it's recommended to perform clipboard
/// operations on the main/UI thread for best compatibility across platforms.
#[cfg(feature = "clipboard")]
pub struct Clipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl Clipboard {
    /// Create a new clipboard instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the system clipboard is unavailable, for example
    /// on a headless machine.
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text).map_err(Into::into)
    }
}

#[cfg(feature = "clipboard")]
impl fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clipboard").finish_non_exhaustive()
    }
}
