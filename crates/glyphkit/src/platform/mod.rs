//! Platform services.
//!
//! Currently this is only clipboard access, used to copy icon names out of
//! the browse model.

mod clipboard;

#[cfg(feature = "clipboard")]
pub use clipboard::Clipboard;
pub use clipboard::{ClipboardError, ClipboardSink};
