//! Core types for the icon system.
//!
//! - [`IconName`]: the lookup key, with constants for the built-in set
//! - [`IconRecord`]: one name/markup pair
//! - [`TrustedMarkup`]: resolved, display-ready markup

use std::borrow::Borrow;
use std::fmt;

/// Symbolic icon name.
///
/// Names are matched exactly and case-sensitively. Any string is a valid
/// name; unknown names resolve to the fallback glyph.
///
/// # Examples
///
/// ```
/// use glyphkit_icons::IconName;
///
/// let icon = IconName::new("search");
/// assert_eq!(icon.as_str(), "search");
///
/// let icon = IconName::from(IconName::BOOK_1);
/// assert_eq!(icon, "book-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconName(String);

impl IconName {
    // ========================================================================
    // Built-in Icons
    // ========================================================================

    /// Open book, drawn on an 18x18 grid. The default icon name.
    pub const BOOK_1: &'static str = "book-1";
    /// Closed book
    pub const BOOK_02: &'static str = "book-02";
    /// Magnifying glass
    pub const SEARCH: &'static str = "search";
    /// Three horizontal bars
    pub const MENU: &'static str = "menu";
    /// Checklist
    pub const CHECK_LIST: &'static str = "check-list";
    /// Ticket stub
    pub const TICKET_02: &'static str = "ticket-02";
    /// Group of users
    pub const USER_MULTIPLE: &'static str = "user-multiple";
    /// Download tray
    pub const DOWNLOAD_04: &'static str = "download-04";
    /// Folded map
    pub const MAPS: &'static str = "maps";

    /// Create a new icon name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the icon name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for IconName {
    fn default() -> Self {
        Self::new(Self::BOOK_1)
    }
}

impl From<&str> for IconName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for IconName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for IconName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IconName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Unique key.
    pub name: String,
    /// Raw vector markup, stored exactly as supplied.
    pub markup: String,
}

impl IconRecord {
    /// Create a new record.
    pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }
}

/// Display-ready markup produced by resolution.
///
/// Values of this type are meant to be inserted into a host view without
/// escaping. That is only sound because every string that can reach the
/// registry comes from a trusted dataset or from application code: callers
/// must never insert markup derived from user input. The type marks the
/// boundary; it does not enforce it.
///
/// A `TrustedMarkup` is produced fresh for every resolution and is owned by
/// the caller that requested it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the markup string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TrustedMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TrustedMarkup> for String {
    fn from(markup: TrustedMarkup) -> Self {
        markup.0
    }
}

impl PartialEq<str> for TrustedMarkup {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TrustedMarkup {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for TrustedMarkup {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_default_is_book() {
        assert_eq!(IconName::default().as_str(), IconName::BOOK_1);
    }

    #[test]
    fn test_icon_name_conversions() {
        let from_str: IconName = "menu".into();
        let from_string: IconName = String::from("menu").into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.to_string(), "menu");
        assert_eq!(from_str.into_string(), "menu");
    }

    #[test]
    fn test_icon_name_is_case_sensitive() {
        assert_ne!(IconName::new("Search"), IconName::new("search"));
    }

    #[test]
    fn test_trusted_markup_compares_with_str() {
        let markup = TrustedMarkup::new("<svg/>".to_string());
        assert_eq!(markup, "<svg/>");
        assert_eq!(markup.as_str(), "<svg/>");
        assert_eq!(String::from(markup), "<svg/>");
    }
}
