//! Textual sizing of icon markup.
//!
//! [`resize_markup`] rewrites the first `width="..."` and the first
//! `height="..."` attribute of a markup string. It is a narrow string
//! substitution, not a parse: the rest of the document (including
//! `viewBox`, path data, and nested elements that carry their own
//! dimensions) is passed through byte for byte.
//!
//! ```
//! use glyphkit_icons::resize_markup;
//!
//! let sized = resize_markup(r#"<svg width="18" height="18" viewBox="0 0 18 18"></svg>"#, 24);
//! assert_eq!(sized, r#"<svg width="24" height="24" viewBox="0 0 18 18"></svg>"#);
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use glyphkit_core::logging::targets;

// The leading whitespace keeps `stroke-width="2"` and similar hyphenated
// attributes from matching.
static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)width="[^"]*""#).expect("width pattern is valid"));
static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)height="[^"]*""#).expect("height pattern is valid"));

/// Rewrite the declared dimensions of `markup` to `size`.
///
/// - Only the first `width` and the first `height` attribute are rewritten.
/// - A missing attribute is left missing; nothing is injected.
/// - `size` is substituted verbatim, including `0`.
///
/// The result is idempotent: `resize_markup(&resize_markup(m, s), s)` equals
/// `resize_markup(m, s)`.
pub fn resize_markup(markup: &str, size: u32) -> String {
    let resized = replace_first(&WIDTH_ATTR, markup, "width", size);
    replace_first(&HEIGHT_ATTR, &resized, "height", size).into_owned()
}

fn replace_first<'a>(pattern: &Regex, markup: &'a str, attr: &str, size: u32) -> Cow<'a, str> {
    let replaced = pattern.replacen(markup, 1, |caps: &Captures<'_>| {
        format!("{}{attr}=\"{size}\"", &caps[1])
    });
    if let Cow::Borrowed(_) = replaced {
        tracing::trace!(target: targets::RESOLVER, attr, "no dimension attribute, leaving markup as is");
    }
    replaced
}
