//! The glyph shown for names the registry does not know.

/// Markup for the "unknown icon" glyph: a circle with a short vertical bar
/// and a dot.
///
/// Strokes use `currentColor`, so the glyph follows whatever text color the
/// host container applies. The native size is 24, matching the default
/// requested size.
pub const FALLBACK_MARKUP: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2"/>
  <path d="M12 16V12" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
  <path d="M12 8H12.01" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
</svg>"#;

/// Return the fallback markup.
pub fn default_markup() -> &'static str {
    FALLBACK_MARKUP
}
