//! Icons compiled into the crate.
//!
//! Each entry is a complete `<svg>` document whose root carries `width`,
//! `height`, and `viewBox`. Strokes use `currentColor`.

use crate::types::IconName;

/// `(name, markup)` pairs, in the order they are registered.
pub const BUILTIN_ICONS: &[(&str, &str)] = &[
    (IconName::BOOK_1, BOOK_1),
    (IconName::BOOK_02, BOOK_02),
    (IconName::SEARCH, SEARCH),
    (IconName::MENU, MENU),
    (IconName::CHECK_LIST, CHECK_LIST),
    (IconName::TICKET_02, TICKET_02),
    (IconName::USER_MULTIPLE, USER_MULTIPLE),
    (IconName::DOWNLOAD_04, DOWNLOAD_04),
    (IconName::MAPS, MAPS),
];

/// book-1
pub const BOOK_1: &str = r#"<svg width="18" height="18" viewBox="0 0 18 18" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M9 4.5C7.5 3.25 5 2.75 2.25 3v10.5C5 13.25 7.5 13.75 9 15c1.5-1.25 4-1.75 6.75-1.5V3C13 2.75 10.5 3.25 9 4.5Z" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"/><path d="M9 4.5V15" stroke="currentColor" stroke-width="1.5"/></svg>"#;

/// book-02
pub const BOOK_02: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M4 19V5a2 2 0 0 1 2-2h13v16H6a2 2 0 0 0-2 2Z" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"/><path d="M19 19v2H6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/><path d="M9 7h6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/></svg>"#;

/// search
pub const SEARCH: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="11" cy="11" r="7" stroke="currentColor" stroke-width="1.5"/><path d="m20 20-3.5-3.5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/></svg>"#;

/// menu
pub const MENU: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M4 6h16M4 12h16M4 18h16" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/></svg>"#;

/// check-list
pub const CHECK_LIST: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="m3 6 1.5 1.5L7 5M3 12l1.5 1.5L7 11M3 18l1.5 1.5L7 17" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/><path d="M11 6h10M11 12h10M11 18h10" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/></svg>"#;

/// ticket-02
pub const TICKET_02: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M3 8V6a1 1 0 0 1 1-1h16a1 1 0 0 1 1 1v2a4 4 0 0 0 0 8v2a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1v-2a4 4 0 0 0 0-8Z" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"/><path d="M14 5v14" stroke="currentColor" stroke-width="1.5" stroke-dasharray="2 2"/></svg>"#;

/// user-multiple
pub const USER_MULTIPLE: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="9" cy="8" r="3.5" stroke="currentColor" stroke-width="1.5"/><path d="M2.5 20a6.5 6.5 0 0 1 13 0" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/><path d="M15.5 4.8a3.5 3.5 0 0 1 0 6.4M18 14.5a6.5 6.5 0 0 1 3.5 5.5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/></svg>"#;

/// download-04
pub const DOWNLOAD_04: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 3v12m0 0 4.5-4.5M12 15l-4.5-4.5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/><path d="M4 17v2a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-2" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/></svg>"#;

/// maps
pub const MAPS: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M9 4 3 6v14l6-2 6 2 6-2V4l-6 2-6-2Z" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"/><path d="M9 4v14M15 6v14" stroke="currentColor" stroke-width="1.5"/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_unique() {
        let mut names: Vec<_> = BUILTIN_ICONS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_ICONS.len());
    }

    #[test]
    fn test_builtin_roots_carry_dimensions() {
        for (name, markup) in BUILTIN_ICONS {
            assert!(markup.starts_with("<svg width=\""), "{name}");
            assert!(markup.contains(" height=\""), "{name}");
            assert!(markup.contains(" viewBox=\""), "{name}");
            assert!(markup.contains("currentColor"), "{name}");
        }
    }

    #[test]
    fn test_builtin_names_follow_icon_name_constants() {
        let names: Vec<_> = BUILTIN_ICONS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "book-1",
                "book-02",
                "search",
                "menu",
                "check-list",
                "ticket-02",
                "user-multiple",
                "download-04",
                "maps",
            ]
        );
        assert_eq!(BUILTIN_ICONS[0].0, IconName::default().as_str());
    }
}
