//! Integration tests for registry, sizing, and resolution.

use std::io::Write;
use std::sync::Arc;

use glyphkit_icons::{
    Error, FALLBACK_MARKUP, IconDataset, IconRegistry, IconResolver, resize_markup,
};

const BOOK_1: &str = r#"<svg width="18" height="18" viewBox="0 0 18 18">...</svg>"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("glyphkit_icons=trace")
        .with_test_writer()
        .try_init();
}

fn seeded_resolver() -> IconResolver {
    init_tracing();
    let mut dataset = IconDataset::new();
    dataset.insert("book-1", BOOK_1);
    IconResolver::from_dataset(&dataset)
}

#[test]
fn test_book_scenario() {
    let resolver = seeded_resolver();
    assert_eq!(
        resolver.resolve("book-1", 24),
        r#"<svg width="24" height="24" viewBox="0 0 18 18">...</svg>"#
    );
}

#[test]
fn test_unknown_name_scenario() {
    let resolver = seeded_resolver();
    let markup = resolver.resolve("does-not-exist", 24);

    assert_eq!(markup, resize_markup(FALLBACK_MARKUP, 24));
    assert!(markup.as_str().contains(r#"viewBox="0 0 24 24""#));
    assert!(markup.as_str().starts_with(r#"<svg width="24" height="24""#));
}

#[test]
fn test_unknown_name_resizes_fallback() {
    let resolver = seeded_resolver();
    let markup = resolver.resolve("does-not-exist", 48);
    assert!(markup.as_str().starts_with(r#"<svg width="48" height="48" viewBox="0 0 24 24""#));
}

#[test]
fn test_get_returns_latest_insert() {
    let registry = IconRegistry::new();
    let pairs = [("a", "1"), ("b", "2"), ("a", "3"), ("c", "4"), ("b", "5")];
    for (name, markup) in pairs {
        registry.insert(name, markup);
    }

    assert_eq!(registry.get("a").as_deref(), Some("3"));
    assert_eq!(registry.get("b").as_deref(), Some("5"));
    assert_eq!(registry.get("c").as_deref(), Some("4"));
}

#[test]
fn test_all_names_has_every_insert_without_duplicates() {
    let resolver = IconResolver::with_builtin_icons();
    let before = resolver.all_names();

    resolver.add_icon("custom", "<svg/>");
    resolver.add_icon("custom", "<svg></svg>");
    resolver.add_icon("book-1", "<svg/>");

    let after = resolver.all_names();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.iter().filter(|n| *n == "custom").count(), 1);
    assert_eq!(after.iter().filter(|n| *n == "book-1").count(), 1);
    for name in &before {
        assert!(after.contains(name));
    }
}

#[test]
fn test_insert_visible_through_every_handle() {
    let registry = Arc::new(IconRegistry::new());
    let first = IconResolver::new(registry.clone());
    let second = IconResolver::new(registry.clone());

    assert!(!second.has_icon("late"));
    first.add_icon("late", r#"<svg width="1" height="1"></svg>"#);
    assert!(second.has_icon("late"));
    assert_eq!(second.resolve("late", 9), r#"<svg width="9" height="9"></svg>"#);
}

#[test]
fn test_sizes_differ_only_in_dimensions() {
    let resolver = IconResolver::with_builtin_icons();
    for name in resolver.all_names() {
        let small = resolver.resolve(&name, 16);
        let large = resolver.resolve(&name, 64);

        let normalized = large
            .as_str()
            .replacen(r#"width="64""#, r#"width="16""#, 1)
            .replacen(r#"height="64""#, r#"height="16""#, 1);
        assert_eq!(small.as_str(), normalized, "{name}");
    }
}

#[test]
fn test_resize_preserves_everything_but_dimensions() {
    let resolver = IconResolver::with_builtin_icons();
    for name in resolver.all_names() {
        let original = resolver.markup(&name);
        let sized = resolver.resolve(&name, 40);

        assert_eq!(blank_dimensions(&original), blank_dimensions(sized.as_str()), "{name}");
    }
}

// Empties the first width and height values so two sizings compare equal.
fn blank_dimensions(markup: &str) -> String {
    let mut out = markup.to_string();
    for attr in [" width=\"", " height=\""] {
        if let Some(start) = out.find(attr) {
            let value_start = start + attr.len();
            if let Some(len) = out[value_start..].find('"') {
                out.replace_range(value_start..value_start + len, "");
            }
        }
    }
    out
}

#[test]
fn test_resize_idempotent_over_builtins() {
    let resolver = IconResolver::with_builtin_icons();
    for name in resolver.all_names() {
        let once = resolver.resolve(&name, 28);
        assert_eq!(resize_markup(once.as_str(), 28), once.as_str());
    }
}

#[test]
fn test_dataset_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "book-1": {{ "svg": "<svg width=\"18\" height=\"18\" viewBox=\"0 0 18 18\">...</svg>" }} }}"#
    )
    .unwrap();

    let dataset = IconDataset::from_file(file.path()).unwrap();
    let resolver = IconResolver::from_dataset(&dataset);
    assert_eq!(
        resolver.resolve("book-1", 24),
        r#"<svg width="24" height="24" viewBox="0 0 18 18">...</svg>"#
    );
}

#[test]
fn test_dataset_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = IconDataset::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
