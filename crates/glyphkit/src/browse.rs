//! Searchable view over every registered icon.
//!
//! [`IconBrowser`] snapshots the registry's names, filters them by a
//! case-insensitive substring, and copies a chosen name to a clipboard.
//!
//! ```
//! use glyphkit::IconBrowser;
//! use glyphkit::icons::IconResolver;
//!
//! let browser = IconBrowser::new(IconResolver::with_builtin_icons());
//! browser.set_search_term("BOOK");
//! assert_eq!(browser.filtered_names(), vec!["book-1", "book-02"]);
//! ```

use parking_lot::RwLock;

use glyphkit_core::logging::targets;
use glyphkit_core::{Property, Signal};
use glyphkit_icons::IconResolver;

use crate::platform::{ClipboardError, ClipboardSink};

/// Browse model for an icon gallery.
pub struct IconBrowser {
    resolver: IconResolver,
    names: RwLock<Vec<String>>,
    search_term: Property<String>,

    /// Emitted with the new filtered names when the search term or the
    /// name snapshot changes.
    pub filter_changed: Signal<Vec<String>>,
    /// Emitted with the name after a successful copy.
    pub copied: Signal<String>,
}

impl IconBrowser {
    /// Create a browser and take the initial name snapshot.
    pub fn new(resolver: IconResolver) -> Self {
        let names = resolver.all_names();
        Self {
            resolver,
            names: RwLock::new(names),
            search_term: Property::new(String::new()),
            filter_changed: Signal::new(),
            copied: Signal::new(),
        }
    }

    /// The resolver this browser lists.
    pub fn resolver(&self) -> &IconResolver {
        &self.resolver
    }

    /// Re-read the name list from the registry.
    ///
    /// Icons added after construction only appear after a refresh.
    pub fn refresh(&self) {
        let names = self.resolver.all_names();
        tracing::debug!(target: targets::BROWSE, count = names.len(), "refreshed icon names");
        *self.names.write() = names;
        self.filter_changed.emit(self.filtered_names());
    }

    /// Current search term.
    pub fn search_term(&self) -> String {
        self.search_term.get()
    }

    /// Set the search term. Returns `true` if it changed.
    pub fn set_search_term(&self, term: impl Into<String>) -> bool {
        let changed = self.search_term.set(term.into());
        if changed {
            self.filter_changed.emit(self.filtered_names());
        }
        changed
    }

    /// Every name in the snapshot, in registration order.
    pub fn all_names(&self) -> Vec<String> {
        self.names.read().clone()
    }

    /// Names matching the search term.
    ///
    /// A blank or whitespace-only term matches everything. Otherwise a name
    /// matches if it contains the term as typed, ignoring case.
    pub fn filtered_names(&self) -> Vec<String> {
        let names = self.names.read();
        let Some(needle) = self
            .search_term
            .with(|term| (!term.trim().is_empty()).then(|| term.to_lowercase()))
        else {
            return names.clone();
        };
        names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Number of names in the snapshot.
    pub fn total_count(&self) -> usize {
        self.names.read().len()
    }

    /// Number of names matching the search term.
    pub fn filtered_count(&self) -> usize {
        self.filtered_names().len()
    }

    /// Copy `name` to `sink`.
    ///
    /// On failure the error is logged and returned; nothing is emitted.
    pub fn copy_name(&self, name: &str, sink: &mut dyn ClipboardSink) -> Result<(), ClipboardError> {
        match sink.set_text(name) {
            Ok(()) => {
                tracing::debug!(target: targets::BROWSE, name, "copied icon name");
                self.copied.emit(name.to_string());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(target: targets::BROWSE, name, error = %err, "failed to copy icon name");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for IconBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconBrowser")
            .field("search_term", &self.search_term.get())
            .field("total", &self.total_count())
            .finish_non_exhaustive()
    }
}
