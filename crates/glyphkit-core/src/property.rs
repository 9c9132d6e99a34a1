//! Property system for glyphkit.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. Widgets pair properties with [`Signal`](crate::Signal)s to
//! notify listeners, and the icon binding layer compares property values
//! against a snapshot of the last resolved inputs to decide whether work is
//! needed.
//!
//! # Example
//!
//! ```
//! use glyphkit_core::Property;
//!
//! let size = Property::new(24u32);
//! assert!(!size.set(24));
//! assert!(size.set(32));
//! assert_eq!(size.get(), 32);
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;

/// A reactive property that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed. Equal writes are dropped.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For strings and other heap types, consider
    /// using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            tracing::trace!(target: targets::PROPERTY, "equal value written, ignoring");
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}
