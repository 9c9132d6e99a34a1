//! Core reactive primitives for glyphkit.
//!
//! This crate provides the small set of building blocks the icon adapters
//! are built on:
//!
//! - **Property System**: Values with change detection ([`Property`])
//! - **Signal/Slot System**: Change notification to connected callbacks ([`Signal`])
//! - **Logging**: `tracing` targets for filtering per subsystem ([`logging`])
//!
//! Everything here is synchronous. Slots run inside the call to
//! [`Signal::emit`], and property writes are visible as soon as they return.
//!
//! # Example
//!
//! ```
//! use glyphkit_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.value_changed.connect(|v| println!("now {v}"));
//! counter.increment();
//! assert_eq!(counter.value.get(), 1);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionId, Signal};
