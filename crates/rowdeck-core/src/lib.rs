//! Core primitives for rowdeck: a type-safe signal/slot mechanism.
//!
//! Rowdeck adapters notify their callers through signals rather than stored
//! delegate references. A caller connects a slot (closure) to a signal and
//! receives a [`ConnectionId`] it can use to unregister later; the adapter
//! never extends the caller's lifetime.
//!
//! # Example
//!
//! ```
//! use rowdeck_core::Signal;
//!
//! let scrolled = Signal::<f32>::new();
//! let id = scrolled.connect(|offset| println!("scrolled to {offset}"));
//! scrolled.emit(120.0);
//! scrolled.disconnect(id);
//! ```

mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
