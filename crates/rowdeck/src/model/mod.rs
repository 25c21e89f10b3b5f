//! Declarative data model for rowdeck.
//!
//! The model layer is purely descriptive: callers build [`Section`]s of
//! [`Item`]s and hand them to the adapter, which keeps them in a [`Snapshot`]
//! keyed by identity. Nothing here touches the native view.
//!
//! # Core Types
//!
//! - [`Position`]: a (section, row) pair addressing one item
//! - [`ItemModel`]: the rendering/behavior contract one row's model implements
//! - [`Item`] / [`Section`]: the declarative description of the list
//! - [`Snapshot`]: the identity-keyed record of what is currently rendered

mod item;
mod position;
mod snapshot;

pub use item::{DividerKind, InteractionState, Item, ItemModel, Section};
pub use position::Position;
pub use snapshot::Snapshot;
