//! rowdeck: a declarative adapter over an imperative, index-based native
//! list view.
//!
//! Hosts describe list content as keyed [`Section`](model::Section)s of
//! keyed [`Item`](model::Item)s and hand the full list to a
//! [`ListAdapter`](view::ListAdapter). The adapter diffs the new list
//! against its authoritative [`Snapshot`](model::Snapshot) and drives the
//! native view with the minimal animated transaction; hosts never issue
//! index-based mutation calls themselves.
//!
//! The crate is organised in three layers:
//!
//! - [`model`]: identity-keyed content (`Section`, `Item`, the `ItemModel`
//!   trait) and the immutable `Snapshot`.
//! - [`diff`]: the pure keyed diff producing a [`Changeset`](diff::Changeset).
//! - [`view`]: the [`ListAdapter`](view::ListAdapter), the
//!   [`NativeList`](view::NativeList)/[`RowHandle`](view::RowHandle)
//!   interfaces to the platform view, divider resolution, and infinite
//!   scrolling.
//!
//! # Example
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use rowdeck::model::{Item, ItemModel, Section};
//! # use rowdeck::view::{ListAdapter, NativeList};
//! # fn demo(view: impl NativeList, first: Arc<dyn ItemModel>, second: Arc<dyn ItemModel>) {
//! let mut adapter = ListAdapter::new(view);
//!
//! adapter.set_sections(
//!     Some(vec![Section::new(
//!         "inbox",
//!         vec![Item::new("msg-1", first.clone())],
//!     )]),
//!     false,
//! );
//!
//! // Later: same identities diff in place, new ones animate in.
//! adapter.set_sections(
//!     Some(vec![Section::new(
//!         "inbox",
//!         vec![Item::new("msg-1", first), Item::new("msg-2", second)],
//!     )]),
//!     true,
//! );
//! # }
//! ```

pub mod diff;
mod error;
pub mod model;
pub mod prelude;
pub mod view;

pub use error::{AdapterError, Result};
pub use rowdeck_core::{ConnectionGuard, ConnectionId, Signal};
