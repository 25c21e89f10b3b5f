//! Convenience re-exports for typical adapter hosts.
//!
//! ```
//! use rowdeck::prelude::*;
//! ```

pub use crate::error::{AdapterError, Result};
pub use crate::model::{
    DividerKind, InteractionState, Item, ItemModel, Position, Section, Snapshot,
};
pub use crate::view::{
    AdapterConfig, DividerView, InfiniteScrollDelegate, ListAdapter, LoadCompletion, LoaderView,
    NativeList, RowHandle, ScrollMetrics, SelectionStyle,
};
pub use rowdeck_core::Signal;
