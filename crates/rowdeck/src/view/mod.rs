//! The view-facing half of the crate: the adapter, the native-list
//! interfaces it drives, divider resolution, and infinite scrolling.

mod adapter;
mod divider;
mod infinite_scroll;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use adapter::{AdapterConfig, ListAdapter};
pub use divider::{DividerBuilder, DividerConfig, DividerConfigurer, DividerDecision, decide};
pub use infinite_scroll::{
    DEFAULT_TRIGGER_DISTANCE, InfiniteScrollController, InfiniteScrollDelegate,
    InfiniteScrollState, LoadCompletion, LoaderView,
};
pub use traits::{
    DividerSlot, DividerView, NativeList, RowHandle, ScrollMetrics, SelectionStyle,
};
