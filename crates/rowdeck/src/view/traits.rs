//! Interfaces to the native list view and its rows.
//!
//! The native view is an external collaborator: an imperative, index-based
//! API the adapter drives but does not implement. [`NativeList`] captures the
//! capability set the adapter needs; [`RowHandle`] is the adapter's window
//! onto one live row.

use std::any::Any;

use crate::model::{InteractionState, Position};

/// Selection affordance applied to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionStyle {
    /// The platform's default selection visual.
    #[default]
    Default,
    /// No selection visual. Also forced onto rows whose model reports
    /// itself non-selectable.
    None,
    /// A muted selection visual.
    Subtle,
}

/// Which of a row's two divider slots is being addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerSlot {
    /// The standard between-rows divider.
    Row,
    /// The heavier section-header divider.
    SectionHeader,
}

impl DividerSlot {
    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            Self::Row => Self::SectionHeader,
            Self::SectionHeader => Self::Row,
        }
    }
}

/// An auxiliary divider sub-view attached to a row.
///
/// Built lazily by an adapter-configured builder and memoized in the row's
/// divider slot; the adapter only toggles visibility and hands the view to
/// the configured configurer.
pub trait DividerView {
    /// Shows or hides the divider.
    fn set_visible(&mut self, visible: bool);

    /// Returns whether the divider is currently visible.
    fn is_visible(&self) -> bool;

    /// Returns this view as [`Any`] so configurers can downcast to the
    /// concrete divider type they built.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The adapter's handle onto one live row of the native view.
///
/// Row content itself is opaque to the adapter; models render into the row by
/// downcasting [`as_any_mut`](RowHandle::as_any_mut) to their concrete row
/// type. The handle exposes only what the adapter needs for state and
/// divider synchronization.
///
/// # Divider memoization
///
/// Each row carries one explicit optional field per [`DividerSlot`].
/// [`divider`](RowHandle::divider) returns the previously built view if any;
/// [`install_divider`](RowHandle::install_divider) populates the field on
/// first use. The adapter never rebuilds a divider for a row that already
/// has one in the addressed slot.
pub trait RowHandle {
    /// The row's current interaction state (pressed/selected visuals are
    /// owned by the native row, not by the model).
    fn interaction_state(&self) -> InteractionState;

    /// Applies a selection affordance to the row.
    fn set_selection_style(&mut self, style: SelectionStyle);

    /// Returns the divider view memoized in the given slot, if one was
    /// installed before.
    fn divider(&mut self, slot: DividerSlot) -> Option<&mut dyn DividerView>;

    /// Installs a freshly built divider view into the given slot.
    ///
    /// Called at most once per (row, slot); later resolutions reuse the
    /// installed view via [`divider`](RowHandle::divider).
    fn install_divider(&mut self, slot: DividerSlot, view: Box<dyn DividerView>);

    /// Returns this row as [`Any`] for model-side downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Scroll geometry forwarded from the native view.
///
/// One axis only: the list scrolls along its layout axis and the adapter has
/// no use for the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset from the content start.
    pub offset: f32,
    /// Extent of the visible viewport.
    pub viewport: f32,
    /// Total extent of the content.
    pub content: f32,
}

impl ScrollMetrics {
    /// Creates scroll metrics.
    pub fn new(offset: f32, viewport: f32, content: f32) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// Distance between the bottom of the viewport and the end of the
    /// content. Negative once the viewport has scrolled past the end
    /// (rubber-banding).
    pub fn trailing_distance(&self) -> f32 {
        self.content - (self.offset + self.viewport)
    }
}

/// The imperative list view the adapter drives.
///
/// Structural calls use native index-path semantics: deletes address the
/// pre-change coordinate space, inserts the post-change space, and all calls
/// between [`begin_updates`](NativeList::begin_updates) and
/// [`end_updates`](NativeList::end_updates) commit and animate as one
/// transaction.
pub trait NativeList {
    /// Opens an atomic update bracket.
    fn begin_updates(&mut self);

    /// Closes the atomic update bracket, committing and animating the
    /// combined operations.
    fn end_updates(&mut self);

    /// Discards all rendered state and re-renders from scratch.
    fn reload_all(&mut self);

    /// Inserts sections at the given indices (post-change space).
    fn insert_sections(&mut self, indices: &[usize]);

    /// Deletes sections at the given indices (pre-change space).
    fn delete_sections(&mut self, indices: &[usize]);

    /// Moves one section.
    fn move_section(&mut self, from: usize, to: usize);

    /// Inserts rows at the given positions (post-change space).
    fn insert_rows(&mut self, positions: &[Position]);

    /// Deletes rows at the given positions (pre-change space).
    fn delete_rows(&mut self, positions: &[Position]);

    /// Moves one row.
    fn move_row(&mut self, from: Position, to: Position);

    /// Positions of all currently visible rows, in display order.
    fn visible_positions(&self) -> Vec<Position>;

    /// Returns a handle onto the live row at `position`, or `None` if the
    /// row is not realized (offscreen, mid-removal, or unknown).
    fn row_at(&mut self, position: Position) -> Option<&mut dyn RowHandle>;

    /// One-time styling default: estimated row height for layout.
    fn set_estimated_row_height(&mut self, height: f32);

    /// One-time styling default: whether the view draws its own built-in
    /// separators. The adapter disables them in favor of divider resolution.
    fn set_native_separators_enabled(&mut self, enabled: bool);
}
