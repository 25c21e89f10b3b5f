//! Shared fakes for view-layer tests: a scripted native list, rows with
//! recordable state, and simple item models.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::{InteractionState, ItemModel, Position};

use super::traits::{
    DividerSlot, DividerView, NativeList, RowHandle, SelectionStyle,
};

pub(crate) fn trace_init() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A model rendering a fixed text into a [`FakeRow`].
pub(crate) struct TextModel {
    text: String,
    selectable: bool,
    selects: AtomicUsize,
}

impl TextModel {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selectable: false,
            selects: AtomicUsize::new(0),
        }
    }

    pub(crate) fn selectable(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selectable: true,
            selects: AtomicUsize::new(0),
        }
    }

    pub(crate) fn select_count(&self) -> usize {
        self.selects.load(Ordering::SeqCst)
    }
}

impl ItemModel for TextModel {
    fn configure(&self, row: &mut dyn RowHandle, animated: bool) {
        if let Some(fake) = row.as_any_mut().downcast_mut::<FakeRow>() {
            fake.rendered.push((self.text.clone(), animated));
        }
    }

    fn configure_state(&self, row: &mut dyn RowHandle, state: InteractionState) {
        if let Some(fake) = row.as_any_mut().downcast_mut::<FakeRow>() {
            fake.states_applied.push(state);
        }
    }

    fn is_selectable(&self) -> bool {
        self.selectable
    }

    fn did_select(&self) {
        self.selects.fetch_add(1, Ordering::SeqCst);
    }

    fn apply_behavior(&self, row: &mut dyn RowHandle) {
        if let Some(fake) = row.as_any_mut().downcast_mut::<FakeRow>() {
            fake.behaviors += 1;
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A model whose content equality is an explicit version number.
pub(crate) struct VersionedModel {
    text: String,
    version: u32,
}

impl VersionedModel {
    pub(crate) fn new(text: impl Into<String>, version: u32) -> Self {
        Self {
            text: text.into(),
            version,
        }
    }
}

impl ItemModel for VersionedModel {
    fn configure(&self, row: &mut dyn RowHandle, animated: bool) {
        if let Some(fake) = row.as_any_mut().downcast_mut::<FakeRow>() {
            fake.rendered.push((format!("{} v{}", self.text, self.version), animated));
        }
    }

    fn configure_state(&self, row: &mut dyn RowHandle, state: InteractionState) {
        if let Some(fake) = row.as_any_mut().downcast_mut::<FakeRow>() {
            fake.states_applied.push(state);
        }
    }

    fn is_content_equal(&self, other: &dyn ItemModel) -> bool {
        other
            .as_any()
            .downcast_ref::<VersionedModel>()
            .is_some_and(|o| o.version == self.version)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A divider view that records visibility.
#[derive(Default)]
pub(crate) struct FakeDivider {
    visible: bool,
}

impl FakeDivider {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl DividerView for FakeDivider {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A row that records everything the adapter does to it.
#[derive(Default)]
pub(crate) struct FakeRow {
    /// Current interaction state, owned by the row.
    pub(crate) state: InteractionState,
    /// Selection styles applied, in order.
    pub(crate) selection_styles: Vec<SelectionStyle>,
    /// Content renders as (text, animated) pairs, in order.
    pub(crate) rendered: Vec<(String, bool)>,
    /// Interaction states applied by models, in order.
    pub(crate) states_applied: Vec<InteractionState>,
    /// Number of `apply_behavior` calls.
    pub(crate) behaviors: usize,
    row_divider: Option<Box<dyn DividerView>>,
    header_divider: Option<Box<dyn DividerView>>,
}

impl FakeRow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn divider_visible(&self, slot: DividerSlot) -> bool {
        let view = match slot {
            DividerSlot::Row => &self.row_divider,
            DividerSlot::SectionHeader => &self.header_divider,
        };
        view.as_ref().is_some_and(|v| v.is_visible())
    }
}

impl RowHandle for FakeRow {
    fn interaction_state(&self) -> InteractionState {
        self.state
    }

    fn set_selection_style(&mut self, style: SelectionStyle) {
        self.selection_styles.push(style);
    }

    fn divider(&mut self, slot: DividerSlot) -> Option<&mut dyn DividerView> {
        let view = match slot {
            DividerSlot::Row => &mut self.row_divider,
            DividerSlot::SectionHeader => &mut self.header_divider,
        };
        match view {
            Some(v) => Some(&mut **v),
            None => None,
        }
    }

    fn install_divider(&mut self, slot: DividerSlot, view: Box<dyn DividerView>) {
        match slot {
            DividerSlot::Row => self.row_divider = Some(view),
            DividerSlot::SectionHeader => self.header_divider = Some(view),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One recorded native-list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListOp {
    BeginUpdates,
    EndUpdates,
    ReloadAll,
    InsertSections(Vec<usize>),
    DeleteSections(Vec<usize>),
    MoveSection(usize, usize),
    InsertRows(Vec<Position>),
    DeleteRows(Vec<Position>),
    MoveRow(Position, Position),
}

/// A scripted native list: records structural calls and serves canned rows.
///
/// Structural calls are recorded, not simulated; tests set `visible` and
/// `rows` to whatever post-change state the scenario needs.
#[derive(Default)]
pub(crate) struct FakeList {
    pub(crate) ops: Vec<ListOp>,
    pub(crate) rows: HashMap<Position, FakeRow>,
    pub(crate) visible: Vec<Position>,
    pub(crate) estimated_row_height: Option<f32>,
    pub(crate) native_separators: Option<bool>,
}

impl FakeList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Realizes rows at the given positions and marks them visible.
    pub(crate) fn with_visible_rows(positions: &[Position]) -> Self {
        let mut list = Self::new();
        for &pos in positions {
            list.rows.insert(pos, FakeRow::new());
        }
        list.visible = positions.to_vec();
        list
    }

    pub(crate) fn row(&self, pos: Position) -> &FakeRow {
        &self.rows[&pos]
    }

    pub(crate) fn row_mut(&mut self, pos: Position) -> &mut FakeRow {
        self.rows.get_mut(&pos).expect("row not realized")
    }
}

impl NativeList for FakeList {
    fn begin_updates(&mut self) {
        self.ops.push(ListOp::BeginUpdates);
    }

    fn end_updates(&mut self) {
        self.ops.push(ListOp::EndUpdates);
    }

    fn reload_all(&mut self) {
        self.ops.push(ListOp::ReloadAll);
    }

    fn insert_sections(&mut self, indices: &[usize]) {
        self.ops.push(ListOp::InsertSections(indices.to_vec()));
    }

    fn delete_sections(&mut self, indices: &[usize]) {
        self.ops.push(ListOp::DeleteSections(indices.to_vec()));
    }

    fn move_section(&mut self, from: usize, to: usize) {
        self.ops.push(ListOp::MoveSection(from, to));
    }

    fn insert_rows(&mut self, positions: &[Position]) {
        self.ops.push(ListOp::InsertRows(positions.to_vec()));
    }

    fn delete_rows(&mut self, positions: &[Position]) {
        self.ops.push(ListOp::DeleteRows(positions.to_vec()));
    }

    fn move_row(&mut self, from: Position, to: Position) {
        self.ops.push(ListOp::MoveRow(from, to));
    }

    fn visible_positions(&self) -> Vec<Position> {
        self.visible.clone()
    }

    fn row_at(&mut self, position: Position) -> Option<&mut dyn RowHandle> {
        self.rows
            .get_mut(&position)
            .map(|row| row as &mut dyn RowHandle)
    }

    fn set_estimated_row_height(&mut self, height: f32) {
        self.estimated_row_height = Some(height);
    }

    fn set_native_separators_enabled(&mut self, enabled: bool) {
        self.native_separators = Some(enabled);
    }
}

pub(crate) fn model(text: &str) -> Arc<dyn ItemModel> {
    Arc::new(TextModel::new(text))
}
