//! The list adapter: declarative sections in, native list calls out.
//!
//! [`ListAdapter`] owns the authoritative [`Snapshot`] and a handle onto the
//! native view. Hosts hand it full section lists via
//! [`set_sections`](ListAdapter::set_sections); the adapter diffs the new
//! list against the snapshot and drives the view with the minimal structural
//! transaction, then resynchronizes visible rows so model state the
//! structural calls cannot express (content, interaction state, selection
//! affordance, dividers, behaviors) is reapplied.
//!
//! The view's own callbacks flow back in through
//! [`will_display_row`](ListAdapter::will_display_row),
//! [`did_select_row`](ListAdapter::did_select_row),
//! [`set_row_highlighted`](ListAdapter::set_row_highlighted) and
//! [`did_scroll`](ListAdapter::did_scroll).

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use rowdeck_core::Signal;

use crate::diff::{Changeset, diff};
use crate::error::{AdapterError, Result};
use crate::model::{InteractionState, Item, ItemModel, Position, Section, Snapshot};

use super::divider::{self, DividerConfig};
use super::infinite_scroll::{
    DEFAULT_TRIGGER_DISTANCE, InfiniteScrollController, InfiniteScrollDelegate, LoaderView,
};
use super::traits::{DividerView, NativeList, ScrollMetrics, SelectionStyle};

/// Construction-time adapter configuration.
///
/// Styling defaults are pushed onto the view exactly once, when the adapter
/// is created; the adapter does not fight the host for view styling after
/// that.
#[derive(Clone)]
pub struct AdapterConfig {
    /// Selection affordance for selectable rows.
    pub selection_style: SelectionStyle,
    /// Whether a trailing item classified [`DividerKind::None`] still shows
    /// a row divider.
    ///
    /// [`DividerKind::None`]: crate::model::DividerKind::None
    pub shows_last_divider: bool,
    /// Estimated row height handed to the view for layout.
    pub estimated_row_height: f32,
    /// Whether the view's built-in separators stay enabled. Off by default;
    /// divider resolution replaces them.
    pub native_separators_enabled: bool,
    /// Trailing distance at which infinite scrolling triggers, if installed.
    pub infinite_scroll_trigger_distance: f32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            selection_style: SelectionStyle::Default,
            shows_last_divider: false,
            estimated_row_height: 44.0,
            native_separators_enabled: false,
            infinite_scroll_trigger_distance: DEFAULT_TRIGGER_DISTANCE,
        }
    }
}

/// Declarative adapter over one native list view.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use rowdeck::model::{Item, ItemModel, Section};
/// # use rowdeck::view::{ListAdapter, NativeList};
/// # fn demo(view: impl NativeList, model: Arc<dyn ItemModel>) {
/// let mut adapter = ListAdapter::new(view);
/// adapter.set_sections(
///     Some(vec![Section::new("inbox", vec![Item::new("msg-1", model)])]),
///     true,
/// );
/// # }
/// ```
pub struct ListAdapter<V: NativeList> {
    view: V,
    snapshot: Snapshot,
    selection_style: SelectionStyle,
    shows_last_divider: bool,
    dividers: DividerConfig,
    /// Item keys whose non-animated model update has not reached a live row
    /// yet. Applied when the row next becomes visible or is resynced.
    pending_reloads: HashSet<String>,
    infinite_scroll: Option<InfiniteScrollController>,
    trigger_distance: f32,

    /// Emitted for every scroll event forwarded by the view.
    pub scrolled: Signal<ScrollMetrics>,
    /// Emitted after a row has been fully configured for display.
    pub will_display: Signal<(Position, Arc<dyn ItemModel>)>,
    /// Emitted when a selectable row is selected, after the model's own
    /// selection hook ran.
    pub item_selected: Signal<Position>,
}

impl<V: NativeList> ListAdapter<V> {
    /// Creates an adapter with default configuration.
    pub fn new(view: V) -> Self {
        Self::with_config(view, AdapterConfig::default())
    }

    /// Creates an adapter, applying the configuration's one-time styling
    /// defaults to the view.
    pub fn with_config(mut view: V, config: AdapterConfig) -> Self {
        view.set_estimated_row_height(config.estimated_row_height);
        view.set_native_separators_enabled(config.native_separators_enabled);
        Self {
            view,
            snapshot: Snapshot::new(),
            selection_style: config.selection_style,
            shows_last_divider: config.shows_last_divider,
            dividers: DividerConfig::default(),
            pending_reloads: HashSet::new(),
            infinite_scroll: None,
            trigger_distance: config.infinite_scroll_trigger_distance,
            scrolled: Signal::new(),
            will_display: Signal::new(),
            item_selected: Signal::new(),
        }
    }

    // ===== Content =====

    /// Replaces the full section list.
    ///
    /// `None` is treated as an empty list. When `animated`, the new list is
    /// diffed against the current snapshot and applied as one atomic update
    /// bracket in a fixed order: in-place updates, item deletes, section
    /// deletes, item inserts, section inserts, section moves, item moves;
    /// visible rows are resynced afterwards. When not animated, the view
    /// reloads from scratch.
    ///
    /// # Panics
    ///
    /// Panics if `sections` contains a duplicate section key or a duplicate
    /// item key.
    pub fn set_sections(&mut self, sections: Option<Vec<Section>>, animated: bool) {
        let sections = sections.unwrap_or_default();

        if !animated {
            self.snapshot = Snapshot::from_sections(sections);
            // A full reload re-renders every row, so deferred reloads are
            // moot.
            self.pending_reloads.clear();
            self.view.reload_all();
            return;
        }

        let next = Snapshot::from_sections(sections);
        let changes = diff(&self.snapshot, next.sections());
        self.snapshot = next;
        // Items removed by this transition take their deferred reloads with
        // them.
        self.pending_reloads
            .retain(|key| self.snapshot.position_of(key).is_some());

        if changes.is_empty() {
            tracing::trace!(target: "rowdeck::adapter", "set_sections: no changes");
            return;
        }
        self.apply_changeset(&changes);
    }

    /// Swaps the model behind one item, identified by key, without any
    /// structural change.
    ///
    /// Returns `false` (after a logged no-op) if no item carries `key`. When
    /// `animated` and the row is live, the new model renders into it
    /// immediately; otherwise the reload is deferred until the row next
    /// becomes visible or is resynced.
    pub fn update_item(&mut self, key: &str, model: Arc<dyn ItemModel>, animated: bool) -> bool {
        let Some((position, item)) = self.snapshot.item_mut_by_key(key) else {
            tracing::debug!(target: "rowdeck::adapter", key, "update_item: unknown key; ignoring");
            return false;
        };
        item.set_model(model.clone());

        if animated && let Some(row) = self.view.row_at(position) {
            let state = row.interaction_state();
            model.configure(row, true);
            model.configure_state(row, state);
            self.pending_reloads.remove(key);
        } else {
            self.pending_reloads.insert(key.to_owned());
        }
        true
    }

    /// Re-renders the item at `position` from its current model.
    ///
    /// A logged no-op if the position is not in the snapshot; deferred if
    /// the row is not live.
    pub fn reload_item(&mut self, position: Position, animated: bool) {
        let Some(item) = self.snapshot.item(position) else {
            tracing::debug!(
                target: "rowdeck::adapter",
                ?position,
                "reload_item: position out of bounds; ignoring"
            );
            return;
        };
        let model = item.model().clone();
        let key = item.key().to_owned();

        if let Some(row) = self.view.row_at(position) {
            let state = row.interaction_state();
            model.configure(row, animated);
            model.configure_state(row, state);
            self.pending_reloads.remove(&key);
        } else {
            self.pending_reloads.insert(key);
        }
    }

    /// The item at `position` in the current snapshot, if any.
    pub fn item_at(&self, position: Position) -> Option<&Item> {
        self.snapshot.item(position)
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Positions of all currently visible rows.
    pub fn visible_positions(&self) -> Vec<Position> {
        self.view.visible_positions()
    }

    /// The underlying native view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the underlying native view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // ===== Styling =====

    /// The selection affordance applied to selectable rows.
    pub fn selection_style(&self) -> SelectionStyle {
        self.selection_style
    }

    /// Sets the selection affordance applied to selectable rows. Takes
    /// effect as rows are displayed or resynced.
    pub fn set_selection_style(&mut self, style: SelectionStyle) {
        self.selection_style = style;
    }

    /// Whether trailing `DividerKind::None` items are promoted to a row
    /// divider.
    pub fn shows_last_divider(&self) -> bool {
        self.shows_last_divider
    }

    /// Sets the trailing-divider promotion flag.
    pub fn set_shows_last_divider(&mut self, shows: bool) {
        self.shows_last_divider = shows;
    }

    /// Sets the builder for between-rows dividers.
    pub fn set_row_divider_builder<F>(&mut self, builder: F)
    where
        F: Fn() -> Box<dyn DividerView> + Send + Sync + 'static,
    {
        self.dividers.row_builder = Some(Arc::new(builder));
    }

    /// Sets the per-display configurer for between-rows dividers.
    pub fn set_row_divider_configurer<F>(&mut self, configurer: F)
    where
        F: Fn(&mut dyn DividerView) + Send + Sync + 'static,
    {
        self.dividers.row_configurer = Some(Arc::new(configurer));
    }

    /// Sets the builder for section-header dividers.
    pub fn set_section_header_divider_builder<F>(&mut self, builder: F)
    where
        F: Fn() -> Box<dyn DividerView> + Send + Sync + 'static,
    {
        self.dividers.section_header_builder = Some(Arc::new(builder));
    }

    /// Sets the per-display configurer for section-header dividers.
    pub fn set_section_header_divider_configurer<F>(&mut self, configurer: F)
    where
        F: Fn(&mut dyn DividerView) + Send + Sync + 'static,
    {
        self.dividers.section_header_configurer = Some(Arc::new(configurer));
    }

    // ===== Infinite scrolling =====

    /// Installs infinite scrolling with a weakly held delegate and a loader
    /// view.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InfiniteScrollAlreadyInstalled`] if called a
    /// second time; the adapter hosts at most one controller.
    pub fn add_infinite_scrolling(
        &mut self,
        delegate: Weak<dyn InfiniteScrollDelegate>,
        loader: Box<dyn LoaderView>,
    ) -> Result<()> {
        if self.infinite_scroll.is_some() {
            return Err(AdapterError::InfiniteScrollAlreadyInstalled);
        }
        self.infinite_scroll = Some(InfiniteScrollController::new(
            delegate,
            loader,
            self.trigger_distance,
        ));
        Ok(())
    }

    // ===== View callbacks =====

    /// Forwards one scroll event from the view.
    ///
    /// Emits [`scrolled`](ListAdapter::scrolled) and feeds the infinite
    /// scroll machine, if installed.
    pub fn did_scroll(&mut self, metrics: ScrollMetrics) {
        self.scrolled.emit(metrics);
        if let Some(controller) = &mut self.infinite_scroll {
            controller.on_scroll(metrics);
        }
    }

    /// Called by the view just before the row at `position` appears.
    ///
    /// Fully configures the row: content, interaction state, selection
    /// affordance (forced to [`SelectionStyle::None`] for non-selectable
    /// models), behaviors, and dividers; then emits
    /// [`will_display`](ListAdapter::will_display).
    pub fn will_display_row(&mut self, position: Position) {
        let Some(item) = self.snapshot.item(position) else {
            tracing::debug!(
                target: "rowdeck::adapter",
                ?position,
                "will_display_row: no item at position; ignoring"
            );
            return;
        };
        let model = item.model().clone();
        let divider_kind = item.divider();
        let key = item.key().to_owned();
        self.pending_reloads.remove(&key);

        let Some(row) = self.view.row_at(position) else {
            tracing::debug!(
                target: "rowdeck::adapter",
                ?position,
                "will_display_row: row not realized; ignoring"
            );
            return;
        };

        model.configure(row, false);
        let state = row.interaction_state();
        model.configure_state(row, state);
        let style = if model.is_selectable() {
            self.selection_style
        } else {
            SelectionStyle::None
        };
        row.set_selection_style(style);
        model.apply_behavior(row);
        divider::resolve(row, divider_kind, self.shows_last_divider, &self.dividers);

        self.will_display.emit((position, model));
    }

    /// Called by the view when the row at `position` was selected.
    ///
    /// Ignored for non-selectable models. Otherwise runs the model's
    /// selection hook and emits
    /// [`item_selected`](ListAdapter::item_selected).
    pub fn did_select_row(&mut self, position: Position) {
        let Some(item) = self.snapshot.item(position) else {
            tracing::debug!(
                target: "rowdeck::adapter",
                ?position,
                "did_select_row: no item at position; ignoring"
            );
            return;
        };
        let model = item.model().clone();
        if !model.is_selectable() {
            return;
        }
        model.did_select();
        self.item_selected.emit(position);
    }

    /// Called by the view as the row at `position` is pressed or released.
    pub fn set_row_highlighted(&mut self, position: Position, highlighted: bool) {
        let Some(item) = self.snapshot.item(position) else {
            return;
        };
        let model = item.model().clone();
        let Some(row) = self.view.row_at(position) else {
            return;
        };
        let state = if highlighted {
            InteractionState::Highlighted
        } else {
            InteractionState::Normal
        };
        model.configure_state(row, state);
    }

    // ===== Changeset application =====

    /// Drives the view through one changeset as a single atomic bracket.
    ///
    /// In-place updates run first, while updated rows still sit at their
    /// pre-change positions; structural calls follow in the order the
    /// native index-path semantics require. The snapshot has already been
    /// replaced, so update lookups use post-change positions.
    fn apply_changeset(&mut self, changes: &Changeset) {
        tracing::debug!(
            target: "rowdeck::adapter",
            structural = changes.structural_len(),
            updates = changes.items.updates.len(),
            "applying changeset"
        );

        self.view.begin_updates();

        for &(from, to) in &changes.items.updates {
            let Some(model) = self.snapshot.item(to).map(|item| item.model().clone()) else {
                continue;
            };
            if let Some(row) = self.view.row_at(from) {
                let state = row.interaction_state();
                model.configure(row, false);
                model.configure_state(row, state);
            }
        }

        if !changes.items.deletes.is_empty() {
            self.view.delete_rows(&changes.items.deletes);
        }
        if !changes.sections.deletes.is_empty() {
            self.view.delete_sections(&changes.sections.deletes);
        }
        if !changes.items.inserts.is_empty() {
            self.view.insert_rows(&changes.items.inserts);
        }
        if !changes.sections.inserts.is_empty() {
            self.view.insert_sections(&changes.sections.inserts);
        }
        for &(from, to) in &changes.sections.moves {
            self.view.move_section(from, to);
        }
        for &(from, to) in &changes.items.moves {
            self.view.move_row(from, to);
        }

        self.view.end_updates();
        self.resync_visible_rows();
    }

    /// Reconciles every visible row against the current snapshot.
    ///
    /// Structural view calls reposition rows but cannot re-render them;
    /// this pass reapplies interaction state, selection affordance,
    /// behaviors, and dividers, and flushes pending reloads. A visible
    /// position with no snapshot item, or a position the view cannot
    /// produce a row for, is a timing race and is skipped with a log.
    fn resync_visible_rows(&mut self) {
        for position in self.view.visible_positions() {
            let Some(item) = self.snapshot.item(position) else {
                tracing::debug!(
                    target: "rowdeck::adapter",
                    ?position,
                    "resync: visible position not in snapshot; skipping"
                );
                continue;
            };
            let model = item.model().clone();
            let divider_kind = item.divider();
            let key = item.key().to_owned();

            let Some(row) = self.view.row_at(position) else {
                tracing::debug!(
                    target: "rowdeck::adapter",
                    ?position,
                    "resync: row not realized; skipping"
                );
                continue;
            };

            if self.pending_reloads.remove(&key) {
                model.configure(row, false);
            }
            let state = row.interaction_state();
            model.configure_state(row, state);
            let style = if model.is_selectable() {
                self.selection_style
            } else {
                SelectionStyle::None
            };
            row.set_selection_style(style);
            model.apply_behavior(row);
            divider::resolve(row, divider_kind, self.shows_last_divider, &self.dividers);
        }
    }
}
