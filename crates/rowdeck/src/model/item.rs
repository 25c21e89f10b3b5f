//! Declarative item and section models.
//!
//! An [`Item`] is one declarative row: a stable identity key, a shared
//! [`ItemModel`] that knows how to render the row, and a divider
//! classification. A [`Section`] is an ordered, keyed sequence of items.
//!
//! Models are supplied by the caller and shared via `Arc`; the snapshot
//! references them but the caller remains the source of truth for model
//! content.

use std::any::Any;
use std::sync::Arc;

use crate::view::RowHandle;

/// The interaction state of a row, as reflected in its visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// The row is at rest.
    #[default]
    Normal,
    /// The row is being pressed or hovered.
    Highlighted,
    /// The row is selected.
    Selected,
}

/// Divider classification for an item.
///
/// The classification is declarative; whether a divider actually appears is
/// decided by divider resolution against the adapter's configured builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerKind {
    /// No divider. The adapter's `shows_last_divider` flag can override this
    /// to a row divider.
    None,
    /// A standard divider between rows.
    Row,
    /// A heavier divider marking a section header.
    SectionHeader,
}

/// The rendering and behavior contract for one row's model.
///
/// Each concrete row kind implements this trait. The adapter drives it at
/// well-defined moments:
///
/// - [`configure`](ItemModel::configure) when the row's content must be
///   (re)rendered,
/// - [`configure_state`](ItemModel::configure_state) when the row's
///   interaction visuals must match a new [`InteractionState`],
/// - [`apply_behavior`](ItemModel::apply_behavior) when row-specific
///   imperative setup must be re-applied (e.g. after a structural pass),
/// - [`did_select`](ItemModel::did_select) when the user selects the row.
///
/// Models typically downcast the [`RowHandle`] to their concrete row type via
/// [`RowHandle::as_any_mut`]; a failed downcast means the visible row does
/// not belong to this model and must be skipped, never treated as fatal.
pub trait ItemModel: Send + Sync {
    /// Renders the model's content into the row.
    ///
    /// `animated` requests an animated content swap where the row supports
    /// one; non-animated configuration must be equivalent in final state.
    fn configure(&self, row: &mut dyn RowHandle, animated: bool);

    /// Applies the visuals for the given interaction state to the row.
    fn configure_state(&self, row: &mut dyn RowHandle, state: InteractionState);

    /// Whether this row responds to selection.
    ///
    /// Non-selectable rows never receive [`did_select`](ItemModel::did_select)
    /// and are rendered without a selection affordance.
    fn is_selectable(&self) -> bool {
        false
    }

    /// Invoked when the row is selected. Only called if
    /// [`is_selectable`](ItemModel::is_selectable) returns `true`.
    fn did_select(&self) {}

    /// Re-applies row-specific imperative behavior (gesture hooks, accessory
    /// wiring). Called once per row before display and again after every
    /// structural pass.
    fn apply_behavior(&self, _row: &mut dyn RowHandle) {}

    /// Compares content with another model of the same identity.
    ///
    /// The diff calls this for items whose identity survives a transition;
    /// `false` produces an update-in-place pair in the changeset. The default
    /// treats identity as implying content, which is correct for static rows.
    fn is_content_equal(&self, _other: &dyn ItemModel) -> bool {
        true
    }

    /// Returns this model as [`Any`] for downcasting in
    /// [`is_content_equal`](ItemModel::is_content_equal) implementations.
    fn as_any(&self) -> &dyn Any;
}

/// A declarative unit representing one row.
#[derive(Clone)]
pub struct Item {
    /// Stable identity, unique across the whole snapshot.
    key: String,
    /// The model that renders and drives this row.
    model: Arc<dyn ItemModel>,
    /// Divider classification.
    divider: DividerKind,
}

impl Item {
    /// Creates an item with the given identity key and model.
    ///
    /// The divider classification defaults to [`DividerKind::Row`]; callers
    /// typically clear it on the last item of a section.
    pub fn new(key: impl Into<String>, model: Arc<dyn ItemModel>) -> Self {
        Self {
            key: key.into(),
            model,
            divider: DividerKind::Row,
        }
    }

    /// Sets the divider classification.
    pub fn with_divider(mut self, divider: DividerKind) -> Self {
        self.divider = divider;
        self
    }

    /// Returns the identity key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the model.
    pub fn model(&self) -> &Arc<dyn ItemModel> {
        &self.model
    }

    /// Returns the divider classification.
    pub fn divider(&self) -> DividerKind {
        self.divider
    }

    /// Replaces the model in place, preserving identity.
    pub(crate) fn set_model(&mut self, model: Arc<dyn ItemModel>) {
        self.model = model;
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("key", &self.key)
            .field("divider", &self.divider)
            .finish_non_exhaustive()
    }
}

/// Identity equality: same key, same model instance, same divider.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && Arc::ptr_eq(&self.model, &other.model)
            && self.divider == other.divider
    }
}

/// An ordered, keyed sequence of items.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Stable identity, unique across the whole snapshot.
    key: String,
    /// The items in display order.
    items: Vec<Item>,
}

impl Section {
    /// Creates a section with the given identity key and items.
    pub fn new(key: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }

    /// Returns the identity key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the section has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn item_mut(&mut self, row: usize) -> Option<&mut Item> {
        self.items.get_mut(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::TextModel;

    #[test]
    fn test_item_defaults_to_row_divider() {
        let item = Item::new("a", Arc::new(TextModel::new("A")));
        assert_eq!(item.divider(), DividerKind::Row);
        assert_eq!(item.key(), "a");
    }

    #[test]
    fn test_with_divider() {
        let item =
            Item::new("a", Arc::new(TextModel::new("A"))).with_divider(DividerKind::None);
        assert_eq!(item.divider(), DividerKind::None);
    }

    #[test]
    fn test_item_equality_is_by_identity() {
        let model: Arc<dyn ItemModel> = Arc::new(TextModel::new("A"));
        let a = Item::new("a", model.clone());
        let b = Item::new("a", model.clone());
        let c = Item::new("a", Arc::new(TextModel::new("A")));

        assert_eq!(a, b);
        assert_ne!(a, c); // Different model instance
    }

    #[test]
    fn test_section_accessors() {
        let section = Section::new(
            "s",
            vec![
                Item::new("a", Arc::new(TextModel::new("A"))),
                Item::new("b", Arc::new(TextModel::new("B"))),
            ],
        );
        assert_eq!(section.key(), "s");
        assert_eq!(section.len(), 2);
        assert!(!section.is_empty());
        assert_eq!(section.items()[1].key(), "b");
    }
}
