//! The identity-keyed snapshot of what is currently rendered.

use std::collections::HashSet;

use super::item::{Item, Section};
use super::position::Position;

/// The currently-rendered declarative state: an ordered sequence of sections.
///
/// A snapshot is replaced wholesale on every update, never mutated
/// structurally in place (the single exception is
/// [`update_item`](crate::view::ListAdapter::update_item), which swaps one
/// item's model while preserving identity and structure). The adapter owns
/// exactly one current snapshot; the previous one exists only transiently
/// while the diff runs.
///
/// # Invariant
///
/// Every item identity key is unique across the whole snapshot, and every
/// section key is unique. Identity is what the diff and live queries address
/// rows by, so a duplicate would make addressing ambiguous.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    sections: Vec<Section>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from a declarative description.
    ///
    /// # Panics
    ///
    /// Panics if two sections share a key or two items anywhere in the
    /// description share a key. Duplicate identities are programmer misuse:
    /// every other component relies on identity being unambiguous, so this
    /// is a hard fault rather than a recoverable condition.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let mut section_keys = HashSet::new();
        let mut item_keys = HashSet::new();
        for section in &sections {
            if !section_keys.insert(section.key()) {
                panic!("duplicate section identity key: {:?}", section.key());
            }
            for item in section.items() {
                if !item_keys.insert(item.key()) {
                    panic!("duplicate item identity key: {:?}", item.key());
                }
            }
        }
        Self { sections }
    }

    /// Returns the sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns the total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Returns `true` if the snapshot contains no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Looks up the item at a position.
    ///
    /// Returns `None` for out-of-range input. Callers must treat this as a
    /// recoverable condition (row unavailable), not a fault: delegate
    /// callbacks for rows mid-removal are an expected timing race.
    pub fn item(&self, position: Position) -> Option<&Item> {
        self.sections
            .get(position.section())
            .and_then(|section| section.items().get(position.row()))
    }

    /// Finds the position of the item with the given identity key.
    pub fn position_of(&self, key: &str) -> Option<Position> {
        self.sections.iter().enumerate().find_map(|(s, section)| {
            section
                .items()
                .iter()
                .position(|item| item.key() == key)
                .map(|r| Position::new(s, r))
        })
    }

    /// Looks up an item by identity key, returning its position and a
    /// mutable handle.
    pub(crate) fn item_mut_by_key(&mut self, key: &str) -> Option<(Position, &mut Item)> {
        let position = self.position_of(key)?;
        let item = self.sections[position.section()].item_mut(position.row())?;
        Some((position, item))
    }
}
