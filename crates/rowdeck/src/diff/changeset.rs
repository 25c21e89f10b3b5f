//! Changeset data types.
//!
//! A [`Changeset`] is the transient product of one diff: the structural
//! operations that transform one snapshot into another. It is produced once
//! per update cycle, replayed by the applicator, and discarded.

use crate::model::Position;

/// Structural changes at the section level.
///
/// Deletes are expressed against the pre-change coordinate space, inserts
/// against the post-change space, moves as (pre, post) pairs. Index lists are
/// sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionChanges {
    /// Section indices to delete (old coordinate space).
    pub deletes: Vec<usize>,
    /// Section indices to insert (new coordinate space).
    pub inserts: Vec<usize>,
    /// Section moves as (old index, new index) pairs.
    pub moves: Vec<(usize, usize)>,
}

impl SectionChanges {
    /// Returns `true` if no section changes are present.
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.inserts.is_empty() && self.moves.is_empty()
    }
}

/// Structural and in-place changes at the item level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemChanges {
    /// Item positions to delete (old coordinate space).
    pub deletes: Vec<Position>,
    /// Item positions to insert (new coordinate space).
    pub inserts: Vec<Position>,
    /// Item moves as (old position, new position) pairs.
    pub moves: Vec<(Position, Position)>,
    /// Update-in-place pairs: same identity, content changed. The applicator
    /// re-renders these rows without treating them as structural changes.
    pub updates: Vec<(Position, Position)>,
}

impl ItemChanges {
    /// Returns `true` if no item changes are present.
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty()
            && self.inserts.is_empty()
            && self.moves.is_empty()
            && self.updates.is_empty()
    }
}

/// The full set of operations transforming one snapshot into another.
///
/// # Postcondition
///
/// As produced by [`diff`](super::diff), the `updates` list never overlaps
/// the `deletes` or `inserts` lists for the same position: updates are only
/// emitted for identities that survive the transition. The applicator relies
/// on this rather than re-deriving it defensively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changeset {
    /// Section-level changes.
    pub sections: SectionChanges,
    /// Item-level changes.
    pub items: ItemChanges,
}

impl Changeset {
    /// Returns `true` if the changeset contains no operations at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.items.is_empty()
    }

    /// Returns the number of structural operations (excluding updates).
    pub fn structural_len(&self) -> usize {
        self.sections.deletes.len()
            + self.sections.inserts.len()
            + self.sections.moves.len()
            + self.items.deletes.len()
            + self.items.inserts.len()
            + self.items.moves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let changeset = Changeset::default();
        assert!(changeset.is_empty());
        assert_eq!(changeset.structural_len(), 0);
    }

    #[test]
    fn test_updates_are_not_structural() {
        let changeset = Changeset {
            items: ItemChanges {
                updates: vec![(Position::new(0, 0), Position::new(0, 0))],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(!changeset.is_empty());
        assert_eq!(changeset.structural_len(), 0);
    }
}
