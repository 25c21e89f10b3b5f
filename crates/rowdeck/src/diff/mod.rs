//! Identity diffing between declarative descriptions.
//!
//! The diff is the adapter's one pure collaborator: given the old
//! [`Snapshot`](crate::model::Snapshot) and a new list of
//! [`Section`](crate::model::Section)s, [`diff`] returns the [`Changeset`]
//! transforming one into the other. The adapter only consumes the returned
//! changeset; it never depends on how the diff derives it.

mod changeset;
mod keyed;

pub use changeset::{Changeset, ItemChanges, SectionChanges};
pub use keyed::diff;
