//! Position type for addressing rows in a sectioned list.
//!
//! A [`Position`] is the fundamental way to reference one row within a
//! snapshot or a native list view: a (section index, row index) pair.

/// A (section, row) pair addressing one item in a snapshot.
///
/// Positions are used by the adapter, the diff, and the native view to locate
/// rows. Like native index paths, a position is only meaningful against one
/// coordinate space: structural changes (insertions, deletions, moves)
/// invalidate previously obtained positions.
///
/// # Example
///
/// ```
/// use rowdeck::model::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.section(), 1);
/// assert_eq!(pos.row(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// The section index.
    section: usize,
    /// The row within the section.
    row: usize,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Returns the section index.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the row within the section.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Creates a position in the same section at a different row.
    #[inline]
    pub const fn sibling(&self, row: usize) -> Self {
        Self::new(self.section, row)
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({}:{})", self.section, self.row)
    }
}

impl From<(usize, usize)> for Position {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}
