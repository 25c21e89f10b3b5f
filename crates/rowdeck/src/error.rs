//! Error types for the adapter layer.

use std::fmt;

/// Errors reported by [`ListAdapter`](crate::view::ListAdapter).
///
/// Most adapter misuse is either a programmer error that panics (duplicate
/// identity keys) or a timing race that degrades to a logged no-op; the
/// variants here cover the remaining recoverable cases.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdapterError {
    /// Infinite scrolling was already installed on this adapter.
    InfiniteScrollAlreadyInstalled,
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfiniteScrollAlreadyInstalled => {
                write!(f, "infinite scrolling is already installed on this adapter")
            }
        }
    }
}

impl std::error::Error for AdapterError {}

/// Convenience alias for adapter results.
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AdapterError::InfiniteScrollAlreadyInstalled.to_string(),
            "infinite scrolling is already installed on this adapter"
        );
    }
}
