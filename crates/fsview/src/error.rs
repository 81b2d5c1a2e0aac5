use thiserror::Error;

/// Broad category of a [`ViewError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument is invalid by construction (e.g. a negative index).
    Domain,
    /// The argument is well-formed but falls outside the current logical size.
    Bounds,
}

/// Failure raised by checked view operations.
///
/// None of the operations that return this error mutate anything, so a
/// failure never leaves partial state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// `at` was called with a negative index.
    #[error("at({index}): invalid index")]
    NegativeIndex {
        /// The offending index.
        index: isize,
    },
    /// `at` was called with an index at or past the logical size.
    #[error("at({index}): invalid index, size is {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: isize,
        /// Logical size of the view at the time of the call.
        size: usize,
    },
    /// `substr` was called with a position outside `[0, size]`.
    #[error("substr({pos}): position out of range for size {size}")]
    PositionOutOfRange {
        /// The offending position.
        pos: isize,
        /// Logical size of the view at the time of the call.
        size: usize,
    },
}

impl ViewError {
    /// Returns whether this is a domain or a bounds failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ViewError::NegativeIndex { .. } => ErrorKind::Domain,
            ViewError::IndexOutOfRange { .. } | ViewError::PositionOutOfRange { .. } => {
                ErrorKind::Bounds
            }
        }
    }
}
