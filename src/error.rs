//! Error kinds surfaced by the approximation engine.

use thiserror::Error;

/// Every way a path computation can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Index outside of `0..len` on a [`GrowableList`](crate::list::GrowableList)
    /// or [`FixedBuffer`](crate::buffer::FixedBuffer).
    #[error("index {index} is out of range for length {len}")]
    Index {
        /// Requested index
        index: usize,
        /// Length of the container
        len: usize,
    },

    /// Growing or shrinking a container's storage failed.
    ///
    /// The container is left in the state it had before the call.
    #[error("failed to reserve storage for {requested} more elements")]
    OutOfMemory {
        /// Number of additional elements that could not be reserved
        requested: usize,
    },

    /// A curve was given fewer control points than it needs.
    #[error("expected at least {expected} control points, got {actual}")]
    TooFewPoints {
        /// Minimum number of points
        expected: usize,
        /// Number of points given
        actual: usize,
    },

    /// A slider curve description could not be read.
    #[error("invalid curve description: {0}")]
    Parse(String),
}

/// Convenience type alias for results using [`PathError`].
pub type Result<T> = std::result::Result<T, PathError>;

/// Fails with [`PathError::TooFewPoints`] unless `points` has at least two entries.
pub(crate) fn require_two<T>(points: &[T]) -> Result<()> {
    if points.len() <= 1 {
        return Err(PathError::TooFewPoints {
            expected: 2,
            actual: points.len(),
        });
    }
    Ok(())
}
