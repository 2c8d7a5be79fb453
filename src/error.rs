//! Error types for the checked entry points.

use thiserror::Error;

/// Errors reported by the `try_*` entry points and [`verify_sorted`].
///
/// The plain entry points never fail; sortedness is their documented
/// precondition and violating it yields incorrect results, not an error.
///
/// [`verify_sorted`]: crate::docid::verify_sorted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocsetError {
    /// A posting list is not in non-decreasing order.
    #[error("posting list {index} is not sorted: element {position} is greater than its successor")]
    UnsortedPostingList {
        /// Index of the offending list within the collection.
        index: usize,
        /// Position of the first out-of-order element within that list.
        position: usize,
    },
}

/// Result type for docset operations.
pub type Result<T> = std::result::Result<T, DocsetError>;
