//! # Docset
//!
//! Sorted set algebra over document-identifier posting lists, the combining
//! step of an inverted-index query engine: per-term posting lists go in, one
//! sorted, deduplicated result set comes out.
//!
//! ## Features
//!
//! - K-way union over any number of sorted posting lists
//! - Two equivalent k-way intersections: heap-driven and pairwise reduction
//! - Strictly increasing, duplicate-free result sets
//! - Pure, allocation-light functions with no shared state
//!
//! Every input list must be individually sorted in non-decreasing order. That
//! precondition is documented, not checked, on the plain entry points; the
//! `try_*` variants validate it first and report the offending list.
//!
//! ```
//! use docset::{intersect_heap, union};
//!
//! let lists = vec![vec![1u64, 3, 5], vec![3, 5, 7], vec![5, 7, 9]];
//! assert_eq!(union(&lists), vec![1, 3, 5, 7, 9]);
//! assert_eq!(intersect_heap(&lists), vec![5]);
//! ```

// Core modules
pub mod docid;
mod error;
mod heap;
pub mod intersect;
pub mod union;

// Re-exports for the public API
pub use docid::{DocId, verify_sorted};
pub use error::{DocsetError, Result};
pub use intersect::{
    IntersectStrategy, intersect_heap, intersect_pairwise, intersect_with, try_intersect_heap,
    try_intersect_pairwise,
};
pub use union::{try_union, union};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
