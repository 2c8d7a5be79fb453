//! Document identifiers and the sortedness precondition shared by every
//! set-algebra operation in this crate.

use crate::error::{DocsetError, Result};

/// A document identifier.
///
/// Nothing but a totally ordered 64-bit value; the crate assigns no structure
/// to the bits.
pub type DocId = u64;

/// Return the position `p` of the first out-of-order pair, i.e. the smallest
/// `p` with `docs[p] > docs[p + 1]`, or `None` when the list is sorted.
pub(crate) fn first_unsorted(docs: &[DocId]) -> Option<usize> {
    docs.windows(2).position(|pair| pair[0] > pair[1])
}

/// Check that every posting list in `lists` is sorted in non-decreasing order.
///
/// This is the precondition of all set-algebra entry points. On failure the
/// error names the first offending list and the position of the out-of-order
/// pair within it.
pub fn verify_sorted<L: AsRef<[DocId]>>(lists: &[L]) -> Result<()> {
    for (index, list) in lists.iter().enumerate() {
        if let Some(position) = first_unsorted(list.as_ref()) {
            return Err(DocsetError::UnsortedPostingList { index, position });
        }
    }
    Ok(())
}
