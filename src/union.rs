//! K-way union of sorted posting lists.

use crate::docid::{DocId, verify_sorted};
use crate::error::Result;
use crate::heap::CursorHeap;

/// Merge any number of sorted posting lists into one strictly increasing list
/// containing every document id that appears in at least one input.
///
/// Precondition: each list is individually sorted in non-decreasing order
/// (ties allowed). This is not checked; see [`try_union`] for the validating
/// variant. Inputs are read through borrowed views and never mutated.
///
/// Runs in O(N log K) for N total elements across K lists.
///
/// ```
/// let lists = vec![vec![1u64, 3, 5], vec![3, 5, 7], vec![5, 7, 9]];
/// assert_eq!(docset::union(&lists), vec![1, 3, 5, 7, 9]);
/// ```
pub fn union<L: AsRef<[DocId]>>(lists: &[L]) -> Vec<DocId> {
    let mut heap = CursorHeap::new(lists.iter().map(|list| list.as_ref()));
    let mut result: Vec<DocId> = Vec::new();
    while let Some(lowest) = heap.peek() {
        // Heads come out non-decreasing, so comparing against the tail of the
        // result is enough to deduplicate.
        if result.last() != Some(&lowest) {
            result.push(lowest);
        }
        heap.advance_root();
    }
    result
}

/// Checked variant of [`union`]: verifies that every input list is sorted
/// before merging.
pub fn try_union<L: AsRef<[DocId]>>(lists: &[L]) -> Result<Vec<DocId>> {
    verify_sorted(lists)?;
    Ok(union(lists))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsetError;

    #[test]
    fn test_union_merges_and_deduplicates() {
        let lists = vec![vec![1u64, 3, 5], vec![3, 5, 7], vec![5, 7, 9]];
        assert_eq!(union(&lists), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_union_disjoint_lists() {
        let lists = vec![vec![1u64, 2, 3], vec![4, 5, 6]];
        assert_eq!(union(&lists), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_union_empty_collection() {
        let lists: Vec<Vec<DocId>> = Vec::new();
        assert!(union(&lists).is_empty());
    }

    #[test]
    fn test_union_all_lists_empty() {
        let lists: Vec<Vec<DocId>> = vec![Vec::new(), Vec::new()];
        assert!(union(&lists).is_empty());
    }

    #[test]
    fn test_union_skips_empty_lists() {
        let lists = vec![vec![], vec![1u64, 2, 3]];
        assert_eq!(union(&lists), vec![1, 2, 3]);
    }

    #[test]
    fn test_union_single_list_deduplicates() {
        let lists = vec![vec![2u64, 2, 3]];
        assert_eq!(union(&lists), vec![2, 3]);
    }

    #[test]
    fn test_union_duplicates_across_lists() {
        let lists = vec![vec![1u64, 1, 4], vec![1, 4, 4], vec![4]];
        assert_eq!(union(&lists), vec![1, 4]);
    }

    #[test]
    fn test_union_does_not_mutate_inputs() {
        let lists = vec![vec![5u64, 6], vec![1, 9]];
        let _ = union(&lists);
        assert_eq!(lists, vec![vec![5, 6], vec![1, 9]]);
    }

    #[test]
    fn test_try_union_rejects_unsorted_input() {
        let lists = vec![vec![1u64, 2], vec![3, 1]];
        assert_eq!(
            try_union(&lists),
            Err(DocsetError::UnsortedPostingList {
                index: 1,
                position: 0
            })
        );
    }

    #[test]
    fn test_try_union_matches_union_on_valid_input() {
        let lists = vec![vec![1u64, 3], vec![2, 3, 8]];
        assert_eq!(try_union(&lists).unwrap(), union(&lists));
    }
}
