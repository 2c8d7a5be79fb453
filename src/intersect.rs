//! K-way intersection of sorted posting lists.
//!
//! Two equivalent algorithms are provided. [`intersect_heap`] walks all lists
//! in lockstep behind a min-heap and scales as O(N log K), which suits many
//! lists of similar size. [`intersect_pairwise`] folds the lists into a
//! running result with two-pointer merges, O(N·K) in the worst case but fast
//! in practice when one list is much smaller than the rest, because the
//! running result only ever shrinks. Both return the same result for every
//! input; callers pick a strategy to match their workload, or route through
//! [`intersect_with`].

use std::cmp::Ordering;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::docid::{DocId, verify_sorted};
use crate::error::Result;
use crate::heap::CursorHeap;

/// Which intersection algorithm to run.
///
/// Serializable so external query-plan configuration can name a strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntersectStrategy {
    /// Heap-driven lockstep walk; O(N log K).
    #[default]
    Heap,
    /// Pairwise reduction of the running result; O(N·K).
    Pairwise,
}

/// Intersect with the algorithm selected by `strategy`.
pub fn intersect_with<L: AsRef<[DocId]>>(lists: &[L], strategy: IntersectStrategy) -> Vec<DocId> {
    trace!("intersecting {} posting lists with {:?}", lists.len(), strategy);
    match strategy {
        IntersectStrategy::Heap => intersect_heap(lists),
        IntersectStrategy::Pairwise => intersect_pairwise(lists),
    }
}

/// Intersect any number of sorted posting lists using a min-heap, returning
/// the strictly increasing list of document ids present in every input.
///
/// Precondition: each list is individually sorted in non-decreasing order
/// (not checked; see [`try_intersect_heap`]). Any empty input list, or an
/// empty collection, short-circuits to an empty result. Inputs are read
/// through borrowed views and never mutated.
///
/// Each round inspects the smallest head `lowest`, counts the lists whose
/// head equals it by scanning every heap slot (the count must not assume
/// anything about heap layout beyond the root being minimal), emits `lowest`
/// when all lists agree, and advances past it. The first list to exhaust ends
/// the walk, so the cost is bounded by the smallest list.
pub fn intersect_heap<L: AsRef<[DocId]>>(lists: &[L]) -> Vec<DocId> {
    if lists.is_empty() || lists.iter().any(|list| list.as_ref().is_empty()) {
        return Vec::new();
    }

    let mut heap = CursorHeap::new(lists.iter().map(|list| list.as_ref()));
    let mut result: Vec<DocId> = Vec::new();
    while let Some(lowest) = heap.peek() {
        let present = heap
            .slots()
            .iter()
            .filter(|slot| slot[0] == lowest)
            .count();
        if present == lists.len() && result.last() != Some(&lowest) {
            result.push(lowest);
        }

        // Consume every occurrence of `lowest`. Each matching list reaches
        // the root before the head moves past `lowest`; once any list runs
        // out, no further common value can exist.
        while heap.peek() == Some(lowest) {
            if !heap.advance_root() {
                return result;
            }
        }
    }
    result
}

/// Intersect any number of sorted posting lists by repeated two-pointer
/// merges; result identical to [`intersect_heap`].
///
/// Precondition: each list is individually sorted in non-decreasing order
/// (not checked; see [`try_intersect_pairwise`]). Any empty input list, or an
/// empty collection, short-circuits to an owned empty result. Inputs are read
/// through borrowed views and never mutated; the internal view collection is
/// sorted by head element, which only affects scan order, not the result.
pub fn intersect_pairwise<L: AsRef<[DocId]>>(lists: &[L]) -> Vec<DocId> {
    if lists.is_empty() {
        return Vec::new();
    }
    let mut views: Vec<&[DocId]> = lists.iter().map(|list| list.as_ref()).collect();
    if views.iter().any(|view| view.is_empty()) {
        return Vec::new();
    }
    views.sort_by_key(|view| view[0]);

    // Deduplicate the seed copy so a single-list call already yields a
    // strictly increasing result.
    let mut running: Vec<DocId> = views[0].to_vec();
    running.dedup();
    for view in &views[1..] {
        running = intersect_two(&running, view);
        if running.is_empty() {
            break;
        }
    }
    running
}

/// Two-pointer merge of two sorted lists, keeping the deduplicated common
/// values. Stops as soon as either side exhausts.
fn intersect_two(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut result: Vec<DocId> = Vec::with_capacity(a.len().min(b.len()));
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                if result.last() != Some(&a[i]) {
                    result.push(a[i]);
                }
                i += 1;
                j += 1;
            }
        }
    }
    result
}

/// Checked variant of [`intersect_heap`]: verifies that every input list is
/// sorted before intersecting.
pub fn try_intersect_heap<L: AsRef<[DocId]>>(lists: &[L]) -> Result<Vec<DocId>> {
    verify_sorted(lists)?;
    Ok(intersect_heap(lists))
}

/// Checked variant of [`intersect_pairwise`]: verifies that every input list
/// is sorted before intersecting.
pub fn try_intersect_pairwise<L: AsRef<[DocId]>>(lists: &[L]) -> Result<Vec<DocId>> {
    verify_sorted(lists)?;
    Ok(intersect_pairwise(lists))
}
