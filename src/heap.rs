//! K-way merge infrastructure: a binary min-heap over the remaining suffixes
//! of a group of posting lists.
//!
//! Each heap slot is a borrowed slice view of one input list's unconsumed
//! tail, and slots are ordered by their head (first) element. Advancing a list
//! re-slices its view in place, so no per-step allocation happens. A plain
//! `std::collections::BinaryHeap` does not fit here because the merge loops
//! need to restore heap order at a known index after mutating the slot held
//! there, so the sift operations are implemented directly over a `Vec`.

use crate::docid::DocId;

/// Min-heap of non-empty posting-list suffixes, keyed on the head element.
pub(crate) struct CursorHeap<'a> {
    slots: Vec<&'a [DocId]>,
}

impl<'a> CursorHeap<'a> {
    /// Build a heap over the given lists, silently skipping empty ones.
    /// Heapifies bottom-up in O(K).
    pub(crate) fn new<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [DocId]>,
    {
        let slots: Vec<&[DocId]> = lists.into_iter().filter(|list| !list.is_empty()).collect();
        let mut heap = CursorHeap { slots };
        for index in (0..heap.slots.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// The smallest head element across all remaining lists.
    pub(crate) fn peek(&self) -> Option<DocId> {
        self.slots.first().map(|slot| slot[0])
    }

    /// All slots in backing-storage order. Only the multiset of heads is
    /// meaningful to callers; the order is heap layout, not sorted order.
    pub(crate) fn slots(&self) -> &[&'a [DocId]] {
        &self.slots
    }

    /// Insert another non-empty list suffix.
    #[allow(dead_code)]
    pub(crate) fn push(&mut self, list: &'a [DocId]) {
        if list.is_empty() {
            return;
        }
        self.slots.push(list);
        self.sift_up(self.slots.len() - 1);
    }

    /// Remove and return the suffix with the smallest head.
    pub(crate) fn pop(&mut self) -> Option<&'a [DocId]> {
        if self.slots.is_empty() {
            return None;
        }
        let top = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Drop the head element of the minimum list and restore heap order.
    ///
    /// Returns `false` when that list is now exhausted (and has been removed
    /// from the heap), `true` when it still has elements. Calling this on an
    /// empty heap returns `false`.
    pub(crate) fn advance_root(&mut self) -> bool {
        let Some(&root) = self.slots.first() else {
            return false;
        };
        if root.len() == 1 {
            self.pop();
            false
        } else {
            self.slots[0] = &root[1..];
            self.sift_down(0);
            true
        }
    }

    fn head(&self, index: usize) -> DocId {
        self.slots[index][0]
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < len && self.head(left) < self.head(smallest) {
                smallest = left;
            }
            if right < len && self.head(right) < self.head(smallest) {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.slots.swap(index, smallest);
            index = smallest;
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.head(parent) <= self.head(index) {
                return;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_heads(mut heap: CursorHeap<'_>) -> Vec<DocId> {
        let mut heads = Vec::new();
        while let Some(head) = heap.peek() {
            heads.push(head);
            heap.advance_root();
        }
        heads
    }

    #[test]
    fn test_new_skips_empty_lists() {
        let a: &[DocId] = &[];
        let b: &[DocId] = &[1, 2];
        let heap = CursorHeap::new([a, b]);
        assert_eq!(heap.slots().len(), 1);
    }

    #[test]
    fn test_peek_returns_minimum_head() {
        let lists: [&[DocId]; 3] = [&[9, 10], &[3, 4], &[7]];
        let heap = CursorHeap::new(lists);
        assert_eq!(heap.peek(), Some(3));
    }

    #[test]
    fn test_advance_root_yields_non_decreasing_heads() {
        let lists: [&[DocId]; 3] = [&[1, 5, 9], &[2, 5, 8], &[3, 4, 10]];
        let heads = drain_heads(CursorHeap::new(lists));
        assert_eq!(heads, vec![1, 2, 3, 4, 5, 5, 8, 9, 10]);
    }

    #[test]
    fn test_advance_root_reports_exhaustion() {
        let lists: [&[DocId]; 2] = [&[1], &[2, 3]];
        let mut heap = CursorHeap::new(lists);
        // Root holds [1]; dropping its only element removes the list.
        assert!(!heap.advance_root());
        assert_eq!(heap.peek(), Some(2));
        assert!(heap.advance_root());
        assert!(!heap.advance_root());
        assert!(heap.peek().is_none());
    }

    #[test]
    fn test_push_and_pop_keep_heap_order() {
        let mut heap = CursorHeap::new(std::iter::empty::<&[DocId]>());
        heap.push(&[5, 6]);
        heap.push(&[2]);
        heap.push(&[]);
        heap.push(&[4, 9]);
        assert_eq!(heap.pop(), Some(&[2][..]));
        assert_eq!(heap.pop(), Some(&[4, 9][..]));
        assert_eq!(heap.pop(), Some(&[5, 6][..]));
        assert_eq!(heap.pop(), None);
    }
}
