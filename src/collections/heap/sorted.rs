//! Non-destructive traversal of a heap in pop order.
//!
//! The heap invariant says every node ranks no worse than its children, so
//! the next element in pop order is always a child of something already
//! emitted (or the root). `SortedIter` keeps those candidates in a small
//! frontier heap: emitting a node costs one frontier pop and at most two
//! frontier pushes, and the traversed heap is only ever read.

use core::iter::FusedIterator;

use super::index;
use super::order::{ByValue, Less};
use super::Heap;

/// Iterator over a heap's elements in the order `pop` would return them.
///
/// Created by [`Heap::iter_sorted`]. Taking the first `k` items costs
/// `O(k log k)` comparisons regardless of the heap's size.
pub struct SortedIter<'a, T, C> {
    data: &'a [T],
    frontier: Heap<(&'a T, usize), ByValue<'a, C>>,
    remaining: usize,
}

impl<'a, T, C: Less<T>> SortedIter<'a, T, C> {
    pub(super) fn new(heap: &'a Heap<T, C>) -> Self {
        let data = heap.as_slice();
        let mut frontier = Heap::with_comparator(ByValue(heap.comparator()));
        if let Some(root) = data.first() {
            frontier.push((root, 0));
        }
        Self {
            data,
            frontier,
            remaining: data.len(),
        }
    }
}

impl<'a, T, C: Less<T>> Iterator for SortedIter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (value, node) = self.frontier.pop().ok()?;
        let data = self.data;
        for child in index::children(node, data.len()) {
            self.frontier.push((&data[child], child));
        }
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C: Less<T>> ExactSizeIterator for SortedIter<'_, T, C> {}

impl<T, C: Less<T>> FusedIterator for SortedIter<'_, T, C> {}
