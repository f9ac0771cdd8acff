//! `Heap` — a priority queue implemented with a binary heap.
//!
//! The heap is backed by a `Vec<T>` laid out as an implicit binary tree and
//! ordered by a pluggable [`Less`] comparator, so one type covers min-heaps,
//! max-heaps and priority queues keyed on a field. Besides the usual
//! push/pop it can read its top `k` elements in pop order without removing
//! them ([`Heap::peek_array`], [`Heap::iter_sorted`]).
//!
//! Vertical split:
//! - `index`: implicit tree arithmetic
//! - `order`: comparators
//! - `sorted`: non-destructive traversal in pop order
//! - `error`: failure modes
//! - `serialize`: serde support
//! - `tests`: module tests

use core::fmt;

mod error;
mod index;
mod order;
mod serialize;
mod sorted;

pub use error::HeapError;
pub use order::{ByKey, Less, NaturalOrder, ReverseOrder};
pub use sorted::SortedIter;

/// A priority queue implemented with a binary heap.
///
/// The element at the root is always one that no other element ranks ahead
/// of under the comparator `C`. With the default [`NaturalOrder`] that is the
/// smallest element.
///
/// ```rust
/// use peekheap::Heap;
///
/// let mut heap = Heap::new();
/// heap.push_array([5, 3, 8, 1, 9, 2]);
///
/// assert_eq!(heap.peek_array(3), Ok(vec![1, 2, 3]));
/// assert_eq!(heap.len(), 6);
/// assert_eq!(heap.pop_array(None), Ok(vec![1, 2, 3, 5, 8, 9]));
/// ```
#[derive(Clone)]
pub struct Heap<T, C = NaturalOrder> {
    data: Vec<T>,
    less: C,
}

impl<T: PartialOrd> Heap<T> {
    /// Creates an empty min-heap.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty min-heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C> Heap<T, C> {
    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the backing storage to fit the current length.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the comparator this heap was built with.
    pub fn comparator(&self) -> &C {
        &self.less
    }

    /// Returns the backing storage in heap layout (not sorted).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over all elements in storage order, which is arbitrary.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns its storage in heap layout.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Less<T>> Heap<T, C> {
    /// Creates an empty heap ordered by `less`.
    pub fn with_comparator(less: C) -> Self {
        Self {
            data: Vec::new(),
            less,
        }
    }

    /// Creates an empty heap ordered by `less` with room for `capacity`
    /// elements.
    pub fn with_capacity_and_comparator(capacity: usize, less: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Builds a heap from `data` in place, in linear time.
    ///
    /// Every internal node is sifted down, last parent first.
    pub fn from_vec_with_comparator(data: Vec<T>, less: C) -> Self {
        let mut heap = Self { data, less };
        let len = heap.data.len();
        for node in (0..len / 2).rev() {
            heap.sift_down(node);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(len, "heapified vec");
        debug_assert!(heap.is_heap());
        heap
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Pushes every item of `items`, in iteration order.
    pub fn push_array<I: IntoIterator<Item = T>>(&mut self, items: I) {
        #[cfg(feature = "tracing")]
        let before = self.data.len();
        let items = items.into_iter();
        self.data.reserve(items.size_hint().0);
        for item in items {
            self.push(item);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(pushed = self.data.len() - before, len = self.data.len(), "push_array");
    }

    /// Removes and returns the root element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no element.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        // The last element takes the root's slot and sinks back into place.
        let item = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Removes the first `count` elements in pop order, or all of them when
    /// `count` is `None`.
    ///
    /// # Errors
    /// Returns [`HeapError::OutOfRange`] if `count` exceeds [`Heap::len`].
    /// The heap is left untouched in that case.
    pub fn pop_array(&mut self, count: impl Into<Option<usize>>) -> Result<Vec<T>, HeapError> {
        let count = self.checked_count(count.into())?;
        #[cfg(feature = "tracing")]
        tracing::trace!(count, len = self.data.len(), "pop_array");
        (0..count).map(|_| self.pop()).collect()
    }

    /// Returns a reference to the root element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no element.
    pub fn peek_ref(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Returns references to the first `count` elements in pop order, or to
    /// all of them when `count` is `None`, without modifying the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::OutOfRange`] if `count` exceeds [`Heap::len`].
    pub fn peek_array_ref(&self, count: impl Into<Option<usize>>) -> Result<Vec<&T>, HeapError> {
        let count = self.checked_count(count.into())?;
        if count == 0 {
            return Ok(Vec::new());
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(count, len = self.data.len(), "peek_array");
        Ok(self.iter_sorted().take(count).collect())
    }

    /// Iterates over the elements in the order [`Heap::pop`] would return
    /// them, without modifying the heap.
    pub fn iter_sorted(&self) -> SortedIter<'_, T, C> {
        SortedIter::new(self)
    }

    /// Consumes the heap and returns its elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns `true` if no element ranks ahead of its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|node| {
            let parent = index::parent(node);
            !self.less.less(&self.data[node], &self.data[parent])
        })
    }

    fn checked_count(&self, count: Option<usize>) -> Result<usize, HeapError> {
        let len = self.data.len();
        let requested = count.unwrap_or(len);
        if requested > len {
            #[cfg(feature = "tracing")]
            tracing::debug!(requested, len, "heap request out of range");
            return Err(HeapError::OutOfRange { requested, len });
        }
        Ok(requested)
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = index::parent(node);
            if !self.less.less(&self.data[node], &self.data[parent]) {
                break;
            }
            self.data.swap(node, parent);
            node = parent;
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = index::left(node);
            if left >= len {
                break;
            }
            let right = index::right(node);
            let mut child = left;
            if right < len && self.less.less(&self.data[right], &self.data[left]) {
                child = right;
            }

            if !self.less.less(&self.data[child], &self.data[node]) {
                break;
            }
            self.data.swap(node, child);
            node = child;
        }
    }
}

impl<T: Clone, C: Less<T>> Heap<T, C> {
    /// Returns a clone of the root element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no element.
    pub fn peek(&self) -> Result<T, HeapError> {
        self.peek_ref().cloned()
    }

    /// Returns clones of the first `count` elements in pop order, or of all
    /// of them when `count` is `None`, without modifying the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::OutOfRange`] if `count` exceeds [`Heap::len`].
    pub fn peek_array(&self, count: impl Into<Option<usize>>) -> Result<Vec<T>, HeapError> {
        let items = self.peek_array_ref(count)?;
        Ok(items.into_iter().cloned().collect())
    }
}

impl<T, C: Default> Default for Heap<T, C> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            less: C::default(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("len", &self.len())
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T: PartialOrd> From<Vec<T>> for Heap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, NaturalOrder)
    }
}

impl<T, C: Less<T> + Default> FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        heap.push_array(iter);
        heap
    }
}

impl<T, C: Less<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_array(iter);
    }
}

impl<T, C> IntoIterator for Heap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates in storage order; use [`Heap::into_sorted_vec`] for pop order.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
