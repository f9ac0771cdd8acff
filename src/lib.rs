//! # `peekheap` - Binary Heaps You Can Look Into
//!
//! A generic priority queue backed by a contiguous `Vec`, ordered by a
//! pluggable comparator, that can report its top `k` elements in sorted order
//! without removing them.
//!
//! ## Key Features
//!
//! - **Pluggable ordering**: one [`Heap`] type serves as a min-heap
//!   ([`NaturalOrder`]), a max-heap ([`ReverseOrder`] or any
//!   `Fn(&T, &T) -> bool`), or a priority queue keyed on a field ([`ByKey`])
//! - **Non-destructive top-k**: [`Heap::peek_array`] and [`Heap::iter_sorted`]
//!   walk the heap in pop order in `O(k log k)` without touching its storage
//! - **Checked bulk operations**: `pop_array`/`peek_array` reject counts larger
//!   than the heap before any work is done
//! - **serde support**: heaps serialize as plain sequences and re-heapify on
//!   the way back in
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Comparators** ([`Less<T>`]):
//!    - A strict weak ordering `less(a, b)` fixed at construction
//!    - Decides which element sits at the root
//!
//! 2. **Heap** ([`Heap<T, C>`]):
//!    - Implicit binary tree over a `Vec<T>`; children of `n` at `2n + 1`,
//!      `2n + 2`
//!    - `push` sifts up, `pop` swaps the last element into the root and sifts
//!      down, each in `O(log n)`
//!
//! 3. **Sorted traversal** ([`SortedIter`]):
//!    - A second, internal heap holds the frontier of candidate nodes
//!    - Every node it emits adds at most two children to the frontier
//!
//! ### Invariant
//!
//! For every non-root index `i` with parent `p = (i + 1) / 2 - 1`,
//! `less(data[i], data[p])` is false. Every mutating operation restores it
//! before returning; no operation fails after mutating.
//!
//! ## Example
//!
//! ```rust
//! use peekheap::{Heap, HeapError};
//!
//! let mut heap = Heap::new();
//! heap.push_array([5, 3, 8, 1, 9, 2]);
//!
//! // Look at the three smallest without removing them.
//! assert_eq!(heap.peek_array(3), Ok(vec![1, 2, 3]));
//! assert_eq!(heap.len(), 6);
//!
//! assert_eq!(heap.pop_array(10), Err(HeapError::OutOfRange { requested: 10, len: 6 }));
//! assert_eq!(heap.pop_array(None), Ok(vec![1, 2, 3, 5, 8, 9]));
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;

pub use collections::heap::{ByKey, Heap, HeapError, Less, NaturalOrder, ReverseOrder, SortedIter};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Stock comparators are ZSTs, so a default heap is exactly its storage.
    assert!(mem::size_of::<NaturalOrder>() == 0);
    assert!(mem::size_of::<ReverseOrder>() == 0);
    assert!(mem::size_of::<Heap<u64>>() == mem::size_of::<Vec<u64>>());
};
