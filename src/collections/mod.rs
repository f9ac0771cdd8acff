//! Collections.
//!
//! - `heap`: binary heap with pluggable ordering and sorted peeking

pub mod heap;

pub use heap::{Heap, HeapError, SortedIter};
