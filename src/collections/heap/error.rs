use core::fmt;

/// The error type for heap operations that cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no element to pop or peek.
    Empty,
    /// More elements were requested than the heap holds.
    OutOfRange {
        /// Number of elements asked for.
        requested: usize,
        /// Number of elements in the heap.
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("heap is empty"),
            Self::OutOfRange { requested, len } => {
                write!(f, "requested {requested} elements from a heap of {len}")
            }
        }
    }
}

impl std::error::Error for HeapError {}
