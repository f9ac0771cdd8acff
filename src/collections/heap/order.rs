//! Heap ordering predicates.
//!
//! A heap never calls `Ord` directly. It asks its comparator whether one
//! element ranks strictly ahead of another, which lets the same code serve as
//! a min-heap, a max-heap, or a priority queue over records.

use core::fmt;

/// A strict "ranks ahead of" predicate over `T`.
///
/// `less(a, b)` returns `true` when `a` must come out of the heap before `b`.
/// Implementations must be a strict weak ordering: irreflexive
/// (`less(a, a)` is false), asymmetric and transitive. The answer for a pair
/// must not change while the pair is stored in a heap.
///
/// Every `Fn(&T, &T) -> bool` closure is a `Less<T>`:
///
/// ```rust
/// use peekheap::Heap;
///
/// let mut heap = Heap::with_comparator(|a: &i32, b: &i32| a > b);
/// heap.push_array([5, 3, 8]);
/// assert_eq!(heap.pop(), Ok(8));
/// ```
pub trait Less<T: ?Sized> {
    /// Returns `true` if `a` ranks strictly ahead of `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Ascending order by `PartialOrd`; turns a heap into a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Less<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order by `PartialOrd`; turns a heap into a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<T: PartialOrd + ?Sized> Less<T> for ReverseOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Ascending order of a key projected out of each element.
///
/// ```rust
/// use peekheap::{ByKey, Heap};
///
/// struct Job { priority: u8, name: &'static str }
///
/// let mut jobs = Heap::with_comparator(ByKey(|j: &Job| j.priority));
/// jobs.push(Job { priority: 3, name: "index" });
/// jobs.push(Job { priority: 1, name: "flush" });
/// assert_eq!(jobs.peek_ref().map(|j| j.name), Ok("flush"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: PartialOrd, F> Less<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

/// Orders frontier entries of a sorted traversal by their value only.
///
/// The source index rides along untouched, so equal values tie in whatever
/// order the frontier heap happens to produce.
pub(crate) struct ByValue<'a, C>(pub(crate) &'a C);

impl<'a, T, C: Less<T>> Less<(&'a T, usize)> for ByValue<'_, C> {
    #[inline]
    fn less(&self, a: &(&'a T, usize), b: &(&'a T, usize)) -> bool {
        self.0.less(a.0, b.0)
    }
}
