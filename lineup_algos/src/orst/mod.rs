//! Classic comparison sorts, each exposed through one of two explicit contracts:
//!
//! - [`Sorter`] rearranges a slice in place ([`InsertionSorter`], [`SelectionSorter`]).
//! - [`CopySorter`] leaves its input untouched and builds a new sorted [`Vec`] ([`QuickSorter`],
//!   [`MergeSorter`]).
//!
//! Callers always know which semantics they get from the trait they call through. The [`Orst`]
//! extension trait makes both available as methods on slices.
//!
//! # Example
//!
//! ```
//! use lineup_algos::orst::{CopySorter, InsertionSorter, MergeSorter, Sorter};
//!
//! let mut slice = vec![2, 6, 7, 3, 4, 5];
//! InsertionSorter::default().sort(&mut slice);
//! assert_eq!(vec![2, 3, 4, 5, 6, 7], slice);
//!
//! let input = [5, 1, 1, 2];
//! assert_eq!(MergeSorter.sorted(&input), vec![1, 1, 2, 5]);
//! assert_eq!(input, [5, 1, 1, 2]);
//! ```

pub mod benchmark;
mod sorters;

pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;

/// An in-place sorting algorithm. After `sort` returns, `slice` is a permutation of its previous
/// contents in non-decreasing order.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// A sorting algorithm that never mutates its input and returns a freshly allocated, sorted copy.
pub trait CopySorter<T>
where
    T: Ord + Clone,
{
    fn sorted(&self, slice: &[T]) -> Vec<T>;
}

/// Sort a slice by naming the algorithm at the call site.
///
/// ```
/// use lineup_algos::orst::{Orst, QuickSorter, SelectionSorter};
///
/// let mut v = vec![3, 1, 2];
/// assert_eq!(v.orsted(&QuickSorter), vec![1, 2, 3]);
///
/// v.orst(&SelectionSorter);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub trait Orst<T>
where
    T: Ord,
{
    /// Sorts `self` in place with `sorter` and hands it back for chaining.
    fn orst<S: Sorter<T>>(&mut self, sorter: &S) -> &mut Self;

    /// Returns a sorted copy of `self`, built by `sorter`.
    fn orsted<S: CopySorter<T>>(&self, sorter: &S) -> Vec<T>
    where
        T: Clone;
}

impl<T> Orst<T> for [T]
where
    T: Ord,
{
    fn orst<S: Sorter<T>>(&mut self, sorter: &S) -> &mut Self {
        sorter.sort(self);
        self
    }

    fn orsted<S: CopySorter<T>>(&self, sorter: &S) -> Vec<T>
    where
        T: Clone,
    {
        sorter.sorted(self)
    }
}

/// Returns true if every element is `<=` its successor.
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    first_unsorted(slice).is_none()
}

// Index of the first element that is smaller than its predecessor.
pub(crate) fn first_unsorted<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|i| i + 1)
}
