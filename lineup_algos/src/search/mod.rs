//! [Binary Search](https://en.wikipedia.org/wiki/Binary_search) over sorted slices.
//!
//! The search never sorts anything itself. Sorting first is a separate, explicit step, offered by
//! [`sort_then_search`].
//!
//! # Example
//!
//! ```
//! use lineup_algos::orst::InsertionSorter;
//! use lineup_algos::search::{binary_search, sort_then_search};
//!
//! let mut words = vec!["hi", "bye", "cya"];
//! assert_eq!(sort_then_search(&InsertionSorter::default(), &mut words, &"hi"), Some(2));
//! assert_eq!(words, ["bye", "cya", "hi"]);
//!
//! assert_eq!(binary_search(&words, &"zzz"), None);
//! ```

mod error;

pub use error::{Error, Result};

use crate::orst::{first_unsorted, Sorter};

/// A search over a slice that yields the index of a matching element.
pub trait Searcher<T>
where
    T: Ord,
{
    fn search(&self, slice: &[T], target: &T) -> Option<usize>;
}

/// [`binary_search`] as a [`Searcher`].
///
/// ```
/// use lineup_algos::search::{BinarySearcher, Searcher};
///
/// assert_eq!(BinarySearcher.search(&[1, 3, 5, 7], &7), Some(3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearcher;

impl<T> Searcher<T> for BinarySearcher
where
    T: Ord,
{
    #[inline]
    fn search(&self, slice: &[T], target: &T) -> Option<usize> {
        binary_search(slice, target)
    }
}

/// Returns the index of an element equal to `target`, or `None` if there is none.
///
/// `slice` must already be sorted in non-decreasing order. On unsorted input the result is
/// meaningless: a wrong `None`, or the index of whichever equal element the probes happen to hit.
/// Debug builds assert the precondition; use [`try_binary_search`] to have it checked and
/// reported instead.
///
/// When `target` occurs more than once, the returned index may be any one of its occurrences.
///
/// ```
/// use lineup_algos::search::binary_search;
///
/// let words = ["bye", "cya", "hi"];
/// assert_eq!(binary_search(&words, &"hi"), Some(2));
/// assert_eq!(binary_search(&words, &"zzz"), None);
/// assert_eq!(binary_search::<i32>(&[], &1), None);
/// ```
pub fn binary_search<T: Ord>(slice: &[T], target: &T) -> Option<usize> {
    debug_assert!(
        first_unsorted(slice).is_none(),
        "binary_search called on an unsorted slice"
    );

    if slice.is_empty() {
        return None;
    }

    // Both bounds are inclusive.
    let mut lower = 0;
    let mut upper = slice.len() - 1;

    while lower <= upper {
        let mid = lower + (upper - lower) / 2;
        let probe = &slice[mid];

        if probe == target {
            return Some(mid);
        } else if target < probe {
            if mid == 0 {
                return None;
            }
            upper = mid - 1;
        } else {
            lower = mid + 1;
        }
    }

    None
}

/// Like [`binary_search`], but first verifies that `slice` is sorted.
///
/// ```
/// use lineup_algos::search::{try_binary_search, Error};
///
/// assert_eq!(try_binary_search(&[1, 2, 3], &2), Ok(Some(1)));
/// assert_eq!(
///     try_binary_search(&["hi", "bye", "cya"], &"hi"),
///     Err(Error::Unsorted { index: 1 })
/// );
/// ```
pub fn try_binary_search<T: Ord>(slice: &[T], target: &T) -> Result<Option<usize>> {
    if let Some(index) = first_unsorted(slice) {
        return Err(Error::Unsorted { index });
    }
    Ok(binary_search(slice, target))
}

/// Sorts `slice` in place with `sorter`, then binary searches it for `target`.
///
/// The returned index refers to the sorted order, which is left in `slice`.
pub fn sort_then_search<T, S>(sorter: &S, slice: &mut [T], target: &T) -> Option<usize>
where
    T: Ord,
    S: Sorter<T>,
{
    sorter.sort(slice);
    binary_search(slice, target)
}
