use crate::orst::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort builds the final sorted slice one item at a time. It keeps a prefix of the
/// slice that is already sorted and, for every element after it, moves that element left past
/// every prefix element that is strictly greater than it.
///
/// Because only strictly greater elements are stepped over, equal elements never change their
/// relative order: the sort is stable. An already sorted slice is walked once without a single
/// move, which makes the best case linear. The worst case (reverse sorted input) is quadratic.
///
/// With `smart` set, the insertion point is found by a binary search over the sorted prefix and
/// the element is rotated into place. The search looks for the first prefix element strictly
/// greater than the one being inserted, so the smart variant is stable as well.
///
/// # Usage
///```
/// use lineup_algos::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [2, 6, 7, 3, 4, 5];
/// InsertionSorter::default().sort(&mut slice);
/// assert_eq!(slice, [2, 3, 4, 5, 6, 7]);
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter { smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 1..slice.len() {
            if !self.smart {
                let mut i = unsorted;
                while i > 0 && slice[i - 1] > slice[i] {
                    slice.swap(i - 1, i);
                    i -= 1;
                }
            } else {
                let i = slice[..unsorted].partition_point(|prefix| prefix <= &slice[unsorted]);
                slice[i..=unsorted].rotate_right(1);
            }
        }
    }
}
