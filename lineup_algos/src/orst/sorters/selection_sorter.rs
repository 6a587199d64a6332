use crate::orst::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use lineup_algos::orst::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting algorithm. It has an O(n²) time complexity
/// no matter how the input is ordered, and it is not stable: the swap that brings the minimum
/// forward can jump an element over others equal to it.
///
/// # Algorithm
///
/// The slice is split into a sorted prefix, which starts out empty, and the unsorted rest. Each
/// pass scans the rest for its smallest element, comparing every candidate against the smallest
/// one seen so far in that pass, and swaps it to the front of the rest. The prefix then grows by
/// one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 0..slice.len() {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..slice.len() {
                if slice[i] < slice[smallest_in_rest] {
                    smallest_in_rest = i;
                }
            }
            if unsorted != smallest_in_rest {
                slice.swap(unsorted, smallest_in_rest);
            }
        }
    }
}
