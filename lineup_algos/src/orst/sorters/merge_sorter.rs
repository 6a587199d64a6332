use crate::orst::CopySorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use lineup_algos::orst::{CopySorter, MergeSorter};
///
/// let slice = [5, 1, 1, 2];
/// assert_eq!(MergeSorter.sorted(&slice), [1, 1, 2, 5]);
///```
///
/// # Explanation
///
/// Merge sort splits the input at its midpoint, sorts both halves and merges them back
/// together. It always takes O(n log n) comparisons, needs O(n) extra memory for the merged
/// output and recurses only O(log n) deep.
///
/// While merging, the head of the left half wins every tie, so equal elements come out in the
/// order they went in: the sort is stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if l <= r { left.next() } else { right.next() };
        merged.extend(next);
    }

    // At most one of these still has elements.
    merged.extend(left);
    merged.extend(right);
    merged
}

fn mergesort<T: Ord + Clone>(slice: &[T]) -> Vec<T> {
    if slice.len() <= 1 {
        return slice.to_vec();
    }

    let mid = slice.len() / 2;
    let (left, right) = slice.split_at(mid);

    merge(mergesort(left), mergesort(right))
}

impl<T> CopySorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sorted(&self, slice: &[T]) -> Vec<T> {
        mergesort(slice)
    }
}
