use std::cmp::Ordering;

use crate::orst::CopySorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort) that builds a new
/// vector instead of partitioning in place.
///
/// # Usage
///```
/// use lineup_algos::orst::{CopySorter, QuickSorter};
///
/// let slice = [2, 6, 7, 3, 4, 5];
/// assert_eq!(QuickSorter.sorted(&slice), [2, 3, 4, 5, 6, 7]);
/// // the input is left as it was
/// assert_eq!(slice, [2, 6, 7, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is a divide-and-conquer algorithm. It selects a 'pivot' element and partitions the
/// other elements into two groups, according to whether they are less than or greater than the
/// pivot. The groups are then sorted the same way and concatenated around the pivot.
///
/// # Algorithm
///
/// The pivot is always the first element. Every element equal to the pivot is collected into a
/// run that is emitted, pivot first, between the two sorted groups, so duplicates of the pivot
/// are neither lost nor repeated.
///
/// Already sorted (or reverse sorted) input degrades this pivot choice to O(n²) and splits off
/// only one element per step. The steps are therefore kept on a heap-allocated work list rather
/// than the call stack, and a long sorted run can not overflow the stack.
///
/// The sort is not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

enum Task<T> {
    // A group that still has to be sorted.
    Sort(Vec<T>),
    // A run of equal elements that goes straight to the output.
    Emit(Vec<T>),
}

fn quicksort<T: Ord + Clone>(slice: &[T]) -> Vec<T> {
    let mut output = Vec::with_capacity(slice.len());
    let mut pending = vec![Task::Sort(slice.to_vec())];

    // Tasks are popped in output order: the less group is pushed last so it is handled first.
    while let Some(task) = pending.pop() {
        let group = match task {
            Task::Emit(run) => {
                output.extend(run);
                continue;
            }
            Task::Sort(group) if group.len() <= 1 => {
                output.extend(group);
                continue;
            }
            Task::Sort(group) => group,
        };

        let mut items = group.into_iter();
        let Some(pivot) = items.next() else {
            continue;
        };

        let mut less = Vec::new();
        let mut equal = Vec::new();
        let mut greater = Vec::new();
        for item in items {
            match item.cmp(&pivot) {
                Ordering::Less => less.push(item),
                Ordering::Equal => equal.push(item),
                Ordering::Greater => greater.push(item),
            }
        }
        equal.insert(0, pivot);

        pending.push(Task::Sort(greater));
        pending.push(Task::Emit(equal));
        pending.push(Task::Sort(less));
    }

    output
}

impl<T> CopySorter<T> for QuickSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sorted(&self, slice: &[T]) -> Vec<T> {
        quicksort(slice)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let slice = [1, 5, 4, 2, 3];
        assert_eq!(QuickSorter.sorted(&slice), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn demo_array() {
        let slice = [2, 6, 7, 3, 4, 5];
        assert_eq!(QuickSorter.sorted(&slice), [2, 3, 4, 5, 6, 7]);
        assert_eq!(slice, [2, 6, 7, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let slice = (1..10).collect::<Vec<_>>();
        assert_eq!(QuickSorter.sorted(&slice), (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let slice = (1..1000).rev().collect::<Vec<_>>();
        assert_eq!(QuickSorter.sorted(&slice), (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn pivot_duplicates_are_kept() {
        let slice = [3, 1, 3, 2, 3, 0];
        assert_eq!(QuickSorter.sorted(&slice), [0, 1, 2, 3, 3, 3]);

        let all_same = [7; 16];
        assert_eq!(QuickSorter.sorted(&all_same), [7; 16]);
    }

    #[test]
    fn long_sorted_run_does_not_overflow() {
        let slice = (0..5_000).collect::<Vec<_>>();
        assert_eq!(QuickSorter.sorted(&slice), slice);

        let reversed = slice.iter().rev().copied().collect::<Vec<_>>();
        assert_eq!(QuickSorter.sorted(&reversed), slice);
    }

    #[test]
    fn simple_edge_cases() {
        let empty: Vec<i32> = vec![];
        assert!(QuickSorter.sorted(&empty).is_empty());

        assert_eq!(QuickSorter.sorted(&[1]), vec![1]);
        assert_eq!(QuickSorter.sorted(&[1, 2]), vec![1, 2]);
        assert_eq!(QuickSorter.sorted(&[2, 1]), vec![1, 2]);
        assert_eq!(QuickSorter.sorted(&[3, 1, 2]), vec![1, 2, 3]);
    }

    #[test]
    fn strings() {
        let slice = ["hi", "bye", "cya"];
        assert_eq!(QuickSorter.sorted(&slice), ["bye", "cya", "hi"]);
    }
}
