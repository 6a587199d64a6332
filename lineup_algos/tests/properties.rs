use lineup_algos::orst::*;
use lineup_algos::search::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

struct TestLists {
    lists: Vec<Vec<i32>>,
}

impl TestLists {
    fn new() -> Self {
        let mut random = StdRng::seed_from_u64(0x5eed);
        let mut lists: Vec<Vec<i32>> =
            vec![vec![], vec![42], (0..50).collect(), (0..50).rev().collect()];

        for len in [2, 3, 7, 16, 33, 100, 257] {
            // Narrow ranges force plenty of duplicates.
            lists.push((0..len).map(|_| random.gen_range(-5..5)).collect());
            lists.push((0..len).map(|_| random.gen::<i32>()).collect());
        }

        TestLists { lists }
    }

    fn expected(list: &[i32]) -> Vec<i32> {
        let mut expected = list.to_vec();
        expected.sort();
        expected
    }

    fn check_in_place<S: Sorter<i32>>(&self, sorter: S) {
        for list in &self.lists {
            let mut sorted = list.clone();
            sorter.sort(&mut sorted);
            assert_eq!(sorted, Self::expected(list), "input: {list:?}");
        }
    }

    fn check_copy<S: CopySorter<i32>>(&self, sorter: S) {
        for list in &self.lists {
            let sorted = sorter.sorted(list);
            assert_eq!(sorted, Self::expected(list), "input: {list:?}");
        }
    }
}

// Equal `key`s compare equal; `seq` records the original position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record {
    key: u8,
    seq: usize,
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

fn records(len: usize) -> Vec<Record> {
    let mut random = StdRng::seed_from_u64(len as u64);
    (0..len)
        .map(|seq| Record {
            key: random.gen_range(0..4),
            seq,
        })
        .collect()
}

// `sort_by_key` is stable, so it gives the one correct stable answer.
fn stable_reference(list: &[Record]) -> Vec<Record> {
    let mut expected = list.to_vec();
    expected.sort_by_key(|r| r.key);
    expected
}

mod matches_std {
    use super::*;

    #[test]
    fn insertion() {
        TestLists::new().check_in_place(InsertionSorter { smart: false });
    }

    #[test]
    fn insertion_smart() {
        TestLists::new().check_in_place(InsertionSorter { smart: true });
    }

    #[test]
    fn selection() {
        TestLists::new().check_in_place(SelectionSorter);
    }

    #[test]
    fn quick() {
        TestLists::new().check_copy(QuickSorter);
    }

    #[test]
    fn merge() {
        TestLists::new().check_copy(MergeSorter);
    }
}

mod idempotent {
    use super::*;

    #[test]
    fn sorting_twice_changes_nothing() {
        for list in TestLists::new().lists {
            let once = list.orsted(&MergeSorter);

            assert_eq!(once.orsted(&QuickSorter), once);
            assert_eq!(once.orsted(&MergeSorter), once);

            let mut twice = once.clone();
            twice.orst(&InsertionSorter::default());
            assert_eq!(twice, once);

            twice.orst(&SelectionSorter);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn output_is_ordered() {
        for list in TestLists::new().lists {
            assert!(is_sorted(&list.orsted(&QuickSorter)));
            assert!(is_sorted(&list.orsted(&MergeSorter)));
        }
    }
}

mod stability {
    use super::*;

    #[test]
    fn merge_sort_keeps_equal_keys_in_order() {
        for len in [0, 1, 2, 9, 64, 301] {
            let list = records(len);
            assert_eq!(MergeSorter.sorted(&list), stable_reference(&list));
        }
    }

    #[test]
    fn insertion_sort_keeps_equal_keys_in_order() {
        for smart in [false, true] {
            for len in [0, 1, 2, 9, 64, 301] {
                let list = records(len);
                let mut sorted = list.clone();
                InsertionSorter { smart }.sort(&mut sorted);
                assert_eq!(sorted, stable_reference(&list), "smart: {smart}");
            }
        }
    }

    #[test]
    fn unstable_sorts_still_keep_every_record() {
        let list = records(200);
        let mut by_seq = QuickSorter.sorted(&list);
        by_seq.sort_by_key(|r| r.seq);
        assert_eq!(by_seq, list);

        let mut selected = list.clone();
        SelectionSorter.sort(&mut selected);
        assert!(is_sorted(&selected));
        selected.sort_by_key(|r| r.seq);
        assert_eq!(selected, list);
    }
}

mod searching {
    use super::*;

    #[test]
    fn every_present_value_is_found() {
        for list in TestLists::new().lists {
            let sorted = list.orsted(&MergeSorter);
            for x in &list {
                let i = binary_search(&sorted, x).expect("present value not found");
                assert_eq!(&sorted[i], x);
            }
        }
    }

    #[test]
    fn absent_values_are_not_found() {
        let evens = (0..200).map(|x| x * 2).collect::<Vec<i32>>();
        for odd in (-1..401).step_by(2) {
            assert_eq!(binary_search(&evens, &odd), None);
        }
    }

    #[test]
    fn greetings() {
        let mut words = vec!["hi", "bye", "cya"];
        words.sort();
        assert_eq!(binary_search(&words, &"hi"), Some(2));
        assert_eq!(binary_search(&words, &"zzz"), None);
        assert_eq!(try_binary_search(&words, &"cya"), Ok(Some(1)));
    }

    #[test]
    fn searcher_agrees_with_std() {
        let sorted = (0..100).map(|x| x * 7).collect::<Vec<i32>>();
        for target in 0..700 {
            assert_eq!(
                BinarySearcher.search(&sorted, &target),
                sorted.binary_search(&target).ok()
            );
        }
    }
}
