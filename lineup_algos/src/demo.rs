//! Runs every algorithm once on a small fixed input and collects the results.
//!
//! [`run`] only computes; printing is left to the [`Display`](fmt::Display) impl of the returned
//! [`DemoReport`], so the results can be checked without capturing standard output.
//!
//! ```
//! use lineup_algos::demo;
//!
//! let report = demo::run("hi");
//! assert_eq!(report.to_string(), "[2, 3, 4, 5, 6, 7]\n".repeat(4) + "2\n");
//! ```

use std::fmt;

use tracing::debug;

use crate::orst::{InsertionSorter, MergeSorter, Orst, QuickSorter, SelectionSorter};
use crate::search::binary_search;

/// The sequence every sort demonstration starts from.
pub const NUMBERS: [i32; 6] = [2, 6, 7, 3, 4, 5];

/// The words the search demonstration sorts and then searches.
pub const WORDS: [&str; 3] = ["hi", "bye", "cya"];

/// The search target used when none is given.
pub const DEFAULT_TARGET: &str = "hi";

/// Results of one demonstration run, in the order they are printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub insertion: Vec<i32>,
    pub quick: Vec<i32>,
    pub merge: Vec<i32>,
    pub selection: Vec<i32>,
    /// Where `target` sits in the sorted [`WORDS`], if anywhere.
    pub search: Option<usize>,
}

/// Runs the demonstration. Each sort works on its own copy of [`NUMBERS`].
pub fn run(target: &str) -> DemoReport {
    let mut insertion = NUMBERS.to_vec();
    insertion.orst(&InsertionSorter::default());
    debug!(?insertion, "insertion sort done");

    let quick = NUMBERS.orsted(&QuickSorter);
    debug!(?quick, "quick sort done");

    let merge = NUMBERS.orsted(&MergeSorter);
    debug!(?merge, "merge sort done");

    let mut selection = NUMBERS.to_vec();
    selection.orst(&SelectionSorter);
    debug!(?selection, "selection sort done");

    let mut words = WORDS.to_vec();
    words.sort();
    let search = binary_search(&words, &target);
    debug!(?words, target, ?search, "binary search done");

    DemoReport {
        insertion,
        quick,
        merge,
        selection,
        search,
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.insertion)?;
        writeln!(f, "{:?}", self.quick)?;
        writeln!(f, "{:?}", self.merge)?;
        writeln!(f, "{:?}", self.selection)?;
        match self.search {
            Some(index) => writeln!(f, "{index}"),
            None => writeln!(f, "not found"),
        }
    }
}
