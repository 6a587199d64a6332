use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{self, Rng};
use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};
use tracing::{debug, info};

use prettytable::{row, Table};

use super::{CopySorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, Sorter};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;
const MILLION: usize = 1_000_000;

/// Every list size the benchmark knows about. [`run_orst`] stops at its `max_size`.
pub const SIZES: [usize; 6] = [ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND, MILLION];

/// Above this many elements the quadratic sorters are skipped.
pub const QUADRATIC_LIMIT: usize = HUNDRED_THOUSAND;

// The `elem` is what gets compared; every comparison also bumps `comparison_counter`.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    // Shared by every element of one run, so it lives behind a reference counter and a cell.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

// `cmp`, `partial_cmp` and `eq` all have to agree, and each of them counts exactly once.
impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// One row of the benchmark table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub sorter: &'static str,
    /// `None` when the sorter was skipped for this size.
    pub comparisons: Option<usize>,
    pub elapsed: Option<Duration>,
}

impl Measurement {
    fn skipped(sorter: &'static str) -> Self {
        Self {
            sorter,
            comparisons: None,
            elapsed: None,
        }
    }
}

fn run_bench<T, S>(
    sorter: &S,
    values: &[SortEvaluator<T>],
    comparisons: &Rc<Cell<usize>>,
) -> (usize, Duration)
where
    T: Ord + Clone,
    S: Sorter<SortEvaluator<T>>,
{
    let mut values = values.to_vec();
    comparisons.set(0);

    let now = Instant::now();
    sorter.sort(&mut values);
    (comparisons.get(), now.elapsed())
}

fn run_copy_bench<T, S>(
    sorter: &S,
    values: &[SortEvaluator<T>],
    comparisons: &Rc<Cell<usize>>,
) -> (usize, Duration)
where
    T: Ord + Clone,
    S: CopySorter<SortEvaluator<T>>,
{
    comparisons.set(0);

    let now = Instant::now();
    let sorted = sorter.sorted(values);
    let elapsed = now.elapsed();
    debug_assert_eq!(sorted.len(), values.len());
    (comparisons.get(), elapsed)
}

/// Sorts one random list of `n` integers with every sorter, each on a fresh copy, and returns
/// how many comparisons and how much time every sorter needed.
pub fn measure(n: usize) -> Vec<Measurement> {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));
    let values = (0..n)
        .map(|_| SortEvaluator::new(random.gen::<i32>(), counter.clone()))
        .collect::<Vec<_>>();

    let mut measurements = Vec::with_capacity(5);
    if n > QUADRATIC_LIMIT {
        measurements.extend([
            Measurement::skipped("Insertion Sort"),
            Measurement::skipped("Insertion Sort (smart)"),
            Measurement::skipped("Selection Sort"),
        ]);
    }

    let mut record = |sorter: &'static str, (comparisons, elapsed): (usize, Duration)| {
        debug!(sorter, n, comparisons, ?elapsed, "sorter finished");
        measurements.push(Measurement {
            sorter,
            comparisons: Some(comparisons),
            elapsed: Some(elapsed),
        });
    };

    if n <= QUADRATIC_LIMIT {
        record(
            "Insertion Sort",
            run_bench(&InsertionSorter { smart: false }, &values, &counter),
        );
        record(
            "Insertion Sort (smart)",
            run_bench(&InsertionSorter { smart: true }, &values, &counter),
        );
        record("Selection Sort", run_bench(&SelectionSorter, &values, &counter));
    }

    record("Quick Sort", run_copy_bench(&QuickSorter, &values, &counter));
    record("Merge Sort", run_copy_bench(&MergeSorter, &values, &counter));

    measurements
}

/// Benchmarks every sorter on random lists of each size in [`SIZES`] up to `max_size` and prints
/// one table per size.
pub fn run_orst(max_size: usize) {
    let sizes = SIZES
        .iter()
        .copied()
        .filter(|&n| n <= max_size)
        .collect::<Vec<_>>();
    info!(?sizes, "starting sort benchmark");

    let pb = ProgressBar::new(sizes.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Sizes: ({pos}/{len})",
    ) {
        pb.set_style(style);
    }

    for n in sizes {
        let measurements = measure(n);
        pb.inc(1);

        pb.suspend(|| {
            println!(
                "{} {}",
                "List Size -> ".bold().underline().blue(),
                n.to_string().bold()
            );

            let mut table = Table::new();
            table.add_row(row![
                "Sorter".bold(),
                "Comparisons Made".bold(),
                "Time Taken".bold()
            ]);

            for m in measurements {
                match (m.comparisons, m.elapsed) {
                    (Some(comparisons), Some(elapsed)) => table.add_row(row![
                        m.sorter,
                        comparisons.to_string(),
                        format!("{elapsed:?}")
                    ]),
                    _ => table.add_row(row![m.sorter, "Not Doing It".red(), "Too Slow"]),
                };
            }

            table.printstd();
            println!();
        });
    }

    pb.finish_and_clear();
}
