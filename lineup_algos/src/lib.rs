//! # Introduction
//!
//! Textbook sorting and searching algorithms, generic over any totally ordered type.
//!
//! - [`orst`]: insertion, selection, quick and merge sort, plus a comparison-counting benchmark.
//! - [`search`]: binary search over sorted slices.
//! - [`demo`]: runs every algorithm once on a small fixed input.

pub mod demo;
pub mod orst;
pub mod search;

use clap::Args;

/// Run every algorithm once on the built-in inputs and print the results. Install the
/// [`lineup`](https://crates.io/crates/lineup) crate and run `lineup demo --help` to see what
/// options are available
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Word to look for in the sorted word list.
    #[arg(short, long, default_value_t = String::from(demo::DEFAULT_TARGET))]
    target: String,
}

impl DemoArgs {
    pub fn run(self) {
        let report = demo::run(&self.target);
        print!("{report}");
    }
}

/// Count the comparisons and time every sorter needs on random input.
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Largest list size to benchmark. Sizes step through 0, 1, 100, 10000, 100000 and 1000000.
    #[arg(short, long, default_value_t = 10_000)]
    max_size: usize,
}

impl BenchArgs {
    pub fn run(self) {
        orst::benchmark::run_orst(self.max_size);
    }
}
