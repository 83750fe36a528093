use remove_where::CharString;

use crate::benchmarks;

/// Baseline input shared by all timed runs of one benchmark, produced once
/// by its setup function.
pub enum Workload {
    Strings(Vec<String>),
    Ints(Vec<usize>),
    Chars(CharString),
}

impl Workload {
    pub fn strings(&self) -> &[String] {
        match self {
            Workload::Strings(v) => v,
            _ => panic!("Benchmark expects a string workload"),
        }
    }

    pub fn ints(&self) -> &[usize] {
        match self {
            Workload::Ints(v) => v,
            _ => panic!("Benchmark expects an int workload"),
        }
    }

    pub fn chars(&self) -> &CharString {
        match self {
            Workload::Chars(s) => s,
            _ => panic!("Benchmark expects a char workload"),
        }
    }
}

/// Descriptor tying a benchmark name to its setup and run functions.
///
/// The run function receives the shared workload and a scale factor (number
/// of internal repetitions per timed call) and reports how many predicate
/// evaluations it performed. The legacy factor normalizes reported times
/// against historical baselines that ran with larger internal loops.
#[derive(Clone, Copy)]
pub struct BenchmarkInfo {
    pub name: &'static str,
    pub setup: fn() -> Workload,
    pub run: fn(&Workload, usize) -> u64,
    pub legacy_factor: usize,
}

/// The full benchmark table, constructed at startup.
pub fn all_benchmarks() -> Vec<BenchmarkInfo> {
    vec![
        // Repeated single-element removal in generic code.
        BenchmarkInfo {
            name: "quadratic_strings",
            setup: benchmarks::setup_strings,
            run: benchmarks::run_quadratic_strings,
            legacy_factor: 20,
        },
        BenchmarkInfo {
            name: "quadratic_ints",
            setup: benchmarks::setup_ints,
            run: benchmarks::run_quadratic_ints,
            legacy_factor: 49,
        },
        // Whole-sequence reconstruction.
        BenchmarkInfo {
            name: "filter_strings",
            setup: benchmarks::setup_strings,
            run: benchmarks::run_filter_strings,
            legacy_factor: 4,
        },
        BenchmarkInfo {
            name: "filter_ints",
            setup: benchmarks::setup_ints,
            run: benchmarks::run_filter_ints,
            legacy_factor: 4,
        },
        // These two isolate the cost of element assignment vs swapping.
        BenchmarkInfo {
            name: "move_strings",
            setup: benchmarks::setup_strings,
            run: benchmarks::run_move_strings,
            legacy_factor: 4,
        },
        BenchmarkInfo {
            name: "move_ints",
            setup: benchmarks::setup_ints,
            run: benchmarks::run_move_ints,
            legacy_factor: 4,
        },
        BenchmarkInfo {
            name: "swap_strings",
            setup: benchmarks::setup_strings,
            run: benchmarks::run_swap_strings,
            legacy_factor: 4,
        },
        BenchmarkInfo {
            name: "swap_ints",
            setup: benchmarks::setup_ints,
            run: benchmarks::run_swap_ints,
            legacy_factor: 4,
        },
        // Character iteration over a single long string.
        BenchmarkInfo {
            name: "filter_chars",
            setup: benchmarks::setup_chars,
            run: benchmarks::run_filter_chars,
            legacy_factor: 1,
        },
        BenchmarkInfo {
            name: "quadratic_chars",
            setup: benchmarks::setup_chars,
            run: benchmarks::run_quadratic_chars,
            legacy_factor: 1,
        },
    ]
}
