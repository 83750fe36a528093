use super::helpers;
use super::helpers::EveryNth;
use super::registry::{all_benchmarks, BenchmarkInfo, Workload};

use remove_where::{
    remove_where_filter, remove_where_move, remove_where_quadratic, remove_where_swap, CharString,
    Sequence,
};

use std::hint::black_box;
use std::time::Instant;

/// Number of elements in the string and int workloads.
pub const NUM_ELEMENTS: usize = 2_500;

/// Every 8th predicate evaluation marks an element for removal.
pub const REMOVAL_PERIOD: u64 = 8;

const CHAR_WORKLOAD_PIECE: &str = "A very long ASCII string.";
const CHAR_WORKLOAD_REPEATS: usize = 200;

pub fn setup_strings() -> Workload {
    Workload::Strings(
        (0 .. NUM_ELEMENTS)
            .map(|i| format!("{}: a string long enough to defeat small string optimizations", i))
            .collect(),
    )
}

pub fn setup_ints() -> Workload {
    Workload::Ints((0 .. NUM_ELEMENTS).collect())
}

pub fn setup_chars() -> Workload {
    let text = CHAR_WORKLOAD_PIECE.repeat(CHAR_WORKLOAD_REPEATS);
    Workload::Chars(CharString::from(text.as_str()))
}

// Every run function clones the baseline workload per repetition, removes
// every 8th element in predicate-evaluation order, and reports the number of
// predicate evaluations performed.

fn bench_removal<T, F>(base: &[T], scale: usize, remove: F) -> u64
where
    T: Clone,
    F: Fn(&mut Vec<T>, &mut EveryNth),
{
    let mut calls = 0;
    for _ in 0 .. scale {
        let mut data = base.to_vec();
        let mut pred = EveryNth::new(REMOVAL_PERIOD);
        remove(&mut data, &mut pred);
        black_box(&data);
        calls += pred.calls();
    }
    calls
}

fn bench_char_removal<F>(base: &CharString, scale: usize, remove: F) -> u64
where
    F: Fn(&mut CharString, &mut EveryNth),
{
    let mut calls = 0;
    for _ in 0 .. scale {
        let mut data = base.clone();
        data.push('!');
        let mut pred = EveryNth::new(REMOVAL_PERIOD);
        remove(&mut data, &mut pred);
        black_box(&data);
        calls += pred.calls();
    }
    calls
}

pub fn run_quadratic_strings(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.strings(), scale, |data, pred| {
        remove_where_quadratic(data, |_| pred.step())
    })
}

pub fn run_quadratic_ints(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.ints(), scale, |data, pred| {
        remove_where_quadratic(data, |_| pred.step())
    })
}

pub fn run_filter_strings(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.strings(), scale, |data, pred| {
        remove_where_filter(data, |_| pred.step())
    })
}

pub fn run_filter_ints(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.ints(), scale, |data, pred| {
        remove_where_filter(data, |_| pred.step())
    })
}

pub fn run_move_strings(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.strings(), scale, |data, pred| {
        remove_where_move(data, |_| pred.step())
    })
}

pub fn run_move_ints(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.ints(), scale, |data, pred| {
        remove_where_move(data, |_| pred.step())
    })
}

pub fn run_swap_strings(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.strings(), scale, |data, pred| {
        remove_where_swap(data, |_| pred.step())
    })
}

pub fn run_swap_ints(workload: &Workload, scale: usize) -> u64 {
    bench_removal(workload.ints(), scale, |data, pred| {
        remove_where_swap(data, |_| pred.step())
    })
}

pub fn run_filter_chars(workload: &Workload, scale: usize) -> u64 {
    bench_char_removal(workload.chars(), scale, |data, pred| {
        remove_where_filter(data, |_| pred.step())
    })
}

pub fn run_quadratic_chars(workload: &Workload, scale: usize) -> u64 {
    bench_char_removal(workload.chars(), scale, |data, pred| {
        remove_where_quadratic(data, |_| pred.step())
    })
}

#[derive(Clone, Copy)]
pub struct BenchmarkParams {
    pub scale: usize,
    pub num_runs: usize,
}

pub fn run_benchmarks(params: BenchmarkParams, filter: Option<&str>, export_dir: Option<&str>) {
    if cfg!(debug_assertions) {
        println!(
            "WARNING: Debug assertions are enabled. Benchmarking should be done in `--release`."
        );
    }

    let benchmarks: Vec<BenchmarkInfo> = all_benchmarks()
        .into_iter()
        .filter(|b| filter.map_or(true, |f| b.name.contains(f)))
        .collect();
    if benchmarks.is_empty() {
        println!("No benchmark matches filter: {}", filter.unwrap_or(""));
        return;
    }

    println!("Running benchmarks...");
    println!("    Scale: {}", params.scale);
    println!("    Num runs: {}", params.num_runs);

    let workloads: Vec<Workload> = benchmarks.iter().map(|b| (b.setup)()).collect();

    let mut times: Vec<Vec<f64>> = vec![Vec::new(); benchmarks.len()];
    let mut predicate_calls: Vec<u64> = vec![0; benchmarks.len()];

    for run in 0 ..= params.num_runs {
        let mut order: Vec<usize> = (0 .. benchmarks.len()).collect();
        helpers::shuffle(&mut order);

        for idx in order {
            let benchmark = &benchmarks[idx];
            println!("Running benchmark task: {} / {}", benchmark.name, run);

            let start = Instant::now();
            let num_calls = (benchmark.run)(&workloads[idx], params.scale);
            let elapsed = start.elapsed().as_secs_f64();

            // Use zero-th iteration for warm up
            if run > 0 {
                times[idx].push(elapsed);
                predicate_calls[idx] += num_calls;
            }
        }
    }

    println!();
    println!(
        "{:<20} {:>12} {:>12} {:>16}",
        "name", "min [us]", "mean [us]", "predicate calls"
    );
    for (idx, benchmark) in benchmarks.iter().enumerate() {
        // Per-iteration time, scaled by the legacy factor so that numbers stay
        // comparable with historical samples taken with larger inner loops.
        let normalize = |t: f64| t / params.scale as f64 * benchmark.legacy_factor as f64 * 1e6;
        println!(
            "{:<20} {:>12.3} {:>12.3} {:>16}",
            benchmark.name,
            normalize(helpers::min(&times[idx])),
            normalize(helpers::mean(&times[idx])),
            predicate_calls[idx],
        );
    }

    if let Some(export_dir) = export_dir {
        for (idx, benchmark) in benchmarks.iter().enumerate() {
            helpers::export_samples(
                &format!("{}/{}.json", export_dir, benchmark.name),
                benchmark.name,
                params.scale,
                benchmark.legacy_factor,
                predicate_calls[idx],
                &times[idx],
            );
        }
    }
}
