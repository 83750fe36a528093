use std::fs::{create_dir_all, File};
use std::path::Path;

use serde_json::json;

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Positional predicate state: fires on every `period`-th evaluation,
/// independent of the element under test. Used to express the
/// "remove every k-th element in evaluation order" workload without
/// hiding a counter inside closure captures.
pub struct EveryNth {
    period: u64,
    calls: u64,
}

impl EveryNth {
    pub fn new(period: u64) -> EveryNth {
        EveryNth { period, calls: 0 }
    }

    #[inline]
    pub fn step(&mut self) -> bool {
        self.calls += 1;
        self.calls % self.period == 0
    }

    /// Total number of evaluations performed so far.
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

pub fn shuffle<T>(v: &mut Vec<T>) {
    let mut rng = thread_rng();
    v.shuffle(&mut rng);
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().cloned().fold(f64::INFINITY, f64::min)
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn export_samples(
    filename: &str,
    name: &str,
    scale: usize,
    legacy_factor: usize,
    predicate_calls: u64,
    times: &[f64],
) {
    let json_data = json!({
        "name": name,
        "scale": scale,
        "legacy_factor": legacy_factor,
        "predicate_calls": predicate_calls,
        "times": times,
    });

    let path = Path::new(filename);
    let parent = path.parent().unwrap();
    create_dir_all(parent).unwrap();

    let f = File::create(path).expect("Unable to create json file.");
    serde_json::to_writer_pretty(f, &json_data).expect("Unable to write json file.");
}
