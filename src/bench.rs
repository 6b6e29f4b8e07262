//! Benchmark runner: repeated timed runs over fresh copies of an input array.

use crate::core::{Algorithm, ComparisonCounter};
use std::time::Instant;

/// Mean measurements for one (algorithm, array, run-count) combination.
///
/// Times are fractional milliseconds. Variances are population variances over
/// the repetitions; for a deterministic algorithm on a fixed input
/// `comparison_variance` is exactly zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BenchmarkResult {
    pub mean_time_ms: f64,
    pub mean_comparisons: f64,
    pub time_variance: f64,
    pub comparison_variance: f64,
}

/// Executes sort procedures repeatedly and reports mean elapsed time and mean
/// comparison count.
///
/// The runner owns the [`ComparisonCounter`] shared by all sort calls it
/// makes. Every repetition gets its own copy of the input array, so runs never
/// share mutable state, and the counter is reset and enabled immediately
/// before each sort call and read immediately after it returns.
///
/// # Examples
///
/// ```
/// use strbench::prelude::*;
///
/// let data = vec!["cherry".to_string(), "apple".to_string(), "banana".to_string()];
/// let mut runner = Runner::new();
/// let result = runner.run(Algorithm::StandardMergesort, &data, 5);
///
/// assert!(result.mean_comparisons > 0.0);
/// assert_eq!(result.comparison_variance, 0.0);
/// ```
#[derive(Debug, Default)]
pub struct Runner {
    counter: ComparisonCounter,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            counter: ComparisonCounter::new(),
        }
    }

    /// Runs `algorithm` on `runs` fresh copies of `arr`, timing each run at
    /// sub-millisecond resolution, and returns the arithmetic means and
    /// variances across the repetitions.
    ///
    /// Arrays of size 0 or 1 are valid and yield a comparison count of 0.
    /// `runs == 0` performs no work and returns an all-zero result.
    pub fn run<T: AsRef<[u8]> + Clone>(
        &mut self,
        algorithm: Algorithm,
        arr: &[T],
        runs: usize,
    ) -> BenchmarkResult {
        if runs == 0 {
            return BenchmarkResult::default();
        }

        let mut times = Vec::with_capacity(runs);
        let mut comps = Vec::with_capacity(runs);

        for _ in 0..runs {
            let mut copy = arr.to_vec();
            self.counter.reset();
            self.counter.enable();

            let start = Instant::now();
            algorithm.sort(&mut copy, &mut self.counter);
            let elapsed = start.elapsed();

            times.push(elapsed.as_secs_f64() * 1_000.0);
            comps.push(self.counter.value() as f64);
        }

        let n = runs as f64;
        let mean_time_ms = times.iter().sum::<f64>() / n;
        let mean_comparisons = comps.iter().sum::<f64>() / n;
        let time_variance = times.iter().map(|t| (t - mean_time_ms).powi(2)).sum::<f64>() / n;
        let comparison_variance = comps
            .iter()
            .map(|c| (c - mean_comparisons).powi(2))
            .sum::<f64>()
            / n;

        BenchmarkResult {
            mean_time_ms,
            mean_comparisons,
            time_variance,
            comparison_variance,
        }
    }
}
