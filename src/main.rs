//! CSV driver: sweeps input sizes and array shapes over all six algorithms
//! and prints one summary row per (algorithm, shape, size) tuple.

use strbench::prelude::*;

const MAX_SIZE: usize = 3000;
const STEP: usize = 100;
const RUNS: usize = 5;

fn main() {
    let mut generator = StringGenerator::new();
    let mut runner = Runner::new();

    let random_arr = generator.random_array(MAX_SIZE);
    let reverse_arr = generator.reverse_sorted_array(MAX_SIZE);
    let almost_arr = generator.almost_sorted_array(MAX_SIZE);

    println!("algorithm,array_type,size,avg_time_ms,avg_comparisons");

    let mut size = STEP;
    while size <= MAX_SIZE {
        for (shape, arr) in [
            ("random", &random_arr),
            ("reverse sorted", &reverse_arr),
            ("almost sorted", &almost_arr),
        ] {
            for algorithm in Algorithm::ALL {
                let result = runner.run(algorithm, &arr[..size], RUNS);
                println!(
                    "{},{},{},{},{}",
                    algorithm.label(),
                    shape,
                    size,
                    result.mean_time_ms,
                    result.mean_comparisons
                );
            }
        }
        size += STEP;
    }
}
