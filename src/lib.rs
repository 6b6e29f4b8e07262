//! # strbench
//!
//! `strbench` measures and compares the running time and key-comparison count
//! of six sorting strategies applied to arrays of variable-length strings.
//!
//! The strategies span the classic comparison-based baselines and three
//! character-indexed variants that exploit string structure:
//!
//! - **Standard Quicksort**: single-pivot, last-element pivot, whole-string
//!   comparisons; the deliberately naive quadratic control baseline.
//! - **Standard Mergesort**: stable top-down mergesort, insensitive to input
//!   shape.
//! - **String Quicksort**: three-way radix quicksort partitioning on one byte
//!   position per recursion level.
//! - **String Mergesort**: mergesort whose merge decides on the byte at a
//!   fixed depth, with a full-comparison fallback.
//! - **MSD Radixsort**: most-significant-digit-first bucket sort over 256
//!   byte values plus an end-of-string bucket; performs zero comparisons.
//! - **MSD Radixsort (with switch)**: the same, delegating small subranges to
//!   String Quicksort.
//!
//! All strings are ordered by raw byte value, never by code point, and every
//! algorithm is instrumented through a shared [`ComparisonCounter`] that
//! counts one tick per decision point, so structurally different algorithms
//! report comparable work figures. The [`Runner`](bench::Runner) times each
//! algorithm over repeated runs on fresh copies of the input and reports mean
//! elapsed time and mean comparison count.
//!
//! ## Usage
//!
//! Sorting directly:
//!
//! ```
//! use strbench::prelude::*;
//!
//! let mut counter = ComparisonCounter::new();
//! let mut data = vec!["banana".to_string(), "apple".to_string(), "cherry".to_string()];
//! string_quicksort(&mut data, &mut counter);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry"]);
//! ```
//!
//! Measuring:
//!
//! ```
//! use strbench::prelude::*;
//!
//! let mut generator = StringGenerator::from_seed(42);
//! let data = generator.random_array(500);
//!
//! let mut runner = Runner::new();
//! for algorithm in Algorithm::ALL {
//!     let result = runner.run(algorithm, &data, 5);
//!     println!("{}: {} comparisons", algorithm, result.mean_comparisons);
//! }
//! ```

pub mod algo;
pub mod bench;
pub mod core;
pub mod generator;

pub use crate::algo::{
    msd_radix_sort, msd_radix_sort_with_cutover, standard_mergesort, standard_quicksort,
    string_mergesort, string_quicksort,
};
pub use crate::bench::{BenchmarkResult, Runner};
pub use crate::core::{Algorithm, ComparisonCounter, CUTOVER_THRESHOLD, RADIX};
pub use crate::generator::StringGenerator;

pub mod prelude {
    pub use crate::algo::{
        msd_radix_sort, msd_radix_sort_with_cutover, standard_mergesort, standard_quicksort,
        string_mergesort, string_quicksort,
    };
    pub use crate::bench::{BenchmarkResult, Runner};
    pub use crate::core::{Algorithm, ComparisonCounter, CUTOVER_THRESHOLD, RADIX};
    pub use crate::generator::StringGenerator;
}
