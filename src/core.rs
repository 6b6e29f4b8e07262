//! Core types for the sorting harness.
//!
//! This module defines:
//! - [`ComparisonCounter`]: the shared decision-point counter threaded through every sort call.
//! - [`Algorithm`]: the closed set of sorting strategies under measurement.
//! - The fixed tuning constants ([`CUTOVER_THRESHOLD`], [`RADIX`]).

use std::fmt;

/// Subranges smaller than this delegate from MSD radix sort to string quicksort
/// when the cutover variant is selected.
///
/// This value is part of the measurement contract: changing it changes the
/// reported comparison counts of the cutover variant.
pub const CUTOVER_THRESHOLD: usize = 74;

/// Number of distinct byte values bucketed by MSD radix sort.
///
/// The counting pass uses `RADIX + 2` slots: one extra bucket for strings that
/// end before the current depth, and a leading slot so cumulative counts can be
/// built in place.
pub const RADIX: usize = 256;

/// A resettable counter incremented once per decision point inside a sort's
/// inner loop, regardless of how many bytes that decision inspected.
///
/// The counter carries no sorting logic. It is created once (typically by a
/// [`Runner`](crate::bench::Runner)), reset and enabled before each timed run,
/// and read immediately after the run completes. While disabled, [`tick`]
/// calls have no effect, so callers can sort without skewing a measurement.
///
/// [`tick`]: ComparisonCounter::tick
///
/// # Examples
///
/// ```
/// use strbench::prelude::*;
///
/// let mut counter = ComparisonCounter::new();
/// let mut data = vec!["banana".to_string(), "apple".to_string()];
/// standard_quicksort(&mut data, &mut counter);
///
/// assert_eq!(data, vec!["apple", "banana"]);
/// assert_eq!(counter.value(), 1);
/// ```
#[derive(Debug)]
pub struct ComparisonCounter {
    count: u64,
    enabled: bool,
}

impl ComparisonCounter {
    /// Creates a counter at zero, enabled.
    pub fn new() -> Self {
        Self {
            count: 0,
            enabled: true,
        }
    }

    /// Zeroes the count. Does not change the enabled flag.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Makes subsequent [`tick`](ComparisonCounter::tick) calls count.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Makes subsequent [`tick`](ComparisonCounter::tick) calls no-ops.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Returns whether ticks are currently counted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records one decision point, if enabled.
    #[inline]
    pub fn tick(&mut self) {
        if self.enabled {
            self.count += 1;
        }
    }

    /// Returns the current count.
    pub fn value(&self) -> u64 {
        self.count
    }
}

impl Default for ComparisonCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// The six sorting strategies under measurement.
///
/// Each variant sorts an array of byte strings in place into non-decreasing
/// lexicographic byte order; they differ in how many comparison ticks they
/// spend doing so. Dispatch through [`Algorithm::sort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Classic single-pivot quicksort, last element as pivot, whole-string
    /// byte comparisons. Quadratic on reverse-sorted input.
    StandardQuicksort,
    /// Classic top-down mergesort with whole-string byte comparisons. Stable.
    StandardMergesort,
    /// Character-indexed quicksort: partitions on the byte at the current
    /// depth and drills one byte deeper per recursion level.
    StringQuicksort,
    /// Character-indexed mergesort: merges on the byte at a fixed depth, with
    /// a full-comparison fallback when that byte does not decide. Stable.
    StringMergesort,
    /// Most-significant-digit-first radix sort over 256 byte buckets plus an
    /// end-of-string bucket. Performs no comparisons at all.
    MsdRadixSort,
    /// MSD radix sort that delegates subranges smaller than
    /// [`CUTOVER_THRESHOLD`] to string quicksort at the current depth.
    MsdRadixSortWithCutover,
}

impl Algorithm {
    /// All variants, in reporting order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::StandardQuicksort,
        Algorithm::StandardMergesort,
        Algorithm::StringQuicksort,
        Algorithm::StringMergesort,
        Algorithm::MsdRadixSort,
        Algorithm::MsdRadixSortWithCutover,
    ];

    /// The stable label reported in result rows.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::StandardQuicksort => "Standard Quicksort",
            Algorithm::StandardMergesort => "Standard Mergesort",
            Algorithm::StringQuicksort => "String Quicksort",
            Algorithm::StringMergesort => "String Mergesort",
            Algorithm::MsdRadixSort => "MSD Radixsort",
            Algorithm::MsdRadixSortWithCutover => "MSD Radixsort (with switch)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
