//! Random string array generation for the three benchmark shapes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The fixed symbol alphabet strings are drawn from.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#%:;^&*()-.";

/// Shortest generated string length, inclusive.
pub const MIN_STRING_LEN: usize = 10;

/// Longest generated string length, inclusive.
pub const MAX_STRING_LEN: usize = 200;

/// Generates arrays of random strings plus derived reverse-sorted and
/// almost-sorted variants.
///
/// An "almost sorted" array is fully sorted and then perturbed by
/// `max(1, size / 10)` random adjacent swaps. Generators built
/// [from a seed](StringGenerator::from_seed) are deterministic, which keeps
/// comparison-count measurements reproducible across runs.
pub struct StringGenerator {
    rng: StdRng,
}

impl StringGenerator {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A deterministic generator: the same seed always yields the same arrays.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One random string of length [`MIN_STRING_LEN`]..=[`MAX_STRING_LEN`]
    /// over [`ALPHABET`].
    pub fn generate_string(&mut self) -> String {
        let length = self.rng.random_range(MIN_STRING_LEN..=MAX_STRING_LEN);
        (0..length)
            .map(|_| ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    /// An array of `size` independent random strings.
    pub fn random_array(&mut self, size: usize) -> Vec<String> {
        (0..size).map(|_| self.generate_string()).collect()
    }

    /// A random array sorted into non-increasing byte order.
    pub fn reverse_sorted_array(&mut self, size: usize) -> Vec<String> {
        let mut arr = self.random_array(size);
        arr.sort_unstable_by(|a, b| b.as_bytes().cmp(a.as_bytes()));
        arr
    }

    /// A random array sorted into non-decreasing byte order and then perturbed
    /// by a small number of random adjacent swaps.
    pub fn almost_sorted_array(&mut self, size: usize) -> Vec<String> {
        let mut arr = self.random_array(size);
        arr.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
        if size < 2 {
            return arr;
        }
        let swaps = (size / 10).max(1);
        for _ in 0..swaps {
            let idx = self.rng.random_range(0..size - 1);
            arr.swap(idx, idx + 1);
        }
        arr
    }
}

impl Default for StringGenerator {
    fn default() -> Self {
        Self::new()
    }
}
