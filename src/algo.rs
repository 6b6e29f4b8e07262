//! The six sorting procedures.
//!
//! Every procedure sorts a mutable slice of byte strings in place into
//! non-decreasing lexicographic byte order and reports its comparison work
//! through an explicit [`ComparisonCounter`]. Strings are ordered as raw byte
//! sequences, never as code points: a shorter string that is a prefix of a
//! longer one is strictly less.
//!
//! Recursion everywhere operates on inclusive index ranges `[left, right]`
//! within one owned slice, with `left >= right` as the universal base case;
//! empty inputs short-circuit in the public entry points before any range is
//! formed.
//!
//! The counting contract is one [`tick`](ComparisonCounter::tick) per decision
//! point in an inner loop, regardless of how many bytes the decision
//! inspected. The character-indexed variants resolve end-of-string boundary
//! cases without looking at byte values, so those decisions do not tick; MSD
//! radix sort places elements into buckets without comparing anything, so it
//! never ticks at all unless it has cut over to string quicksort.

use crate::core::{Algorithm, ComparisonCounter, CUTOVER_THRESHOLD, RADIX};
use cuneiform::cuneiform;
use std::cmp::Ordering;

impl Algorithm {
    /// Sorts `arr` in place with the selected strategy, charging comparison
    /// ticks to `counter`.
    pub fn sort<T: AsRef<[u8]> + Clone>(self, arr: &mut [T], counter: &mut ComparisonCounter) {
        match self {
            Algorithm::StandardQuicksort => standard_quicksort(arr, counter),
            Algorithm::StandardMergesort => standard_mergesort(arr, counter),
            Algorithm::StringQuicksort => string_quicksort(arr, counter),
            Algorithm::StringMergesort => string_mergesort(arr, counter),
            Algorithm::MsdRadixSort => msd_radix_sort(arr, counter),
            Algorithm::MsdRadixSortWithCutover => msd_radix_sort_with_cutover(arr, counter),
        }
    }
}

#[inline]
fn byte_at(s: &[u8], d: usize) -> Option<u8> {
    s.get(d).copied()
}

/// Classic single-pivot quicksort with the last element as pivot.
///
/// One tick per element probed against the pivot during partitioning.
/// Deliberately naive: the fixed pivot choice makes it the quadratic control
/// baseline on reverse-sorted input, where it spends exactly `n(n-1)/2`
/// comparisons.
pub fn standard_quicksort<T: AsRef<[u8]>>(arr: &mut [T], counter: &mut ComparisonCounter) {
    if arr.len() > 1 {
        quicksort_range(arr, 0, arr.len() - 1, counter);
    }
}

fn quicksort_range<T: AsRef<[u8]>>(
    arr: &mut [T],
    left: usize,
    right: usize,
    counter: &mut ComparisonCounter,
) {
    if left >= right {
        return;
    }
    let pivot = partition(arr, left, right, counter);
    if pivot > left {
        quicksort_range(arr, left, pivot - 1, counter);
    }
    quicksort_range(arr, pivot + 1, right, counter);
}

/// Lomuto partition over `[left, right]` with `arr[right]` as pivot.
///
/// Elements less than or equal to the pivot are swapped into the growing left
/// partition; the pivot lands between the partitions and its final index is
/// returned.
fn partition<T: AsRef<[u8]>>(
    arr: &mut [T],
    left: usize,
    right: usize,
    counter: &mut ComparisonCounter,
) -> usize {
    // `store` is the next free slot of the left partition.
    let mut store = left;
    for probe in left..right {
        counter.tick();
        if arr[probe].as_ref() <= arr[right].as_ref() {
            arr.swap(store, probe);
            store += 1;
        }
    }
    arr.swap(store, right);
    store
}

/// Classic top-down mergesort with whole-string byte comparisons.
///
/// One tick per element-vs-element comparison during merging; the recursive
/// splitting itself compares nothing. Stable, and insensitive to input shape:
/// random, reverse-sorted and almost-sorted arrays of the same size cost
/// within a constant of the same comparison count.
pub fn standard_mergesort<T: AsRef<[u8]> + Clone>(arr: &mut [T], counter: &mut ComparisonCounter) {
    if arr.len() > 1 {
        mergesort_range(arr, 0, arr.len() - 1, counter);
    }
}

fn mergesort_range<T: AsRef<[u8]> + Clone>(
    arr: &mut [T],
    left: usize,
    right: usize,
    counter: &mut ComparisonCounter,
) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    mergesort_range(arr, left, mid, counter);
    mergesort_range(arr, mid + 1, right, counter);
    merge(arr, left, mid, right, counter);
}

fn merge<T: AsRef<[u8]> + Clone>(
    arr: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    counter: &mut ComparisonCounter,
) {
    let mut temp = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        counter.tick();
        // Ties take the left run, which is what makes the sort stable.
        if arr[i].as_ref() <= arr[j].as_ref() {
            temp.push(arr[i].clone());
            i += 1;
        } else {
            temp.push(arr[j].clone());
            j += 1;
        }
    }
    while i <= mid {
        temp.push(arr[i].clone());
        i += 1;
    }
    while j <= right {
        temp.push(arr[j].clone());
        j += 1;
    }

    arr[left..=right].clone_from_slice(&temp);
}

/// Orders a probed byte against the pivot byte at one string position.
///
/// Boundary rules when a string has ended before the probed depth:
/// - probe exhausted, pivot not: probe is less (shorter-prefix-is-smaller),
///   resolved without inspecting byte values, so no tick;
/// - probe present, pivot exhausted: probe is greater, no tick;
/// - both exhausted: equal, no tick.
///
/// Only the case that actually compares two byte values counts as a decision
/// point.
#[inline]
fn order_at_depth(
    probe: Option<u8>,
    pivot: Option<u8>,
    counter: &mut ComparisonCounter,
) -> Ordering {
    match (probe, pivot) {
        (Some(a), Some(b)) => {
            counter.tick();
            a.cmp(&b)
        }
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Character-indexed quicksort (three-way radix quicksort).
///
/// Partitions `[left, right]` on the byte at the current depth `d` into a
/// less / equal-to-pivot / greater grouping, with `arr[right]`'s byte at `d`
/// as the pivot. The less and greater groups have not been distinguished
/// beyond byte `d` and recurse at the same depth; only the group whose byte
/// at `d` equals the pivot's advances to depth `d + 1`, and only while the
/// pivot still has a byte there (an equal group with the pivot exhausted at
/// `d` consists of fully identical strings and needs no further ordering).
pub fn string_quicksort<T: AsRef<[u8]>>(arr: &mut [T], counter: &mut ComparisonCounter) {
    if arr.len() > 1 {
        string_quicksort_range(arr, 0, arr.len() - 1, 0, counter);
    }
}

pub(crate) fn string_quicksort_range<T: AsRef<[u8]>>(
    arr: &mut [T],
    left: usize,
    right: usize,
    d: usize,
    counter: &mut ComparisonCounter,
) {
    if left >= right {
        return;
    }

    let pivot = byte_at(arr[right].as_ref(), d);
    let mut lt = left;
    let mut gt = right;
    let mut i = left;
    while i <= gt {
        match order_at_depth(byte_at(arr[i].as_ref(), d), pivot, counter) {
            Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                // The pivot element itself classifies as equal, so `gt` never
                // drops below an unvisited `i`.
                arr.swap(i, gt);
                gt -= 1;
            }
            Ordering::Equal => i += 1,
        }
    }

    // [left, lt-1] strictly less at d, [lt, gt] equal at d, [gt+1, right] greater.
    if lt > left {
        string_quicksort_range(arr, left, lt - 1, d, counter);
    }
    if pivot.is_some() && lt < gt {
        string_quicksort_range(arr, lt, gt, d + 1, counter);
    }
    if gt < right {
        string_quicksort_range(arr, gt + 1, right, d, counter);
    }
}

/// Character-indexed mergesort at a fixed depth.
///
/// Same split/merge shape as [`standard_mergesort`], but the merge decides on
/// the byte at depth `d` first, using the same end-of-string boundary rules as
/// [`string_quicksort`]. The depth is not advanced across recursive calls;
/// instead, whenever the byte at `d` does not decide (equal bytes, or both
/// strings exhausted at `d`), the merge falls back to a full byte-wise string
/// comparison. The fallback is what keeps the order total and the sort stable
/// despite the fixed depth. Either way the decision point ticks at most once.
pub fn string_mergesort<T: AsRef<[u8]> + Clone>(arr: &mut [T], counter: &mut ComparisonCounter) {
    if arr.len() > 1 {
        string_mergesort_range(arr, 0, arr.len() - 1, 0, counter);
    }
}

fn string_mergesort_range<T: AsRef<[u8]> + Clone>(
    arr: &mut [T],
    left: usize,
    right: usize,
    d: usize,
    counter: &mut ComparisonCounter,
) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    string_mergesort_range(arr, left, mid, d, counter);
    string_mergesort_range(arr, mid + 1, right, d, counter);
    string_merge(arr, left, mid, right, d, counter);
}

fn string_merge<T: AsRef<[u8]> + Clone>(
    arr: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    d: usize,
    counter: &mut ComparisonCounter,
) {
    let mut temp = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        let a = arr[i].as_ref();
        let b = arr[j].as_ref();
        let take_left = match (byte_at(a, d), byte_at(b, d)) {
            (Some(ca), Some(cb)) => {
                counter.tick();
                if ca != cb { ca < cb } else { a <= b }
            }
            (None, Some(_)) => true,
            (Some(_), None) => false,
            (None, None) => {
                counter.tick();
                a <= b
            }
        };
        if take_left {
            temp.push(arr[i].clone());
            i += 1;
        } else {
            temp.push(arr[j].clone());
            j += 1;
        }
    }
    while i <= mid {
        temp.push(arr[i].clone());
        i += 1;
    }
    while j <= right {
        temp.push(arr[j].clone());
        j += 1;
    }

    arr[left..=right].clone_from_slice(&temp);
}

// Cache-aligned counting array for the radix passes. `RADIX + 2` slots: one
// bucket per byte value, one for strings ending before the current depth, and
// a leading slot so the cumulative sums can be built in place.
#[cuneiform]
struct BucketCounts {
    data: [usize; RADIX + 2],
}

/// Most-significant-digit-first radix sort.
///
/// Each pass counting-sorts `[left, right]` on the byte at depth `d`, with
/// strings that end before `d` collected in a dedicated leading bucket, then
/// recurses into every byte-value bucket at depth `d + 1`. The end-of-string
/// bucket is never recursed into: those elements have no bytes left to
/// distinguish them. Redistribution goes through an auxiliary buffer and is
/// stable within each bucket.
///
/// Performs no comparisons, only bucket placement, so the comparison count is
/// always exactly zero.
pub fn msd_radix_sort<T: AsRef<[u8]> + Clone>(arr: &mut [T], counter: &mut ComparisonCounter) {
    if arr.len() > 1 {
        msd_radix_range(arr, 0, arr.len() - 1, 0, false, counter);
    }
}

/// [`msd_radix_sort`] with a small-subarray cutover: subranges smaller than
/// [`CUTOVER_THRESHOLD`] elements delegate to string quicksort at the current
/// depth instead of recursing further. The delegated calls tick as string
/// quicksort does, so unlike the pure radix variant this one reports a
/// non-zero comparison count.
pub fn msd_radix_sort_with_cutover<T: AsRef<[u8]> + Clone>(
    arr: &mut [T],
    counter: &mut ComparisonCounter,
) {
    if arr.len() > 1 {
        msd_radix_range(arr, 0, arr.len() - 1, 0, true, counter);
    }
}

/// Bucket index of `s` at depth `d`: byte value plus one, or the leading
/// end-of-string bucket.
#[inline]
fn bucket(s: &[u8], d: usize) -> usize {
    match s.get(d) {
        Some(&b) => b as usize + 1,
        None => 0,
    }
}

fn msd_radix_range<T: AsRef<[u8]> + Clone>(
    arr: &mut [T],
    left: usize,
    right: usize,
    d: usize,
    switch_to_quicksort: bool,
    counter: &mut ComparisonCounter,
) {
    if left >= right {
        return;
    }

    if switch_to_quicksort && right - left + 1 < CUTOVER_THRESHOLD {
        string_quicksort_range(arr, left, right, d, counter);
        return;
    }

    let mut counts = BucketCounts {
        data: [0; RADIX + 2],
    };
    let counts = &mut counts.data;

    // 1. Count bucket occupancy, offset by one for the cumulative pass.
    for item in &arr[left..=right] {
        counts[bucket(item.as_ref(), d) + 1] += 1;
    }

    // 2. Cumulative counts: counts[c] becomes the start offset of bucket c.
    for r in 0..RADIX + 1 {
        counts[r + 1] += counts[r];
    }

    // 3. Stable redistribution through an auxiliary buffer. Afterwards
    //    counts[c] is the end offset of bucket c.
    let buffer: Vec<T> = arr[left..=right].to_vec();
    for item in buffer {
        let c = bucket(item.as_ref(), d);
        arr[left + counts[c]] = item;
        counts[c] += 1;
    }

    // 4. Recurse into the byte-value buckets one depth down. counts[r] is now
    //    the start of the bucket for byte value r and counts[r + 1] its end;
    //    the end-of-string bucket before them needs no further ordering.
    for r in 0..RADIX {
        let lo = counts[r];
        let hi = counts[r + 1];
        if hi > lo + 1 {
            msd_radix_range(
                arr,
                left + lo,
                left + hi - 1,
                d + 1,
                switch_to_quicksort,
                counter,
            );
        }
    }
}
