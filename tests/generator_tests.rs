use strbench::generator::{ALPHABET, MAX_STRING_LEN, MIN_STRING_LEN};
use strbench::prelude::*;

#[test]
fn test_strings_respect_length_and_alphabet() {
    let mut generator = StringGenerator::from_seed(20);
    let arr = generator.random_array(500);

    assert_eq!(arr.len(), 500);
    for s in &arr {
        assert!(s.len() >= MIN_STRING_LEN && s.len() <= MAX_STRING_LEN);
        assert!(s.bytes().all(|b| ALPHABET.contains(&b)));
    }
}

#[test]
fn test_reverse_sorted_array_is_non_increasing() {
    let mut generator = StringGenerator::from_seed(21);
    let arr = generator.reverse_sorted_array(300);

    assert!(arr.windows(2).all(|w| w[0].as_bytes() >= w[1].as_bytes()));
}

#[test]
fn test_almost_sorted_array_has_bounded_disorder() {
    let mut generator = StringGenerator::from_seed(22);
    let size = 400;
    let arr = generator.almost_sorted_array(size);

    // At most size/10 adjacent swaps were applied, each disturbing a bounded
    // neighbourhood, so descents stay far below what a random array shows.
    // Each of the size/10 swaps disturbs at most three adjacent pairs.
    let descents = arr.windows(2).filter(|w| w[0] > w[1]).count();
    assert!(descents > 0, "almost sorted array came out fully sorted");
    assert!(
        descents <= 3 * (size / 10),
        "too much disorder: {} descents",
        descents
    );

    // Still a permutation of sorted content.
    let mut resorted = arr.clone();
    resorted.sort();
    assert!(resorted.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let mut a = StringGenerator::from_seed(23);
    let mut b = StringGenerator::from_seed(23);

    assert_eq!(a.random_array(50), b.random_array(50));
    assert_eq!(a.reverse_sorted_array(50), b.reverse_sorted_array(50));
    assert_eq!(a.almost_sorted_array(50), b.almost_sorted_array(50));
}

#[test]
fn test_tiny_sizes() {
    let mut generator = StringGenerator::from_seed(24);

    assert!(generator.random_array(0).is_empty());
    assert!(generator.reverse_sorted_array(0).is_empty());
    assert!(generator.almost_sorted_array(0).is_empty());
    assert_eq!(generator.almost_sorted_array(1).len(), 1);
}
