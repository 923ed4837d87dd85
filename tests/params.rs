//! Parameter derivation through the public constructors.

use saltbloom::core::params::{false_positive_rate, optimal_bit_count, optimal_hash_count};
use saltbloom::{BloomError, FilterParams, StandardBloomFilter};

#[test]
fn test_known_sizes() {
    let cases = [
        (100, 0.01, 959, 7),
        (1000, 0.01, 9586, 7),
        (10_000, 0.001, 143_776, 10),
        (10, 0.5, 15, 2),
        (1000, 0.05, 6236, 5),
        (1000, 0.8, 465, 1),
        (1, 0.5, 2, 2),
    ];

    for (n, p, m, k) in cases {
        let filter = StandardBloomFilter::<u64>::new(n, p).unwrap();
        assert_eq!(filter.bit_count(), m, "bit count for n={}, p={}", n, p);
        assert_eq!(filter.hash_count(), k, "hash count for n={}, p={}", n, p);
    }
}

#[test]
fn test_true_fpr_matches_formula() {
    let filter = StandardBloomFilter::<u64>::new(100, 0.01).unwrap();
    let expected = (1.0 - (-7.0 * 100.0 / 959.0f64).exp()).powi(7);

    assert!((filter.true_fpr() - expected).abs() < 1e-12);
    assert!((filter.true_fpr() - 0.010015).abs() < 1e-5);
}

#[test]
fn test_true_fpr_may_exceed_target() {
    // rounding m and k up does not guarantee the target is met
    let params = FilterParams::derive(10, 0.5).unwrap();
    assert!(params.true_fpr > params.target_fpr);
    assert!((params.true_fpr - 0.542).abs() < 0.001);

    let params = FilterParams::derive(1000, 0.8).unwrap();
    assert!((params.true_fpr - 0.8836).abs() < 0.001);
}

#[test]
fn test_params_stored_unchanged() {
    let filter = StandardBloomFilter::<str>::new(2500, 0.02).unwrap();
    let params = FilterParams::derive(2500, 0.02).unwrap();

    assert_eq!(filter.params(), &params);
    assert_eq!(filter.capacity(), 2500);
    assert_eq!(filter.target_fpr(), 0.02);
}

#[test]
fn test_rejects_bad_capacity() {
    assert_eq!(
        FilterParams::derive(0, 0.01),
        Err(BloomError::InvalidCapacity { capacity: 0 })
    );
}

#[test]
fn test_rejects_bad_fpr() {
    for p in [0.0, 1.0, -0.5, 2.0, f64::NAN, f64::NEG_INFINITY] {
        let result = FilterParams::derive(100, p);
        assert!(
            matches!(result, Err(BloomError::InvalidFalsePositiveRate { .. })),
            "p={} should be rejected, got {:?}",
            p,
            result
        );
    }
}

#[test]
fn test_capacity_checked_before_fpr() {
    assert!(matches!(
        FilterParams::derive(0, 2.0),
        Err(BloomError::InvalidCapacity { .. })
    ));
}

#[test]
fn test_lower_fpr_needs_more_bits() {
    let mut previous = 0;
    for p in [0.5, 0.1, 0.01, 0.001, 0.0001] {
        let m = optimal_bit_count(1000, p).unwrap();
        assert!(m > previous, "m should grow as p shrinks (p={})", p);
        previous = m;
    }
}

#[test]
fn test_free_functions_agree_with_derive() {
    let params = FilterParams::derive(5000, 0.003).unwrap();

    let m = optimal_bit_count(5000, 0.003).unwrap();
    let k = optimal_hash_count(m, 5000).unwrap();
    let fpr = false_positive_rate(m, 5000, k).unwrap();

    assert_eq!(params.bit_count, m);
    assert_eq!(params.hash_count, k);
    assert_eq!(params.true_fpr, fpr);
}

#[test]
fn test_display() {
    let params = FilterParams::derive(100, 0.01).unwrap();
    let text = params.to_string();

    assert!(text.contains("m=959"), "got {}", text);
    assert!(text.contains("k=7"), "got {}", text);
    assert!(text.contains("120 bytes"), "got {}", text);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_huge_capacity_fails_without_aborting() {
    // passes the bit-count bound but cannot be allocated
    let result = StandardBloomFilter::<u64>::new(1 << 58, 0.01);
    assert!(
        matches!(result, Err(BloomError::BitCountOverflow { .. })),
        "got {:?}",
        result.map(|f| f.bit_count())
    );
}
