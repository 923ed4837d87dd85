//! Basic end-to-end checks of the public API.

use saltbloom::{BloomError, StandardBloomFilter};

fn fixture() -> StandardBloomFilter<str> {
    StandardBloomFilter::new(10_000, 0.001).unwrap()
}

#[test]
fn test_add_single_item() {
    let mut filter = fixture();

    assert!(!filter.contains("test_item"));
    filter.insert("test_item");
    assert!(filter.contains("test_item"), "Should find the item we just added");
}

#[test]
fn test_add_multiple_items() {
    let mut filter = fixture();
    let items = ["item1", "item2", "item3", "item4", "item5"];

    for item in items {
        filter.insert(item);
    }

    for item in items {
        assert!(filter.contains(item), "Should find {}", item);
    }
}

#[test]
fn test_non_added_items() {
    let mut filter = fixture();
    for item in ["item1", "item2", "item3"] {
        filter.insert(item);
    }

    assert!(!filter.contains("not_added_item"));
    assert!(!filter.contains("another_missing_item"));
}

#[test]
fn test_batch_operations() {
    let mut filter = StandardBloomFilter::<String>::new(1000, 0.01).unwrap();

    let items: Vec<String> = vec!["apple", "banana", "cherry"]
        .into_iter()
        .map(String::from)
        .collect();

    filter.insert_batch(&items);

    for item in &items {
        assert!(filter.contains(item), "Should find {}", item);
    }
    assert_eq!(filter.contains_batch(&items), vec![true, true, true]);
}

#[test]
fn test_no_false_negatives() {
    let mut filter = StandardBloomFilter::<u64>::new(1000, 0.01).unwrap();

    for i in 0..1000 {
        filter.insert(&i);
    }

    for i in 0..1000 {
        assert!(filter.contains(&i), "False negative for {}", i);
    }
}

#[test]
fn test_read_only_accessors() {
    let filter = StandardBloomFilter::<u64>::new(100, 0.01).unwrap();

    assert_eq!(filter.capacity(), 100);
    assert_eq!(filter.target_fpr(), 0.01);
    assert_eq!(filter.bit_count(), 959);
    assert_eq!(filter.hash_count(), 7);
    assert!(filter.true_fpr() > 0.0 && filter.true_fpr() < 1.0);
}

#[test]
fn test_zero_capacity() {
    let err = StandardBloomFilter::<u64>::new(0, 0.01).unwrap_err();
    assert_eq!(err, BloomError::InvalidCapacity { capacity: 0 });
    assert!(err.is_invalid_argument());
}

#[test]
fn test_invalid_fpr() {
    for fpr in [0.0, -0.1, 1.0, 1.5, f64::NAN, f64::INFINITY] {
        let err = StandardBloomFilter::<u64>::new(100, fpr).unwrap_err();
        assert!(
            matches!(err, BloomError::InvalidFalsePositiveRate { .. }),
            "fpr {} gave {:?}",
            fpr,
            err
        );
    }
}

#[test]
fn test_hash_index_out_of_range() {
    let filter = StandardBloomFilter::<str>::new(100, 0.01).unwrap();
    let k = filter.hash_count();

    assert!(filter.hash_index("x", k - 1).is_ok());
    assert_eq!(
        filter.hash_index("x", k),
        Err(BloomError::HashIndexOutOfRange { index: k, hash_count: k })
    );
}

#[test]
fn test_hash_index_deterministic() {
    let filter = StandardBloomFilter::<str>::new(100, 0.01).unwrap();
    for i in 0..filter.hash_count() {
        let a = filter.hash_index("stable", i).unwrap();
        let b = filter.hash_index("stable", i).unwrap();
        assert_eq!(a, b);
        assert!(a < filter.bit_count());
    }
}

#[test]
fn test_identical_filters_set_identical_bits() {
    let mut a = StandardBloomFilter::<u64>::new(1000, 0.01).unwrap();
    let mut b = StandardBloomFilter::<u64>::new(1000, 0.01).unwrap();
    for i in 0..200 {
        a.insert(&i);
        b.insert(&i);
    }
    assert_eq!(a.bits(), b.bits());
}
