//! Bloom filter implementations.
//!
//! - [`StandardBloomFilter`]: fixed-size filter with parameters derived from
//!   capacity and target false positive rate.
//!
//! # Examples
//!
//! ```
//! use saltbloom::filters::StandardBloomFilter;
//!
//! let mut filter = StandardBloomFilter::<String>::new(10_000, 0.01).unwrap();
//! filter.insert(&"hello".to_string());
//! assert!(filter.contains(&"hello".to_string()));
//! ```

pub mod standard;

pub use standard::StandardBloomFilter;
