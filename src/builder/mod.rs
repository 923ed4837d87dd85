//! Fluent construction of filters.
//!
//! Builders enforce required parameters at compile time (type-state) and
//! report invalid values at `build` time through [`Result`](crate::Result).
//!
//! | Builder | Required | Optional |
//! |---------|----------|----------|
//! | [`StandardBloomFilterBuilder`] | `expected_items`, `false_positive_rate` | `hash_strategy`, `hasher` |
//!
//! # Examples
//!
//! ```
//! use saltbloom::builder::StandardBloomFilterBuilder;
//! use saltbloom::filters::StandardBloomFilter;
//!
//! let filter: StandardBloomFilter<&str> = StandardBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.capacity(), 10_000);
//! ```
//!
//! Forgetting a required parameter does not compile:
//!
//! ```compile_fail
//! use saltbloom::builder::StandardBloomFilterBuilder;
//!
//! let filter = StandardBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .build::<u64>();
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod standard;

pub use standard::{FilterMetadata, StandardBloomFilterBuilder};
