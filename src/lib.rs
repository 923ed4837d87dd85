//! saltbloom: a classic Bloom filter with exact parameter derivation.
//!
//! A Bloom filter answers "have I seen this element?" in constant space per
//! element:
//! - **No false negatives**: an inserted element is always reported present
//! - **Bounded false positives**: an absent element is reported present with
//!   probability close to the configured rate
//!
//! # Quick Start
//!
//! ```
//! use saltbloom::StandardBloomFilter;
//!
//! # fn main() -> saltbloom::Result<()> {
//! // 1,000 expected elements, 1% false positives
//! let mut filter = StandardBloomFilter::<str>::new(1000, 0.01)?;
//!
//! filter.insert("hello");
//! filter.insert("world");
//!
//! assert!(filter.contains("hello"));
//! assert_eq!(filter.bit_count(), 9586);
//! assert_eq!(filter.hash_count(), 7);
//! println!("true fpr at capacity: {:.5}", filter.true_fpr());
//! # Ok(())
//! # }
//! ```
//!
//! # Sizing
//!
//! ```text
//! m = ⌈-n·ln(p) / (ln 2)²⌉          bits
//! k = ⌈(m/n)·ln 2⌉                  hash functions
//! true_fpr = (1 - e^(-kn/m))^k      rate actually achieved at n elements
//! ```
//!
//! No clamping is applied; see [`core::params`].
//!
//! # Element Types
//!
//! Anything implementing [`Hash`](std::hash::Hash) can be stored, including
//! unsized types (`str`, `[u8]`), tuples, `Option` and your own enums. Mixed
//! element kinds go through an enum:
//!
//! ```
//! use saltbloom::StandardBloomFilter;
//!
//! #[derive(Hash)]
//! enum Value<'a> {
//!     Int(i64),
//!     Float(u64), // f64::to_bits
//!     Str(&'a str),
//!     Null,
//! }
//!
//! let mut filter = StandardBloomFilter::<Value>::new(100, 0.01).unwrap();
//! filter.insert(&Value::Int(42));
//! filter.insert(&Value::Float(2.5f64.to_bits()));
//! filter.insert(&Value::Str("string"));
//! filter.insert(&Value::Null);
//! assert!(filter.contains(&Value::Null));
//! ```
//!
//! # Concurrency
//!
//! [`StandardBloomFilter::insert`] takes `&mut self`. To share a filter
//! between threads use [`sync::LockedBloomFilter`].
//!
//! # Feature Flags
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `xxhash` | `hash::XxHasher` (XXH3-64) |
//! | `trace` | `tracing::trace!` events on every insert and query |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;

pub mod error;

pub mod filters;

pub mod hash;

pub mod sync;

pub mod builder;

pub use crate::builder::{FilterMetadata, StandardBloomFilterBuilder};
pub use crate::core::filter::{BloomFilter, SharedBloomFilter};
pub use crate::core::params::FilterParams;
pub use crate::error::{BloomError, Result};
pub use crate::filters::StandardBloomFilter;
pub use crate::hash::{BloomHasher, HashStrategy};
pub use crate::sync::LockedBloomFilter;

/// Everything needed for typical use.
///
/// ```
/// use saltbloom::prelude::*;
///
/// let mut filter = StandardBloomFilter::<u64>::new(100, 0.01).unwrap();
/// filter.insert(&1);
/// assert!(filter.contains(&1));
/// ```
pub mod prelude {
    pub use crate::builder::StandardBloomFilterBuilder;
    pub use crate::core::filter::{BloomFilter, SharedBloomFilter};
    pub use crate::core::params::FilterParams;
    pub use crate::error::{BloomError, Result};
    pub use crate::filters::StandardBloomFilter;
    pub use crate::hash::{BloomHasher, HashStrategy, StdHasher};
    pub use crate::sync::LockedBloomFilter;
}
