//! XXH3-64 hasher, enabled with the `xxhash` feature.
//!
//! Wraps the `xxhash-rust` crate. Faster than [`StdHasher`] on long inputs
//! and with better avalanche behaviour; for the 8-byte element digests used
//! by the filters the difference is small.
//!
//! [`StdHasher`]: super::StdHasher
//!
//! # Examples
//!
//! ```
//! use saltbloom::hash::{BloomHasher, XxHasher};
//! use saltbloom::StandardBloomFilter;
//!
//! let mut filter = StandardBloomFilter::<str, _>::with_hasher(1000, 0.01, XxHasher::new()).unwrap();
//! filter.insert("apple");
//! assert!(filter.contains("apple"));
//! assert_eq!(filter.hasher_name(), "XxHasher");
//! ```

use super::hasher::BloomHasher;
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// XXH3-64 hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XxHasher {
    seed: u64,
}

impl XxHasher {
    /// Create a hasher with seed 0 (the unseeded XXH3 variant).
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a hasher with an explicit seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed in use.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BloomHasher for XxHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        if self.seed == 0 {
            xxh3_64(bytes)
        } else {
            xxh3_64_with_seed(bytes, self.seed)
        }
    }

    fn name(&self) -> &'static str {
        "XxHasher"
    }
}
