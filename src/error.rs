//! Error types for saltbloom operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`], whose error
//! type is [`BloomError`]. Errors are raised synchronously at the point of
//! violation and are never retried internally.
//!
//! # Error Propagation
//!
//! ```
//! use saltbloom::Result;
//! use saltbloom::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn sizing(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, fp)?;
//!     let k = optimal_hash_count(m, n)?;
//!     Ok((m, k))
//! }
//! # assert_eq!(sizing(100, 0.01).unwrap(), (959, 7));
//! ```

#![allow(clippy::module_name_repetitions)]

use thiserror::Error;

/// Result type alias for saltbloom operations.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Errors that can occur while building or probing a Bloom filter.
///
/// `Clone` + `PartialEq` let tests compare errors directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BloomError {
    /// Capacity (expected number of elements) must be a positive integer.
    #[error("Invalid capacity: {capacity}. Capacity must be a positive integer.")]
    InvalidCapacity {
        /// The capacity that was provided.
        capacity: usize,
    },

    /// Target false positive rate must lie strictly inside (0, 1).
    ///
    /// Rejects 0, 1, negatives, values above 1 and NaN.
    #[error("False positive rate {fp_rate} is out of bounds. Must be in range (0, 1).")]
    InvalidFalsePositiveRate {
        /// The rate that was provided.
        fp_rate: f64,
    },

    /// A hash-function index outside `[0, k)` was requested.
    ///
    /// `insert` and `contains` never trigger this; it only surfaces through
    /// the explicit [`hash_index`] probe and indicates a caller bug.
    ///
    /// [`hash_index`]: crate::filters::StandardBloomFilter::hash_index
    #[error(
        "Hash function index {index} out of range. This filter defines hash functions 0..{hash_count}."
    )]
    HashIndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of hash functions (k) of the filter.
        hash_count: usize,
    },

    /// The derived bit count does not fit in addressable memory.
    #[error("Derived bit count {bits:.0} exceeds the addressable range of this platform.")]
    BitCountOverflow {
        /// The unrounded bit count produced by the sizing formula.
        bits: f64,
    },

    /// Hash function count must be at least one.
    #[error("Invalid hash function count: {count}. Must be at least 1.")]
    InvalidHashCount {
        /// The hash count that was provided.
        count: usize,
    },

    /// Bit array size must be positive.
    #[error("Invalid filter size: {size} bits. Must be greater than 0.")]
    InvalidFilterSize {
        /// The size in bits that was provided.
        size: usize,
    },

    /// A bit index at or past the end of a bit array.
    #[error("Index {index} out of bounds for bit vector of length {length}")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The length of the bit vector.
        length: usize,
    },
}

impl BloomError {
    /// Create an `InvalidCapacity` error.
    #[must_use]
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create an `InvalidFalsePositiveRate` error.
    #[must_use]
    pub fn invalid_fp_rate(fp_rate: f64) -> Self {
        Self::InvalidFalsePositiveRate { fp_rate }
    }

    /// Create a `HashIndexOutOfRange` error.
    #[must_use]
    pub fn hash_index_out_of_range(index: usize, hash_count: usize) -> Self {
        Self::HashIndexOutOfRange { index, hash_count }
    }

    /// Create a `BitCountOverflow` error.
    #[must_use]
    pub fn bit_count_overflow(bits: f64) -> Self {
        Self::BitCountOverflow { bits }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize) -> Self {
        Self::InvalidHashCount { count }
    }

    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Whether this error was caused by invalid constructor arguments.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity { .. }
                | Self::InvalidFalsePositiveRate { .. }
                | Self::BitCountOverflow { .. }
        )
    }
}
