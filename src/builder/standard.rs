//! Builder for [`StandardBloomFilter`].
//!
//! # Type-State Pattern
//!
//! Both sizing inputs must be supplied before `build` exists:
//!
//! ```text
//! Initial ──.expected_items()──► WithItems ──.false_positive_rate()──► Complete ──.build()──► filter
//! ```
//!
//! `hash_strategy` and `hasher` are optional and may be set in any state.
//! Values are validated in `build`, with the same errors as
//! [`StandardBloomFilter::new`].
//!
//! # Examples
//!
//! ```
//! use saltbloom::builder::StandardBloomFilterBuilder;
//! use saltbloom::hash::{HashStrategy, StdHasher};
//!
//! let filter = StandardBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .hash_strategy(HashStrategy::EnhancedDouble)
//!     .hasher(StdHasher::with_seed(7))
//!     .build::<str>()
//!     .unwrap();
//!
//! assert!(filter.is_empty());
//! assert_eq!(filter.hash_strategy(), HashStrategy::EnhancedDouble);
//! ```
//!
//! ```
//! use saltbloom::builder::StandardBloomFilterBuilder;
//!
//! let result = StandardBloomFilterBuilder::new()
//!     .expected_items(0)
//!     .false_positive_rate(0.01)
//!     .build::<u64>();
//! assert!(result.is_err());
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::core::params::FilterParams;
use crate::error::Result;
use crate::filters::standard::StandardBloomFilter;
use crate::hash::{BloomHasher, DefaultHasher, HashStrategy};

use std::hash::Hash;
use std::marker::PhantomData;

/// Type-state marker: nothing set yet.
#[derive(Debug)]
pub struct Initial;

/// Type-state marker: expected item count set.
#[derive(Debug)]
pub struct WithItems;

/// Type-state marker: all required parameters set.
#[derive(Debug)]
pub struct Complete;

/// Builder for standard Bloom filters.
///
/// - `State`: [`Initial`], [`WithItems`] or [`Complete`]
/// - `H`: base hasher, [`DefaultHasher`] unless replaced with
///   [`hasher`](Self::hasher)
#[derive(Debug)]
pub struct StandardBloomFilterBuilder<State, H = DefaultHasher> {
    expected_items: usize,
    fp_rate: f64,
    hash_strategy: HashStrategy,
    hasher: H,
    _state: PhantomData<State>,
}

impl StandardBloomFilterBuilder<Initial, DefaultHasher> {
    /// Start a builder with the default hasher and strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: 0,
            fp_rate: f64::NAN,
            hash_strategy: HashStrategy::default(),
            hasher: DefaultHasher::default(),
            _state: PhantomData,
        }
    }
}

impl Default for StandardBloomFilterBuilder<Initial, DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> StandardBloomFilterBuilder<State, H> {
    /// Select the index derivation strategy.
    #[must_use]
    pub fn hash_strategy(mut self, strategy: HashStrategy) -> Self {
        self.hash_strategy = strategy;
        self
    }

    /// Replace the base hasher.
    #[must_use]
    pub fn hasher<H2: BloomHasher>(self, hasher: H2) -> StandardBloomFilterBuilder<State, H2> {
        StandardBloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            hash_strategy: self.hash_strategy,
            hasher,
            _state: PhantomData,
        }
    }

    fn transition<Next>(self) -> StandardBloomFilterBuilder<Next, H> {
        StandardBloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            hash_strategy: self.hash_strategy,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H> StandardBloomFilterBuilder<Initial, H> {
    /// Set the expected number of items (capacity). Required.
    #[must_use]
    pub fn expected_items(mut self, items: usize) -> StandardBloomFilterBuilder<WithItems, H> {
        self.expected_items = items;
        self.transition()
    }
}

impl<H> StandardBloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate. Required.
    #[must_use]
    pub fn false_positive_rate(mut self, fp_rate: f64) -> StandardBloomFilterBuilder<Complete, H> {
        self.fp_rate = fp_rate;
        self.transition()
    }
}

impl<H: BloomHasher> StandardBloomFilterBuilder<Complete, H> {
    /// Parameters the filter would be built with.
    ///
    /// # Errors
    ///
    /// Same as [`StandardBloomFilter::new`].
    pub fn params(&self) -> Result<FilterParams> {
        FilterParams::derive(self.expected_items, self.fp_rate)
    }

    /// Validate the parameters and build the filter.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidCapacity`](crate::BloomError::InvalidCapacity)
    /// - [`BloomError::InvalidFalsePositiveRate`](crate::BloomError::InvalidFalsePositiveRate)
    /// - [`BloomError::BitCountOverflow`](crate::BloomError::BitCountOverflow)
    pub fn build<T: Hash + ?Sized>(self) -> Result<StandardBloomFilter<T, H>> {
        let params = self.params()?;
        StandardBloomFilter::from_params(params, self.hasher, self.hash_strategy)
    }

    /// Build the filter and also return a summary of its configuration.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::builder::StandardBloomFilterBuilder;
    ///
    /// let (filter, meta) = StandardBloomFilterBuilder::new()
    ///     .expected_items(1000)
    ///     .false_positive_rate(0.01)
    ///     .build_with_metadata::<u64>()
    ///     .unwrap();
    ///
    /// assert_eq!(meta.params.bit_count, filter.bit_count());
    /// assert_eq!(meta.memory_bytes(), 1199);
    /// ```
    pub fn build_with_metadata<T: Hash + ?Sized>(
        self,
    ) -> Result<(StandardBloomFilter<T, H>, FilterMetadata)> {
        let params = self.params()?;
        let metadata = FilterMetadata {
            params,
            hash_strategy: self.hash_strategy,
            hasher: self.hasher.name(),
        };
        let filter = StandardBloomFilter::from_params(params, self.hasher, self.hash_strategy)?;
        Ok((filter, metadata))
    }
}

/// Configuration summary of a built filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMetadata {
    /// Derived parameters.
    pub params: FilterParams,
    /// Index derivation strategy.
    pub hash_strategy: HashStrategy,
    /// Name of the base hasher.
    pub hasher: &'static str,
}

impl FilterMetadata {
    /// Bytes occupied by the bit array.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.params.memory_bytes()
    }

    /// Bit array size in KiB.
    #[must_use]
    pub fn memory_kb(&self) -> f64 {
        self.memory_bytes() as f64 / 1024.0
    }

    /// Bytes of bit array per expected item.
    #[must_use]
    pub fn bytes_per_item(&self) -> f64 {
        self.memory_bytes() as f64 / self.params.capacity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomError;
    use crate::hash::StdHasher;

    #[test]
    fn test_builder_minimal() {
        let filter: StandardBloomFilter<String> = StandardBloomFilterBuilder::new()
            .expected_items(10_000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();

        assert!(filter.is_empty());
        assert_eq!(filter.hash_strategy(), HashStrategy::Double);
    }

    #[test]
    fn test_builder_matches_constructor() {
        let built = StandardBloomFilterBuilder::new()
            .expected_items(100)
            .false_positive_rate(0.01)
            .build::<str>()
            .unwrap();
        let direct = StandardBloomFilter::<str>::new(100, 0.01).unwrap();

        assert_eq!(built.params(), direct.params());
        let a: Vec<usize> = built.indices("k").collect();
        let b: Vec<usize> = direct.indices("k").collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_strategy_before_required_params() {
        let filter = StandardBloomFilterBuilder::new()
            .hash_strategy(HashStrategy::EnhancedDouble)
            .expected_items(50)
            .false_positive_rate(0.1)
            .build::<u32>()
            .unwrap();
        assert_eq!(filter.hash_strategy(), HashStrategy::EnhancedDouble);
    }

    #[test]
    fn test_custom_hasher() {
        let filter = StandardBloomFilterBuilder::new()
            .expected_items(100)
            .false_positive_rate(0.01)
            .hasher(StdHasher::with_seed(3))
            .build::<u64>()
            .unwrap();
        assert_eq!(filter.hasher_name(), "StdHasher");
    }

    #[test]
    fn test_builder_errors() {
        let err = StandardBloomFilterBuilder::new()
            .expected_items(0)
            .false_positive_rate(0.01)
            .build::<u64>()
            .unwrap_err();
        assert_eq!(err, BloomError::InvalidCapacity { capacity: 0 });

        let err = StandardBloomFilterBuilder::new()
            .expected_items(10)
            .false_positive_rate(1.0)
            .build::<u64>()
            .unwrap_err();
        assert_eq!(err, BloomError::InvalidFalsePositiveRate { fp_rate: 1.0 });
    }

    #[test]
    fn test_metadata() {
        let (filter, meta) = StandardBloomFilterBuilder::new()
            .expected_items(10)
            .false_positive_rate(0.5)
            .build_with_metadata::<u8>()
            .unwrap();

        assert_eq!(meta.params.bit_count, 15);
        assert_eq!(meta.params.hash_count, 2);
        assert_eq!(meta.hasher, "StdHasher");
        assert_eq!(meta.hash_strategy, HashStrategy::Double);
        assert_eq!(meta.memory_bytes(), 2);
        assert!((meta.bytes_per_item() - 0.2).abs() < 1e-12);
        assert!(meta.memory_kb() < 0.01);
        assert_eq!(filter.bit_count(), 15);
    }
}
