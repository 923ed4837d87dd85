//! Classic Bloom filter.
//!
//! A fixed array of `m` bits probed by `k` hash functions. Inserting an
//! element sets its `k` bits; querying it checks that all `k` bits are set.
//!
//! # Properties
//!
//! - **False negatives**: never
//! - **False positives**: about `true_fpr` once `capacity` elements are in
//! - **Time**: O(k) for insert and query, O(1) extra space
//! - **Mutation**: bits only go from 0 to 1; there is no removal or reset
//!
//! # Parameters
//!
//! ```text
//! m = ⌈-n·ln(p) / (ln 2)²⌉
//! k = ⌈(m/n)·ln 2⌉
//! true_fpr = (1 - e^(-kn/m))^k
//! ```
//!
//! # Hashing
//!
//! Two base hashes are computed per element: `h1` from the element, `h2`
//! from `(element, SALT)`. The `i`-th index is `(h1 + i·h2) mod m` (see
//! [`HashStrategy`]). This is not `k` independent hash functions: when
//! `h2 mod m == 0` all indices of an element coincide, and at high occupancy
//! the observed rate exceeds `true_fpr`.
//!
//! # Concurrency
//!
//! `insert` takes `&mut self`; the filter has no internal synchronization.
//! Use [`LockedBloomFilter`](crate::sync::LockedBloomFilter) to share one
//! between threads.
//!
//! # Examples
//!
//! ```
//! use saltbloom::StandardBloomFilter;
//!
//! # fn main() -> saltbloom::Result<()> {
//! let mut filter = StandardBloomFilter::<str>::new(1000, 0.01)?;
//! filter.insert("alice");
//! filter.insert("bob");
//!
//! assert!(filter.contains("alice"));
//! assert_eq!(filter.bit_count(), 9586);
//! assert_eq!(filter.hash_count(), 7);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::bitvec::BitVec;
use crate::core::filter::BloomFilter;
use crate::core::params::FilterParams;
use crate::error::{BloomError, Result};
use crate::hash::{base_hashes, BitIndices, BloomHasher, HashStrategy, StdHasher};

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Classic Bloom filter over elements of type `T`.
///
/// * `T` - element type; any `Hash` type, including unsized ones like `str`
/// * `H` - byte hasher producing the base hashes
///
/// The filter stores no `T` values, only bits.
pub struct StandardBloomFilter<T: ?Sized, H = StdHasher> {
    bits: BitVec,
    params: FilterParams,
    hasher: H,
    strategy: HashStrategy,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, H: Clone> Clone for StandardBloomFilter<T, H> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            params: self.params,
            hasher: self.hasher.clone(),
            strategy: self.strategy,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, H: BloomHasher> fmt::Debug for StandardBloomFilter<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardBloomFilter")
            .field("params", &self.params)
            .field("strategy", &self.strategy)
            .field("hasher", &self.hasher.name())
            .field("set_bits", &self.bits.count_ones())
            .finish()
    }
}

impl<T> StandardBloomFilter<T, StdHasher>
where
    T: Hash + ?Sized,
{
    /// Create a filter sized for `capacity` elements at `target_fpr`.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidCapacity`] if `capacity == 0`
    /// - [`BloomError::InvalidFalsePositiveRate`] if `target_fpr` is not
    ///   strictly between 0 and 1 (NaN included)
    /// - [`BloomError::BitCountOverflow`] if the bit array cannot be addressed
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::{BloomError, StandardBloomFilter};
    ///
    /// let filter = StandardBloomFilter::<u64>::new(100, 0.01).unwrap();
    /// assert_eq!((filter.bit_count(), filter.hash_count()), (959, 7));
    ///
    /// let err = StandardBloomFilter::<u64>::new(0, 0.01).unwrap_err();
    /// assert_eq!(err, BloomError::InvalidCapacity { capacity: 0 });
    /// ```
    pub fn new(capacity: usize, target_fpr: f64) -> Result<Self> {
        Self::with_hasher(capacity, target_fpr, StdHasher::new())
    }
}

impl<T, H> StandardBloomFilter<T, H>
where
    T: Hash + ?Sized,
    H: BloomHasher,
{
    /// Create a filter with a custom hasher and the default strategy.
    ///
    /// # Errors
    ///
    /// Same as [`new`](StandardBloomFilter::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::hash::StdHasher;
    /// use saltbloom::StandardBloomFilter;
    ///
    /// let filter = StandardBloomFilter::<str, _>::with_hasher(10_000, 0.01, StdHasher::with_seed(42)).unwrap();
    /// assert_eq!(filter.capacity(), 10_000);
    /// ```
    pub fn with_hasher(capacity: usize, target_fpr: f64, hasher: H) -> Result<Self> {
        Self::with_strategy(capacity, target_fpr, hasher, HashStrategy::default())
    }

    /// Create a filter with a custom hasher and index strategy.
    ///
    /// The strategy changes only how indices are derived; `m` and `k` are the
    /// same for every strategy.
    ///
    /// # Errors
    ///
    /// Same as [`new`](StandardBloomFilter::new).
    pub fn with_strategy(
        capacity: usize,
        target_fpr: f64,
        hasher: H,
        strategy: HashStrategy,
    ) -> Result<Self> {
        let params = FilterParams::derive(capacity, target_fpr)?;
        Self::from_params(params, hasher, strategy)
    }

    /// Build a filter from already derived parameters.
    ///
    /// # Errors
    ///
    /// [`BloomError::InvalidFilterSize`] if `params.bit_count == 0`.
    pub(crate) fn from_params(
        params: FilterParams,
        hasher: H,
        strategy: HashStrategy,
    ) -> Result<Self> {
        let bits = BitVec::new(params.bit_count)?;

        tracing::debug!(
            capacity = params.capacity,
            target_fpr = params.target_fpr,
            bit_count = params.bit_count,
            hash_count = params.hash_count,
            true_fpr = params.true_fpr,
            strategy = strategy.name(),
            hasher = hasher.name(),
            "created bloom filter"
        );

        Ok(Self {
            bits,
            params,
            hasher,
            strategy,
            _marker: PhantomData,
        })
    }

    /// Expected number of elements (n).
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.params.capacity
    }

    /// Requested false positive rate.
    #[must_use]
    #[inline]
    pub fn target_fpr(&self) -> f64 {
        self.params.target_fpr
    }

    /// Size of the bit array (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.params.bit_count
    }

    /// Number of hash functions (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.params.hash_count
    }

    /// Theoretical false positive rate of the rounded `(m, k)` at
    /// `capacity` elements.
    ///
    /// Rounding can push this above `target_fpr`: `new(10, 0.5)` yields
    /// about 0.542.
    #[must_use]
    #[inline]
    pub fn true_fpr(&self) -> f64 {
        self.params.true_fpr
    }

    /// All derived parameters.
    #[must_use]
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Index derivation strategy.
    #[must_use]
    pub fn hash_strategy(&self) -> HashStrategy {
        self.strategy
    }

    /// Name of the base hasher.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// The underlying bit array.
    #[must_use]
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    /// The `k` bit indices of `item`, in hash-function order.
    #[must_use]
    pub fn indices(&self, item: &T) -> BitIndices {
        let (h1, h2) = base_hashes(&self.hasher, item);
        BitIndices::new(self.strategy, h1, h2, self.hash_count(), self.bit_count())
    }

    /// Bit index of `item` under hash function `i`.
    ///
    /// Deterministic for a given `(item, i)` on the same filter.
    ///
    /// # Errors
    ///
    /// [`BloomError::HashIndexOutOfRange`] if `i >= hash_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::{BloomError, StandardBloomFilter};
    ///
    /// let filter = StandardBloomFilter::<str>::new(100, 0.01).unwrap();
    /// let idx = filter.hash_index("x", 0).unwrap();
    /// assert!(idx < filter.bit_count());
    ///
    /// assert_eq!(
    ///     filter.hash_index("x", 7),
    ///     Err(BloomError::HashIndexOutOfRange { index: 7, hash_count: 7 })
    /// );
    /// ```
    pub fn hash_index(&self, item: &T, i: usize) -> Result<usize> {
        let k = self.hash_count();
        if i >= k {
            tracing::warn!(index = i, hash_count = k, "hash function index out of range");
            return Err(BloomError::hash_index_out_of_range(i, k));
        }

        let (h1, h2) = self.indices(item).reduced();
        Ok(self.strategy.index(h1, h2, i, self.bit_count()))
    }

    /// Insert an element. Inserting the same element again changes nothing.
    #[inline]
    pub fn insert(&mut self, item: &T) {
        let indices = self.indices(item);

        #[cfg(feature = "trace")]
        tracing::trace!(hash_count = indices.len(), "StandardBloomFilter::insert");

        for idx in indices {
            self.bits.set(idx);
        }
    }

    /// Test membership.
    ///
    /// `false` is definite. `true` may be a false positive. Stops at the
    /// first unset bit.
    #[must_use]
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!("StandardBloomFilter::contains");

        let bits = &self.bits;
        self.indices(item).all(|idx| bits.get(idx))
    }

    /// Insert every element of an iterator.
    pub fn insert_batch<'a, I>(&mut self, items: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Test every element of an iterator, in order.
    #[must_use]
    pub fn contains_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().map(|item| self.contains(item)).collect()
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`.
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_count() as f64
    }

    /// `true` until the first insertion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// False positive rate implied by the current fill rate, `fill^k`.
    ///
    /// Tracks the actual contents rather than the design capacity, so it
    /// grows past `true_fpr` when more than `capacity` elements are inserted.
    #[must_use]
    pub fn estimate_fpr(&self) -> f64 {
        self.fill_rate().powf(self.hash_count() as f64)
    }

    /// Estimated number of distinct elements inserted.
    ///
    /// ```text
    /// n ≈ -(m/k) × ln(1 - X/m)
    /// ```
    ///
    /// Returns `usize::MAX` once every bit is set.
    #[must_use]
    pub fn estimate_cardinality(&self) -> usize {
        let set_bits = self.count_set_bits();
        if set_bits == 0 {
            return 0;
        }
        if set_bits >= self.bit_count() {
            return usize::MAX;
        }

        let m = self.bit_count() as f64;
        let k = self.hash_count() as f64;
        let estimated = -(m / k) * (1.0 - set_bits as f64 / m).ln();
        estimated.round().max(0.0) as usize
    }

    /// Approximate memory footprint in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
            + std::mem::size_of::<FilterParams>()
            + std::mem::size_of::<H>()
            + std::mem::size_of::<HashStrategy>()
    }
}

impl<T, H> BloomFilter<T> for StandardBloomFilter<T, H>
where
    T: Hash + ?Sized,
    H: BloomHasher,
{
    fn insert(&mut self, item: &T) {
        StandardBloomFilter::insert(self, item);
    }

    fn contains(&self, item: &T) -> bool {
        StandardBloomFilter::contains(self, item)
    }

    fn capacity(&self) -> usize {
        StandardBloomFilter::capacity(self)
    }

    fn target_fpr(&self) -> f64 {
        StandardBloomFilter::target_fpr(self)
    }

    fn bit_count(&self) -> usize {
        StandardBloomFilter::bit_count(self)
    }

    fn hash_count(&self) -> usize {
        StandardBloomFilter::hash_count(self)
    }

    fn true_fpr(&self) -> f64 {
        StandardBloomFilter::true_fpr(self)
    }

    fn count_set_bits(&self) -> usize {
        StandardBloomFilter::count_set_bits(self)
    }
}

impl<'a, T, H> Extend<&'a T> for StandardBloomFilter<T, H>
where
    T: Hash + ?Sized + 'a,
    H: BloomHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_batch(iter);
    }
}
