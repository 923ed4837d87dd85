//! Filter traits.
//!
//! Two access models are defined:
//!
//! ```text
//! BloomFilter<T>        insert(&mut self)  single owner, no synchronization
//! SharedBloomFilter<T>  insert(&self)      interior locking, share through Arc
//! ```
//!
//! Both guarantee the same contract: after `insert(x)`, `contains(x)` is
//! `true` for the lifetime of the filter. There is no removal and no reset;
//! bits only ever go from 0 to 1.
//!
//! Batch helpers (`insert_batch`, `contains_batch`, `contains_all`,
//! `contains_any`) are default methods built on `insert` and `contains`.

#![allow(clippy::module_name_repetitions)]

use std::hash::Hash;

/// Single-owner Bloom filter.
///
/// `T` may be unsized, so a filter over `str` accepts `&str` directly.
///
/// # Examples
///
/// ```
/// use saltbloom::core::BloomFilter;
/// use saltbloom::StandardBloomFilter;
///
/// fn load<F: BloomFilter<str>>(filter: &mut F, words: &[&str]) {
///     filter.insert_batch(words.iter().copied());
/// }
///
/// let mut filter = StandardBloomFilter::<str>::new(100, 0.01).unwrap();
/// load(&mut filter, &["alpha", "beta"]);
/// assert!(BloomFilter::contains_all(&filter, ["alpha", "beta"]));
/// ```
pub trait BloomFilter<T: Hash + ?Sized> {
    /// Insert an item. Idempotent.
    fn insert(&mut self, item: &T);

    /// `false` means the item was definitely never inserted; `true` means it
    /// probably was.
    #[must_use]
    fn contains(&self, item: &T) -> bool;

    /// Expected number of items (n) the filter was sized for.
    #[must_use]
    fn capacity(&self) -> usize;

    /// False positive rate requested at construction.
    #[must_use]
    fn target_fpr(&self) -> f64;

    /// Size of the bit array (m).
    #[must_use]
    fn bit_count(&self) -> usize;

    /// Number of hash functions (k).
    #[must_use]
    fn hash_count(&self) -> usize;

    /// Theoretical false positive rate of the rounded (m, k) at n items.
    #[must_use]
    fn true_fpr(&self) -> f64;

    /// Number of bits currently set.
    #[must_use]
    fn count_set_bits(&self) -> usize;

    /// `true` when no bit has been set yet.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Fraction of bits set, in `[0, 1]`.
    #[must_use]
    fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_count() as f64
    }

    /// Insert every item of an iterator.
    fn insert_batch<'a, I>(&mut self, items: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Query every item of an iterator, in order.
    #[must_use]
    fn contains_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().map(|item| self.contains(item)).collect()
    }

    /// `true` if every item might be present. Stops at the first miss.
    #[must_use]
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// `true` if at least one item might be present. Stops at the first hit.
    #[must_use]
    fn contains_any<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().any(|item| self.contains(item))
    }
}

/// Bloom filter that can be shared between threads.
///
/// Methods take `&self`; implementations synchronize internally. See
/// [`LockedBloomFilter`](crate::sync::LockedBloomFilter).
pub trait SharedBloomFilter<T: Hash + ?Sized>: Send + Sync {
    /// Insert an item.
    fn insert(&self, item: &T);

    /// Query an item.
    #[must_use]
    fn contains(&self, item: &T) -> bool;

    /// Expected number of items (n).
    #[must_use]
    fn capacity(&self) -> usize;

    /// Size of the bit array (m).
    #[must_use]
    fn bit_count(&self) -> usize;

    /// Number of hash functions (k).
    #[must_use]
    fn hash_count(&self) -> usize;

    /// Number of bits currently set.
    #[must_use]
    fn count_set_bits(&self) -> usize;

    /// `true` when no bit has been set yet.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Insert every item of an iterator.
    fn insert_batch<'a, I>(&self, items: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Query every item of an iterator, in order.
    #[must_use]
    fn contains_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().map(|item| self.contains(item)).collect()
    }

    /// `true` if every item might be present.
    #[must_use]
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// `true` if at least one item might be present.
    #[must_use]
    fn contains_any<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().any(|item| self.contains(item))
    }
}
