//! A [`StandardBloomFilter`] behind a single reader-writer lock.
//!
//! Queries take the read lock and run in parallel; inserts take the write
//! lock. Because bits are monotonic, a query racing an insert of the same
//! element sees it either fully absent or fully present, never torn.
//!
//! # Examples
//!
//! ```
//! use saltbloom::core::SharedBloomFilter;
//! use saltbloom::sync::LockedBloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(LockedBloomFilter::<u64>::new(10_000, 0.01).unwrap());
//!
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 filter.insert(&(t * 100 + i));
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert!((0..400u64).all(|i| filter.contains(&i)));
//! ```

use crate::core::filter::SharedBloomFilter;
use crate::error::Result;
use crate::filters::StandardBloomFilter;
use crate::hash::{BloomHasher, StdHasher};

use parking_lot::{RwLock, RwLockReadGuard};
use std::fmt;
use std::hash::Hash;

/// Thread-safe wrapper with `&self` insert.
pub struct LockedBloomFilter<T: ?Sized, H = StdHasher> {
    inner: RwLock<StandardBloomFilter<T, H>>,
}

impl<T: Hash + ?Sized> LockedBloomFilter<T, StdHasher> {
    /// Create a locked filter sized for `capacity` items at `target_fpr`.
    ///
    /// # Errors
    ///
    /// Same as [`StandardBloomFilter::new`].
    pub fn new(capacity: usize, target_fpr: f64) -> Result<Self> {
        StandardBloomFilter::new(capacity, target_fpr).map(Self::from_filter)
    }
}

impl<T: Hash + ?Sized, H: BloomHasher> LockedBloomFilter<T, H> {
    /// Wrap an existing filter, keeping its contents.
    #[must_use]
    pub fn from_filter(filter: StandardBloomFilter<T, H>) -> Self {
        Self {
            inner: RwLock::new(filter),
        }
    }

    /// Shared access to the wrapped filter for introspection.
    ///
    /// Inserts block while the guard is alive.
    pub fn read(&self) -> RwLockReadGuard<'_, StandardBloomFilter<T, H>> {
        self.inner.read()
    }

    /// Unwrap into the plain filter.
    #[must_use]
    pub fn into_inner(self) -> StandardBloomFilter<T, H> {
        self.inner.into_inner()
    }

    /// Clone the current state into an unlocked filter.
    #[must_use]
    pub fn snapshot(&self) -> StandardBloomFilter<T, H>
    where
        H: Clone,
    {
        self.inner.read().clone()
    }
}

impl<T: Hash + ?Sized, H: BloomHasher> From<StandardBloomFilter<T, H>> for LockedBloomFilter<T, H> {
    fn from(filter: StandardBloomFilter<T, H>) -> Self {
        Self::from_filter(filter)
    }
}

impl<T: ?Sized, H: BloomHasher> fmt::Debug for LockedBloomFilter<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_read() {
            Some(guard) => f.debug_struct("LockedBloomFilter").field("inner", &*guard).finish(),
            None => f.debug_struct("LockedBloomFilter").field("inner", &"<locked>").finish(),
        }
    }
}

impl<T, H> SharedBloomFilter<T> for LockedBloomFilter<T, H>
where
    T: Hash + ?Sized,
    H: BloomHasher,
{
    fn insert(&self, item: &T) {
        #[cfg(feature = "trace")]
        tracing::trace!("LockedBloomFilter::insert");

        self.inner.write().insert(item);
    }

    fn contains(&self, item: &T) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!("LockedBloomFilter::contains");

        self.inner.read().contains(item)
    }

    fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    fn bit_count(&self) -> usize {
        self.inner.read().bit_count()
    }

    fn hash_count(&self) -> usize {
        self.inner.read().hash_count()
    }

    fn count_set_bits(&self) -> usize {
        self.inner.read().count_set_bits()
    }

    fn insert_batch<'a, I>(&self, items: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut guard = self.inner.write();
        for item in items {
            guard.insert(item);
        }
    }

    fn contains_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let guard = self.inner.read();
        items.into_iter().map(|item| guard.contains(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_insert_contains() {
        let filter = LockedBloomFilter::<str>::new(100, 0.01).unwrap();
        assert!(filter.is_empty());
        filter.insert("a");
        assert!(filter.contains("a"));
        assert!(!filter.is_empty());
        assert_eq!(filter.bit_count(), 959);
        assert_eq!(filter.hash_count(), 7);
        assert_eq!(filter.capacity(), 100);
    }

    #[test]
    fn test_concurrent_inserts_no_false_negatives() {
        let filter = Arc::new(LockedBloomFilter::<u64>::new(8000, 0.01).unwrap());

        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    for i in 0..1000 {
                        filter.insert(&(t * 1000 + i));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert!((0..8000u64).all(|i| filter.contains(&i)));
    }

    #[test]
    fn test_matches_unlocked_filter() {
        let mut plain = StandardBloomFilter::<u64>::new(1000, 0.01).unwrap();
        let locked = LockedBloomFilter::<u64>::new(1000, 0.01).unwrap();

        let items: Vec<u64> = (0..500).collect();
        plain.insert_batch(&items);
        locked.insert_batch(&items);

        assert_eq!(locked.read().bits(), plain.bits());
        assert_eq!(locked.contains_batch(&items), vec![true; 500]);
    }

    #[test]
    fn test_into_inner_and_snapshot() {
        let mut base = StandardBloomFilter::<str>::new(100, 0.01).unwrap();
        base.insert("kept");
        let locked = LockedBloomFilter::from(base);
        locked.insert("added");

        let snap = locked.snapshot();
        let inner = locked.into_inner();
        assert!(inner.contains("kept") && inner.contains("added"));
        assert_eq!(snap.bits(), inner.bits());
    }

    #[test]
    fn test_debug_output() {
        let filter = LockedBloomFilter::<u8>::new(10, 0.1).unwrap();
        assert!(format!("{filter:?}").contains("LockedBloomFilter"));
    }
}
