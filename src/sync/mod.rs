//! Thread-safe access to filters.
//!
//! [`StandardBloomFilter`](crate::StandardBloomFilter) has no internal
//! synchronization. [`LockedBloomFilter`] wraps one in a single
//! `parking_lot::RwLock` and implements
//! [`SharedBloomFilter`](crate::core::SharedBloomFilter), so it can be shared
//! through `Arc` and written with `&self`.
//!
//! | Type | Insert | Query | Share with |
//! |------|--------|-------|------------|
//! | `StandardBloomFilter` | `&mut self` | `&self` | external lock |
//! | `LockedBloomFilter` | `&self` (write lock) | `&self` (read lock) | `Arc` |

pub mod locked;

pub use locked::LockedBloomFilter;
