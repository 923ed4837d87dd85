//! Element hashing and index derivation.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs      - BloomHasher trait, StdHasher (FNV-1a), element digest
//! ├── strategies.rs  - HashStrategy and the BitIndices iterator
//! ├── xxhash.rs      - XxHasher (feature = "xxhash")
//! └── mod.rs         - This file
//! ```
//!
//! # Pipeline
//!
//! ```text
//! item ──Hash──► digest ──BloomHasher──► h1
//! (item, SALT) ──Hash──► digest ──BloomHasher──► h2
//! (h1 mod m, h2 mod m) ──HashStrategy──► k bit indices
//! ```
//!
//! # Feature Flags
//!
//! | Feature   | Enables        |
//! |-----------|----------------|
//! | (default) | [`StdHasher`]  |
//! | `xxhash`  | `XxHasher`     |
//!
//! # Examples
//!
//! ```
//! use saltbloom::hash::{base_hashes, BitIndices, HashStrategy, StdHasher};
//!
//! let (h1, h2) = base_hashes(&StdHasher::new(), &"test");
//! let indices: Vec<usize> = BitIndices::new(HashStrategy::Double, h1, h2, 7, 1000).collect();
//! assert_eq!(indices.len(), 7);
//! assert!(indices.iter().all(|&i| i < 1000));
//! ```

pub mod hasher;
pub mod strategies;

#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
pub mod xxhash;

pub use hasher::{base_hashes, item_digest, BloomHasher, DeterministicHasher, StdHasher, SALT};
pub use strategies::{BitIndices, HashStrategy};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;

/// Default hasher used by filters when none is given.
pub type DefaultHasher = StdHasher;
