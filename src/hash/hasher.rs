//! Byte hashers and the element digest.
//!
//! Hashing an element happens in two stages:
//!
//! 1. The element's [`Hash`] projection is folded into an 8-byte digest
//!    ([`item_digest`]). This is what lets a filter accept any `T: Hash`,
//!    including `str`, tuples, `Option` and user enums.
//! 2. The digest is fed to a [`BloomHasher`], which produces the 64-bit base
//!    hash used for index derivation.
//!
//! The two base hashes of double hashing come from [`base_hashes`]:
//! `h1` hashes the element itself and `h2` hashes the pair `(element, SALT)`.
//!
//! # Examples
//!
//! ```
//! use saltbloom::hash::hasher::{base_hashes, BloomHasher, StdHasher};
//!
//! let hasher = StdHasher::new();
//! assert_eq!(hasher.hash_bytes(b"hello"), hasher.hash_bytes(b"hello"));
//!
//! let (h1, h2) = base_hashes(&hasher, "hello");
//! assert_ne!(h1, h2);
//! ```

#![allow(clippy::module_name_repetitions)]

use std::hash::{Hash, Hasher};

/// Salt paired with an element to derive the second base hash.
///
/// ASCII `"salt"` packed into a `u64`.
pub const SALT: u64 = 0x7361_6c74;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const DEFAULT_SEED: u64 = 0x517c_c1b7_2722_0a95;

/// Base hasher trait for Bloom filter hash functions.
///
/// Implementations turn bytes into a uniformly distributed `u64`. They must be
/// deterministic: the same bytes always produce the same value for a given
/// hasher instance, otherwise `contains` could miss inserted elements.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::{BloomHasher, StdHasher};
///
/// let a = StdHasher::with_seed(7).hash_bytes(b"abc");
/// let b = StdHasher::with_seed(8).hash_bytes(b"abc");
/// assert_ne!(a, b);
/// ```
pub trait BloomHasher: Send + Sync {
    /// Hash arbitrary bytes to a 64-bit value.
    fn hash_bytes(&self, bytes: &[u8]) -> u64;

    /// Human-readable name, used in diagnostics and filter metadata.
    fn name(&self) -> &'static str;
}

/// 64-bit FNV-1a as a [`std::hash::Hasher`].
///
/// Same output in every process, unlike `RandomState`. Filter indices also
/// depend on the `DefaultHasher` element digest, so they are only reproducible
/// with the same toolchain and pointer width (`usize`/`isize` hash at native
/// width).
#[derive(Debug, Clone)]
pub struct DeterministicHasher {
    state: u64,
}

impl DeterministicHasher {
    /// Create a hasher starting at the FNV-1a offset basis.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Default for DeterministicHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for DeterministicHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Default hasher: seeded FNV-1a over the element digest.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::{BloomHasher, StdHasher};
///
/// let h1 = StdHasher::with_seed(0).hash_bytes(b"test");
/// let h2 = StdHasher::with_seed(42).hash_bytes(b"test");
/// assert_ne!(h1, h2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdHasher {
    seed: u64,
}

impl StdHasher {
    /// Create a hasher with the built-in seed.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    /// Create a hasher with an explicit seed.
    ///
    /// Filters built with different seeds set different bits for the same
    /// element.
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

impl Default for StdHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomHasher for StdHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let mut hasher = DeterministicHasher::new();
        hasher.write_u64(self.seed);
        hasher.write(bytes);
        hasher.finish()
    }

    fn name(&self) -> &'static str {
        "StdHasher"
    }
}

/// Fold an element's [`Hash`] projection into 8 little-endian bytes.
///
/// Uses SipHash with fixed keys (`DefaultHasher::new()`), so the digest of a
/// value is the same in every process built with the same toolchain for the
/// same pointer width.
#[inline]
#[must_use]
pub fn item_digest<T: Hash + ?Sized>(item: &T) -> [u8; 8] {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish().to_le_bytes()
}

/// The two unreduced base hashes `(h1, h2)` of an element.
///
/// `h1` hashes the element and `h2` hashes `(element, SALT)`.
#[inline]
pub fn base_hashes<T, H>(hasher: &H, item: &T) -> (u64, u64)
where
    T: Hash + ?Sized,
    H: BloomHasher + ?Sized,
{
    let h1 = hasher.hash_bytes(&item_digest(item));
    let h2 = hasher.hash_bytes(&item_digest(&(item, SALT)));
    (h1, h2)
}
