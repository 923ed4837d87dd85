//! Index derivation from two base hashes.
//!
//! A filter needs k bit positions per element but computes only two base
//! hashes. Both are first reduced modulo m, then combined:
//!
//! ```text
//! Double:          gᵢ(x) = (h₁ + i·h₂) mod m
//! EnhancedDouble:  gᵢ(x) = (h₁ + i·h₂ + (i² + i)/2) mod m
//! ```
//!
//! Arithmetic is carried out in `u128`, so `i·h₂` never wraps.
//!
//! # Accuracy
//!
//! The k positions are not independent. If `h₂ mod m == 0` every plain
//! double-hashing index collapses onto `h₁`, and at high occupancy the
//! observed false positive rate drifts above the theoretical
//! `(1 - e^(-kn/m))^k`. The enhanced variant's quadratic term breaks the
//! collapse but does not change the parameter formulas.
//!
//! # References
//!
//! - Kirsch & Mitzenmacher (2006), "Less Hashing, Same Performance: Building a
//!   Better Bloom Filter"
//! - Dillinger & Manolios (2004), "Fast and Accurate Bitstate Verification for
//!   SPIN"

#![allow(clippy::cast_possible_truncation)]

use std::fmt;
use std::iter::FusedIterator;

/// How the k indices are derived from the two base hashes.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::HashStrategy;
///
/// let s = HashStrategy::default();
/// assert_eq!(s, HashStrategy::Double);
/// assert_eq!(s.index(3, 5, 2, 11), (3 + 2 * 5) % 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashStrategy {
    /// `(h1 + i*h2) mod m`
    #[default]
    Double,
    /// `(h1 + i*h2 + (i²+i)/2) mod m`
    EnhancedDouble,
}

impl HashStrategy {
    /// Human-readable name of the strategy.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Double => "Double",
            Self::EnhancedDouble => "EnhancedDouble",
        }
    }

    /// The `i`-th index for base hashes already reduced modulo `m`.
    ///
    /// `m` must be non-zero.
    #[inline]
    #[must_use]
    pub fn index(&self, h1: u64, h2: u64, i: usize, m: usize) -> usize {
        let i = i as u128;
        let mut acc = u128::from(h1) + i * u128::from(h2);
        if let Self::EnhancedDouble = self {
            acc += (i * i + i) / 2;
        }
        (acc % m as u128) as usize
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over the k bit indices of one element.
///
/// Holds only the two reduced base hashes and a counter.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::{BitIndices, HashStrategy};
///
/// let indices: Vec<usize> = BitIndices::new(HashStrategy::Double, 1234, 5678, 4, 100).collect();
/// assert_eq!(indices, vec![34, 12, 90, 68]);
/// ```
#[derive(Debug, Clone)]
pub struct BitIndices {
    strategy: HashStrategy,
    h1: u64,
    h2: u64,
    m: usize,
    next: usize,
    k: usize,
}

impl BitIndices {
    /// Build the index sequence from unreduced base hashes.
    ///
    /// # Panics
    ///
    /// Panics if `m == 0`.
    #[must_use]
    pub fn new(strategy: HashStrategy, h1: u64, h2: u64, k: usize, m: usize) -> Self {
        assert!(m > 0, "bit count must be positive");
        let m64 = m as u64;
        Self {
            strategy,
            h1: h1 % m64,
            h2: h2 % m64,
            m,
            next: 0,
            k,
        }
    }

    /// Base hashes after reduction modulo m.
    #[must_use]
    pub fn reduced(&self) -> (u64, u64) {
        (self.h1, self.h2)
    }
}

impl Iterator for BitIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.next >= self.k {
            return None;
        }
        let idx = self.strategy.index(self.h1, self.h2, self.next, self.m);
        self.next += 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.k - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIndices {}

impl FusedIterator for BitIndices {}
