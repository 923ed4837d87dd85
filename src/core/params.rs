//! Parameter derivation for Bloom filters.
//!
//! Given:
//! - `n`: expected number of elements (capacity)
//! - `ε`: target false positive rate
//!
//! Minimizing the false positive rate over `k` for fixed `m` and `n` yields:
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` (bits in filter)
//! - `k = ⌈(m/n) × ln 2⌉` (number of hash functions)
//!
//! Because both values are rounded, the rate the filter actually achieves at
//! `n` insertions differs from `ε`. It is recomputed from the rounded values:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! Neither `m` nor `k` is clamped. A filter for `n = 10, ε = 0.5` really is
//! 15 bits with 2 hash functions.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;
use std::fmt;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Largest bit count a filter may request.
///
/// Half the address space, so that word-count arithmetic never overflows.
pub const MAX_BIT_COUNT: usize = usize::MAX / 2;

/// Check that the capacity is a positive integer.
///
/// # Errors
///
/// [`BloomError::InvalidCapacity`] if `n == 0`.
#[inline]
pub fn validate_capacity(n: usize) -> Result<()> {
    if n == 0 {
        return Err(BloomError::invalid_capacity(n));
    }
    Ok(())
}

/// Check that the false positive rate lies strictly inside (0, 1).
///
/// NaN fails the comparison and is rejected along with the boundaries.
///
/// # Errors
///
/// [`BloomError::InvalidFalsePositiveRate`] otherwise.
#[inline]
pub fn validate_fp_rate(fp_rate: f64) -> Result<()> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomError::invalid_fp_rate(fp_rate));
    }
    Ok(())
}

/// Calculate the bit count for `n` elements at false positive rate `fp_rate`.
///
/// Implements `m = ⌈-n × ln(ε) / (ln 2)²⌉`.
///
/// # Errors
///
/// - [`BloomError::InvalidCapacity`] if `n == 0`
/// - [`BloomError::InvalidFalsePositiveRate`] if `fp_rate` not in (0, 1)
/// - [`BloomError::BitCountOverflow`] if the result exceeds [`MAX_BIT_COUNT`]
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// assert_eq!(optimal_bit_count(10, 0.5).unwrap(), 15);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    validate_capacity(n)?;
    validate_fp_rate(fp_rate)?;

    let m = -(n as f64) * fp_rate.ln() / LN2_SQUARED;
    let m_ceil = m.ceil();

    if !m_ceil.is_finite() || m_ceil > MAX_BIT_COUNT as f64 {
        return Err(BloomError::bit_count_overflow(m));
    }

    Ok(m_ceil as usize)
}

/// Calculate the hash function count for `m` bits and `n` elements.
///
/// Implements `k = ⌈(m/n) × ln 2⌉`. Since `m` and `n` are positive the result
/// is always at least 1.
///
/// # Errors
///
/// - [`BloomError::InvalidFilterSize`] if `m == 0`
/// - [`BloomError::InvalidCapacity`] if `n == 0`
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// assert_eq!(optimal_hash_count(15, 10).unwrap(), 2);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }
    validate_capacity(n)?;

    let k = ((m as f64 / n as f64) * LN_2).ceil() as usize;
    Ok(k.max(1))
}

/// Theoretical false positive rate after inserting `n` elements into `m` bits
/// with `k` hash functions.
///
/// Implements `p = (1 - e^(-kn/m))^k`, which assumes `k` independent, uniform
/// hash functions. An empty filter (`n == 0`) has rate 0.
///
/// # Errors
///
/// - [`BloomError::InvalidFilterSize`] if `m == 0`
/// - [`BloomError::InvalidHashCount`] if `k == 0`
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::false_positive_rate;
///
/// let p = false_positive_rate(9586, 1000, 7).unwrap();
/// assert!((p - 0.01).abs() < 0.001);
/// ```
pub fn false_positive_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }
    if k == 0 {
        return Err(BloomError::invalid_hash_count(k));
    }
    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let exponent = -(k_f64 * n as f64) / m as f64;
    let fp_rate = (1.0 - exponent.exp()).powf(k_f64);

    Ok(fp_rate.clamp(0.0, 1.0))
}

/// Bits of storage needed per element for a target rate: `-ln(ε) / (ln 2)²`.
///
/// # Errors
///
/// [`BloomError::InvalidFalsePositiveRate`] if `fp_rate` not in (0, 1).
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01).unwrap();
/// assert!((bpe - 9.585).abs() < 0.01);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    validate_fp_rate(fp_rate)?;
    Ok(-fp_rate.ln() / LN2_SQUARED)
}

/// The complete, immutable parameter set of one filter.
///
/// Produced once by [`FilterParams::derive`]; every field is fixed for the
/// lifetime of the filter that stores it.
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::FilterParams;
///
/// let params = FilterParams::derive(10_000, 0.001).unwrap();
/// assert_eq!(params.bit_count, 143_776);
/// assert_eq!(params.hash_count, 10);
/// assert!(params.true_fpr > 0.0 && params.true_fpr < 0.0011);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Expected number of elements (n).
    pub capacity: usize,
    /// Requested false positive rate at full capacity.
    pub target_fpr: f64,
    /// Size of the bit array (m).
    pub bit_count: usize,
    /// Number of hash functions (k).
    pub hash_count: usize,
    /// False positive rate implied by the rounded `(m, k)` at `n` elements.
    pub true_fpr: f64,
}

impl FilterParams {
    /// Validate `(capacity, target_fpr)` and derive `m`, `k` and the true rate.
    ///
    /// Both inputs are validated before anything is computed.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidCapacity`] if `capacity == 0`
    /// - [`BloomError::InvalidFalsePositiveRate`] if `target_fpr` not in (0, 1)
    /// - [`BloomError::BitCountOverflow`] if the bit array cannot be addressed
    pub fn derive(capacity: usize, target_fpr: f64) -> Result<Self> {
        validate_capacity(capacity)?;
        validate_fp_rate(target_fpr)?;

        let bit_count = optimal_bit_count(capacity, target_fpr)?;
        let hash_count = optimal_hash_count(bit_count, capacity)?;
        let true_fpr = false_positive_rate(bit_count, capacity, hash_count)?;

        Ok(Self {
            capacity,
            target_fpr,
            bit_count,
            hash_count,
            true_fpr,
        })
    }

    /// Bits per expected element, `m / n`.
    #[must_use]
    pub fn bits_per_item(&self) -> f64 {
        self.bit_count as f64 / self.capacity as f64
    }

    /// Bytes needed to hold the bit array, rounded up.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.bit_count.div_ceil(8)
    }
}

impl fmt::Display for FilterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} target_fpr={} m={} k={} true_fpr={:.6} ({:.2} bits/item, {} bytes)",
            self.capacity,
            self.target_fpr,
            self.bit_count,
            self.hash_count,
            self.true_fpr,
            self.bits_per_item(),
            self.memory_bytes()
        )
    }
}
