//! Fixed-size, monotonic bit vector.
//!
//! `BitVec` is the storage behind every filter in this crate. Bits are packed
//! into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! The vector is owned exclusively by one filter and mutated through
//! `&mut self`. Bits only ever go from 0 to 1: there is no clear or reset
//! operation, which is what makes a Bloom filter free of false negatives.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/64⌉ * 8` bytes for `n` bits
//! - `set` / `get`: O(1)
//! - `count_ones`: O(n/64), uses POPCNT where available
//!
//! # Examples
//!
//! ```
//! use saltbloom::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(100).unwrap();
//! bv.set(42);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! ```

use crate::error::{BloomError, Result};

const WORD_BITS: usize = 64;

/// Fixed-size bit array with set-only mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    /// Packed words, 64 bits each.
    blocks: Box<[u64]>,

    /// Number of addressable bits (not necessarily a multiple of 64).
    len: usize,
}

impl BitVec {
    /// Create a bit vector of `num_bits` bits, all 0.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidFilterSize`] if `num_bits == 0`
    /// - [`BloomError::BitCountOverflow`] if the backing words cannot be
    ///   allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(1000).unwrap();
    /// assert_eq!(bv.len(), 1000);
    /// assert_eq!(bv.count_ones(), 0);
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomError::invalid_filter_size(num_bits));
        }

        let num_blocks = num_bits.div_ceil(WORD_BITS);
        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(num_blocks)
            .map_err(|_| BloomError::bit_count_overflow(num_bits as f64))?;
        blocks.resize(num_blocks, 0u64);

        Ok(Self {
            blocks: blocks.into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed `BitVec`; provided for API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of 64-bit words backing the vector.
    #[must_use]
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Set a bit to 1. Setting an already-set bit has no effect.
    ///
    /// Returns `true` if the bit was previously 0.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing. Filters only pass
    /// indices reduced modulo `len`.
    #[inline]
    pub fn set(&mut self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let mask = 1u64 << (index % WORD_BITS);
        let block = &mut self.blocks[index / WORD_BITS];
        let was_unset = *block & mask == 0;
        *block |= mask;
        was_unset
    }

    /// Read a bit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let mask = 1u64 << (index % WORD_BITS);
        self.blocks[index / WORD_BITS] & mask != 0
    }

    /// Checked variant of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// [`BloomError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_set(&mut self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(BloomError::index_out_of_bounds(index, self.len));
        }
        Ok(self.set(index))
    }

    /// Checked variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// [`BloomError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(BloomError::index_out_of_bounds(index, self.len));
        }
        Ok(self.get(index))
    }

    /// Count bits set to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::core::bitvec::BitVec;
    ///
    /// let mut bv = BitVec::new(100).unwrap();
    /// bv.set(0);
    /// bv.set(50);
    /// bv.set(99);
    /// assert_eq!(bv.count_ones(), 3);
    /// ```
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| block.count_ones() as usize)
            .sum()
    }

    /// Iterate over the indices of set bits in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .flat_map(|(block_idx, &block)| {
                let mut word = block;
                std::iter::from_fn(move || {
                    if word == 0 {
                        return None;
                    }
                    let bit = word.trailing_zeros() as usize;
                    word &= word - 1;
                    Some(block_idx * WORD_BITS + bit)
                })
            })
    }

    /// Heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.blocks.len() * std::mem::size_of::<u64>() + std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let bv = BitVec::new(100).unwrap();
        assert_eq!(bv.len(), 100);
        assert_eq!(bv.num_blocks(), 2); // ⌈100/64⌉
        assert!(!bv.is_empty());
        assert_eq!(bv.count_ones(), 0);
    }

    #[test]
    fn test_new_zero_bits_error() {
        assert_eq!(BitVec::new(0), Err(BloomError::InvalidFilterSize { size: 0 }));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_unallocatable_size_is_an_error() {
        let num_bits = 1usize << 62;
        assert!(matches!(
            BitVec::new(num_bits),
            Err(BloomError::BitCountOverflow { .. })
        ));
    }

    #[test]
    fn test_set_get_word_boundaries() {
        let mut bv = BitVec::new(128).unwrap();
        for idx in [0, 63, 64, 127] {
            assert!(!bv.get(idx));
            bv.set(idx);
            assert!(bv.get(idx));
        }
        assert!(!bv.get(32));
        assert_eq!(bv.count_ones(), 4);
    }

    #[test]
    fn test_set_idempotent() {
        let mut bv = BitVec::new(64).unwrap();
        assert!(bv.set(10));
        assert!(!bv.set(10));
        assert!(!bv.set(10));
        assert_eq!(bv.count_ones(), 1);
    }

    #[test]
    fn test_partial_last_word() {
        let mut bv = BitVec::new(65).unwrap();
        bv.set(64);
        assert!(bv.get(64));
        assert_eq!(bv.num_blocks(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds() {
        let mut bv = BitVec::new(15).unwrap();
        bv.set(15);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        let bv = BitVec::new(15).unwrap();
        let _ = bv.get(64);
    }

    #[test]
    fn test_checked_access() {
        let mut bv = BitVec::new(10).unwrap();
        assert_eq!(bv.try_set(3), Ok(true));
        assert_eq!(bv.try_get(3), Ok(true));
        assert_eq!(
            bv.try_set(10),
            Err(BloomError::IndexOutOfBounds { index: 10, length: 10 })
        );
        assert!(bv.try_get(11).is_err());
    }

    #[test]
    fn test_iter_ones() {
        let mut bv = BitVec::new(200).unwrap();
        for idx in [199, 0, 64, 5, 130] {
            bv.set(idx);
        }
        let ones: Vec<usize> = bv.iter_ones().collect();
        assert_eq!(ones, vec![0, 5, 64, 130, 199]);
    }

    #[test]
    fn test_clone_independence() {
        let mut original = BitVec::new(64).unwrap();
        original.set(1);
        let mut copy = original.clone();
        copy.set(2);
        assert!(!original.get(2));
        assert!(copy.get(1));
    }

    #[test]
    fn test_memory_usage() {
        let bv = BitVec::new(1000).unwrap();
        assert!(bv.memory_usage() >= 128); // ⌈1000/64⌉ × 8
    }
}
