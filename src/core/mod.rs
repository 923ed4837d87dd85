//! Building blocks shared by every filter.
//!
//! ```text
//! core/
//! ├── filter.rs    - BloomFilter / SharedBloomFilter traits
//! ├── bitvec.rs    - Owned, monotonic bit array
//! ├── params.rs    - Sizing formulas and FilterParams
//! └── mod.rs       - This file
//! ```
//!
//! # Examples
//!
//! ```
//! use saltbloom::core::{BitVec, FilterParams};
//!
//! let params = FilterParams::derive(100, 0.01).unwrap();
//! assert_eq!((params.bit_count, params.hash_count), (959, 7));
//!
//! let mut bits = BitVec::new(params.bit_count).unwrap();
//! bits.set(958);
//! assert_eq!(bits.count_ones(), 1);
//! ```

pub mod bitvec;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use filter::{BloomFilter, SharedBloomFilter};
pub use params::{
    bits_per_element, false_positive_rate, optimal_bit_count, optimal_hash_count, FilterParams,
};
