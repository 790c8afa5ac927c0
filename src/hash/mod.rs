//! Hashing for Bloom filters.
//!
//! ```text
//! hash/
//! ├── hasher.rs     - BaseHasher trait, FNV-1a 32 and CRC-32 base hashes
//! ├── strategies.rs - Double hashing probe generation
//! └── encode.rs     - Canonical byte encodings of typed values
//! ```
//!
//! Every operation computes both base hashes exactly once and derives all k
//! probe positions from them arithmetically.
//!
//! # Examples
//!
//! ```
//! use bloomlite::hash::{BaseHasher, DoubleHashing, FnvCrc32};
//!
//! let (h1, h2) = FnvCrc32.hash_pair(b"hello");
//! let positions: Vec<u32> = DoubleHashing.positions(h1, h2, 7, 1000).collect();
//! assert_eq!(positions.len(), 7);
//! assert!(positions.iter().all(|&p| p < 1000));
//! ```

pub mod encode;
pub mod hasher;
pub mod strategies;

pub use encode::Element;
pub use hasher::{crc32_ieee, fnv1a_32, BaseHasher, FnvCrc32};
pub use strategies::{DoubleHashing, Probes};
