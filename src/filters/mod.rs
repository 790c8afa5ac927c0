//! Filter implementations.
//!
//! - [`BloomFilter`]: fixed-size filter probed by FNV-1a/CRC-32 double hashing

pub mod standard;

pub use standard::BloomFilter;
