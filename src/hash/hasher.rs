//! Base hash functions for the double hashing scheme.
//!
//! Hash functions operate on byte slices, so the caller controls how values
//! are turned into bytes (see [`crate::hash::encode`]).
//!
//! # Separation of Concerns
//!
//! - **`BaseHasher`**: produces the two 32-bit base hashes from bytes
//! - **`DoubleHashing`**: derives k probe positions from them (see `strategies`)
//! - **`BloomFilter`**: composes hasher + strategy + bit storage
//!
//! # Examples
//!
//! ```
//! use bloomlite::hash::hasher::{BaseHasher, FnvCrc32};
//!
//! let (h1, h2) = FnvCrc32.hash_pair(b"123456789");
//! assert_eq!(h2, 0xCBF4_3926);
//! ```

/// FNV-1a 32-bit offset basis.
const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
const FNV32_PRIME: u32 = 0x0100_0193;

/// Source of the two base hashes a Bloom filter probes with.
///
/// Implementations must be deterministic across processes and platforms:
/// the same bytes always yield the same pair. The two halves should be
/// independent; if `h2` is a constant the probe sequence degenerates.
///
/// # Examples
///
/// A custom pair (here, reversing the default order) plugs straight into
/// the filter:
///
/// ```
/// use bloomlite::hash::hasher::{crc32_ieee, fnv1a_32, BaseHasher};
/// use bloomlite::BloomFilter;
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Swapped;
///
/// impl BaseHasher for Swapped {
///     fn hash_pair(&self, bytes: &[u8]) -> (u32, u32) {
///         (crc32_ieee(bytes), fnv1a_32(bytes))
///     }
///
///     fn name(&self) -> &'static str {
///         "Swapped"
///     }
/// }
///
/// let mut filter = BloomFilter::new_mk_with_hasher(1024, 3, Swapped);
/// filter.add_str("x");
/// assert!(filter.contains_str("x"));
/// ```
pub trait BaseHasher: Send + Sync {
    /// Hash `bytes` into the `(h1, h2)` pair.
    fn hash_pair(&self, bytes: &[u8]) -> (u32, u32);

    /// Human-readable name for debugging.
    fn name(&self) -> &'static str;
}

/// FNV-1a (Fowler–Noll–Vo), 32-bit variant.
///
/// # Examples
///
/// ```
/// use bloomlite::hash::hasher::fnv1a_32;
///
/// assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
/// assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
/// ```
#[must_use]
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV32_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV32_PRIME)
    })
}

/// CRC-32 with the IEEE 802.3 polynomial.
#[must_use]
#[inline]
pub fn crc32_ieee(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Default base hasher: FNV-1a as `h1`, CRC-32 (IEEE) as `h2`.
///
/// Stateless and deterministic, so two filters built with the same `m` and
/// `k` set exactly the same bits for the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnvCrc32;

impl BaseHasher for FnvCrc32 {
    #[inline]
    fn hash_pair(&self, bytes: &[u8]) -> (u32, u32) {
        (fnv1a_32(bytes), crc32_ieee(bytes))
    }

    #[inline]
    fn name(&self) -> &'static str {
        "FnvCrc32"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_32_known_answers() {
        assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9c_f968);
        assert_eq!(fnv1a_32(b"hello"), 0x4f9f_2cab);
    }

    #[test]
    fn test_crc32_known_answers() {
        assert_eq!(crc32_ieee(b""), 0);
        assert_eq!(crc32_ieee(b"123456789"), 0xcbf4_3926);
        assert_eq!(crc32_ieee(b"hello"), 0x3610_a686);
    }

    #[test]
    fn test_default_pair_order() {
        let (h1, h2) = FnvCrc32.hash_pair(b"a");
        assert_eq!(h1, 0xe40c_292c);
        assert_eq!(h2, 0xe8b7_be43);
        assert_eq!(FnvCrc32.name(), "FnvCrc32");
    }

    #[test]
    fn test_deterministic() {
        let data = b"determinism";
        assert_eq!(FnvCrc32.hash_pair(data), FnvCrc32.hash_pair(data));
    }

    #[test]
    fn test_single_bit_change_avalanches() {
        let (a1, a2) = FnvCrc32.hash_pair(b"value-0");
        let (b1, b2) = FnvCrc32.hash_pair(b"value-1");
        assert!((a1 ^ b1).count_ones() > 4);
        assert!((a2 ^ b2).count_ones() > 4);
    }
}
