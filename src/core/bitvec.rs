//! Fixed-size bit vector backed by 64-bit words.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! Word 2: [bit 128][bit 129]...[bit 191]
//! ```
//!
//! Bit `i` lives in word `i / 64` at offset `i % 64`. Trailing bits of the
//! last word past `len` are never set.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/64⌉ * 8` bytes for `n` bits
//! - `set`: O(1)
//! - `get`: O(1)
//! - `count_ones`: O(n/64), uses the POPCNT instruction where available
//!
//! # Examples
//!
//! ```
//! use bloomlite::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(100);
//! bv.set(42);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! ```

/// Bits per storage word.
const WORD_BITS: usize = 64;

/// Fixed-size bit array. All bits start at 0 and the length never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    words: Box<[u64]>,
    len: usize,
}

impl BitVec {
    /// Create a new bit vector with `num_bits` zeroed bits.
    ///
    /// Allocates `⌈num_bits / 64⌉` words.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomlite::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(1000);
    /// assert_eq!(bv.len(), 1000);
    /// assert_eq!(bv.num_words(), 16);
    /// ```
    #[must_use]
    pub fn new(num_bits: usize) -> Self {
        let num_words = num_bits.div_ceil(WORD_BITS);
        Self {
            words: vec![0u64; num_words].into_boxed_slice(),
            len: num_bits,
        }
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` only for a zero-length vector.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set a bit to 1. Setting an already-set bit has no effect.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
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
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Count set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of backing words.
    #[must_use]
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Backing words, lowest bit first.
    #[must_use]
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Heap bytes held by the word storage.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}
