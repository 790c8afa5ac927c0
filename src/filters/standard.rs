//! Standard Bloom filter with FNV-1a/CRC-32 double hashing.
//!
//! # Algorithm
//!
//! Each operation hashes the value's bytes once with each base hash, then
//! derives k probe positions via `(h1 + i·h2) mod m` (see
//! [`DoubleHashing`]).
//!
//! - **Insert**: set all k probe bits
//! - **Query**: report present only if all k probe bits are set
//!
//! # Construction
//!
//! | Constructor | Input | On degenerate input |
//! |---|---|---|
//! | [`BloomFilter::new`] | capacity + rate | clamps |
//! | [`BloomFilter::new_mk`] | raw m, k | normalizes zeros to 1, logs a warning |
//! | [`BloomFilter::try_new`] | capacity + rate | `Err` on rate outside (0, 1) |
//! | [`BloomFilter::try_new_mk`] | raw m, k | `Err` on out-of-range m or k |
//!
//! # Thread Safety
//!
//! Insertion takes `&mut self` and there is no interior synchronization.
//! Share an instance across threads behind a `Mutex` or `RwLock`.
//!
//! # Examples
//!
//! ```
//! use bloomlite::BloomFilter;
//!
//! let mut filter = BloomFilter::new(100, 0.01);
//! filter.add_str("value1");
//! filter.add_u64(123);
//!
//! assert!(filter.contains_str("value1"));
//! assert!(filter.contains_u64(123));
//! assert!(!filter.contains_str("value2"));
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::bitvec::BitVec;
use crate::core::params::{self, MAX_BITS, MIN_HASH_FUNCTIONS};
use crate::error::{BloomError, Result};
use crate::hash::encode::Element;
use crate::hash::hasher::{BaseHasher, FnvCrc32};
use crate::hash::strategies::{DoubleHashing, Probes};

/// Probabilistic set with no false negatives.
///
/// # Type Parameters
///
/// * `H` - Base hash pair (defaults to [`FnvCrc32`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter<H = FnvCrc32>
where
    H: BaseHasher,
{
    /// Bit array of exactly `m` bits
    bits: BitVec,

    /// Number of bits (m)
    m: u32,

    /// Number of probes per operation (k)
    k: u32,

    /// Base hash pair
    hasher: H,
}

impl BloomFilter<FnvCrc32> {
    /// Create a filter sized for `n` elements at `false_positive_rate`.
    ///
    /// Derives `(m, k)` with [`params::calc_optimal_mk`] and clamps `m` to
    /// `[1, 2^31 - 1]` and `k` to at least 1 (see [`params::clamp_mk`]). Never fails: `n == 0` yields
    /// the minimal one-bit, one-probe filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomlite::BloomFilter;
    ///
    /// let filter = BloomFilter::new(216_553, 0.01);
    /// assert_eq!(filter.bit_count(), 2_075_673);
    /// assert_eq!(filter.hash_count(), 7);
    ///
    /// let minimal = BloomFilter::new(0, 0.01);
    /// assert_eq!((minimal.bit_count(), minimal.hash_count()), (1, 1));
    /// ```
    #[must_use]
    pub fn new(n: u64, false_positive_rate: f64) -> Self {
        Self::with_hasher(n, false_positive_rate, FnvCrc32)
    }

    /// Create a filter from explicit `m` and `k`.
    ///
    /// Callers are expected to pass `m >= 1` and `k >= 1`. Zero values are
    /// raised to 1 (with a warning event) instead of producing an unusable
    /// filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomlite::BloomFilter;
    ///
    /// let filter = BloomFilter::new_mk(64, 2);
    /// assert_eq!(filter.bit_count(), 64);
    /// assert!(filter.is_empty());
    /// ```
    #[must_use]
    pub fn new_mk(m: u32, k: u32) -> Self {
        Self::new_mk_with_hasher(m, k, FnvCrc32)
    }

    /// Validating counterpart of [`BloomFilter::new`].
    ///
    /// # Errors
    ///
    /// [`BloomError::FalsePositiveRateOutOfBounds`] if the rate is not in (0, 1).
    pub fn try_new(n: u64, false_positive_rate: f64) -> Result<Self> {
        params::validate_fp_rate(false_positive_rate)?;
        Ok(Self::new(n, false_positive_rate))
    }

    /// Validating counterpart of [`BloomFilter::new_mk`].
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidFilterSize`] if `m == 0` or `m > 2^31 - 1`
    /// - [`BloomError::InvalidHashCount`] if `k == 0`
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomlite::{BloomError, BloomFilter};
    ///
    /// assert!(BloomFilter::try_new_mk(64, 2).is_ok());
    /// assert!(matches!(
    ///     BloomFilter::try_new_mk(0, 2),
    ///     Err(BloomError::InvalidFilterSize { size: 0, .. })
    /// ));
    /// ```
    pub fn try_new_mk(m: u32, k: u32) -> Result<Self> {
        Self::try_new_mk_with_hasher(m, k, FnvCrc32)
    }
}

impl<H> BloomFilter<H>
where
    H: BaseHasher,
{
    /// Capacity-based construction with a custom hasher.
    ///
    /// See [`BloomFilter::new`] for the sizing and clamping rules.
    #[must_use]
    pub fn with_hasher(n: u64, false_positive_rate: f64, hasher: H) -> Self {
        let (raw_m, raw_k) = params::calc_optimal_mk(n, false_positive_rate);
        let (m, k) = params::clamp_mk(raw_m, raw_k, false_positive_rate);

        let clamped = i64::from(m) != raw_m || i64::from(k) != raw_k;
        tracing::debug!(
            n,
            false_positive_rate,
            raw_m,
            raw_k,
            m,
            k,
            clamped,
            "sized bloom filter"
        );

        Self::new_mk_with_hasher(m, k, hasher)
    }

    /// Direct construction with a custom hasher.
    ///
    /// See [`BloomFilter::new_mk`].
    #[must_use]
    pub fn new_mk_with_hasher(m: u32, k: u32, hasher: H) -> Self {
        if m == 0 || k == 0 {
            tracing::warn!(m, k, "zero bloom filter parameter raised to 1");
        }
        let m = m.max(1);
        let k = k.max(MIN_HASH_FUNCTIONS);

        tracing::trace!(m, k, hasher = hasher.name(), "allocating bloom filter");

        Self {
            bits: BitVec::new(m as usize),
            m,
            k,
            hasher,
        }
    }

    /// Validating direct construction with a custom hasher.
    ///
    /// # Errors
    ///
    /// See [`BloomFilter::try_new_mk`].
    pub fn try_new_mk_with_hasher(m: u32, k: u32, hasher: H) -> Result<Self> {
        if m == 0 || u64::from(m) > MAX_BITS {
            return Err(BloomError::invalid_filter_size(u64::from(m)));
        }
        if k < MIN_HASH_FUNCTIONS {
            return Err(BloomError::invalid_hash_count(k));
        }
        Ok(Self::new_mk_with_hasher(m, k, hasher))
    }

    /// Size of the bit array (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> u32 {
        self.m
    }

    /// Number of probes per operation (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> u32 {
        self.k
    }

    /// The base hasher in use.
    #[must_use]
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Probe positions for `bytes`.
    #[inline]
    fn probes(&self, bytes: &[u8]) -> Probes {
        let (h1, h2) = self.hasher.hash_pair(bytes);
        DoubleHashing.positions(h1, h2, self.k, self.m)
    }

    /// Insert a byte string.
    #[inline]
    pub fn add(&mut self, value: &[u8]) {
        tracing::trace!(len = value.len(), "bloom add");
        for pos in self.probes(value) {
            self.bits.set(pos as usize);
        }
    }

    /// Insert a string by its UTF-8 bytes.
    #[inline]
    pub fn add_str(&mut self, value: &str) {
        self.add(value.as_bytes());
    }

    /// Insert a `u32` by its 4-byte little-endian encoding.
    #[inline]
    pub fn add_u32(&mut self, value: u32) {
        self.add(&value.to_le_bytes());
    }

    /// Insert a `u64` by its 8-byte little-endian encoding.
    #[inline]
    pub fn add_u64(&mut self, value: u64) {
        self.add(&value.to_le_bytes());
    }

    /// Insert any [`Element`].
    ///
    /// Produces exactly the same bits as the matching typed method, so
    /// `insert(&7u32)` and `add_u32(7)` are interchangeable.
    #[inline]
    pub fn insert<E: Element + ?Sized>(&mut self, value: &E) {
        value.with_bytes(|bytes| self.add(bytes));
    }

    /// Insert every element of `values`.
    pub fn add_batch<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Element,
    {
        for value in values {
            self.insert(&value);
        }
    }

    /// Test a byte string.
    ///
    /// # Returns
    ///
    /// - `true`: value might be in the set (or false positive)
    /// - `false`: value is definitely not in the set
    #[must_use]
    #[inline]
    pub fn contains(&self, value: &[u8]) -> bool {
        tracing::trace!(len = value.len(), "bloom contains");
        self.probes(value).all(|pos| self.bits.get(pos as usize))
    }

    /// Test a string.
    #[must_use]
    #[inline]
    pub fn contains_str(&self, value: &str) -> bool {
        self.contains(value.as_bytes())
    }

    /// Test a `u32`.
    #[must_use]
    #[inline]
    pub fn contains_u32(&self, value: u32) -> bool {
        self.contains(&value.to_le_bytes())
    }

    /// Test a `u64`.
    #[must_use]
    #[inline]
    pub fn contains_u64(&self, value: u64) -> bool {
        self.contains(&value.to_le_bytes())
    }

    /// Test any [`Element`].
    #[must_use]
    #[inline]
    pub fn check<E: Element + ?Sized>(&self, value: &E) -> bool {
        value.with_bytes(|bytes| self.contains(bytes))
    }

    /// `true` if every element might be present. Vacuously true when empty.
    #[must_use]
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Element,
    {
        values.into_iter().all(|value| self.check(&value))
    }

    /// `true` if at least one element might be present.
    #[must_use]
    pub fn contains_any<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Element,
    {
        values.into_iter().any(|value| self.check(&value))
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// `true` if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Fraction of set bits, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / f64::from(self.m)
    }

    /// Estimate the number of distinct inserted values from the fill rate.
    ///
    /// Uses `n ≈ -(m/k) × ln(1 - X/m)` where X is the number of set bits.
    /// Returns `u64::MAX` for a fully saturated filter.
    #[must_use]
    pub fn estimate_cardinality(&self) -> u64 {
        let set_bits = self.count_set_bits();
        if set_bits == 0 {
            return 0;
        }
        if set_bits >= self.m as usize {
            return u64::MAX;
        }

        let m = f64::from(self.m);
        let k = f64::from(self.k);
        let estimated_n = -(m / k) * (1.0 - set_bits as f64 / m).ln();
        estimated_n.round().max(0.0) as u64
    }

    /// Estimate the current false positive rate.
    ///
    /// Feeds [`estimate_cardinality`](Self::estimate_cardinality) into
    /// `(1 - e^(-kn/m))^k`.
    #[must_use]
    pub fn estimate_fpr(&self) -> f64 {
        match self.estimate_cardinality() {
            0 => 0.0,
            u64::MAX => 1.0,
            n => params::expected_fp_rate(u64::from(self.m), n, self.k),
        }
    }

    /// Approximate heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage() + std::mem::size_of::<Self>()
    }

    /// Raw bit storage, for inspection.
    #[must_use]
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }
}

impl Default for BloomFilter<FnvCrc32> {
    /// A one-bit, one-probe filter, same as `BloomFilter::new(0, p)`.
    fn default() -> Self {
        Self::new_mk(1, 1)
    }
}

impl<E, H> Extend<E> for BloomFilter<H>
where
    E: Element,
    H: BaseHasher,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add_batch(iter);
    }
}
