//! Probe position generation from two base hashes.
//!
//! # Double Hashing (Kirsch & Mitzenmacher 2006)
//!
//! For k hash functions derived from two independent hashes h₁ and h₂:
//!
//! ```text
//! gᵢ(x) = (h₁(x) + i·h₂(x)) mod m
//! ```
//!
//! The addition and multiplication wrap at 32 bits before the reduction, so
//! positions are bit-for-bit identical to any other implementation that
//! uses the same base hashes.
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

/// Standard double hashing strategy.
///
/// # Examples
///
/// ```
/// use bloomlite::hash::strategies::DoubleHashing;
///
/// let positions: Vec<u32> = DoubleHashing.positions(10, 3, 4, 7).collect();
/// assert_eq!(positions, vec![3, 6, 2, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleHashing;

impl DoubleHashing {
    /// Lazily yield `k` probe positions in `[0, m)`.
    ///
    /// `m` must be non-zero.
    #[inline]
    #[must_use]
    pub fn positions(self, h1: u32, h2: u32, k: u32, m: u32) -> Probes {
        debug_assert!(m > 0, "probe space must be non-empty");
        Probes { h1, h2, m, i: 0, k }
    }

    /// Position of the `i`-th probe.
    #[inline]
    #[must_use]
    pub fn position(self, h1: u32, h2: u32, i: u32, m: u32) -> u32 {
        h1.wrapping_add(h2.wrapping_mul(i)) % m
    }
}

/// Iterator over probe positions; see [`DoubleHashing::positions`].
#[derive(Debug, Clone)]
pub struct Probes {
    h1: u32,
    h2: u32,
    m: u32,
    i: u32,
    k: u32,
}

impl Iterator for Probes {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.i >= self.k {
            return None;
        }
        let pos = DoubleHashing.position(self.h1, self.h2, self.i, self.m);
        self.i += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.k - self.i) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Probes {}

impl std::iter::FusedIterator for Probes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_probe_is_h1_mod_m() {
        let first = DoubleHashing.positions(12_345, 999, 5, 100).next();
        assert_eq!(first, Some(45));
    }

    #[test]
    fn test_probe_count_and_range() {
        let probes = DoubleHashing.positions(0xdead_beef, 0x1234_5678, 7, 1000);
        assert_eq!(probes.len(), 7);
        assert!(probes.clone().all(|p| p < 1000));
        assert_eq!(probes.count(), 7);
    }

    #[test]
    fn test_zero_probes() {
        assert_eq!(DoubleHashing.positions(1, 2, 0, 10).count(), 0);
    }

    #[test]
    fn test_wrapping_arithmetic() {
        // h1 + 2·h2 overflows u32; the sum must wrap before the modulo
        let h1 = u32::MAX;
        let h2: u32 = 0x8000_0001;
        let expected = h1.wrapping_add(h2.wrapping_mul(2)) % 1_000_003;
        assert_eq!(DoubleHashing.position(h1, h2, 2, 1_000_003), expected);
        assert_eq!(expected, 1);
    }

    #[test]
    fn test_single_bit_space() {
        let probes: Vec<u32> = DoubleHashing.positions(u32::MAX, u32::MAX, 4, 1).collect();
        assert_eq!(probes, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_matches_formula() {
        let (h1, h2, m) = (0x9e37_79b9, 0x7f4a_7c15, 2_075_673);
        for (i, pos) in DoubleHashing.positions(h1, h2, 7, m).enumerate() {
            let i = i as u64;
            let expected = ((u64::from(h1) + i * u64::from(h2)) % (1 << 32)) % u64::from(m);
            assert_eq!(u64::from(pos), expected);
        }
    }
}
