//! Optimal parameter calculation for Bloom filters.
//!
//! Given:
//! - `n`: Expected number of elements
//! - `ε`: Target false positive rate
//!
//! Optimal parameters:
//! - `m = -n × ln(ε) / (ln 2)²` (bits in filter)
//! - `k = (m/n) × ln 2` (number of hash functions)
//!
//! Expected false positive rate:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! [`calc_optimal_mk`] does no validation; degenerate inputs produce
//! degenerate outputs, which [`clamp_mk`] normalizes.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;

/// Mathematical constant: (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Smallest bit array a filter will allocate.
pub const MIN_BITS: u64 = 1;

/// Largest bit array a filter will allocate (`2^31 - 1`).
///
/// Probe positions are 32-bit, so this keeps every position addressable.
pub const MAX_BITS: u64 = i32::MAX as u64;

/// Minimum number of hash probes.
pub const MIN_HASH_FUNCTIONS: u32 = 1;

/// Probe ceiling for rates outside `(0, 1)`.
///
/// A zero rate derives `k = i64::MAX`. Rates inside `(0, 1)` are never
/// capped: even subnormal rates derive a finite `k` of about a thousand.
pub const MAX_DEGENERATE_HASH_FUNCTIONS: u32 = 64;

/// Round half up by adding 0.5 and truncating toward zero.
///
/// NaN maps to 0 and infinities saturate, following `as` cast semantics.
#[inline]
fn round_half_up(x: f64) -> i64 {
    (x + 0.5) as i64
}

/// Calculate the optimal `(m, k)` pair for `n` elements at the given rate.
///
/// Both values are computed in floating point and rounded half up. Nothing
/// is validated: `n == 0` gives `m == 0` and `k == 0` (the `0/0` division
/// is NaN), and rates outside `(0, 1)` give non-positive or saturated
/// results. Feed the output through [`clamp_mk`] before allocating.
///
/// # Examples
///
/// ```
/// use bloomlite::core::params::calc_optimal_mk;
///
/// assert_eq!(calc_optimal_mk(216_553, 0.01), (2_075_673, 7));
/// assert_eq!(calc_optimal_mk(0, 0.01), (0, 0));
/// ```
#[must_use]
pub fn calc_optimal_mk(n: u64, false_positive_rate: f64) -> (i64, i64) {
    let n = n as f64;
    let m = -n * false_positive_rate.ln() / LN2_SQUARED;
    let k = m / n * LN_2;
    (round_half_up(m), round_half_up(k))
}

/// Normalize a derived `(m, k)` pair into allocatable bounds.
///
/// - `m` is clamped to [`MIN_BITS`]..=[`MAX_BITS`]
/// - `k` is raised to at least [`MIN_HASH_FUNCTIONS`]
/// - when `false_positive_rate` is outside `(0, 1)`, `k` is also capped at
///   [`MAX_DEGENERATE_HASH_FUNCTIONS`]
///
/// # Examples
///
/// ```
/// use bloomlite::core::params::{calc_optimal_mk, clamp_mk};
///
/// assert_eq!(clamp_mk(0, 0, 0.01), (1, 1));
/// assert_eq!(clamp_mk(i64::MAX, 7, 0.01), (2_147_483_647, 7));
///
/// let (m, k) = calc_optimal_mk(100, 1e-25);
/// assert_eq!(clamp_mk(m, k, 1e-25), (11_981, 83));
/// ```
#[must_use]
pub fn clamp_mk(m: i64, k: i64, false_positive_rate: f64) -> (u32, u32) {
    let m = m.clamp(MIN_BITS as i64, MAX_BITS as i64) as u32;
    let max_k = if validate_fp_rate(false_positive_rate).is_ok() {
        u32::MAX
    } else {
        MAX_DEGENERATE_HASH_FUNCTIONS
    };
    let k = k.clamp(i64::from(MIN_HASH_FUNCTIONS), i64::from(max_k)) as u32;
    (m, k)
}

/// Check that a false positive rate lies in the open interval (0, 1).
///
/// # Errors
///
/// [`BloomError::FalsePositiveRateOutOfBounds`] for anything else, NaN included.
pub fn validate_fp_rate(fp_rate: f64) -> Result<()> {
    if fp_rate > 0.0 && fp_rate < 1.0 {
        Ok(())
    } else {
        Err(BloomError::fp_rate_out_of_bounds(fp_rate))
    }
}

/// Calculate expected false positive rate for given parameters.
///
/// Implements `p = (1 - e^(-kn/m))^k`. Returns 0.0 for an empty filter and
/// 1.0 for a zero-sized one.
///
/// # Examples
///
/// ```
/// use bloomlite::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(9585, 1000, 7);
/// assert!((fp - 0.01).abs() < 0.001);
/// ```
#[must_use]
pub fn expected_fp_rate(m: u64, n: u64, k: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if m == 0 {
        return 1.0;
    }

    let k = f64::from(k);
    let exponent = -(k * n as f64) / m as f64;
    let fp_rate = (1.0 - exponent.exp()).powf(k);
    fp_rate.clamp(0.0, 1.0)
}

/// Bits required per element to hit the target rate with optimal `k`.
///
/// Formula: `-ln(ε) / (ln 2)²`
///
/// # Errors
///
/// Returns error if `fp_rate` is not in range (0, 1).
///
/// # Examples
///
/// ```
/// use bloomlite::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01).unwrap();
/// assert!((bpe - 9.6).abs() < 0.1);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    validate_fp_rate(fp_rate)?;
    Ok(-fp_rate.ln() / LN2_SQUARED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln2_squared_constant() {
        let expected = 0.480_453_013_918_201_4;
        assert!((LN2_SQUARED - expected).abs() < 1e-10);
    }

    #[test]
    fn test_calc_optimal_mk_reference_vector() {
        assert_eq!(calc_optimal_mk(216_553, 0.01), (2_075_673, 7));
    }

    #[test]
    fn test_calc_optimal_mk_various_fp_rates() {
        let test_cases = vec![
            (1000, 0.1, 4793, 3),
            (1000, 0.01, 9585, 7),
            (1000, 0.001, 14378, 10),
            (100, 0.01, 959, 7),
        ];

        for (n, fp, expected_m, expected_k) in test_cases {
            let (m, k) = calc_optimal_mk(n, fp);
            assert_eq!(m, expected_m, "n={}, fp={}: unexpected m", n, fp);
            assert_eq!(k, expected_k, "n={}, fp={}: unexpected k", n, fp);
        }
    }

    #[test]
    fn test_calc_optimal_mk_zero_items_is_degenerate() {
        // 0 / 0 in the k term is NaN, which casts to 0
        assert_eq!(calc_optimal_mk(0, 0.01), (0, 0));
    }

    #[test]
    fn test_calc_optimal_mk_rate_above_one_goes_negative() {
        let (m, _) = calc_optimal_mk(1000, 2.0);
        assert!(m < 0);
    }

    #[test]
    fn test_calc_optimal_mk_zero_rate_saturates() {
        let (m, k) = calc_optimal_mk(1000, 0.0);
        assert_eq!(m, i64::MAX);
        assert_eq!(k, i64::MAX);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(6.49), 6);
        assert_eq!(round_half_up(6.5), 7);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(f64::INFINITY), i64::MAX);
    }

    #[test]
    fn test_clamp_mk_floors() {
        assert_eq!(clamp_mk(0, 0, 0.01), (1, 1));
        assert_eq!(clamp_mk(-5, -5, 0.01), (1, 1));
    }

    #[test]
    fn test_clamp_mk_caps_bits() {
        assert_eq!(clamp_mk(MAX_BITS as i64 + 1, 3, 0.01), (i32::MAX as u32, 3));
    }

    #[test]
    fn test_clamp_mk_caps_probes_only_for_degenerate_rates() {
        assert_eq!(
            clamp_mk(i64::MAX, i64::MAX, 0.0),
            (i32::MAX as u32, MAX_DEGENERATE_HASH_FUNCTIONS)
        );
        assert_eq!(clamp_mk(1000, 500, f64::NAN).1, MAX_DEGENERATE_HASH_FUNCTIONS);
        assert_eq!(clamp_mk(11_981, 83, 1e-25), (11_981, 83));
        assert_eq!(clamp_mk(1000, i64::MAX, 1e-25).1, u32::MAX);
    }

    #[test]
    fn test_tiny_rate_keeps_derived_probe_count() {
        let (m, k) = calc_optimal_mk(100, 1e-25);
        assert_eq!((m, k), (11_981, 83));
        assert_eq!(clamp_mk(m, k, 1e-25), (11_981, 83));

        let (_, k) = calc_optimal_mk(100, f64::MIN_POSITIVE);
        assert!(k > i64::from(MAX_DEGENERATE_HASH_FUNCTIONS));
        assert_eq!(i64::from(clamp_mk(0, k, f64::MIN_POSITIVE).1), k);
    }

    #[test]
    fn test_clamp_mk_passthrough() {
        assert_eq!(clamp_mk(2_075_673, 7, 0.01), (2_075_673, 7));
    }

    #[test]
    fn test_validate_fp_rate() {
        assert!(validate_fp_rate(0.01).is_ok());
        assert!(validate_fp_rate(0.0).is_err());
        assert!(validate_fp_rate(1.0).is_err());
        assert!(validate_fp_rate(-0.1).is_err());
        assert!(validate_fp_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_expected_fp_rate_matches_target() {
        let (m, k) = calc_optimal_mk(1000, 0.01);
        let actual = expected_fp_rate(m as u64, 1000, k as u32);
        let error = (actual - 0.01).abs() / 0.01;
        assert!(error < 0.1, "expected ~0.01, got {}", actual);
    }

    #[test]
    fn test_expected_fp_rate_edges() {
        assert_eq!(expected_fp_rate(1000, 0, 7), 0.0);
        assert_eq!(expected_fp_rate(0, 10, 7), 1.0);
        assert!(expected_fp_rate(1000, 1000, 7) > 0.5);
    }

    #[test]
    fn test_bits_per_element() {
        let bpe = bits_per_element(0.001).unwrap();
        assert!((bpe - 14.4).abs() < 0.1);
        assert!(bits_per_element(1.5).is_err());
    }
}
