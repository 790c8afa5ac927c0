//! Error types for the validating construction paths.
//!
//! The core operations (`add`, `contains` and the permissive constructors)
//! never fail. Only the `try_*` constructors and the builder report errors.
//!
//! # Error Propagation
//!
//! ```
//! use bloomlite::{BloomFilter, Result};
//!
//! fn sized_filter(n: u64, fp: f64) -> Result<BloomFilter> {
//!     let filter = BloomFilter::try_new(n, fp)?;
//!     Ok(filter)
//! }
//! # assert!(sized_filter(1000, 0.01).is_ok());
//! # assert!(sized_filter(1000, 1.5).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

/// Result type alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Errors reported by the validating constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BloomError {
    /// Parameters are individually valid but unusable together.
    #[error("Invalid Bloom filter parameters: {message}.")]
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False positive rate outside the open interval (0, 1).
    #[error("False positive rate {fp_rate} is out of bounds. Must be in range (0, 1).")]
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// Bit array size is zero or does not fit the 32-bit probe space.
    #[error("Invalid filter size: {size} bits. Must be in range [1, {max}].")]
    InvalidFilterSize {
        /// The rejected size in bits.
        size: u64,
        /// Largest accepted size.
        max: u64,
    },

    /// Hash probe count below the minimum.
    #[error("Invalid hash function count: {count}. Must be at least {min}.")]
    InvalidHashCount {
        /// The rejected probe count.
        count: u32,
        /// Minimum allowed value.
        min: u32,
    },
}

impl BloomError {
    /// Create an `InvalidParameters` error with a formatted message.
    ///
    /// # Examples
    /// ```
    /// use bloomlite::BloomError;
    ///
    /// let err = BloomError::invalid_parameters(format!("n={} is too large", 1u64 << 40));
    /// assert!(err.to_string().contains("too large"));
    /// ```
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidFilterSize` error against the crate-wide size cap.
    #[must_use]
    pub fn invalid_filter_size(size: u64) -> Self {
        Self::InvalidFilterSize {
            size,
            max: crate::core::params::MAX_BITS,
        }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: u32) -> Self {
        Self::InvalidHashCount {
            count,
            min: crate::core::params::MIN_HASH_FUNCTIONS,
        }
    }
}
