//! Builder for [`BloomFilter`].
//!
//! # Type-State Pattern
//!
//! Required parameters are enforced at compile time. The builder progresses
//! through states:
//!
//! ```text
//! Initial → WithItems → Complete → BloomFilter
//!     ↓         ↓           ↓
//!   .expected_items()  .false_positive_rate()  .build()
//! ```
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use bloomlite::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.hash_count(), 7);
//! ```
//!
//! ## Strict Validation
//!
//! ```
//! use bloomlite::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)
//!     .false_positive_rate(0.01)
//!     .strict()
//!     .build();
//!
//! assert!(result.is_err());
//! ```

use crate::core::params::{self, MAX_BITS};
use crate::error::{BloomError, Result};
use crate::filters::standard::BloomFilter;
use crate::hash::hasher::{BaseHasher, FnvCrc32};
use std::marker::PhantomData;

/// Type-state marker: Initial state (no parameters set).
#[derive(Debug)]
pub struct Initial;

/// Type-state marker: Items count is set.
#[derive(Debug)]
pub struct WithItems;

/// Type-state marker: All required parameters set.
#[derive(Debug)]
pub struct Complete;

/// Builder for [`BloomFilter`] with type-state guarantees.
///
/// # Type Parameters
///
/// - `State`: Current builder state (Initial, WithItems, Complete)
/// - `H`: Base hasher (defaults to [`FnvCrc32`])
#[derive(Debug)]
pub struct BloomFilterBuilder<State, H = FnvCrc32> {
    expected_items: u64,
    fp_rate: f64,
    strict: bool,
    hasher: H,
    _state: PhantomData<State>,
}

impl BloomFilterBuilder<Initial, FnvCrc32> {
    /// Create a new builder using the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: 0,
            fp_rate: 0.0,
            strict: false,
            hasher: FnvCrc32,
            _state: PhantomData,
        }
    }
}

impl Default for BloomFilterBuilder<Initial, FnvCrc32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> BloomFilterBuilder<State, H> {
    fn transition<Next>(self) -> BloomFilterBuilder<Next, H> {
        BloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            strict: self.strict,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }

    /// Replace the base hasher.
    ///
    /// Available in every state.
    #[must_use]
    pub fn hasher<H2: BaseHasher>(self, hasher: H2) -> BloomFilterBuilder<State, H2> {
        BloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            strict: self.strict,
            hasher,
            _state: PhantomData,
        }
    }

    /// Reject degenerate configurations instead of clamping them.
    ///
    /// In strict mode `build` fails when `expected_items` is 0 or when the
    /// derived bit count exceeds `2^31 - 1`.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl<H> BloomFilterBuilder<Initial, H> {
    /// Set the expected number of items (n). Required.
    #[must_use]
    pub fn expected_items(mut self, items: u64) -> BloomFilterBuilder<WithItems, H> {
        self.expected_items = items;
        self.transition()
    }
}

impl<H> BloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate. Required; must be in (0, 1).
    #[must_use]
    pub fn false_positive_rate(mut self, fp_rate: f64) -> BloomFilterBuilder<Complete, H> {
        self.fp_rate = fp_rate;
        self.transition()
    }
}

impl<H: BaseHasher> BloomFilterBuilder<Complete, H> {
    /// Build the filter.
    ///
    /// # Errors
    ///
    /// - [`BloomError::FalsePositiveRateOutOfBounds`] if the rate is not in (0, 1)
    /// - strict mode only: [`BloomError::InvalidParameters`] for zero items and
    ///   [`BloomError::InvalidFilterSize`] when the derived size exceeds the cap
    pub fn build(self) -> Result<BloomFilter<H>> {
        params::validate_fp_rate(self.fp_rate)?;

        if self.strict {
            if self.expected_items == 0 {
                return Err(BloomError::invalid_parameters(
                    "expected items must be greater than 0",
                ));
            }
            let (m, _) = params::calc_optimal_mk(self.expected_items, self.fp_rate);
            if m as u64 > MAX_BITS {
                return Err(BloomError::invalid_filter_size(m as u64));
            }
        }

        Ok(BloomFilter::with_hasher(
            self.expected_items,
            self.fp_rate,
            self.hasher,
        ))
    }
}
