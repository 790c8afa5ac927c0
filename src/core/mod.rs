//! Core building blocks: parameter derivation and bit storage.
//!
//! ```text
//! core/
//! ├── bitvec.rs    - Fixed-size bit vector
//! ├── params.rs    - Parameter calculations and clamping
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Using Parameter Calculations
//!
//! ```
//! use bloomlite::core::params::{calc_optimal_mk, clamp_mk};
//!
//! let (m, k) = calc_optimal_mk(10_000, 0.01);
//! let (m, k) = clamp_mk(m, k, 0.01);
//! assert_eq!((m, k), (95_851, 7));
//! ```

pub mod bitvec;
pub mod params;

pub use bitvec::BitVec;

pub use params::{
    bits_per_element, calc_optimal_mk, clamp_mk, expected_fp_rate, validate_fp_rate,
};
