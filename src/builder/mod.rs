//! Builder pattern for Bloom filter construction.
//!
//! Builders use the type-state pattern to enforce parameter requirements at
//! compile time. Missing parameters are compile errors; out-of-range values
//! are reported by `build()`.
//!
//! | Builder | Required Parameters | Optional |
//! |---------|---------------------|----------|
//! | `BloomFilterBuilder` | items, fp_rate | hasher, strict |

pub mod standard;

pub use standard::{BloomFilterBuilder, Complete, Initial, WithItems};
