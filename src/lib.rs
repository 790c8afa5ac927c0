//! bloomlite: a compact, deterministic Bloom filter.
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests whether
//! an element is a member of a set. It can produce:
//! - **False positives**: May indicate an element is in the set when it isn't
//! - **Zero false negatives**: If it says an element isn't in the set, it definitely isn't
//!
//! This crate stores the set in a fixed array of `m` bits and probes it `k`
//! times per operation. The k probe positions come from two 32-bit base
//! hashes, FNV-1a and CRC-32, combined by Kirsch–Mitzenmacher double
//! hashing: `(h1 + i·h2) mod m`. The arithmetic is fixed-width and
//! little-endian throughout, so filters built with the same `m` and `k` set
//! the same bits on every platform.
//!
//! # Quick Start
//!
//! ```
//! use bloomlite::BloomFilter;
//!
//! // Expect up to 100 elements with a 1% false positive rate
//! let mut filter = BloomFilter::new(100, 0.01);
//!
//! filter.add_str("value1");
//! filter.add_u64(123);
//!
//! assert!(filter.contains_str("value1"));  // true - inserted
//! assert!(filter.contains_u64(123));
//! assert!(!filter.contains_str("value2")); // false - definitely not in set
//! ```
//!
//! # Sizing
//!
//! ```
//! use bloomlite::calc_optimal_mk;
//!
//! let (m, k) = calc_optimal_mk(216_553, 0.01);
//! assert_eq!((m, k), (2_075_673, 7));
//! ```
//!
//! [`BloomFilter::new`] never fails: degenerate sizes are clamped to a
//! one-bit minimum and a `2^31 - 1` bit maximum, with at least one probe.
//! Use [`BloomFilter::try_new`], [`BloomFilter::try_new_mk`] or the
//! [`builder`] when out-of-range input should be an error instead.
//!
//! # Concurrency
//!
//! Inserts take `&mut self`; there is no internal locking. Wrap a shared
//! filter in a `Mutex` or `RwLock`:
//!
//! ```
//! use bloomlite::BloomFilter;
//! use std::sync::{Arc, RwLock};
//!
//! let filter = Arc::new(RwLock::new(BloomFilter::new(10_000, 0.01)));
//!
//! let writer = Arc::clone(&filter);
//! std::thread::spawn(move || {
//!     writer.write().unwrap().add_str("item");
//! })
//! .join()
//! .unwrap();
//!
//! assert!(filter.read().unwrap().contains_str("item"));
//! ```
//!
//! # Logging
//!
//! Construction emits `tracing` events (`debug` for sizing, `warn` when
//! zero parameters are raised); add/contains emit `trace` events. Install
//! any `tracing` subscriber to see them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![doc(html_root_url = "https://docs.rs/bloomlite/0.1.0")]

/// Parameter derivation and bit storage
pub mod core;

/// Error types and result aliases
pub mod error;

/// The Bloom filter
pub mod filters;

/// Base hashes, probe generation and value encodings
pub mod hash;

/// Type-safe builders
pub mod builder;

pub use error::{BloomError, Result};

pub use crate::core::params::calc_optimal_mk;

pub use filters::BloomFilter;

pub use builder::BloomFilterBuilder;

pub use hash::{BaseHasher, Element, FnvCrc32};

/// Prelude module for convenient imports.
///
/// ```
/// use bloomlite::prelude::*;
///
/// let mut filter = BloomFilter::new(1000, 0.01);
/// filter.insert("hello");
/// assert!(filter.check("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::core::params::calc_optimal_mk;
    pub use crate::error::{BloomError, Result};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::{BaseHasher, Element, FnvCrc32};
}
