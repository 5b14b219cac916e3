//! Top module for integer vectors.
//!
//! # Introduction
//!
//! [`IntVector`] is a resizable sequence of `i32` that tracks its capacity
//! explicitly. Growth is geometric (doubling) and bounded by a ceiling,
//! [`DEFAULT_MAX_CAPACITY`] unless configured with [`IntVectorBuilder`].
//! Removals shrink the storage once the load drops below 25%.
//!
//! Let $`A = (a_0, a_1, \dots, a_{n-1})`$ be the live integers and $`c`$ the
//! capacity, with $`1 \le c`$ and $`n \le c`$ at all times.
//!
//! # Modes
//!
//! Every vector carries three independent [`Flags`]:
//!
//! | Flag | Effect |
//! | --- | --- |
//! | frozen | $`c`$ never changes; overflowing writes are truncated |
//! | readonly | content and structural edits fail |
//! | immutable | same as readonly, and destruction fails |
//!
//! A rejected edit reports the [`Restriction`] that caused it, readonly first.
//!
//! # Operations
//!
//! | Group | Operations | Time |
//! | --- | --- | :-: |
//! | Access | [`get`](IntVector::get), [`Access`], [`contains`](IntVector::contains) | $`O(1)`$ / $`O(n)`$ |
//! | Single edits | [`append`](IntVector::append), [`insert`](IntVector::insert), [`remove_at`](IntVector::remove_at), [`take`](IntVector::take) | $`O(n)`$ |
//! | Bulk edits | [`append_slice`](IntVector::append_slice), [`insert_slice`](IntVector::insert_slice), [`remove_range`](IntVector::remove_range) | $`O(n + m)`$ |
//! | Aggregates | [`min`](IntVector::min), [`sum`](IntVector::sum), [`median`](IntVector::median), [`mode`](IntVector::mode) | $`O(n)`$ / $`O(n \lg n)`$ |
//!
//! # Examples
//!
//! This module provides several traits for essential behaviors.
//! [`prelude`] allows you to import them easily.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use intvector::int_vectors::{IntVector, prelude::*};
//!
//! let iv = IntVector::build_from_slice(&[5u64, 0, 100000, 334])?;
//!
//! assert_eq!(iv.num_vals(), 4);
//!
//! assert_eq!(iv.access(3), Some(334));
//! assert_eq!(iv.access(4), None);
//! # Ok(())
//! # }
//! ```
mod bulk;
pub mod config;
pub mod flags;
pub mod int_vector;
mod merge_sort;
pub mod stats;

pub mod prelude;

pub use config::IntVectorBuilder;
pub use flags::{Flags, Restriction};
pub use int_vector::{IntVector, Iter, SplitAt, DEFAULT_MAX_CAPACITY};
pub use stats::Mode;

use anyhow::Result;
use num_traits::ToPrimitive;

/// Interface for building integer vectors.
pub trait Build {
    /// Creates a new vector from a slice of integers `vals`.
    ///
    /// # Arguments
    ///
    ///  - `vals`: Slice of integers to be stored.
    ///
    /// # Errors
    ///
    /// An error is returned if `vals` contains an integer that cannot be cast to [`i32`].
    fn build_from_slice<T>(vals: &[T]) -> Result<Self>
    where
        T: ToPrimitive,
        Self: Sized;
}

/// Interface for reporting basic statistics of integer vectors.
pub trait NumVals {
    /// Returns the number of integers stored.
    fn num_vals(&self) -> usize;
}

/// Interface for accessing elements on integer vectors.
pub trait Access {
    /// Returns the `pos`-th integer, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<i32>;
}
