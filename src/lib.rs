//! # Resizable integer vectors in Rust
//!
//! Intvector provides [`IntVector`], a growable sequence of `i32` with
//! explicit capacity management and three access modes.
//!
//! ## Design policy
//!
//! - **Fallible everywhere:**
//!   Every operation that allocates or validates an argument returns a
//!   [`Result`]. Allocation failures are reported as [`Error::Allocation`]
//!   instead of aborting.
//!
//! - **Explicit capacity:**
//!   The capacity is observable and follows a fixed policy: doubling on
//!   growth, halving below 25% load, never zero and never above a ceiling.
//!
//! - **Modes as flags:**
//!   Frozen, readonly and immutable are independent bits checked before any
//!   other validation, so a rejected edit never leaves a partial change.
//!
//! - **Ensure safety:**
//!   The crate contains no unsafe code.
//!
//! ## Modules
//!
//! - [Integer vectors](crate::int_vectors)
//! - [Builders](crate::builder)
//! - [Errors](crate::error)
//!
//! ## Logging
//!
//! Rejected edits are reported through [`tracing`] at `warn` level, and
//! truncating writes on frozen vectors at `debug` level. Install any
//! subscriber to see them.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod int_vectors;

pub use error::{DestroyError, Error, Result};
pub use int_vectors::{Flags, IntVector, IntVectorBuilder, Mode, Restriction, SplitAt};
