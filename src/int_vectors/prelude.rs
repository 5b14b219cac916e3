//! The prelude for integer vectors.
//!
//! The purpose of this module is to alleviate imports of many common traits for integer vectors.
//!
//! ```
//! # #![allow(unused_imports)]
//! use intvector::int_vectors::prelude::*;
//! ```
pub use crate::int_vectors::Access;
pub use crate::int_vectors::Build;
pub use crate::int_vectors::NumVals;
