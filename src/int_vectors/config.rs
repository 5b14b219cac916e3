//! Configured construction of [`IntVector`].
use anyhow::{anyhow, Result};
use num_traits::ToPrimitive;

use crate::builder::{Build, Builder};
use crate::error::Error;
use crate::int_vectors::flags::Flags;
use crate::int_vectors::int_vector::DEFAULT_MAX_CAPACITY;
use crate::int_vectors::IntVector;

/// Builder collecting settings and initial integers for an [`IntVector`].
///
/// Staged integers are written before the mode flags are applied, so a
/// builder configured as frozen or readonly still produces a filled vector.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use intvector::builder::Builder;
/// use intvector::IntVectorBuilder;
///
/// let mut builder = IntVectorBuilder::new().capacity(8).max_capacity(16).frozen(true);
/// builder.extend([7, 2, 5])?;
/// let iv = builder.build()?;
///
/// assert_eq!(iv.as_slice(), &[7, 2, 5]);
/// assert_eq!(iv.capacity(), 8);
/// assert_eq!(iv.max_capacity(), 16);
/// assert!(iv.is_frozen());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntVectorBuilder {
    capacity: usize,
    max_capacity: usize,
    flags: Flags,
    vals: Vec<i32>,
}

impl Default for IntVectorBuilder {
    fn default() -> Self {
        Self {
            capacity: 1,
            max_capacity: DEFAULT_MAX_CAPACITY,
            flags: Flags::empty(),
            vals: Vec::new(),
        }
    }
}

impl IntVectorBuilder {
    /// Creates a builder with capacity 1, the default ceiling and no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity. Staged integers raise it if needed.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the capacity ceiling.
    pub fn max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Builds a frozen vector.
    pub fn frozen(mut self, on: bool) -> Self {
        self.flags.set(Flags::FROZEN, on);
        self
    }

    /// Builds a readonly vector.
    pub fn readonly(mut self, on: bool) -> Self {
        self.flags.set(Flags::READONLY, on);
        self
    }

    /// Builds an immutable vector.
    pub fn immutable(mut self, on: bool) -> Self {
        self.flags.set(Flags::IMMUTABLE, on);
        self
    }

    /// Stages integers of any primitive type.
    ///
    /// # Errors
    ///
    /// An error is returned if `vals` contains an integer that cannot be cast
    /// to [`i32`]; nothing is staged in that case.
    pub fn extend_from_slice<T>(&mut self, vals: &[T]) -> Result<()>
    where
        T: ToPrimitive,
    {
        let mut ints = Vec::new();
        ints.try_reserve_exact(vals.len())?;
        for x in vals {
            ints.push(x.to_i32().ok_or_else(|| {
                anyhow!("vals must consist only of values castable into i32.")
            })?);
        }
        self.extend(ints)
    }
}

impl Builder for IntVectorBuilder {
    type Item = i32;
    type Build = IntVector;

    fn push(&mut self, item: i32) -> Result<()> {
        self.vals.try_reserve(1)?;
        self.vals.push(item);
        Ok(())
    }

    /// Allocates `max(capacity, staged integers)` slots, writes the staged
    /// integers and applies the flags.
    ///
    /// # Errors
    ///
    /// An error is returned if the ceiling is zero, if the capacity is zero
    /// with nothing staged, if the capacity exceeds the ceiling, or if the
    /// allocation fails.
    fn build(self) -> Result<IntVector> {
        if self.max_capacity == 0 {
            return Err(Error::invalid_argument("max_capacity must be greater than 0.").into());
        }
        let capacity = self.capacity.max(self.vals.len());
        let mut iv = IntVector::with_max_capacity(capacity, self.max_capacity)?;
        iv.write_slice(&self.vals, 0)?;
        iv.flags = self.flags;
        Ok(iv)
    }
}

impl Build for IntVector {
    type Builder = IntVectorBuilder;

    fn builder() -> IntVectorBuilder {
        IntVectorBuilder::new()
    }
}
