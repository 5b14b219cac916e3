//! Streaming construction of vectors.
//!
//! [`IntVectorBuilder`](crate::IntVectorBuilder) implements [`Builder`]: it
//! stages integers one at a time, then [`Builder::build`] allocates the
//! [`IntVector`](crate::IntVector) once and applies the configured capacity,
//! ceiling and mode flags. Since that allocation can fail, `build` returns a
//! [`Result`].
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use intvector::builder::Build;
//! use intvector::IntVector;
//!
//! let iv = IntVector::from_iter((1..=5).rev())?;
//! assert_eq!(iv.as_slice(), &[5, 4, 3, 2, 1]);
//! assert_eq!(iv.capacity(), 5);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;

/// Incremental builder: push items, then build once.
pub trait Builder {
    /// Item type accepted by the builder.
    type Item;
    /// Final type produced by [`Self::build`].
    type Build;

    /// Pushes a single item into the builder.
    fn push(&mut self, item: Self::Item) -> Result<()>;

    /// Extends the builder with items from an iterator.
    fn extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    /// Consumes the staged items and returns the constructed value.
    fn build(self) -> Result<Self::Build>;
}

/// Types constructible through a [`Builder`].
pub trait Build: Sized {
    /// Builder type used for construction.
    type Builder: Builder<Build = Self>;

    /// Returns a new builder instance.
    fn builder() -> Self::Builder;

    /// Stages every item of `iter` on a fresh builder and builds it.
    fn from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = <Self::Builder as Builder>::Item>,
    {
        let mut b = Self::builder();
        b.extend(iter)?;
        b.build()
    }
}
