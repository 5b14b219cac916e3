//! Bulk writes, cross-vector merges and searches on [`IntVector`].
use crate::error::Result;
use crate::int_vectors::IntVector;

impl IntVector {
    /// Pushes every integer of `vals` at the end in one pass.
    ///
    /// Grows like [`IntVector::append`]; a frozen vector keeps only the first
    /// `self.capacity() - self.len()` values.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, if the
    /// capacity ceiling is reached, or if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[1])?;
    /// iv.append_slice(&[2, 3, 4])?;
    /// assert_eq!(iv.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(iv.capacity(), 8);
    /// # Ok(())
    /// # }
    /// ```
    pub fn append_slice(&mut self, vals: &[i32]) -> Result<()> {
        self.check_editable()?;
        self.splice(self.len, vals)
    }

    /// Inserts every integer of `vals` before `index` in one pass.
    ///
    /// A frozen vector keeps what fits; the shifted tail is lost first.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, if
    /// `index > self.len()`, if the capacity ceiling is reached, or if the
    /// allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[1, 5])?;
    /// iv.insert_slice(1, &[2, 3, 4])?;
    /// assert_eq!(iv.as_slice(), &[1, 2, 3, 4, 5]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert_slice(&mut self, index: usize, vals: &[i32]) -> Result<()> {
        self.check_editable()?;
        self.check_insert_index(index)?;
        self.splice(index, vals)
    }

    /// Pushes the integers of `other` at the end.
    ///
    /// # Errors
    ///
    /// Same as [`Self::append_slice`].
    pub fn append_vector(&mut self, other: &IntVector) -> Result<()> {
        self.append_slice(other.as_slice())
    }

    /// Inserts the integers of `other` before `index`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::insert_slice`].
    pub fn insert_vector(&mut self, index: usize, other: &IntVector) -> Result<()> {
        self.insert_slice(index, other.as_slice())
    }

    /// Returns the position of the first integer equal to `target` at or after
    /// `from`, or [`None`] if there is none.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is non-empty and `from` is not below
    /// [`Self::len`].
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from_slice(&[4, 2, 4])?;
    /// assert_eq!(iv.contains(4, 0)?, Some(0));
    /// assert_eq!(iv.contains(4, 1)?, Some(2));
    /// assert_eq!(iv.contains(9, 0)?, None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn contains(&self, target: i32, from: usize) -> Result<Option<usize>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.check_index(from)?;
        Ok(self.as_slice()[from..]
            .iter()
            .position(|&x| x == target)
            .map(|i| i + from))
    }

    /// Returns the first position at or after `from` where `pattern` occurs
    /// contiguously, or [`None`] if it does not occur or cannot fit.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector and `pattern` are non-empty and
    /// `from` is not below [`Self::len`].
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from_slice(&[5, 6, 1, 7, 1, 2, 3, 8])?;
    /// assert_eq!(iv.contains_sequence(&[1, 2, 3], 0)?, Some(4));
    /// assert_eq!(iv.contains_sequence(&[3, 8, 9], 0)?, None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn contains_sequence(&self, pattern: &[i32], from: usize) -> Result<Option<usize>> {
        if pattern.is_empty() || self.is_empty() {
            return Ok(None);
        }
        self.check_index(from)?;
        if pattern.len() > self.len - from {
            return Ok(None);
        }
        Ok(self.as_slice()[from..]
            .windows(pattern.len())
            .position(|window| window == pattern)
            .map(|i| i + from))
    }

    /// Same as [`Self::contains_sequence`] with the integers of `other` as the
    /// pattern.
    ///
    /// # Errors
    ///
    /// Same as [`Self::contains_sequence`].
    pub fn contains_vector(&self, other: &IntVector, from: usize) -> Result<Option<usize>> {
        self.contains_sequence(other.as_slice(), from)
    }
}
