//! Resizable vector of `i32` with frozen, readonly and immutable modes.
use std::fmt;

use anyhow::anyhow;
use num_traits::ToPrimitive;

use crate::error::{DestroyError, Error, Result};
use crate::int_vectors::flags::{Flags, Restriction};
use crate::int_vectors::prelude::*;

/// Capacity ceiling used unless configured otherwise: the 32-bit unsigned maximum.
pub const DEFAULT_MAX_CAPACITY: usize = u32::MAX as usize;

/// Where [`IntVector::split`] cuts the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAt {
    /// Cut before the given index.
    Index(usize),
    /// Cut at the midpoint, rounded up for odd lengths.
    Midpoint,
}

impl From<usize> for SplitAt {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Resizable vector of `i32` with explicit capacity tracking.
///
/// The vector always owns at least one slot. Growing operations double the
/// capacity until it exceeds what they need, and removals halve it once the
/// load drops below 25%. Three independent [`Flags`] alter that behavior:
///
/// - *frozen*: the capacity never changes. Writes that would pass it are
///   silently truncated, and elements shifted past the end are lost.
/// - *readonly*: every content or structural edit is rejected.
/// - *immutable*: like readonly, and [`IntVector::destroy`] is refused.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use intvector::IntVector;
///
/// let mut iv = IntVector::new(2)?;
/// iv.append(3)?;
/// iv.append(1)?;
/// iv.append(2)?;
///
/// assert_eq!(iv.as_slice(), &[3, 1, 2]);
/// assert_eq!(iv.len(), 3);
/// assert_eq!(iv.capacity(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct IntVector {
    /// Backing storage; its length is the capacity.
    pub(crate) slots: Vec<i32>,
    pub(crate) len: usize,
    pub(crate) max_capacity: usize,
    pub(crate) flags: Flags,
}

impl IntVector {
    /// Creates an empty vector holding exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - `capacity` is zero,
    ///  - `capacity` exceeds [`DEFAULT_MAX_CAPACITY`], or
    ///  - the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::new(5)?;
    /// assert!(iv.is_empty());
    /// assert_eq!(iv.capacity(), 5);
    /// assert!(IntVector::new(0).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_max_capacity(capacity, DEFAULT_MAX_CAPACITY)
    }

    pub(crate) fn with_max_capacity(capacity: usize, max_capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_argument("capacity must be greater than 0."));
        }
        if capacity > max_capacity {
            return Err(Error::CapacityExceeded {
                max: max_capacity,
                capacity: 0,
                requested: capacity,
            });
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, 0);
        Ok(Self {
            slots,
            len: 0,
            max_capacity,
            flags: Flags::empty(),
        })
    }

    /// Creates a vector holding a copy of `vals`, with capacity `vals.len()`.
    ///
    /// # Errors
    ///
    /// An error is returned if `vals` is empty or the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from_slice(&[0, 1, 2])?;
    /// assert_eq!(iv.as_slice(), &[0, 1, 2]);
    /// assert_eq!(iv.capacity(), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_slice(vals: &[i32]) -> Result<Self> {
        if vals.is_empty() {
            return Err(Error::invalid_argument("vals must not be empty."));
        }
        let mut iv = Self::new(vals.len())?;
        iv.write_slice(vals, 0)?;
        Ok(iv)
    }

    /// Releases the vector.
    ///
    /// # Errors
    ///
    /// An immutable vector refuses destruction; it is handed back inside the
    /// [`DestroyError`] and stays usable.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[1, 2])?;
    /// iv.set_immutable();
    ///
    /// let mut iv = iv.destroy().unwrap_err().into_inner();
    /// assert_eq!(iv.as_slice(), &[1, 2]);
    ///
    /// iv.set_mutable();
    /// assert!(iv.destroy().is_ok());
    /// # Ok(())
    /// # }
    /// ```
    pub fn destroy(self) -> std::result::Result<(), DestroyError> {
        if self.is_immutable() {
            tracing::warn!("refusing to destroy immutable vector");
            return Err(DestroyError::new(
                self,
                Error::Mutability(Restriction::Immutable),
            ));
        }
        drop(self);
        Ok(())
    }

    /// Destroys the vector held by `handle`, leaving `None` behind.
    ///
    /// An empty handle is a no-op. An immutable vector is left in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut handle = Some(IntVector::new(4)?);
    /// IntVector::release(&mut handle)?;
    /// assert!(handle.is_none());
    /// IntVector::release(&mut handle)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn release(handle: &mut Option<Self>) -> Result<()> {
        if let Some(iv) = handle.take() {
            if let Err(rejected) = iv.destroy() {
                let err = rejected.error().clone();
                *handle = Some(rejected.into_inner());
                return Err(err);
            }
        }
        Ok(())
    }

    /// Pins the capacity.
    pub fn freeze(&mut self) {
        self.flags.set(Flags::FROZEN, true);
    }

    /// Lets the capacity change again.
    pub fn unfreeze(&mut self) {
        self.flags.set(Flags::FROZEN, false);
    }

    /// Rejects every edit until [`Self::set_writable`].
    pub fn set_readonly(&mut self) {
        self.flags.set(Flags::READONLY, true);
    }

    /// Clears the readonly flag.
    pub fn set_writable(&mut self) {
        self.flags.set(Flags::READONLY, false);
    }

    /// Rejects every edit and destruction until [`Self::set_mutable`].
    pub fn set_immutable(&mut self) {
        self.flags.set(Flags::IMMUTABLE, true);
    }

    /// Clears the immutable flag.
    pub fn set_mutable(&mut self) {
        self.flags.set(Flags::IMMUTABLE, false);
    }

    /// Returns the mode flags.
    #[inline(always)]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Checks if the capacity is pinned.
    #[inline(always)]
    pub const fn is_frozen(&self) -> bool {
        self.flags.contains(Flags::FROZEN)
    }

    /// Checks if edits are rejected by the readonly flag.
    #[inline(always)]
    pub const fn is_readonly(&self) -> bool {
        self.flags.contains(Flags::READONLY)
    }

    /// Checks if edits and destruction are rejected by the immutable flag.
    #[inline(always)]
    pub const fn is_immutable(&self) -> bool {
        self.flags.contains(Flags::IMMUTABLE)
    }

    /// Gets the number of integers.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the vector is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated slots, always at least one.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity ceiling.
    #[inline(always)]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns the live elements.
    #[inline(always)]
    pub fn as_slice(&self) -> &[i32] {
        &self.slots[..self.len]
    }

    /// Creates an iterator for enumerating integers.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Reallocates to `max(new_capacity, 1)` slots, truncating the length to
    /// `new_capacity`.
    ///
    /// A frozen vector ignores the request (logged, not an error).
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - the vector is readonly or immutable,
    ///  - `new_capacity` exceeds [`Self::max_capacity`], or
    ///  - the allocation fails, leaving the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[1, 2, 3])?;
    /// iv.resize(2)?;
    /// assert_eq!(iv.as_slice(), &[1, 2]);
    /// iv.resize(0)?;
    /// assert_eq!(iv.capacity(), 1);
    /// assert!(iv.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        self.check_editable()?;
        if self.is_frozen() {
            tracing::warn!(
                capacity = self.capacity(),
                new_capacity,
                "ignoring resize of frozen vector"
            );
            return Ok(());
        }
        if new_capacity > self.max_capacity {
            return Err(self.capacity_exceeded(new_capacity));
        }
        self.reallocate(new_capacity)
    }

    /// Shrinks the capacity to the length (at least one slot).
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is frozen, readonly or immutable.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.check_editable()?;
        if self.is_frozen() {
            tracing::warn!("refusing to shrink frozen vector");
            return Err(Error::Mutability(Restriction::Frozen));
        }
        self.reallocate(self.len)
    }

    /// Returns the `index`-th integer.
    ///
    /// # Errors
    ///
    /// An error is returned if `index` is not below [`Self::len`].
    pub fn get(&self, index: usize) -> Result<i32> {
        self.check_index(index)?;
        Ok(self.slots[index])
    }

    /// Sets the `index`-th integer to `value`.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, or if
    /// `index` is not below [`Self::len`].
    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        self.check_editable()?;
        self.check_index(index)?;
        self.slots[index] = value;
        Ok(())
    }

    /// Pushes `value` at the end, doubling the capacity when full.
    ///
    /// A full frozen vector drops `value` without error.
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
    /// let mut iv = IntVector::new(1)?;
    /// iv.freeze();
    /// iv.append(1)?;
    /// iv.append(2)?; // dropped
    /// assert_eq!(iv.as_slice(), &[1]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn append(&mut self, value: i32) -> Result<()> {
        self.check_editable()?;
        self.splice(self.len, &[value])
    }

    /// Inserts `value` before `index`, shifting the tail right.
    ///
    /// A full frozen vector has no room for `value`, so it is dropped and the
    /// contents stay unchanged.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, if
    /// `index > self.len()`, if the capacity ceiling is reached, or if the
    /// allocation fails.
    pub fn insert(&mut self, index: usize, value: i32) -> Result<()> {
        self.check_editable()?;
        self.check_insert_index(index)?;
        if self.is_frozen() && self.len == self.capacity() {
            tracing::debug!(index, "frozen vector full, insertion dropped");
            return Ok(());
        }
        self.splice(index, &[value])
    }

    /// Removes the `index`-th integer, shifting the tail left.
    ///
    /// Halves the capacity when the load drops below 25% (unless frozen).
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, or if
    /// `index` is not below [`Self::len`].
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.check_editable()?;
        self.check_index(index)?;
        self.slots.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.shrink_once()
    }

    /// Removes the first integer equal to `value`.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, or
    /// [`Error::NotFound`] if no integer matches.
    pub fn remove(&mut self, value: i32) -> Result<()> {
        self.check_editable()?;
        match self.as_slice().iter().position(|&x| x == value) {
            Some(index) => self.remove_at(index),
            None => Err(Error::NotFound),
        }
    }

    /// Removes every integer equal to `target` in one compaction pass and
    /// returns how many were removed.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, or
    /// [`Error::NotFound`] if no integer matches. An allocation error while
    /// shrinking afterwards keeps the removals applied.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[4, 1, 4, 2, 4])?;
    /// assert_eq!(iv.remove_all(4)?, 3);
    /// assert_eq!(iv.as_slice(), &[1, 2]);
    /// assert!(iv.remove_all(4).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove_all(&mut self, target: i32) -> Result<usize> {
        self.check_editable()?;
        let mut kept = 0;
        for i in 0..self.len {
            let x = self.slots[i];
            if x != target {
                self.slots[kept] = x;
                kept += 1;
            }
        }
        let removed = self.len - kept;
        if removed == 0 {
            return Err(Error::NotFound);
        }
        self.len = kept;
        self.shrink_repeatedly()?;
        Ok(removed)
    }

    /// Removes the integers at positions `start..=end`.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, if `end`
    /// is not below [`Self::len`], or if `start >= end`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[1, 2, 10, 8, 10, 7])?;
    /// iv.remove_range(2, 4)?;
    /// assert_eq!(iv.as_slice(), &[1, 2, 7]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_editable()?;
        self.check_index(end)?;
        if start >= end {
            tracing::debug!(start, end, "rejected malformed range");
            return Err(Error::invalid_argument(format!(
                "start must be less than end, but got start={start}, end={end}."
            )));
        }
        self.slots.copy_within(end + 1..self.len, start);
        self.len -= end - start + 1;
        self.shrink_repeatedly()
    }

    /// Removes and returns the `index`-th integer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::remove_at`].
    pub fn take(&mut self, index: usize) -> Result<i32> {
        self.check_editable()?;
        self.check_index(index)?;
        let value = self.slots[index];
        self.remove_at(index)?;
        Ok(value)
    }

    /// Removes and returns the last integer.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, or
    /// [`Error::Empty`] if there is nothing to remove.
    pub fn pop_back(&mut self) -> Result<i32> {
        self.check_editable()?;
        if self.is_empty() {
            tracing::debug!("nothing to pop from empty vector");
            return Err(Error::Empty);
        }
        self.take(self.len - 1)
    }

    /// Removes every integer and shrinks the capacity to one slot.
    ///
    /// A frozen vector keeps its capacity.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable.
    pub fn clear(&mut self) -> Result<()> {
        self.check_editable()?;
        if self.is_frozen() {
            self.len = 0;
            return Ok(());
        }
        self.reallocate(0)
    }

    /// Overwrites integers from position `at` with `vals`, growing the
    /// capacity first if the write passes it and extending the length when the
    /// write ends past it.
    ///
    /// A frozen vector writes only what fits in its capacity.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, if
    /// `at > self.len()`, if the capacity ceiling is reached, or if the
    /// allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[1, 2, 3])?;
    /// iv.write_slice(&[7, 8, 9], 2)?;
    /// assert_eq!(iv.as_slice(), &[1, 2, 7, 8, 9]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_slice(&mut self, vals: &[i32], at: usize) -> Result<()> {
        self.check_editable()?;
        self.check_insert_index(at)?;
        if vals.is_empty() {
            return Ok(());
        }
        let end = at
            .checked_add(vals.len())
            .ok_or_else(|| self.capacity_exceeded(usize::MAX))?;
        self.reserve_for(end)?;
        let written = vals.len().min(self.capacity() - at);
        self.slots[at..at + written].copy_from_slice(&vals[..written]);
        if written < vals.len() {
            tracing::debug!(
                dropped = vals.len() - written,
                "frozen vector truncated write"
            );
        }
        self.len = self.len.max(at + written);
        Ok(())
    }

    /// Reverses the order of the integers in place.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable.
    pub fn reverse(&mut self) -> Result<()> {
        self.check_editable()?;
        let len = self.len;
        let vals = &mut self.slots[..len];
        let (mut lo, mut hi) = (0, len);
        while lo + 1 < hi {
            hi -= 1;
            vals.swap(lo, hi);
            lo += 1;
        }
        Ok(())
    }

    /// Collects the integers into an independent `Vec<i32>`.
    ///
    /// An empty vector yields an unallocated `Vec`.
    ///
    /// # Errors
    ///
    /// An error is returned if the allocation fails.
    pub fn to_vec(&self) -> Result<Vec<i32>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        out.try_reserve_exact(self.len)?;
        out.extend_from_slice(self.as_slice());
        Ok(out)
    }

    /// Replaces the contents with `vals`, reallocating exactly `vals.len()`
    /// slots. An empty `vals` behaves like [`Self::clear`].
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - the vector is readonly or immutable,
    ///  - the vector is frozen and `vals.len()` differs from the capacity,
    ///  - `vals.len()` exceeds [`Self::max_capacity`], or
    ///  - the allocation fails, leaving the vector unchanged.
    pub fn replace_contents(&mut self, vals: &[i32]) -> Result<()> {
        self.check_editable()?;
        if vals.is_empty() {
            return self.clear();
        }
        if self.is_frozen() && vals.len() != self.capacity() {
            tracing::warn!(
                capacity = self.capacity(),
                requested = vals.len(),
                "refusing to resize frozen vector"
            );
            return Err(Error::Mutability(Restriction::Frozen));
        }
        if vals.len() > self.max_capacity {
            return Err(self.capacity_exceeded(vals.len()));
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(vals.len())?;
        slots.extend_from_slice(vals);
        self.slots = slots;
        self.len = vals.len();
        Ok(())
    }

    /// Splits the vector in two, keeping `[0, at)` and returning `[at, len)`
    /// as a new vector with exactly that capacity.
    ///
    /// A frozen vector only shortens its length; otherwise its capacity
    /// shrinks to the kept part.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - the vector is readonly or immutable,
    ///  - the vector holds fewer than two integers,
    ///  - `at` is index 0 or not below [`Self::len`], or
    ///  - the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::{IntVector, SplitAt};
    ///
    /// let mut iv = IntVector::from_slice(&[1, 2, 3, 4, 5, 6, 7])?;
    /// let tail = iv.split(SplitAt::Midpoint)?;
    /// assert_eq!(iv.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(tail.as_slice(), &[5, 6, 7]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn split(&mut self, at: SplitAt) -> Result<IntVector> {
        let mid = self.split_point(at)?;
        let mut tail = Self::with_max_capacity(self.len - mid, self.max_capacity)?;
        tail.slots.copy_from_slice(&self.slots[mid..self.len]);
        tail.len = self.len - mid;
        self.truncate_to(mid)?;
        Ok(tail)
    }

    /// Same as [`Self::split`], returning the tail as a plain `Vec<i32>`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::split`].
    pub fn split_off_vec(&mut self, at: SplitAt) -> Result<Vec<i32>> {
        let mid = self.split_point(at)?;
        let mut tail = Vec::new();
        tail.try_reserve_exact(self.len - mid)?;
        tail.extend_from_slice(&self.slots[mid..self.len]);
        self.truncate_to(mid)?;
        Ok(tail)
    }

    fn split_point(&self, at: SplitAt) -> Result<usize> {
        self.check_editable()?;
        match self.len {
            0 => return Err(Error::invalid_argument("cannot split an empty vector.")),
            1 => {
                return Err(Error::invalid_argument(
                    "cannot split a vector holding one integer.",
                ))
            }
            _ => {}
        }
        match at {
            SplitAt::Midpoint => Ok(self.len.div_ceil(2)),
            SplitAt::Index(0) => Err(Error::invalid_argument("cannot split at index 0.")),
            SplitAt::Index(index) => {
                self.check_index(index)?;
                Ok(index)
            }
        }
    }

    fn truncate_to(&mut self, len: usize) -> Result<()> {
        if self.is_frozen() {
            self.len = len;
            Ok(())
        } else {
            self.reallocate(len)
        }
    }

    /// Returns the restriction error if readonly or immutable is set.
    pub(crate) fn check_editable(&self) -> Result<()> {
        match self.flags.edit_restriction() {
            Some(restriction) => {
                tracing::warn!(%restriction, "rejected edit");
                Err(Error::Mutability(restriction))
            }
            None => Ok(()),
        }
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "index out of bounds");
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    pub(crate) fn check_insert_index(&self, index: usize) -> Result<()> {
        if index > self.len {
            tracing::debug!(index, len = self.len, "index out of bounds");
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    pub(crate) fn capacity_exceeded(&self, requested: usize) -> Error {
        Error::CapacityExceeded {
            max: self.max_capacity,
            capacity: self.capacity(),
            requested,
        }
    }

    /// Inserts `vals` before `index`. Past a frozen capacity, whatever would
    /// land beyond the last slot is dropped (inserted values first, then the
    /// shifted tail).
    pub(crate) fn splice(&mut self, index: usize, vals: &[i32]) -> Result<()> {
        if vals.is_empty() {
            return Ok(());
        }
        let needed = self
            .len
            .checked_add(vals.len())
            .ok_or_else(|| self.capacity_exceeded(usize::MAX))?;
        self.reserve_for(needed)?;

        let capacity = self.capacity();
        let written = vals.len().min(capacity - index);
        let tail_at = index + written;
        let tail_kept = (self.len - index).min(capacity - tail_at);
        self.slots.copy_within(index..index + tail_kept, tail_at);
        self.slots[index..tail_at].copy_from_slice(&vals[..written]);

        let new_len = tail_at + tail_kept;
        if new_len < needed {
            tracing::debug!(dropped = needed - new_len, "frozen vector truncated insertion");
        }
        self.len = new_len;
        Ok(())
    }

    /// Grows the capacity until it exceeds `needed`, unless frozen or already
    /// large enough.
    fn reserve_for(&mut self, needed: usize) -> Result<()> {
        if needed <= self.capacity() || self.is_frozen() {
            return Ok(());
        }
        let capacity = self.grown_capacity(needed)?;
        self.reallocate(capacity)
    }

    fn grown_capacity(&self, needed: usize) -> Result<usize> {
        if needed > self.max_capacity {
            return Err(self.capacity_exceeded(needed));
        }
        let mut capacity = self.capacity();
        while capacity <= needed {
            if capacity > self.max_capacity / 2 {
                capacity = self.max_capacity;
                break;
            }
            capacity *= 2;
        }
        Ok(capacity)
    }

    fn shrink_once(&mut self) -> Result<()> {
        if !self.is_frozen() && self.len < self.capacity() / 4 {
            self.reallocate(self.capacity() / 2)?;
        }
        Ok(())
    }

    fn shrink_repeatedly(&mut self) -> Result<()> {
        if self.is_frozen() {
            return Ok(());
        }
        while self.len < self.capacity() / 4 && self.capacity() / 2 > 1 {
            self.reallocate(self.capacity() / 2)?;
        }
        Ok(())
    }

    /// Reallocates to `max(new_capacity, 1)` slots and truncates the length to
    /// `new_capacity`. Leaves everything untouched on failure.
    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        let capacity = self.capacity();
        let slots = new_capacity.max(1);
        if slots > capacity {
            self.slots.try_reserve_exact(slots - capacity)?;
            self.slots.resize(slots, 0);
        } else if slots < capacity {
            self.slots.truncate(slots);
            self.slots.shrink_to_fit();
        }
        tracing::trace!(from = capacity, to = slots, "reallocated vector");
        self.len = self.len.min(new_capacity);
        Ok(())
    }
}

impl PartialEq for IntVector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVector {}

impl Build for IntVector {
    /// Creates a new vector from a slice of integers `vals`.
    ///
    /// # Errors
    ///
    /// An error is returned if `vals` is empty or contains an integer that
    /// cannot be cast to [`i32`].
    fn build_from_slice<T>(vals: &[T]) -> anyhow::Result<Self>
    where
        T: ToPrimitive,
        Self: Sized,
    {
        let mut ints = Vec::with_capacity(vals.len());
        for x in vals {
            ints.push(
                x.to_i32()
                    .ok_or_else(|| anyhow!("vals must consist only of values castable into i32."))?,
            );
        }
        Ok(Self::from_slice(&ints)?)
    }
}

impl NumVals for IntVector {
    /// Returns the number of integers stored (just wrapping [`Self::len()`]).
    fn num_vals(&self) -> usize {
        self.len()
    }
}

impl Access for IntVector {
    /// Returns the `pos`-th integer, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::int_vectors::{Access, IntVector};
    ///
    /// let iv = IntVector::from_slice(&[5, -256, 0])?;
    /// assert_eq!(iv.access(1), Some(-256));
    /// assert_eq!(iv.access(3), None);
    /// # Ok(())
    /// # }
    /// ```
    fn access(&self, pos: usize) -> Option<i32> {
        self.as_slice().get(pos).copied()
    }
}

/// Iterator for enumerating integers, created by [`IntVector::iter()`].
pub struct Iter<'a> {
    iv: &'a IntVector,
    pos: usize,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator.
    pub const fn new(iv: &'a IntVector) -> Self {
        Self { iv, pos: 0 }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.iv.access(self.pos)?;
        self.pos += 1;
        Some(x)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.iv.len() - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IntVector {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntVector")
            .field("ints", &self.as_slice())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("flags", &self.flags)
            .finish()
    }
}

/// One `index | value` line per integer, followed by the size and capacity.
impl fmt::Display for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.iter().enumerate() {
            writeln!(f, "{i} | {x}")?;
        }
        writeln!(f, "Size {}", self.len)?;
        write!(f, "Capacity {}", self.capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(capacity: usize, max_capacity: usize) -> IntVector {
        IntVector::with_max_capacity(capacity, max_capacity).unwrap()
    }

    #[test]
    fn test_new() {
        let iv = IntVector::new(7).unwrap();
        assert_eq!(iv.len(), 0);
        assert_eq!(iv.capacity(), 7);
        assert!(iv.flags().is_empty());
        assert_eq!(iv.max_capacity(), DEFAULT_MAX_CAPACITY);
    }

    #[test]
    fn test_new_zero() {
        let e = IntVector::new(0);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("capacity must be greater than 0.".to_string())
        );
    }

    #[test]
    fn test_new_over_ceiling() {
        let e = IntVector::with_max_capacity(9, 8);
        assert!(matches!(
            e,
            Err(Error::CapacityExceeded {
                max: 8,
                requested: 9,
                ..
            })
        ));
    }

    #[test]
    fn test_from_slice_empty() {
        let e = IntVector::from_slice(&[]);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("vals must not be empty.".to_string())
        );
    }

    #[test]
    fn test_build_from_slice_uncastable() {
        let e = IntVector::build_from_slice(&[u64::MAX]);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("vals must consist only of values castable into i32.".to_string())
        );
        let iv = IntVector::build_from_slice(&[1u8, 2, 3]).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
        assert_eq!(iv.num_vals(), 3);
    }

    #[test]
    fn test_destroy_immutable() {
        let mut iv = IntVector::from_slice(&[1, 2, 3]).unwrap();
        iv.set_immutable();
        let rejected = iv.destroy().unwrap_err();
        assert_eq!(
            rejected.error(),
            &Error::Mutability(Restriction::Immutable)
        );
        let mut iv = rejected.into_inner();
        iv.set_mutable();
        iv.append(4).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 3, 4]);
        assert!(iv.destroy().is_ok());
    }

    #[test]
    fn test_destroy_readonly_allowed() {
        let mut iv = IntVector::new(1).unwrap();
        iv.set_readonly();
        assert!(iv.destroy().is_ok());
    }

    #[test]
    fn test_release_handle() {
        let mut handle = Some(IntVector::new(3).unwrap());
        handle.as_mut().unwrap().set_immutable();
        assert_eq!(
            IntVector::release(&mut handle),
            Err(Error::Mutability(Restriction::Immutable))
        );
        assert!(handle.is_some());

        handle.as_mut().unwrap().set_mutable();
        IntVector::release(&mut handle).unwrap();
        assert!(handle.is_none());
        IntVector::release(&mut handle).unwrap();
    }

    #[test]
    fn test_toggles_flip_one_flag() {
        let mut iv = IntVector::new(1).unwrap();
        iv.freeze();
        iv.set_readonly();
        iv.set_immutable();
        assert!(iv.is_frozen() && iv.is_readonly() && iv.is_immutable());
        iv.set_writable();
        assert!(iv.is_frozen() && !iv.is_readonly() && iv.is_immutable());
        iv.unfreeze();
        iv.set_mutable();
        assert!(iv.flags().is_empty());
    }

    #[test]
    fn test_append_growth() {
        let mut iv = IntVector::new(1).unwrap();
        iv.append(1).unwrap();
        assert_eq!(iv.capacity(), 1);
        iv.append(2).unwrap();
        // Doubles until strictly above the two slots needed.
        assert_eq!(iv.capacity(), 4);
        for x in 3..=5 {
            iv.append(x).unwrap();
        }
        assert_eq!(iv.capacity(), 8);
        assert_eq!(iv.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_append_saturates_at_ceiling() {
        let mut iv = bounded(3, 5);
        for x in 0..4 {
            iv.append(x).unwrap();
        }
        assert_eq!(iv.capacity(), 5);
        iv.append(4).unwrap();
        let e = iv.append(5);
        assert_eq!(
            e,
            Err(Error::CapacityExceeded {
                max: 5,
                capacity: 5,
                requested: 6
            })
        );
        assert_eq!(iv.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_frozen_append_drops() {
        let mut iv = IntVector::new(3).unwrap();
        iv.freeze();
        for x in 0..8 {
            iv.append(x).unwrap();
        }
        assert_eq!(iv.len(), 3);
        assert_eq!(iv.capacity(), 3);
        assert_eq!(iv.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_insert() {
        let mut iv = IntVector::from_slice(&[1, 3]).unwrap();
        iv.insert(1, 2).unwrap();
        iv.insert(0, 0).unwrap();
        iv.insert(4, 4).unwrap();
        assert_eq!(iv.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(
            iv.insert(6, 9),
            Err(Error::OutOfBounds { index: 6, len: 5 })
        );
    }

    #[test]
    fn test_frozen_insert_into_full_vector_is_dropped() {
        let mut iv = IntVector::from_slice(&[1, 2, 3]).unwrap();
        iv.freeze();
        iv.insert(0, 9).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
        iv.insert(3, 7).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
        assert_eq!(iv.capacity(), 3);
        assert_eq!(
            iv.insert(4, 7),
            Err(Error::OutOfBounds { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_frozen_insert_with_room() {
        let mut iv = IntVector::new(3).unwrap();
        iv.append_slice(&[1, 2]).unwrap();
        iv.freeze();
        iv.insert(1, 9).unwrap();
        assert_eq!(iv.as_slice(), &[1, 9, 2]);
        iv.insert(0, 8).unwrap();
        assert_eq!(iv.as_slice(), &[1, 9, 2]);
        assert_eq!(iv.capacity(), 3);
    }

    #[test]
    fn test_get_set() {
        let mut iv = IntVector::from_slice(&[1, 2]).unwrap();
        iv.set(1, -5).unwrap();
        assert_eq!(iv.get(1), Ok(-5));
        assert_eq!(iv.get(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
        assert_eq!(
            iv.set(2, 0).err().map(|x| x.to_string()),
            Some("index out of bounds: index 2, len 2".to_string())
        );
    }

    #[test]
    fn test_remove_at_shrinks_once() {
        let mut iv = IntVector::new(16).unwrap();
        iv.append_slice(&[1, 2, 3, 4]).unwrap();
        iv.remove_at(0).unwrap();
        assert_eq!(iv.as_slice(), &[2, 3, 4]);
        assert_eq!(iv.capacity(), 8);
        iv.remove_at(2).unwrap();
        assert_eq!(iv.as_slice(), &[2, 3]);
        assert_eq!(iv.capacity(), 8);
        iv.remove_at(0).unwrap();
        assert_eq!(iv.capacity(), 4);
    }

    #[test]
    fn test_remove_at_frozen_keeps_capacity() {
        let mut iv = IntVector::new(16).unwrap();
        iv.append(1).unwrap();
        iv.freeze();
        iv.remove_at(0).unwrap();
        assert!(iv.is_empty());
        assert_eq!(iv.capacity(), 16);
    }

    #[test]
    fn test_remove() {
        let mut iv = IntVector::from_slice(&[5, 6, 5]).unwrap();
        iv.remove(5).unwrap();
        assert_eq!(iv.as_slice(), &[6, 5]);
        assert_eq!(iv.remove(1), Err(Error::NotFound));
    }

    #[test]
    fn test_remove_all_shrinks_repeatedly() {
        let mut iv = IntVector::new(32).unwrap();
        iv.append_slice(&[7, 7, 1, 7, 7, 7]).unwrap();
        assert_eq!(iv.remove_all(7), Ok(5));
        assert_eq!(iv.as_slice(), &[1]);
        assert_eq!(iv.capacity(), 4);
    }

    #[test]
    fn test_remove_range() {
        let mut iv = IntVector::from_slice(&[1, 2, 10, 8, 10, 7]).unwrap();
        iv.remove_range(2, 4).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 7]);
    }

    #[test]
    fn test_remove_range_invalid() {
        let mut iv = IntVector::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(
            iv.remove_range(0, 3),
            Err(Error::OutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            iv.remove_range(2, 1).err().map(|x| x.to_string()),
            Some("start must be less than end, but got start=2, end=1.".to_string())
        );
        assert!(iv.remove_range(1, 1).is_err());
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_remove_range_shrinks() {
        let mut iv = IntVector::new(64).unwrap();
        iv.append_slice(&(0..20).collect::<Vec<_>>()).unwrap();
        iv.remove_range(1, 18).unwrap();
        assert_eq!(iv.as_slice(), &[0, 19]);
        assert_eq!(iv.capacity(), 8);
    }

    #[test]
    fn test_take_and_pop_back() {
        let mut iv = IntVector::from_slice(&[4, 5, 6]).unwrap();
        assert_eq!(iv.take(1), Ok(5));
        assert_eq!(iv.pop_back(), Ok(6));
        assert_eq!(iv.pop_back(), Ok(4));
        assert_eq!(iv.pop_back(), Err(Error::Empty));
        assert!(iv.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut iv = IntVector::from_slice(&[1, 2, 3, 4]).unwrap();
        iv.clear().unwrap();
        assert!(iv.is_empty());
        assert_eq!(iv.capacity(), 1);

        let mut iv = IntVector::from_slice(&[1, 2, 3, 4]).unwrap();
        iv.freeze();
        iv.clear().unwrap();
        assert!(iv.is_empty());
        assert_eq!(iv.capacity(), 4);
    }

    #[test]
    fn test_resize() {
        let mut iv = IntVector::from_slice(&[1, 2, 3]).unwrap();
        iv.resize(10).unwrap();
        assert_eq!(iv.capacity(), 10);
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
        iv.resize(1).unwrap();
        assert_eq!(iv.as_slice(), &[1]);
    }

    #[test]
    fn test_resize_frozen_is_ignored() {
        let mut iv = IntVector::from_slice(&[1, 2, 3]).unwrap();
        iv.freeze();
        iv.resize(10).unwrap();
        assert_eq!(iv.capacity(), 3);
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_resize_over_ceiling() {
        let mut iv = bounded(2, 4);
        assert!(matches!(
            iv.resize(5),
            Err(Error::CapacityExceeded { requested: 5, .. })
        ));
        assert_eq!(iv.capacity(), 2);
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut iv = IntVector::new(10).unwrap();
        iv.append_slice(&[1, 2]).unwrap();
        iv.shrink_to_fit().unwrap();
        assert_eq!(iv.capacity(), 2);
        iv.clear().unwrap();
        iv.shrink_to_fit().unwrap();
        assert_eq!(iv.capacity(), 1);
        iv.freeze();
        assert_eq!(
            iv.shrink_to_fit(),
            Err(Error::Mutability(Restriction::Frozen))
        );
    }

    #[test]
    fn test_write_slice() {
        let mut iv = IntVector::new(2).unwrap();
        iv.write_slice(&[1, 2, 3], 0).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
        assert_eq!(iv.capacity(), 4);
        iv.write_slice(&[9], 0).unwrap();
        assert_eq!(iv.as_slice(), &[9, 2, 3]);
        assert_eq!(
            iv.write_slice(&[1], 4),
            Err(Error::OutOfBounds { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_write_slice_frozen_truncates() {
        let mut iv = IntVector::new(4).unwrap();
        iv.append(1).unwrap();
        iv.freeze();
        iv.write_slice(&[5, 6, 7, 8, 9], 1).unwrap();
        assert_eq!(iv.as_slice(), &[1, 5, 6, 7]);
        assert_eq!(iv.capacity(), 4);
    }

    #[test]
    fn test_write_slice_frozen_partial_extension() {
        let mut iv = IntVector::new(8).unwrap();
        iv.freeze();
        iv.write_slice(&[1, 2], 0).unwrap();
        assert_eq!(iv.len(), 2);
    }

    #[test]
    fn test_reverse() {
        let mut iv = IntVector::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        iv.reverse().unwrap();
        assert_eq!(iv.as_slice(), &[5, 4, 3, 2, 1]);
        let mut iv = IntVector::from_slice(&[1, 2]).unwrap();
        iv.reverse().unwrap();
        assert_eq!(iv.as_slice(), &[2, 1]);
    }

    #[test]
    fn test_to_vec_empty() {
        let iv = IntVector::new(4).unwrap();
        let v = iv.to_vec().unwrap();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_replace_contents() {
        let mut iv = IntVector::new(10).unwrap();
        iv.replace_contents(&[1, 2, 3, 4, 5, 10]).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 3, 4, 5, 10]);
        assert_eq!(iv.capacity(), 6);
        iv.replace_contents(&[]).unwrap();
        assert!(iv.is_empty());
        assert_eq!(iv.capacity(), 1);
    }

    #[test]
    fn test_replace_contents_frozen() {
        let mut iv = IntVector::new(2).unwrap();
        iv.freeze();
        assert_eq!(
            iv.replace_contents(&[1, 2, 3]),
            Err(Error::Mutability(Restriction::Frozen))
        );
        iv.replace_contents(&[1, 2]).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_split_midpoint() {
        let mut iv = IntVector::from_slice(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        let tail = iv.split(SplitAt::Midpoint).unwrap();
        assert_eq!(iv.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(iv.capacity(), 4);
        assert_eq!(tail.as_slice(), &[5, 6, 7]);
        assert_eq!(tail.capacity(), 3);
        assert!(tail.flags().is_empty());
    }

    #[test]
    fn test_split_index_frozen() {
        let mut iv = IntVector::from_slice(&[1, 2, 3, 4]).unwrap();
        iv.freeze();
        let tail = iv.split(SplitAt::from(1usize)).unwrap();
        assert_eq!(iv.as_slice(), &[1]);
        assert_eq!(iv.capacity(), 4);
        assert_eq!(tail.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_split_invalid() {
        let mut iv = IntVector::new(2).unwrap();
        assert_eq!(
            iv.split(SplitAt::Midpoint).err().map(|x| x.to_string()),
            Some("cannot split an empty vector.".to_string())
        );
        iv.append(1).unwrap();
        assert!(iv.split(SplitAt::Midpoint).is_err());
        iv.append(2).unwrap();
        assert_eq!(
            iv.split(SplitAt::Index(0)).err().map(|x| x.to_string()),
            Some("cannot split at index 0.".to_string())
        );
        assert_eq!(
            iv.split(SplitAt::Index(2)),
            Err(Error::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(iv.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_split_off_vec() {
        let mut iv = IntVector::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(iv.split_off_vec(SplitAt::Index(2)), Ok(vec![3, 4, 5]));
        assert_eq!(iv.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_readonly_rejects_every_edit() {
        let mut iv = IntVector::from_slice(&[3, 1, 2]).unwrap();
        iv.set_readonly();
        let ro = Err(Error::Mutability(Restriction::Readonly));
        assert_eq!(iv.append(1), ro);
        assert_eq!(iv.insert(0, 1), ro);
        assert_eq!(iv.set(0, 1), ro);
        assert_eq!(iv.remove_at(0), ro);
        assert_eq!(iv.remove(3), ro);
        assert_eq!(iv.remove_all(3).map(|_| ()), ro);
        assert_eq!(iv.remove_range(0, 1), ro);
        assert_eq!(iv.take(0).map(|_| ()), ro);
        assert_eq!(iv.pop_back().map(|_| ()), ro);
        assert_eq!(iv.clear(), ro);
        assert_eq!(iv.resize(8), ro);
        assert_eq!(iv.write_slice(&[1], 0), ro);
        assert_eq!(iv.reverse(), ro);
        assert_eq!(iv.replace_contents(&[1]), ro);
        assert_eq!(iv.split(SplitAt::Midpoint).map(|_| ()), ro);
        assert_eq!(iv.as_slice(), &[3, 1, 2]);
        assert_eq!(iv.capacity(), 3);

        iv.set_writable();
        iv.append(4).unwrap();
        assert_eq!(iv.as_slice(), &[3, 1, 2, 4]);
    }

    #[test]
    fn test_immutable_rejects_edits() {
        let mut iv = IntVector::from_slice(&[1]).unwrap();
        iv.set_immutable();
        assert_eq!(iv.append(2), Err(Error::Mutability(Restriction::Immutable)));
        assert_eq!(iv.clear(), Err(Error::Mutability(Restriction::Immutable)));
        assert_eq!(iv.as_slice(), &[1]);
    }

    #[test]
    fn test_iter() {
        let iv = IntVector::from_slice(&[1, 2, 3]).unwrap();
        let mut it = iv.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.len(), 2);
        let collected: Vec<i32> = (&iv).into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_display() {
        let iv = IntVector::from_slice(&[4, -2]).unwrap();
        assert_eq!(iv.to_string(), "0 | 4\n1 | -2\nSize 2\nCapacity 2");
    }

    #[test]
    fn test_eq_ignores_capacity() {
        let a = IntVector::from_slice(&[1, 2]).unwrap();
        let mut b = IntVector::new(16).unwrap();
        b.append_slice(&[1, 2]).unwrap();
        assert_eq!(a, b);
    }
}
