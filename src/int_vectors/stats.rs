//! Aggregate queries on [`IntVector`].
//!
//! Sums are accumulated in wider integers so that they cannot overflow.
//! [`IntVector::median`] sorts the vector in place, as does [`IntVector::mode`] when asked to presort.
use crate::error::{Error, Result};
use crate::int_vectors::merge_sort::merge_sort;
use crate::int_vectors::IntVector;

/// Most frequent integer of a vector, returned by [`IntVector::mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    /// The most frequent integer.
    pub value: i32,
    /// Number of occurrences of `value`.
    pub count: usize,
}

impl IntVector {
    /// Returns the smallest integer and the position of its first occurrence.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] on an empty vector.
    pub fn min(&self) -> Result<(i32, usize)> {
        let mut best: Option<(i32, usize)> = None;
        for (i, x) in self.iter().enumerate() {
            if best.map_or(true, |(v, _)| x < v) {
                best = Some((x, i));
            }
        }
        best.ok_or(Error::NotFound)
    }

    /// Returns the largest integer and the position of its first occurrence.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] on an empty vector.
    pub fn max(&self) -> Result<(i32, usize)> {
        let mut best: Option<(i32, usize)> = None;
        for (i, x) in self.iter().enumerate() {
            if best.map_or(true, |(v, _)| x > v) {
                best = Some((x, i));
            }
        }
        best.ok_or(Error::NotFound)
    }

    /// Returns `max - min`, or 0 on an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from_slice(&[i32::MIN, 0, i32::MAX])?;
    /// assert_eq!(iv.range(), u32::MAX as i64);
    /// # Ok(())
    /// # }
    /// ```
    pub fn range(&self) -> i64 {
        let mut bounds: Option<(i32, i32)> = None;
        for x in self.iter() {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(x), hi.max(x)),
                None => (x, x),
            });
        }
        bounds.map_or(0, |(lo, hi)| i64::from(hi) - i64::from(lo))
    }

    /// Returns the sum of the integers.
    pub fn sum(&self) -> i64 {
        self.iter().map(i64::from).sum()
    }

    /// Returns the sum of the integers of both vectors.
    pub fn sum_pair(&self, other: &IntVector) -> i128 {
        i128::from(self.sum()) + i128::from(other.sum())
    }

    /// Sorts the integers least-to-greatest with a stable merge sort.
    ///
    /// # Errors
    ///
    /// An error is returned if the vector is readonly or immutable, or if the
    /// scratch buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[3, 1, 5, 2, 4])?;
    /// iv.sort()?;
    /// assert_eq!(iv.as_slice(), &[1, 2, 3, 4, 5]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn sort(&mut self) -> Result<()> {
        self.check_editable()?;
        let len = self.len;
        merge_sort(&mut self.slots[..len])
    }

    /// Sorts the vector and returns its middle integer, or the average of the
    /// two middle integers for an even length. Returns 0 on an empty vector
    /// without sorting.
    ///
    /// # Errors
    ///
    /// Same as [`Self::sort`].
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::from_slice(&[1, 2, 3, 4, 5, 10])?;
    /// assert_eq!(iv.median()?, 3.5);
    /// # Ok(())
    /// # }
    /// ```
    pub fn median(&mut self) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        self.sort()?;
        let vals = self.as_slice();
        let mid = vals.len() / 2;
        if vals.len() % 2 == 0 {
            Ok((f64::from(vals[mid - 1]) + f64::from(vals[mid])) / 2.0)
        } else {
            Ok(f64::from(vals[mid]))
        }
    }

    /// Returns the most frequent integer and its number of occurrences.
    ///
    /// With `presort`, the vector is sorted in place and counted by runs. When
    /// not presorting, or when sorting is blocked by a mode flag, a sorted
    /// copy is counted instead; if that copy cannot be allocated, a pairwise
    /// scan over the vector is used.
    ///
    /// Ties go to the value encountered first. Once the vector has been
    /// sorted in place that is the smallest tied value; otherwise it is the
    /// tied value with the earliest position in the unchanged vector.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::{IntVector, Mode};
    ///
    /// let mut iv = IntVector::from_slice(&[4, 1, 4, 2])?;
    /// iv.set_readonly();
    /// assert_eq!(iv.mode(true)?, Mode { value: 4, count: 2 });
    /// assert_eq!(iv.as_slice(), &[4, 1, 4, 2]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn mode(&mut self, presort: bool) -> Result<Mode> {
        match self.as_slice() {
            [] => return Err(Error::Empty),
            [value] => {
                return Ok(Mode {
                    value: *value,
                    count: 1,
                })
            }
            _ => {}
        }
        if presort {
            match self.sort() {
                Ok(()) => return Ok(mode_of_sorted(self.as_slice())),
                Err(err) => tracing::debug!(%err, "counting mode on a copy"),
            }
        }
        Ok(match sorted_copy(self.as_slice()) {
            Some(copy) => mode_by_sorted_copy(self.as_slice(), &copy),
            None => {
                tracing::debug!("no scratch space, counting mode pairwise");
                mode_by_pairwise_scan(self.as_slice())
            }
        })
    }
}

fn sorted_copy(vals: &[i32]) -> Option<Vec<i32>> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(vals.len()).ok()?;
    copy.extend_from_slice(vals);
    merge_sort(&mut copy).ok()?;
    Some(copy)
}

/// Longest run of equal integers; the first run wins ties.
fn mode_of_sorted(vals: &[i32]) -> Mode {
    let mut best = Mode { value: 0, count: 0 };
    let mut run = 0;
    for (i, &x) in vals.iter().enumerate() {
        if i > 0 && vals[i - 1] == x {
            run += 1;
        } else {
            run = 1;
        }
        if run > best.count {
            best = Mode { value: x, count: run };
        }
    }
    best
}

/// Longest run in `sorted`, with ties broken by first position in `vals`.
fn mode_by_sorted_copy(vals: &[i32], sorted: &[i32]) -> Mode {
    let count = mode_of_sorted(sorted).count;
    for &x in vals {
        let lo = sorted.partition_point(|&y| y < x);
        let hi = sorted.partition_point(|&y| y <= x);
        if hi - lo == count {
            return Mode { value: x, count };
        }
    }
    Mode { value: 0, count: 0 }
}

/// Counts each integer against the rest of the slice, in $`O(n^2)`$ time and
/// constant space.
fn mode_by_pairwise_scan(vals: &[i32]) -> Mode {
    let mut best = Mode { value: 0, count: 0 };
    for (i, &x) in vals.iter().enumerate() {
        let count = vals[i..].iter().filter(|&&y| y == x).count();
        if count > best.count {
            best = Mode { value: x, count };
        }
    }
    best
}
