//! Stable top-down merge sort over `i32` slices.
//!
//! A single scratch buffer of the input length is allocated up front and
//! reused by every merge, so the auxiliary space is $`O(n)`$ and the running
//! time is $`O(n \lg n)`$ regardless of the input order.

use crate::error::Result;

/// Sorts `vals` least-to-greatest, keeping equal values in their input order.
///
/// # Errors
///
/// Returns [`Error::Allocation`](crate::error::Error::Allocation) if the scratch
/// buffer cannot be reserved; `vals` is untouched in that case.
pub(crate) fn merge_sort(vals: &mut [i32]) -> Result<()> {
    if vals.len() < 2 {
        return Ok(());
    }
    let mut scratch = Vec::new();
    scratch.try_reserve_exact(vals.len())?;
    scratch.resize(vals.len(), 0);
    sort_range(vals, &mut scratch);
    Ok(())
}

fn sort_range(vals: &mut [i32], scratch: &mut [i32]) {
    if vals.len() < 2 {
        return;
    }
    let mid = vals.len() / 2;
    {
        let (left, right) = vals.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_range(left, left_scratch);
        sort_range(right, right_scratch);
    }
    merge(vals, mid, scratch);
}

/// Merges the sorted runs `vals[..mid]` and `vals[mid..]`.
fn merge(vals: &mut [i32], mid: usize, scratch: &mut [i32]) {
    // Already ordered across the seam.
    if vals[mid - 1] <= vals[mid] {
        return;
    }
    let scratch = &mut scratch[..vals.len()];
    scratch.copy_from_slice(vals);
    let (left, right) = scratch.split_at(mid);

    let (mut i, mut j) = (0, 0);
    for slot in vals.iter_mut() {
        // `<=` keeps the left run first on ties.
        if j == right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
