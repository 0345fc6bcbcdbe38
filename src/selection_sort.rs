//! Partial selection sort
//!
//! Sorts only the first `k` positions of a sequence ascending; the rest
//! keep the leftover elements in unspecified order. Cheaper than a full
//! sort whenever only the head of the ordering is wanted.

use std::cmp::Ordering;

use crate::error::{CatalogError, CatalogResult};

/// Move the `k` smallest elements (under `cmp`) into positions `0..k`,
/// ascending. Positions `k..` end up holding the remaining elements in
/// no particular order.
///
/// Returns the comparison count, which is exactly
/// `k*n - k*(k+1)/2` for `n` elements. Fails with
/// [`CatalogError::InvalidRange`] when `k` exceeds the sequence length,
/// before any element is touched.
pub fn partial_selection_sort<T, F>(items: &mut [T], k: usize, mut cmp: F) -> CatalogResult<u64>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if k > items.len() {
        return Err(CatalogError::InvalidRange {
            k,
            len: items.len(),
        });
    }

    let mut comparisons = 0u64;
    for i in 0..k {
        // Scan the unsorted tail for the minimum; ties keep the
        // earliest index found.
        let mut smallest = i;
        for j in (i + 1)..items.len() {
            comparisons += 1;
            if cmp(&items[j], &items[smallest]) == Ordering::Less {
                smallest = j;
            }
        }
        items.swap(i, smallest);
    }

    Ok(comparisons)
}
