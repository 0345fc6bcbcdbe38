//! In-place heapsort
//!
//! Full ascending sort over any element type and 3-way comparator. The
//! heap uses the textbook 1-based indexing convention: heap position `i`
//! lives at slice index `i - 1`, so the conceptual sentinel at position
//! 0 never exists and is never compared.

use std::cmp::Ordering;

/// Sort `items` ascending under `cmp`. Runs in place, O(n log n)
/// comparisons, not stable.
pub fn heap_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return;
    }

    build(items, &mut cmp);

    // Pull the maximum to the end of the shrinking unsorted prefix and
    // restore the heap property over what remains.
    for end in (2..=n).rev() {
        items.swap(0, end - 1);
        sift_down(items, 1, end - 1, &mut cmp);
    }
}

/// Turn the whole slice into a max-heap, bottom up.
fn build<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    for i in (1..=n / 2).rev() {
        sift_down(items, i, n, cmp);
    }
}

/// Sift heap position `parent` down within the first `n` positions.
/// Positions are 1-based; `at(i)` is `items[i - 1]`.
fn sift_down<T, F>(items: &mut [T], mut parent: usize, n: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while 2 * parent <= n {
        let mut child = 2 * parent;

        // Pick the larger child; the right one wins only on strict
        // inequality, so ties keep the left.
        if child < n && cmp(&items[child], &items[child - 1]) == Ordering::Greater {
            child += 1;
        }

        if cmp(&items[parent - 1], &items[child - 1]) == Ordering::Less {
            items.swap(parent - 1, child - 1);
            parent = child;
        } else {
            break;
        }
    }
}
