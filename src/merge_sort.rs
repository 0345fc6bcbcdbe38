//! Recursive mergesort
//!
//! Full ascending stable sort. Each recursive call copies its two
//! halves into auxiliary buffers, sorts them independently, and merges
//! back into the original storage, so the algorithm is O(n log n)
//! comparisons but not in place.

use std::cmp::Ordering;

/// Sort `items` ascending under `cmp`. Stable: elements the comparator
/// treats as equal keep their input order.
pub fn merge_sort<T, F>(items: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort(items, &mut cmp);
}

fn sort<T, F>(items: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    // Midpoint split; the left half takes the smaller share on odd
    // lengths.
    let mid = items.len() / 2;
    let mut left = items[..mid].to_vec();
    let mut right = items[mid..].to_vec();

    sort(&mut left, cmp);
    sort(&mut right, cmp);

    merge(items, &left, &right, cmp);
}

/// Interleave two sorted runs back into `out`. Taking the left element
/// on ties is what makes the whole sort stable.
fn merge<T, F>(out: &mut [T], left: &[T], right: &[T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut l = 0;
    let mut r = 0;
    let mut o = 0;

    while l < left.len() && r < right.len() {
        if cmp(&left[l], &right[r]) != Ordering::Greater {
            out[o] = left[l].clone();
            l += 1;
        } else {
            out[o] = right[r].clone();
            r += 1;
        }
        o += 1;
    }

    // One of the runs is exhausted; append whatever the other still
    // holds.
    while l < left.len() {
        out[o] = left[l].clone();
        l += 1;
        o += 1;
    }
    while r < right.len() {
        out[o] = right[r].clone();
        r += 1;
        o += 1;
    }
}
