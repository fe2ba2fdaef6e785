//! Comparison sort driven purely through the [`Orderable`] contract
//!
//! Introsort: median-of-three quicksort, insertion sort for short ranges and
//! a heapsort fallback once the recursion budget runs out. Not stable.

use crate::orderable::Orderable;
use log::trace;

/// Ranges at or below this length are finished with insertion sort
pub const DEFAULT_INSERTION_THRESHOLD: usize = 12;

/// Sort `data` in place
pub fn sort<O: Orderable + ?Sized>(data: &mut O) {
    sort_with_threshold(data, DEFAULT_INSERTION_THRESHOLD);
}

/// Sort `data` in place, switching to insertion sort at `threshold` elements
pub fn sort_with_threshold<O: Orderable + ?Sized>(data: &mut O, threshold: usize) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let depth_limit = 2 * (usize::BITS - len.leading_zeros()) as usize;
    quick_sort(data, 0, len, depth_limit, threshold.max(1));
}

/// Whether no element is less than its predecessor
pub fn is_sorted<O: Orderable + ?Sized>(data: &O) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

fn quick_sort<O: Orderable + ?Sized>(
    data: &mut O,
    mut lo: usize,
    mut hi: usize,
    mut depth: usize,
    threshold: usize,
) {
    while hi - lo > threshold {
        if depth == 0 {
            trace!("depth limit reached, heapsort on {lo}..{hi}");
            heap_sort(data, lo, hi);
            return;
        }
        depth -= 1;

        let mid = partition(data, lo, hi);

        // Recurse into the smaller side, loop on the larger one
        if mid - lo < hi - mid {
            quick_sort(data, lo, mid, depth, threshold);
            lo = mid + 1;
        } else {
            quick_sort(data, mid + 1, hi, depth, threshold);
            hi = mid;
        }
    }

    if hi - lo > 1 {
        insertion_sort(data, lo, hi);
    }
}

/// Partition `lo..hi` around a median-of-three pivot and return its final index.
///
/// Everything before the returned index is not greater than the pivot and
/// everything after it is not less.
fn partition<O: Orderable + ?Sized>(data: &mut O, lo: usize, hi: usize) -> usize {
    let pivot = median_of_three(data, lo, lo + (hi - lo) / 2, hi - 1);
    data.swap(lo, pivot);

    let mut i = lo + 1;
    let mut j = hi - 1;
    loop {
        while i <= j && data.less(i, lo) {
            i += 1;
        }
        while i <= j && data.less(lo, j) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }

    data.swap(lo, j);
    j
}

/// Index of the median of the elements at `a`, `b` and `c`
fn median_of_three<O: Orderable + ?Sized>(data: &O, a: usize, b: usize, c: usize) -> usize {
    if data.less(b, a) {
        if data.less(c, b) {
            b
        } else if data.less(c, a) {
            c
        } else {
            a
        }
    } else if data.less(c, a) {
        a
    } else if data.less(c, b) {
        c
    } else {
        b
    }
}

fn insertion_sort<O: Orderable + ?Sized>(data: &mut O, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heap_sort<O: Orderable + ?Sized>(data: &mut O, lo: usize, hi: usize) {
    let len = hi - lo;
    for root in (0..len / 2).rev() {
        sift_down(data, lo, root, len);
    }
    for end in (1..len).rev() {
        data.swap(lo, lo + end);
        sift_down(data, lo, 0, end);
    }
}

/// Restore the max-heap property below `root` within the first `len` elements after `first`
fn sift_down<O: Orderable + ?Sized>(data: &mut O, first: usize, mut root: usize, len: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && data.less(first + child, first + child + 1) {
            child += 1;
        }
        if !data.less(first + root, first + child) {
            return;
        }
        data.swap(first + root, first + child);
        root = child;
    }
}
