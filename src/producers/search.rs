//! Linear and binary search over integer arrays

use crate::trace::value::ints;
use crate::trace::{Listing, Outcome, Role, Shape, Trace, TraceBuilder};

pub const LINEAR_SEARCH: Listing = Listing {
    title: "Linear Search",
    lines: &[
        "for i = 0 to n-1:",
        "  if arr[i] == target:",
        "    return i",
        "  else continue",
        "return NOT_FOUND",
    ],
    shape: Shape::Boxes,
};

pub const BINARY_SEARCH: Listing = Listing {
    title: "Binary Search",
    lines: &[
        "lo = 0, hi = n-1",
        "mid = (lo + hi) / 2",
        "if arr[mid] == target: return mid",
        "if arr[mid] < target: lo = mid + 1",
        "else: hi = mid - 1",
        "return NOT_FOUND",
    ],
    shape: Shape::Boxes,
};

/// Scan left to right, one step per comparison
pub fn linear_search(values: &[i64], target: i64) -> Trace {
    let mut b = TraceBuilder::new(&LINEAR_SEARCH);
    let arr = b.container("array", ints(values));

    for (i, &value) in values.iter().enumerate() {
        b.point(Role::Current, arr, i);
        if value == target {
            return b.finish(Outcome::Found(i), Some(2), format!("Found at index {}!", i));
        }
        b.emit(3, format!("arr[{}] = {} is not {}, continue", i, value, target));
    }

    b.clear_pointers();
    b.finish(Outcome::NotFound, Some(4), "Target NOT found.")
}

/// Halve the `[lo, hi]` window of a sorted array until the target is hit
pub fn binary_search(sorted: &[i64], target: i64) -> Trace {
    let mut b = TraceBuilder::new(&BINARY_SEARCH);
    let arr = b.container("array", ints(sorted));

    let mut lo: isize = 0;
    let mut hi: isize = sorted.len() as isize - 1;
    if !sorted.is_empty() {
        b.point(Role::Low, arr, 0);
        b.point(Role::High, arr, hi as usize);
    }
    b.emit(0, format!("lo = 0, hi = {}", hi));

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let (l, h, m) = (lo as usize, hi as usize, mid as usize);
        b.point(Role::Low, arr, l);
        b.point(Role::High, arr, h);
        b.point(Role::Mid, arr, m);
        b.emit(1, format!("mid = ({} + {}) / 2 = {}", l, h, m));

        let value = sorted[m];
        if value == target {
            return b.finish(Outcome::Found(m), Some(2), format!("Found at index {}!", m));
        }
        if value < target {
            b.emit(3, format!("{} < {}, searching right half...", value, target));
            lo = mid + 1;
        } else {
            b.emit(4, format!("{} > {}, searching left half...", value, target));
            hi = mid - 1;
        }
    }

    b.clear_pointers();
    b.finish(Outcome::NotFound, Some(5), "Target NOT found.")
}
