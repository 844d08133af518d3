//! Quadratic comparison sorts: bubble, selection and insertion

use crate::trace::value::ints;
use crate::trace::{Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};

pub const BUBBLE_SORT: Listing = Listing {
    title: "Bubble Sort",
    lines: &[
        "for i = 0 to n-1:",
        "  for j = 0 to n-i-2:",
        "    if arr[j] > arr[j+1]:",
        "      swap(arr[j], arr[j+1])",
        "  arr[n-i-1] is in place",
    ],
    shape: Shape::Bars,
};

pub const SELECTION_SORT: Listing = Listing {
    title: "Selection Sort",
    lines: &[
        "for i = 0 to n-2:",
        "  min = i",
        "  for j = i+1 to n-1:",
        "    if arr[j] < arr[min]: min = j",
        "  swap(arr[i], arr[min])",
    ],
    shape: Shape::Bars,
};

pub const INSERTION_SORT: Listing = Listing {
    title: "Insertion Sort",
    lines: &[
        "for i = 1 to n-1:",
        "  key = arr[i]; j = i - 1",
        "  while j >= 0 and arr[j] > key:",
        "    arr[j+1] = arr[j]; j = j - 1",
        "  arr[j+1] = key",
    ],
    shape: Shape::Bars,
};

pub fn bubble_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&BUBBLE_SORT);
    let arr = b.container("array", ints(values));
    let n = values.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            let (x, y) = (b.get(arr, j), b.get(arr, j + 1));
            b.point(Role::J, arr, j);
            b.point(Role::Next, arr, j + 1);
            b.emit(2, format!("Compare {} and {}", x, y));
            if x.as_int() > y.as_int() {
                b.swap(arr, j, j + 1);
                b.emit(3, format!("Swapped {} and {}", x, y));
            }
        }
        b.clear_pointers();
        b.point(Role::Current, arr, n - i - 1);
        b.emit(4, format!("{} is in its final place", b.get(arr, n - i - 1)));
    }

    b.clear_pointers();
    b.finish(Outcome::Completed, None, "Bubble Sort Completed!")
}

pub fn selection_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&SELECTION_SORT);
    let arr = b.container("array", ints(values));
    let n = values.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        b.clear_pointers();
        b.point(Role::I, arr, i);
        b.point(Role::Min, arr, min);
        b.emit(1, format!("min = {} (value {})", i, b.get(arr, i)));

        for j in i + 1..n {
            b.point(Role::J, arr, j);
            b.emit(2, format!("Compare {} with minimum {}", b.get(arr, j), b.get(arr, min)));
            if b.get(arr, j).as_int() < b.get(arr, min).as_int() {
                min = j;
                b.point(Role::Min, arr, min);
                b.emit(3, format!("New minimum found: {} at index {}", b.get(arr, j), j));
            }
        }

        b.unpoint(Role::J);
        if min != i {
            b.swap(arr, i, min);
            b.emit(
                4,
                format!(
                    "Swapped minimum {} at index {} with {}",
                    b.get(arr, i),
                    i,
                    b.get(arr, min)
                ),
            );
        } else {
            b.emit(4, format!("{} is already in place", b.get(arr, i)));
        }
    }

    b.clear_pointers();
    b.finish(Outcome::Completed, None, "Selection Sort Completed!")
}

pub fn insertion_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&INSERTION_SORT);
    let arr = b.container("array", ints(values));
    let n = values.len();

    for i in 1..n {
        let key: Value = b.get(arr, i);
        b.clear_pointers();
        b.point(Role::I, arr, i);
        b.point(Role::Key, arr, i);
        b.emit(1, format!("Picked key = {}", key));
        b.unpoint(Role::Key);

        let mut j = i;
        while j > 0 && b.get(arr, j - 1).as_int() > key.as_int() {
            let moved = b.get(arr, j - 1);
            b.set(arr, j, moved);
            b.point(Role::J, arr, j - 1);
            b.emit(3, format!("Shifting {} right", moved));
            j -= 1;
        }

        b.set(arr, j, key);
        b.unpoint(Role::J);
        b.point(Role::Current, arr, j);
        b.emit(4, format!("Inserted key {} at index {}", key, j));
    }

    b.clear_pointers();
    b.finish(Outcome::Completed, None, "Insertion Sort Completed!")
}
