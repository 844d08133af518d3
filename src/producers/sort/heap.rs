//! In-place heap sort over a max-heap

use crate::trace::value::ints;
use crate::trace::{ContainerId, Listing, Outcome, Role, Shape, Trace, TraceBuilder};

pub const HEAP_SORT: Listing = Listing {
    title: "Heap Sort",
    lines: &[
        "for i = n/2-1 down to 0: heapify(arr, n, i)",
        "heapify(arr, n, i): largest = i",
        "  if left < n and arr[left] > arr[largest]: largest = left",
        "  if right < n and arr[right] > arr[largest]: largest = right",
        "  if largest != i: swap(arr[i], arr[largest]); heapify(arr, n, largest)",
        "for i = n-1 down to 1: swap(arr[0], arr[i]); heapify(arr, i, 0)",
    ],
    shape: Shape::Bars,
};

pub fn heap_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&HEAP_SORT);
    let heap = b.container("heap", ints(values));
    let n = values.len();

    if n > 1 {
        b.emit(0, "Building max heap...");
        for i in (0..n / 2).rev() {
            heapify(&mut b, heap, n, i);
        }

        for i in (1..n).rev() {
            b.clear_pointers();
            b.swap(heap, 0, i);
            b.point(Role::Current, heap, 0);
            b.point(Role::I, heap, i);
            b.emit(
                5,
                format!(
                    "Swap root {} with arr[{}]; {} is now sorted",
                    b.get(heap, 0),
                    i,
                    b.get(heap, i)
                ),
            );
            heapify(&mut b, heap, i, 0);
        }
    }

    b.clear_pointers();
    b.finish(Outcome::Completed, None, "Heap Sort Completed! ✅")
}

/// Sift `arr[i]` down within the first `n` cells
fn heapify(b: &mut TraceBuilder, heap: ContainerId, n: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    b.clear_pointers();
    b.point(Role::Current, heap, i);
    b.point(Role::Largest, heap, largest);
    b.emit(1, format!("Heapifying at index {}", i));

    if left < n {
        b.point(Role::Left, heap, left);
        b.emit(
            2,
            format!("Compare left child {} with {}", b.get(heap, left), b.get(heap, largest)),
        );
        if b.get(heap, left).as_int() > b.get(heap, largest).as_int() {
            largest = left;
            b.point(Role::Largest, heap, largest);
        }
    }

    if right < n {
        b.point(Role::Right, heap, right);
        b.emit(
            3,
            format!("Compare right child {} with {}", b.get(heap, right), b.get(heap, largest)),
        );
        if b.get(heap, right).as_int() > b.get(heap, largest).as_int() {
            largest = right;
            b.point(Role::Largest, heap, largest);
        }
    }

    if largest != i {
        let (a, c) = (b.get(heap, i), b.get(heap, largest));
        b.swap(heap, i, largest);
        b.emit(4, format!("Swap {} with {}", a, c));
        heapify(b, heap, n, largest);
    }
}
