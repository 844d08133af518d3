//! Quick sort with Lomuto partitioning

use crate::trace::value::ints;
use crate::trace::{ContainerId, Listing, Outcome, Role, Shape, Trace, TraceBuilder};

pub const QUICK_SORT: Listing = Listing {
    title: "Quick Sort",
    lines: &[
        "quickSort(arr, low, high):",
        "  if low < high:",
        "    p = partition(arr, low, high)",
        "    quickSort(arr, low, p-1); quickSort(arr, p+1, high)",
        "partition(arr, low, high):",
        "  pivot = arr[high]; i = low - 1",
        "  for j = low to high-1:",
        "    if arr[j] < pivot:",
        "      i = i + 1; swap(arr[i], arr[j])",
        "  swap(arr[i+1], arr[high]); return i+1",
    ],
    shape: Shape::Bars,
};

pub fn quick_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&QUICK_SORT);
    let arr = b.container("array", ints(values));

    if values.len() > 1 {
        sort(&mut b, arr, 0, values.len() - 1);
    }

    b.clear_pointers();
    b.finish(Outcome::Completed, None, "Sorting Completed!")
}

fn sort(b: &mut TraceBuilder, arr: ContainerId, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let p = partition(b, arr, low, high);
    if p > low {
        sort(b, arr, low, p - 1);
    }
    sort(b, arr, p + 1, high);
}

/// Partition `[low, high]` around `arr[high]`, returning the pivot's final index
fn partition(b: &mut TraceBuilder, arr: ContainerId, low: usize, high: usize) -> usize {
    let pivot = b.get(arr, high);
    // `i` is one past the last element known to be smaller than the pivot
    let mut i = low;

    b.clear_pointers();
    b.point(Role::Pivot, arr, high);
    b.point(Role::Low, arr, low);
    b.point(Role::High, arr, high);
    b.emit(5, format!("Choosing pivot {} at index {}", pivot, high));

    for j in low..high {
        b.point(Role::J, arr, j);
        b.point_opt(Role::I, arr, i.checked_sub(1).filter(|&k| k >= low));
        b.emit(7, format!("Comparing {} with pivot {}", b.get(arr, j), pivot));

        if b.get(arr, j).as_int() < pivot.as_int() {
            b.swap(arr, i, j);
            b.point(Role::I, arr, i);
            b.emit(8, format!("Swapped {} and {}", b.get(arr, i), b.get(arr, j)));
            i += 1;
        }
    }

    b.swap(arr, i, high);
    b.unpoint(Role::J);
    b.unpoint(Role::I);
    b.point(Role::Pivot, arr, i);
    b.emit(9, format!("Placed pivot {} at correct position {}", pivot, i));
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::value::to_ints;

    #[test]
    fn test_quick_sort_sorts_with_duplicates() {
        let trace = quick_sort(&[3, 1, 3, 0, 2, 3]);
        let result = trace.last().and_then(|s| s.cells("array")).map(to_ints);
        assert_eq!(result, Some(vec![0, 1, 2, 3, 3, 3]));
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_first_step_selects_last_element_as_pivot() {
        let trace = quick_sort(&[50, 30, 70, 10, 90, 40]);
        let first = trace.first().map(|s| (s.code_line, s.pointer(Role::Pivot)));
        assert_eq!(first, Some((Some(5), Some(5))));
    }
}
