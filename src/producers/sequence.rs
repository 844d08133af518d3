//! Insert and delete by shifting, shared by arrays and strings
//!
//! Both operations keep every pointer in bounds: an insert first appends an
//! empty slot ("make room") and then shifts the tail right one cell per step,
//! a delete shifts the tail left and only then drops the last cell.

use crate::trace::value::ints;
use crate::trace::{Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};

pub const ARRAY_INSERT: Listing = Listing {
    title: "Array Insert",
    lines: &[
        "if index < 0 or index > n: invalid",
        "n = n + 1",
        "for i = n-2 down to index:",
        "  arr[i+1] = arr[i]",
        "arr[index] = value",
    ],
    shape: Shape::Boxes,
};

pub const ARRAY_DELETE: Listing = Listing {
    title: "Array Delete",
    lines: &[
        "if index < 0 or index >= n: invalid",
        "for i = index to n-2:",
        "  arr[i] = arr[i+1]",
        "n = n - 1",
    ],
    shape: Shape::Boxes,
};

/// Insert `value` at `index`, shifting the tail right
pub fn array_insert(values: &[i64], index: usize, value: i64) -> Trace {
    insert_at(&ARRAY_INSERT, "array", ints(values), index, Value::Int(value))
}

/// Delete the cell at `index`, shifting the tail left
pub fn array_delete(values: &[i64], index: usize) -> Trace {
    delete_at(&ARRAY_DELETE, "array", ints(values), index)
}

/// Shifting insert over any cell type. `listing` must follow the
/// five-line layout of [`ARRAY_INSERT`].
pub(crate) fn insert_at(
    listing: &'static Listing,
    name: &'static str,
    cells: Vec<Value>,
    index: usize,
    value: Value,
) -> Trace {
    let n = cells.len();
    let mut b = TraceBuilder::new(listing);
    let seq = b.container(name, cells);

    if index > n {
        return b.reject(format!("Invalid index {} (length is {}).", index, n));
    }

    b.emit(0, format!("Index {} is within 0..={}", index, n));

    b.cells_mut(seq).push(Value::Empty);
    b.point(Role::Current, seq, n);
    b.emit(1, format!("Make room: length grows to {}", n + 1));

    for i in (index..n).rev() {
        let moved = b.get(seq, i);
        b.set(seq, i + 1, moved);
        b.point(Role::Current, seq, i);
        b.point(Role::Next, seq, i + 1);
        b.emit(3, format!("Shift {} from {} to {}", moved, i, i + 1));
    }

    b.set(seq, index, value);
    b.unpoint(Role::Next);
    b.point(Role::Current, seq, index);
    b.finish(
        Outcome::Completed,
        Some(4),
        format!("Inserted {} at index {}.", value, index),
    )
}

/// Shifting delete over any cell type. `listing` must follow the
/// four-line layout of [`ARRAY_DELETE`].
pub(crate) fn delete_at(
    listing: &'static Listing,
    name: &'static str,
    cells: Vec<Value>,
    index: usize,
) -> Trace {
    let n = cells.len();
    let mut b = TraceBuilder::new(listing);
    let seq = b.container(name, cells);

    if index >= n {
        return b.reject(format!("Invalid index {} (length is {}).", index, n));
    }

    b.point(Role::Current, seq, index);
    b.emit(0, format!("Index {} is within 0..{}", index, n));

    for i in index..n - 1 {
        let moved = b.get(seq, i + 1);
        b.set(seq, i, moved);
        b.point(Role::Current, seq, i);
        b.point(Role::Next, seq, i + 1);
        b.emit(2, format!("Shift {} from {} to {}", moved, i + 1, i));
    }

    b.clear_pointers();
    let _ = b.cells_mut(seq).pop();
    b.finish(
        Outcome::Completed,
        Some(3),
        format!("Deleted index {}.", index),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::value::to_ints;

    fn final_array(trace: &Trace) -> Vec<i64> {
        trace
            .last()
            .and_then(|s| s.cells("array"))
            .map(to_ints)
            .unwrap_or_default()
    }

    #[test]
    fn test_insert_middle() {
        let trace = array_insert(&[10, 20, 30, 40, 50], 2, 99);
        assert_eq!(final_array(&trace), vec![10, 20, 99, 30, 40, 50]);
        assert_eq!(trace.outcome(), Some(Outcome::Completed));
        // check, make room, three shifts, write
        assert_eq!(trace.len(), 6);
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_insert_at_end_has_no_shifts() {
        let trace = array_insert(&[1, 2], 2, 3);
        assert_eq!(final_array(&trace), vec![1, 2, 3]);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_insert_past_end_is_rejected() {
        let trace = array_insert(&[1, 2], 3, 3);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.outcome(), Some(Outcome::InvalidArgument));
        assert_eq!(final_array(&trace), vec![1, 2]);
    }

    #[test]
    fn test_delete_first() {
        let trace = array_delete(&[10, 20, 30], 0);
        assert_eq!(final_array(&trace), vec![20, 30]);
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_delete_out_of_range() {
        let trace = array_delete(&[], 0);
        assert_eq!(trace.outcome(), Some(Outcome::InvalidArgument));
        assert_eq!(trace.len(), 1);
    }
}
