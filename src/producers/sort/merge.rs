//! Top-down merge sort with a persistent split tree
//!
//! Besides the array itself every step carries the split tree: one
//! [`RangeNode`] per recursive call, keyed by its `[low, high]` range. Nodes
//! are only ever appended and updated in place, so finished subtrees stay
//! visible while the recursion moves on.

use crate::trace::value::ints;
use crate::trace::{
    ContainerId, Listing, Outcome, RangeNode, RangeStatus, Role, Shape, Trace, TraceBuilder,
    Value,
};

pub const MERGE_SORT: Listing = Listing {
    title: "Merge Sort",
    lines: &[
        "mergeSort(arr, low, high):",
        "  if low >= high: return",
        "  mid = (low + high) / 2",
        "  mergeSort(arr, low, mid)",
        "  mergeSort(arr, mid+1, high)",
        "  merge(arr, low, mid, high)",
    ],
    shape: Shape::Bars,
};

const LINE_ENTRY: usize = 0;
const LINE_BASE: usize = 1;
const LINE_SPLIT: usize = 2;
const LINE_LEFT: usize = 3;
const LINE_RIGHT: usize = 4;
const LINE_MERGE: usize = 5;

pub fn merge_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&MERGE_SORT);
    let arr = b.container("array", ints(values));

    if !values.is_empty() {
        sort(&mut b, arr, 0, values.len() - 1, 0, LINE_ENTRY);
    }

    b.clear_pointers();
    b.finish(Outcome::Completed, None, "Merge Sort Completed!")
}

/// Index of the node for `[low, high]`, creating it if needed
fn node_for(
    b: &mut TraceBuilder,
    arr: ContainerId,
    low: usize,
    high: usize,
    depth: usize,
) -> usize {
    if let Some(pos) = b
        .ranges()
        .iter()
        .position(|n| n.low == low && n.high == high)
    {
        return pos;
    }
    let values = b.cells(arr)[low..=high].to_vec();
    let ranges = b.ranges_mut();
    ranges.push(RangeNode {
        low,
        high,
        depth,
        values,
        status: RangeStatus::Pending,
    });
    ranges.len() - 1
}

fn sort(
    b: &mut TraceBuilder,
    arr: ContainerId,
    low: usize,
    high: usize,
    depth: usize,
    line: usize,
) {
    let node = node_for(b, arr, low, high, depth);
    b.ranges_mut()[node].status = RangeStatus::Active;
    b.clear_pointers();
    b.point(Role::Low, arr, low);
    b.point(Role::High, arr, high);
    b.emit(line, format!("Focus on [{}-{}]", low, high));

    if low == high {
        b.ranges_mut()[node].status = RangeStatus::Leaf;
        b.emit(LINE_BASE, format!("Base case at [{}]", low));
        return;
    }

    let mid = (low + high) / 2;
    let left = node_for(b, arr, low, mid, depth + 1);
    let right = node_for(b, arr, mid + 1, high, depth + 1);
    b.point(Role::Mid, arr, mid);
    b.emit(
        LINE_SPLIT,
        format!("Split [{}-{}] → [{}-{}] & [{}-{}]", low, high, low, mid, mid + 1, high),
    );

    sort(b, arr, low, mid, depth + 1, LINE_LEFT);
    sort(b, arr, mid + 1, high, depth + 1, LINE_RIGHT);

    merge(b, arr, node, left, right);
}

/// Merge two sorted children into `node`, one step per placed element
fn merge(b: &mut TraceBuilder, arr: ContainerId, node: usize, left: usize, right: usize) {
    let (low, high) = (b.ranges()[node].low, b.ranges()[node].high);
    let l_vals = b.ranges()[left].values.clone();
    let r_vals = b.ranges()[right].values.clone();
    let (mut i, mut j) = (0, 0);
    let mut merged: Vec<Value> = Vec::with_capacity(l_vals.len() + r_vals.len());

    b.clear_pointers();
    b.point(Role::Low, arr, low);
    b.point(Role::High, arr, high);

    while i < l_vals.len() || j < r_vals.len() {
        let take_left = match (l_vals.get(i), r_vals.get(j)) {
            (Some(x), Some(y)) => x.as_int() <= y.as_int(),
            (Some(_), None) => true,
            _ => false,
        };
        let message = if take_left {
            merged.push(l_vals[i]);
            i += 1;
            if j < r_vals.len() {
                format!("Merging [{}-{}]: took {} from left", low, high, l_vals[i - 1])
            } else {
                format!("Appending left {} into [{}-{}]", l_vals[i - 1], low, high)
            }
        } else {
            merged.push(r_vals[j]);
            j += 1;
            if i < l_vals.len() {
                format!("Merging [{}-{}]: took {} from right", low, high, r_vals[j - 1])
            } else {
                format!("Appending right {} into [{}-{}]", r_vals[j - 1], low, high)
            }
        };

        let mut partial = merged.clone();
        partial.extend_from_slice(&l_vals[i..]);
        partial.extend_from_slice(&r_vals[j..]);
        for (offset, value) in partial.iter().enumerate() {
            b.set(arr, low + offset, *value);
        }
        let n = &mut b.ranges_mut()[node];
        n.values = partial;
        n.status = RangeStatus::Merging;

        b.point(Role::Current, arr, low + merged.len() - 1);
        b.emit(LINE_MERGE, message);
    }

    b.ranges_mut()[node].status = RangeStatus::Merged;
    b.unpoint(Role::Current);
    b.emit(LINE_MERGE, format!("Merged [{}-{}] ✅", low, high));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::value::to_ints;

    #[test]
    fn test_merge_sort_sorts() {
        let trace = merge_sort(&[50, 30, 70, 10, 90, 40]);
        let result = trace.last().and_then(|s| s.cells("array")).map(to_ints);
        assert_eq!(result, Some(vec![10, 30, 40, 50, 70, 90]));
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_nodes_are_never_removed() {
        let trace = merge_sort(&[4, 3, 2, 1]);
        let mut previous = 0;
        for step in &trace {
            assert!(step.ranges.len() >= previous);
            previous = step.ranges.len();
        }
        // [0-3], [0-1], [2-3] and four leaves
        assert_eq!(previous, 7);
        let last = trace.last().map(|s| s.ranges.clone()).unwrap_or_default();
        assert!(last
            .iter()
            .all(|n| matches!(n.status, RangeStatus::Merged | RangeStatus::Leaf)));
    }

    #[test]
    fn test_single_element() {
        let trace = merge_sort(&[9]);
        // focus, base case, done
        assert_eq!(trace.len(), 3);
    }
}
