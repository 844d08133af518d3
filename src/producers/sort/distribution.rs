//! Non-comparison sorts: counting and LSD radix
//!
//! Both work over three containers: `array` (the input), `count` (the
//! histogram) and `output` (the placement buffer, filled with empty slots).
//! Every step that mutates something mutates exactly one of them, so the view
//! never has to show two writes at once.

use crate::trace::value::ints;
use crate::trace::{ContainerId, Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};

/// Largest key counting sort accepts; the histogram has `MAX_COUNTING_KEY + 1` buckets
pub const MAX_COUNTING_KEY: i64 = 1024;

pub const COUNTING_SORT: Listing = Listing {
    title: "Counting Sort",
    lines: &[
        "k = max(arr)",
        "count = [0] * (k + 1)",
        "for x in arr: count[x] += 1",
        "for v = 0 to k:",
        "  while count[v] > 0: count[v] -= 1; output[pos++] = v",
        "arr = output",
    ],
    shape: Shape::Bars,
};

pub const RADIX_SORT: Listing = Listing {
    title: "Radix Sort",
    lines: &[
        "m = max(arr)",
        "for exp = 1; m / exp > 0; exp *= 10:",
        "  count = [0] * 10",
        "  for x in arr: count[(x / exp) % 10] += 1",
        "  for d = 1 to 9: count[d] += count[d-1]",
        "  for i = n-1 down to 0: output[--count[digit]] = arr[i]",
        "  arr = output",
    ],
    shape: Shape::Bars,
};

fn count_at(b: &TraceBuilder, count: ContainerId, index: usize) -> i64 {
    b.get(count, index).as_int().unwrap_or(0)
}

/// Index of the first maximum
fn argmax(values: &[i64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, i64)>, (i, &v)| match best {
            Some((_, m)) if m >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

pub fn counting_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&COUNTING_SORT);
    let arr = b.container("array", ints(values));
    let count = b.container("count", Vec::new());
    let output = b.container("output", vec![Value::Empty; values.len()]);

    if values.iter().any(|&v| v < 0) {
        return b.reject("Counting sort only supports non-negative values");
    }
    let Some(max_at) = argmax(values) else {
        return b.finish(Outcome::Completed, None, "Nothing to sort");
    };
    let k = values[max_at];
    if k > MAX_COUNTING_KEY {
        return b.reject(format!(
            "Counting sort supports keys up to {}, got {}",
            MAX_COUNTING_KEY, k
        ));
    }
    let buckets = k as usize + 1;

    b.point(Role::Current, arr, max_at);
    b.emit(0, format!("k = max = {}", k));

    b.unpoint(Role::Current);
    b.replace(count, vec![Value::Int(0); buckets]);
    b.emit(1, format!("Initialised count array with {} zeros", buckets));

    for (i, &v) in values.iter().enumerate() {
        let slot = v as usize;
        b.unpoint(Role::Count);
        b.point(Role::Current, arr, i);
        b.emit(2, format!("Read {} at index {}", v, i));

        let c = count_at(&b, count, slot) + 1;
        b.set(count, slot, Value::Int(c));
        b.point(Role::Count, count, slot);
        b.emit(2, format!("count[{}] = {}", v, c));
    }

    let mut pos = 0;
    for v in 0..buckets {
        b.clear_pointers();
        b.point(Role::Count, count, v);
        b.emit(3, format!("Placing value {} ({} occurrences)", v, count_at(&b, count, v)));

        while count_at(&b, count, v) > 0 {
            let c = count_at(&b, count, v) - 1;
            b.unpoint(Role::Output);
            b.set(count, v, Value::Int(c));
            b.emit(4, format!("count[{}] = {}", v, c));

            b.set(output, pos, Value::Int(v as i64));
            b.point(Role::Output, output, pos);
            b.emit(4, format!("output[{}] = {}", pos, v));
            pos += 1;
        }
    }

    let sorted = b.cells(output).to_vec();
    b.replace(arr, sorted);
    b.clear_pointers();
    b.finish(Outcome::Completed, Some(5), "Counting Sort Completed!")
}

pub fn radix_sort(values: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&RADIX_SORT);
    let arr = b.container("array", ints(values));
    let count = b.container("count", vec![Value::Int(0); 10]);
    let output = b.container("output", vec![Value::Empty; values.len()]);
    let n = values.len();

    if values.iter().any(|&v| v < 0) {
        return b.reject("Radix sort only supports non-negative values");
    }
    let Some(max_at) = argmax(values) else {
        return b.finish(Outcome::Completed, None, "Nothing to sort");
    };
    let max = values[max_at];

    b.point(Role::Current, arr, max_at);
    b.emit(0, format!("max = {}", max));

    let mut exp: i64 = 1;
    while max / exp > 0 {
        let digit_of = |b: &TraceBuilder, i: usize| {
            b.get(arr, i).as_int().map_or(0, |x| ((x / exp) % 10) as usize)
        };

        b.clear_pointers();
        b.replace(output, vec![Value::Empty; n]);
        b.emit(1, format!("Sorting by digit at exp = {}", exp));

        b.replace(count, vec![Value::Int(0); 10]);
        b.emit(2, "Reset count buckets");

        for i in 0..n {
            let d = digit_of(&b, i);
            let c = count_at(&b, count, d) + 1;
            b.set(count, d, Value::Int(c));
            b.point(Role::Current, arr, i);
            b.point(Role::Digit, count, d);
            b.emit(3, format!("{} has digit {}: count[{}] = {}", b.get(arr, i), d, d, c));
        }

        b.clear_pointers();
        for d in 1..10 {
            let c = count_at(&b, count, d) + count_at(&b, count, d - 1);
            b.set(count, d, Value::Int(c));
            b.point(Role::Digit, count, d);
            b.emit(4, format!("Prefix sum: count[{}] = {}", d, c));
        }

        for i in (0..n).rev() {
            let d = digit_of(&b, i);
            let x = b.get(arr, i);
            // prefix sums guarantee count[d] >= 1 here
            let c = count_at(&b, count, d) - 1;
            let slot = c.max(0) as usize;

            b.set(output, slot, x);
            b.point(Role::Current, arr, i);
            b.point(Role::Digit, count, d);
            b.point(Role::Output, output, slot);
            b.emit(5, format!("output[{}] = {}", slot, x));

            b.set(count, d, Value::Int(c));
            b.emit(5, format!("count[{}] = {}", d, c));
        }

        let placed = b.cells(output).to_vec();
        b.replace(arr, placed);
        b.clear_pointers();
        b.emit(6, format!("Copied pass exp = {} back into the array", exp));

        exp = match exp.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }

    b.clear_pointers();
    b.finish(Outcome::Completed, None, "Radix Sort Completed!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::value::to_ints;
    use crate::trace::Step;

    fn array_of(trace: &Trace) -> Vec<i64> {
        trace
            .last()
            .and_then(|s| s.cells("array"))
            .map(to_ints)
            .unwrap_or_default()
    }

    fn changed_containers(a: &Step, b: &Step) -> usize {
        a.containers
            .iter()
            .zip(&b.containers)
            .filter(|(x, y)| x.cells != y.cells)
            .count()
    }

    #[test]
    fn test_counting_sort() {
        let trace = counting_sort(&[4, 2, 2, 8, 3, 3, 1]);
        assert_eq!(array_of(&trace), vec![1, 2, 2, 3, 3, 4, 8]);
        assert_eq!(trace.outcome(), Some(Outcome::Completed));
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_counting_sort_changes_one_container_per_step() {
        let trace = counting_sort(&[3, 0, 2, 3]);
        for pair in trace.steps().windows(2) {
            assert!(changed_containers(&pair[0], &pair[1]) <= 1);
        }
    }

    #[test]
    fn test_counting_sort_rejects_negative_and_huge_keys() {
        assert_eq!(counting_sort(&[3, -1]).outcome(), Some(Outcome::InvalidArgument));
        assert_eq!(counting_sort(&[1, 100_000]).outcome(), Some(Outcome::InvalidArgument));
        assert_eq!(counting_sort(&[3, -1]).len(), 1);
    }

    #[test]
    fn test_radix_sort() {
        let trace = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66]);
        assert_eq!(array_of(&trace), vec![2, 24, 45, 66, 75, 90, 170, 802]);
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_radix_sort_pass_count() {
        let trace = radix_sort(&[170, 45, 802]);
        let passes = trace.steps().iter().filter(|s| s.code_line == Some(1)).count();
        assert_eq!(passes, 3);
    }

    #[test]
    fn test_radix_sort_all_zero_and_empty() {
        assert_eq!(array_of(&radix_sort(&[0, 0])), vec![0, 0]);
        assert_eq!(radix_sort(&[]).len(), 1);
        assert_eq!(radix_sort(&[-5]).outcome(), Some(Outcome::InvalidArgument));
    }

    #[test]
    fn test_radix_sort_huge_values_terminate() {
        let trace = radix_sort(&[i64::MAX, 1]);
        assert_eq!(array_of(&trace), vec![1, i64::MAX]);
    }
}
