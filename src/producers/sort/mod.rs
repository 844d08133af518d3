//! Sorting producers
//!
//! Every sort takes the input by slice and records its work on a copy:
//! - [`exchange`]: bubble, selection and insertion sort
//! - [`merge`]: top-down merge sort with its split tree
//! - [`quick`]: Lomuto quick sort
//! - [`heap`]: heap sort
//! - [`distribution`]: counting and radix sort
//!
//! All of them end in a `Completed` step whose primary container holds the
//! sorted values. Counting and radix sort additionally reject negative input.

pub mod distribution;
pub mod exchange;
pub mod heap;
pub mod merge;
pub mod quick;

pub use distribution::{counting_sort, radix_sort};
pub use exchange::{bubble_sort, insertion_sort, selection_sort};
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use crate::trace::Trace;

/// Every sorting algorithm, for callers that pick one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Counting,
    Radix,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 8] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
        SortAlgorithm::Heap,
    ];

    pub fn sort(self, values: &[i64]) -> Trace {
        match self {
            SortAlgorithm::Bubble => bubble_sort(values),
            SortAlgorithm::Selection => selection_sort(values),
            SortAlgorithm::Insertion => insertion_sort(values),
            SortAlgorithm::Merge => merge_sort(values),
            SortAlgorithm::Quick => quick_sort(values),
            SortAlgorithm::Counting => counting_sort(values),
            SortAlgorithm::Radix => radix_sort(values),
            SortAlgorithm::Heap => heap_sort(values),
        }
    }

    /// Name of the container holding the values being sorted
    pub fn container(self) -> &'static str {
        match self {
            SortAlgorithm::Heap => "heap",
            _ => "array",
        }
    }

    /// Whether the algorithm accepts negative values
    pub fn accepts_negative(self) -> bool {
        !matches!(self, SortAlgorithm::Counting | SortAlgorithm::Radix)
    }
}
