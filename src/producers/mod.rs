//! Trace producers
//!
//! A producer runs one operation to completion on a private copy of its input
//! and returns the resulting [`Trace`]. Producers are pure and total: the same
//! input always yields the same trace, nothing panics, and bad operands show up
//! as a single `InvalidArgument` step instead of an error value.
//!
//! - [`search`]: linear and binary search
//! - [`sequence`]: array insert/delete by shifting
//! - [`sort`]: the eight sorting algorithms
//! - [`stack_queue`]: push/pop and enqueue/dequeue with optional capacity
//! - [`linked_list`]: search/insert/delete over four list kinds
//! - [`tree`]: pre/in/post-order traversal
//! - [`graph`]: BFS/DFS traversal and search
//! - [`string`]: character search/insert/delete and pattern matching
//!
//! [`Operation`] names any of them together with its operands, so a caller can
//! store "what to run" and produce a fresh trace for every replay.

pub mod graph;
pub mod linked_list;
pub mod search;
pub mod sequence;
pub mod sort;
pub mod stack_queue;
pub mod string;
pub mod tree;

pub use graph::{traverse_graph, Graph, Strategy};
pub use linked_list::{list_delete, list_insert, list_search, ListKind};
pub use search::{binary_search, linear_search};
pub use sequence::{array_delete, array_insert};
pub use sort::SortAlgorithm;
pub use stack_queue::{queue_dequeue, queue_enqueue, stack_pop, stack_push};
pub use string::{pattern_match, string_delete, string_insert, string_search};
pub use tree::{traverse_tree, BinaryTree, TraversalOrder, TreeNode};

use crate::trace::Trace;

/// One producer invocation with all of its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    LinearSearch { values: Vec<i64>, target: i64 },
    BinarySearch { values: Vec<i64>, target: i64 },
    ArrayInsert { values: Vec<i64>, index: usize, value: i64 },
    ArrayDelete { values: Vec<i64>, index: usize },
    Sort { algorithm: SortAlgorithm, values: Vec<i64> },
    StackPush { stack: Vec<i64>, capacity: Option<usize>, value: i64 },
    StackPop { stack: Vec<i64> },
    QueueEnqueue { queue: Vec<i64>, capacity: Option<usize>, value: i64 },
    QueueDequeue { queue: Vec<i64> },
    ListSearch { kind: ListKind, list: Vec<i64>, target: i64 },
    ListInsert { kind: ListKind, list: Vec<i64>, position: usize, value: i64 },
    ListDelete { kind: ListKind, list: Vec<i64>, position: usize },
    TreeTraversal { tree: BinaryTree, order: TraversalOrder },
    GraphTraversal {
        graph: Graph,
        start: usize,
        strategy: Strategy,
        target: Option<usize>,
    },
    StringSearch { text: String, ch: char },
    StringInsert { text: String, index: usize, ch: char },
    StringDelete { text: String, index: usize },
    PatternMatch { text: String, pattern: String },
}

impl Operation {
    /// Run the producer
    pub fn produce(&self) -> Trace {
        match self {
            Operation::LinearSearch { values, target } => linear_search(values, *target),
            Operation::BinarySearch { values, target } => binary_search(values, *target),
            Operation::ArrayInsert { values, index, value } => {
                array_insert(values, *index, *value)
            }
            Operation::ArrayDelete { values, index } => array_delete(values, *index),
            Operation::Sort { algorithm, values } => algorithm.sort(values),
            Operation::StackPush {
                stack,
                capacity,
                value,
            } => stack_push(stack, *capacity, *value),
            Operation::StackPop { stack } => stack_pop(stack),
            Operation::QueueEnqueue {
                queue,
                capacity,
                value,
            } => queue_enqueue(queue, *capacity, *value),
            Operation::QueueDequeue { queue } => queue_dequeue(queue),
            Operation::ListSearch { kind, list, target } => list_search(*kind, list, *target),
            Operation::ListInsert {
                kind,
                list,
                position,
                value,
            } => list_insert(*kind, list, *position, *value),
            Operation::ListDelete {
                kind,
                list,
                position,
            } => list_delete(*kind, list, *position),
            Operation::TreeTraversal { tree, order } => traverse_tree(tree, *order),
            Operation::GraphTraversal {
                graph,
                start,
                strategy,
                target,
            } => traverse_graph(graph, *start, *strategy, *target),
            Operation::StringSearch { text, ch } => string_search(text, *ch),
            Operation::StringInsert { text, index, ch } => string_insert(text, *index, *ch),
            Operation::StringDelete { text, index } => string_delete(text, *index),
            Operation::PatternMatch { text, pattern } => pattern_match(text, pattern),
        }
    }
}
