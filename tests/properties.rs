// Property tests for the trace producers

use algoviz::producers::{
    binary_search, linear_search, list_delete, list_insert, traverse_graph, traverse_tree,
    BinaryTree, Graph, ListKind, Operation, SortAlgorithm, Strategy as Walk, TraversalOrder,
};
use algoviz::trace::value::to_ints;
use algoviz::trace::{Outcome, Trace};
use proptest::prelude::*;

fn final_ints(trace: &Trace, container: &str) -> Vec<i64> {
    trace
        .last()
        .and_then(|s| s.cells(container))
        .map(to_ints)
        .unwrap_or_default()
}

fn sort_strategy() -> impl Strategy<Value = SortAlgorithm> {
    prop::sample::select(SortAlgorithm::ALL.to_vec())
}

fn signed_sort_strategy() -> impl Strategy<Value = SortAlgorithm> {
    let signed: Vec<_> = SortAlgorithm::ALL
        .into_iter()
        .filter(|a| a.accepts_negative())
        .collect();
    prop::sample::select(signed)
}

fn small_ints() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..9)
}

fn list_kind() -> impl Strategy<Value = ListKind> {
    prop::sample::select(ListKind::ALL.to_vec())
}

fn text() -> impl Strategy<Value = String> {
    "[a-c]{0,8}"
}

/// Indexes and capacities deliberately reach past the operand length
fn array_ops() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (small_ints(), -20i64..20)
            .prop_map(|(values, target)| Operation::LinearSearch { values, target }),
        (small_ints(), -20i64..20).prop_map(|(mut values, target)| {
            values.sort();
            Operation::BinarySearch { values, target }
        }),
        (small_ints(), 0usize..12, -20i64..20)
            .prop_map(|(values, index, value)| Operation::ArrayInsert { values, index, value }),
        (small_ints(), 0usize..12)
            .prop_map(|(values, index)| Operation::ArrayDelete { values, index }),
        (sort_strategy(), small_ints())
            .prop_map(|(algorithm, values)| Operation::Sort { algorithm, values }),
    ]
}

fn stack_queue_ops() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (small_ints(), prop::option::of(0usize..10), -20i64..20)
            .prop_map(|(stack, capacity, value)| Operation::StackPush { stack, capacity, value }),
        small_ints().prop_map(|stack| Operation::StackPop { stack }),
        (small_ints(), prop::option::of(0usize..10), -20i64..20).prop_map(
            |(queue, capacity, value)| Operation::QueueEnqueue { queue, capacity, value }
        ),
        small_ints().prop_map(|queue| Operation::QueueDequeue { queue }),
    ]
}

fn linked_ops() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (list_kind(), small_ints(), -20i64..20)
            .prop_map(|(kind, list, target)| Operation::ListSearch { kind, list, target }),
        (list_kind(), small_ints(), 0usize..12, -20i64..20).prop_map(
            |(kind, list, position, value)| Operation::ListInsert { kind, list, position, value }
        ),
        (list_kind(), small_ints(), 0usize..12)
            .prop_map(|(kind, list, position)| Operation::ListDelete { kind, list, position }),
    ]
}

/// Random graphs may contain edges to missing nodes, and start or target
/// may lie outside the graph
fn traversal_ops() -> impl Strategy<Value = Operation> {
    let order = prop::sample::select(vec![
        TraversalOrder::Pre,
        TraversalOrder::In,
        TraversalOrder::Post,
    ]);
    let adjacency = prop::collection::vec(prop::collection::vec(0usize..7, 0..4), 0..7);
    prop_oneof![
        (small_ints(), order).prop_map(|(values, order)| Operation::TreeTraversal {
            tree: BinaryTree::complete(&values),
            order,
        }),
        (adjacency, 0usize..8, any::<bool>(), prop::option::of(0usize..8)).prop_map(
            |(adjacency, start, dfs, target)| Operation::GraphTraversal {
                graph: Graph::new(adjacency),
                start,
                strategy: if dfs { Walk::Dfs } else { Walk::Bfs },
                target,
            }
        ),
    ]
}

fn string_ops() -> impl Strategy<Value = Operation> {
    let ch = prop::char::range('a', 'd');
    prop_oneof![
        (text(), ch.clone()).prop_map(|(text, ch)| Operation::StringSearch { text, ch }),
        (text(), 0usize..10, ch)
            .prop_map(|(text, index, ch)| Operation::StringInsert { text, index, ch }),
        (text(), 0usize..10).prop_map(|(text, index)| Operation::StringDelete { text, index }),
        (text(), "[a-c]{0,3}")
            .prop_map(|(text, pattern)| Operation::PatternMatch { text, pattern }),
    ]
}

fn any_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        array_ops(),
        stack_queue_ops(),
        linked_ops(),
        traversal_ops(),
        string_ops(),
    ]
}

proptest! {
    /// Property: every operation yields a well-formed trace with a single
    /// terminal step at its end, whatever its operands.
    #[test]
    fn prop_every_operation_is_well_formed(op in any_operation()) {
        let trace = op.produce();
        prop_assert!(trace.validate().is_ok(), "{:?}: {:?}", op, trace.validate());
        let terminal = trace.steps().iter().filter(|s| s.is_terminal()).count();
        prop_assert_eq!(terminal, 1);
        prop_assert!(trace.last().is_some_and(|s| s.is_terminal()));
    }

    /// Property: producing the same operation twice gives the same trace.
    #[test]
    fn prop_every_operation_is_deterministic(op in any_operation()) {
        prop_assert_eq!(op.produce(), op.produce());
    }

    /// Property: a tree traversal starts with nothing visited.
    #[test]
    fn prop_tree_first_step_is_initial(values in small_ints()) {
        for order in [TraversalOrder::Pre, TraversalOrder::In, TraversalOrder::Post] {
            let trace = traverse_tree(&BinaryTree::complete(&values), order);
            let visited = trace.first().and_then(|s| s.cells("visited")).map(<[_]>::len);
            prop_assert_eq!(visited, Some(0));
        }
    }

    /// Property: every sort ends with the input in ascending order.
    #[test]
    fn prop_sorts_agree_with_std(
        algorithm in sort_strategy(),
        values in prop::collection::vec(0i64..200, 0..16),
    ) {
        let trace = algorithm.sort(&values);
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(final_ints(&trace, algorithm.container()), expected);
        prop_assert_eq!(trace.outcome(), Some(Outcome::Completed));
    }

    /// Property: comparison sorts also handle negative keys.
    #[test]
    fn prop_signed_sorts(
        algorithm in signed_sort_strategy(),
        values in prop::collection::vec(-500i64..500, 0..12),
    ) {
        let trace = algorithm.sort(&values);
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(final_ints(&trace, algorithm.container()), expected);
    }

    /// Property: traces are well formed and end in exactly one terminal step.
    #[test]
    fn prop_traces_are_terminal(
        algorithm in sort_strategy(),
        values in prop::collection::vec(-50i64..50, 0..12),
    ) {
        let trace = algorithm.sort(&values);
        prop_assert!(trace.validate().is_ok());
        let terminal = trace.steps().iter().filter(|s| s.is_terminal()).count();
        prop_assert_eq!(terminal, 1);
        prop_assert!(trace.last().is_some_and(|s| s.is_terminal()));
    }

    /// Property: producing twice from the same operands gives the same trace.
    #[test]
    fn prop_producers_are_deterministic(
        algorithm in sort_strategy(),
        values in prop::collection::vec(0i64..100, 0..12),
    ) {
        prop_assert_eq!(algorithm.sort(&values), algorithm.sort(&values));
    }

    /// Property: linear search reports the first matching index.
    #[test]
    fn prop_linear_search_first_match(
        values in prop::collection::vec(0i64..10, 0..20),
        target in 0i64..10,
    ) {
        let trace = linear_search(&values, target);
        let expected = values.iter().position(|&v| v == target);
        match expected {
            Some(i) => {
                prop_assert_eq!(trace.outcome(), Some(Outcome::Found(i)));
                prop_assert_eq!(trace.len(), i + 1);
            }
            None => prop_assert_eq!(trace.outcome(), Some(Outcome::NotFound)),
        }
        prop_assert!(trace.validate().is_ok());
    }

    /// Property: binary search finds a present key and misses an absent one.
    #[test]
    fn prop_binary_search_on_sorted(
        mut values in prop::collection::vec(-100i64..100, 0..32),
        target in -100i64..100,
    ) {
        values.sort();
        values.dedup();
        let trace = binary_search(&values, target);
        match values.binary_search(&target) {
            Ok(i) => prop_assert_eq!(trace.outcome(), Some(Outcome::Found(i))),
            Err(_) => prop_assert_eq!(trace.outcome(), Some(Outcome::NotFound)),
        }
        prop_assert!(trace.validate().is_ok());
    }

    /// Property: list insert then delete at the same position restores the list.
    #[test]
    fn prop_list_insert_delete_inverse(
        list in prop::collection::vec(0i64..100, 0..10),
        position in 0usize..11,
        value in 0i64..100,
    ) {
        let position = position % (list.len() + 1);
        for kind in ListKind::ALL {
            let inserted = final_ints(&list_insert(kind, &list, position, value), "list");
            prop_assert_eq!(inserted.len(), list.len() + 1);
            let restored = final_ints(&list_delete(kind, &inserted, position), "list");
            prop_assert_eq!(&restored, &list);
        }
    }

    /// Property: a full traversal of the demo graph visits every node once.
    #[test]
    fn prop_graph_traversal_visits_all(start in 0usize..7, dfs in any::<bool>()) {
        let strategy = if dfs { Walk::Dfs } else { Walk::Bfs };
        let trace = traverse_graph(&Graph::sample(), start, strategy, None);
        let mut visited = final_ints(&trace, "visited");
        prop_assert_eq!(visited.first().copied(), Some(start as i64));
        visited.sort();
        prop_assert_eq!(visited, (0..7).collect::<Vec<i64>>());
        prop_assert!(trace.validate().is_ok());
    }
}
