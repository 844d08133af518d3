// Integration tests for the trace producers

use algoviz::producers::{
    array_delete, array_insert, binary_search, linear_search, list_delete, list_insert,
    pattern_match, queue_dequeue, queue_enqueue, stack_pop, stack_push, string_delete,
    string_insert, string_search, traverse_graph, traverse_tree, BinaryTree, Graph, ListKind,
    Operation, SortAlgorithm, Strategy, TraversalOrder,
};
use algoviz::trace::value::{to_ints, to_string};
use algoviz::trace::{Outcome, Role, Trace};

fn final_ints(trace: &Trace, container: &str) -> Vec<i64> {
    trace
        .last()
        .and_then(|s| s.cells(container))
        .map(to_ints)
        .unwrap_or_default()
}

fn final_text(trace: &Trace) -> String {
    trace
        .last()
        .and_then(|s| s.cells("text"))
        .map(to_string)
        .unwrap_or_default()
}

#[test]
fn test_linear_search_scenario() {
    let trace = linear_search(&[15, 8, 23, 4, 42, 16, 9], 23);

    assert_eq!(trace.len(), 3);
    assert_eq!(trace.outcome(), Some(Outcome::Found(2)));
    let visited: Vec<_> = trace
        .steps()
        .iter()
        .filter_map(|s| s.pointer(Role::Current))
        .collect();
    assert_eq!(visited, vec![0, 1, 2]);
    assert!(trace.validate().is_ok());
}

#[test]
fn test_binary_search_scenario() {
    let trace = binary_search(&[5, 12, 23, 34, 45, 56, 67, 78], 100);

    assert_eq!(trace.outcome(), Some(Outcome::NotFound));
    assert!(trace.validate().is_ok());
    // every mid moves right
    let mids: Vec<_> = trace
        .steps()
        .iter()
        .filter(|s| s.code_line == Some(1))
        .filter_map(|s| s.pointer(Role::Mid))
        .collect();
    assert_eq!(mids, vec![3, 5, 6, 7]);
}

#[test]
fn test_queue_overflow_scenario() {
    let trace = queue_enqueue(&[5, 10, 15], Some(3), 20);

    assert_eq!(trace.len(), 1);
    assert_eq!(trace.outcome(), Some(Outcome::Overflow));
    assert_eq!(final_ints(&trace, "queue"), vec![5, 10, 15]);
}

#[test]
fn test_bubble_sort_scenario() {
    let trace = SortAlgorithm::Bubble.sort(&[3, 1, 2]);

    assert_eq!(final_ints(&trace, "array"), vec![1, 2, 3]);
    assert_eq!(trace.outcome(), Some(Outcome::Completed));
}

#[test]
fn test_every_sort_agrees_with_std_sort() {
    let input = [50, 30, 70, 10, 90, 40, 30, 0];
    let mut expected = input.to_vec();
    expected.sort();

    for algorithm in SortAlgorithm::ALL {
        let trace = algorithm.sort(&input);
        assert_eq!(
            final_ints(&trace, algorithm.container()),
            expected,
            "{:?} produced a wrong result",
            algorithm
        );
        assert!(trace.validate().is_ok(), "{:?} broke an invariant", algorithm);
    }
}

#[test]
fn test_sorts_with_negative_values() {
    let input = [3, -7, 0, -1, 12];
    for algorithm in SortAlgorithm::ALL {
        let trace = algorithm.sort(&input);
        if algorithm.accepts_negative() {
            assert_eq!(final_ints(&trace, algorithm.container()), vec![-7, -1, 0, 3, 12]);
        } else {
            assert_eq!(trace.len(), 1);
            assert_eq!(trace.outcome(), Some(Outcome::InvalidArgument));
        }
    }
}

#[test]
fn test_array_insert_and_delete() {
    let trace = array_insert(&[1, 2, 3], 1, 9);
    assert_eq!(final_ints(&trace, "array"), vec![1, 9, 2, 3]);
    assert!(trace.validate().is_ok());

    let trace = array_delete(&[1, 2, 3], 0);
    assert_eq!(final_ints(&trace, "array"), vec![2, 3]);
    assert!(trace.validate().is_ok());

    assert_eq!(array_insert(&[1], 5, 0).outcome(), Some(Outcome::InvalidArgument));
    assert_eq!(array_delete(&[], 0).outcome(), Some(Outcome::InvalidArgument));
}

#[test]
fn test_stack_round_trip() {
    let pushed = stack_push(&[1], Some(2), 2);
    let after_push = final_ints(&pushed, "stack");
    assert_eq!(after_push, vec![1, 2]);

    let popped = stack_pop(&after_push);
    assert_eq!(final_ints(&popped, "stack"), vec![1]);
    assert_eq!(stack_push(&after_push, Some(2), 3).outcome(), Some(Outcome::Overflow));
}

#[test]
fn test_dequeue_empty_underflows() {
    let trace = queue_dequeue(&[]);
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.outcome(), Some(Outcome::Underflow));
}

#[test]
fn test_linked_list_variants_agree() {
    let list = [22, 5, 77, 6, 43, 90];
    for kind in ListKind::ALL {
        assert_eq!(
            final_ints(&list_insert(kind, &list, 4, 1), "list"),
            vec![22, 5, 77, 6, 1, 43, 90]
        );
        assert_eq!(
            final_ints(&list_delete(kind, &list, 5), "list"),
            vec![22, 5, 77, 6, 43]
        );
    }
}

#[test]
fn test_tree_and_graph_traversals() {
    let tree = traverse_tree(&BinaryTree::sample(), TraversalOrder::Pre);
    assert_eq!(final_ints(&tree, "visited"), vec![1, 2, 4, 5, 3, 6, 7]);

    let bfs = traverse_graph(&Graph::sample(), 3, Strategy::Bfs, None);
    assert_eq!(final_ints(&bfs, "visited"), vec![3, 0, 5, 6, 1, 2, 4]);
    assert!(bfs.validate().is_ok());
}

#[test]
fn test_string_operations() {
    assert_eq!(string_search("hello", 'l').outcome(), Some(Outcome::Found(2)));
    assert_eq!(final_text(&string_insert("hllo", 1, 'e')), "hello");
    assert_eq!(final_text(&string_delete("helllo", 2)), "hello");

    let trace = pattern_match("abxabcabc", "abc");
    assert_eq!(trace.outcome(), Some(Outcome::Found(3)));
    assert_eq!(pattern_match("ab", "abc").outcome(), Some(Outcome::NotFound));
    assert_eq!(pattern_match("ab", "").outcome(), Some(Outcome::InvalidArgument));
}

#[test]
fn test_invalid_arguments_are_single_step() {
    let ops = [
        Operation::ArrayDelete {
            values: vec![1, 2],
            index: 2,
        },
        Operation::ListInsert {
            kind: ListKind::Circular,
            list: vec![1],
            position: 3,
            value: 0,
        },
        Operation::GraphTraversal {
            graph: Graph::sample(),
            start: 42,
            strategy: Strategy::Dfs,
            target: None,
        },
        Operation::PatternMatch {
            text: "abc".to_string(),
            pattern: String::new(),
        },
    ];
    for op in &ops {
        let trace = op.produce();
        assert_eq!(trace.len(), 1, "{:?}", op);
        assert_eq!(trace.outcome(), Some(Outcome::InvalidArgument));
        assert!(trace.last().is_some_and(|s| s.pointers.is_empty()));
    }
}

#[test]
fn test_first_step_shows_unmodified_input() {
    let input = vec![9, 4, 7, 1];
    for algorithm in SortAlgorithm::ALL {
        let trace = algorithm.sort(&input);
        let first = trace
            .first()
            .and_then(|s| s.cells(algorithm.container()))
            .map(to_ints);
        assert_eq!(first, Some(input.clone()), "{:?}", algorithm);
    }
}
