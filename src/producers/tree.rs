//! Depth-first traversals of a binary tree
//!
//! The tree is stored as an arena of [`TreeNode`]s addressed by index. The
//! `nodes` container shows node values in arena order (level order for the
//! complete trees built by [`BinaryTree::complete`]); `visited` grows by one
//! value per visit.

use crate::trace::{ContainerId, Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Arena-backed binary tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryTree {
    pub nodes: Vec<TreeNode>,
    pub root: Option<usize>,
}

impl BinaryTree {
    /// Complete tree filled in level order: node `k` has children `2k+1` and `2k+2`
    pub fn complete(values: &[i64]) -> Self {
        let n = values.len();
        let child = |k: usize| (k < n).then_some(k);
        let nodes = values
            .iter()
            .enumerate()
            .map(|(k, &value)| TreeNode {
                value,
                left: child(2 * k + 1),
                right: child(2 * k + 2),
            })
            .collect();
        BinaryTree {
            nodes,
            root: (n > 0).then_some(0),
        }
    }

    /// The seven-node tree 1..=7
    ///
    /// ```text
    ///         1
    ///      /     \
    ///     2       3
    ///    / \     / \
    ///   4   5   6   7
    /// ```
    pub fn sample() -> Self {
        BinaryTree::complete(&[1, 2, 3, 4, 5, 6, 7])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every link points inside the arena and no node is reachable twice
    pub fn is_well_formed(&self) -> bool {
        let Some(root) = self.root else {
            return true;
        };
        let mut seen = FxHashSet::default();
        let mut pending = vec![root];
        while let Some(k) = pending.pop() {
            let Some(node) = self.nodes.get(k) else {
                return false;
            };
            if !seen.insert(k) {
                return false;
            }
            pending.extend(node.left);
            pending.extend(node.right);
        }
        true
    }
}

/// Where the visit happens relative to the children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    Pre,
    In,
    Post,
}

impl TraversalOrder {
    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::Pre => "Preorder",
            TraversalOrder::In => "Inorder",
            TraversalOrder::Post => "Postorder",
        }
    }

    fn listing(self) -> &'static Listing {
        match self {
            TraversalOrder::Pre => &PREORDER,
            TraversalOrder::In => &INORDER,
            TraversalOrder::Post => &POSTORDER,
        }
    }

    /// Code lines of (left descent, visit, right descent)
    fn lines(self) -> (usize, usize, usize) {
        match self {
            TraversalOrder::Pre => (1, 0, 2),
            TraversalOrder::In => (0, 1, 2),
            TraversalOrder::Post => (0, 2, 1),
        }
    }
}

pub const PREORDER: Listing = Listing {
    title: "Preorder Traversal",
    lines: &[
        "visit(node)",
        "preorder(node.left)",
        "preorder(node.right)",
        "return",
    ],
    shape: Shape::Tree,
};

pub const INORDER: Listing = Listing {
    title: "Inorder Traversal",
    lines: &[
        "inorder(node.left)",
        "visit(node)",
        "inorder(node.right)",
        "return",
    ],
    shape: Shape::Tree,
};

pub const POSTORDER: Listing = Listing {
    title: "Postorder Traversal",
    lines: &[
        "postorder(node.left)",
        "postorder(node.right)",
        "visit(node)",
        "return",
    ],
    shape: Shape::Tree,
};

struct Walk<'a> {
    tree: &'a BinaryTree,
    order: TraversalOrder,
    nodes: ContainerId,
    visited: ContainerId,
}

impl Walk<'_> {
    fn node(&self, b: &mut TraceBuilder, k: usize) {
        let Some(&TreeNode { left, right, .. }) = self.tree.nodes.get(k) else {
            return;
        };
        let (left_line, _, right_line) = self.order.lines();

        if self.order == TraversalOrder::Pre {
            self.visit(b, k);
        }
        if let Some(l) = left {
            self.descend(b, k, l, left_line, "left");
            self.node(b, l);
        }
        if self.order == TraversalOrder::In {
            self.visit(b, k);
        }
        if let Some(r) = right {
            self.descend(b, k, r, right_line, "right");
            self.node(b, r);
        }
        if self.order == TraversalOrder::Post {
            self.visit(b, k);
        }
    }

    fn visit(&self, b: &mut TraceBuilder, k: usize) {
        let value = self.tree.nodes[k].value;
        b.cells_mut(self.visited).push(Value::Int(value));
        let last = b.cells(self.visited).len() - 1;
        b.clear_pointers();
        b.point(Role::Current, self.nodes, k);
        b.point(Role::Output, self.visited, last);
        b.emit(self.order.lines().1, format!("Visit {}", value));
    }

    fn descend(&self, b: &mut TraceBuilder, from: usize, to: usize, line: usize, side: &str) {
        b.clear_pointers();
        b.point(Role::Current, self.nodes, from);
        b.point(Role::Next, self.nodes, to);
        b.emit(
            line,
            format!(
                "Go {} from {} to {}",
                side, self.tree.nodes[from].value, self.tree.nodes[to].value
            ),
        );
    }
}

pub fn traverse_tree(tree: &BinaryTree, order: TraversalOrder) -> Trace {
    let mut b = TraceBuilder::new(order.listing());
    let nodes = b.container(
        "nodes",
        tree.nodes.iter().map(|n| Value::Int(n.value)).collect(),
    );
    let visited = b.container("visited", Vec::new());

    if !tree.is_well_formed() {
        return b.reject("Tree links must stay inside the tree and never share a node");
    }

    if let Some(root) = tree.root {
        b.point(Role::Current, nodes, root);
        b.emit_unlined(format!("Start at root {}", tree.nodes[root].value));

        let walk = Walk {
            tree,
            order,
            nodes,
            visited,
        };
        walk.node(&mut b, root);
    }

    let order_text = b
        .cells(visited)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    b.clear_pointers();
    b.finish(
        Outcome::Completed,
        Some(3),
        format!("{} Completed: {}", order.name(), order_text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::value::to_ints;

    fn visit_order(tree: &BinaryTree, order: TraversalOrder) -> Vec<i64> {
        traverse_tree(tree, order)
            .last()
            .and_then(|s| s.cells("visited"))
            .map(to_ints)
            .unwrap_or_default()
    }

    #[test]
    fn test_sample_orders() {
        let tree = BinaryTree::sample();
        assert_eq!(visit_order(&tree, TraversalOrder::Pre), vec![1, 2, 4, 5, 3, 6, 7]);
        assert_eq!(visit_order(&tree, TraversalOrder::In), vec![4, 2, 5, 1, 6, 3, 7]);
        assert_eq!(visit_order(&tree, TraversalOrder::Post), vec![4, 5, 2, 6, 7, 3, 1]);
    }

    #[test]
    fn test_step_count() {
        // start + 7 visits + 6 descents + terminal
        let trace = traverse_tree(&BinaryTree::sample(), TraversalOrder::In);
        assert_eq!(trace.len(), 15);
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_first_step_has_nothing_visited() {
        let single = BinaryTree::complete(&[8]);
        for tree in [BinaryTree::sample(), single] {
            for order in [TraversalOrder::Pre, TraversalOrder::In, TraversalOrder::Post] {
                let trace = traverse_tree(&tree, order);
                let first = trace.first().expect("trace is never empty");
                assert_eq!(first.cells("visited").map(<[_]>::len), Some(0), "{:?}", order);
                assert_eq!(first.pointer(Role::Current), tree.root);
                assert!(trace.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_empty_tree() {
        let trace = traverse_tree(&BinaryTree::default(), TraversalOrder::Pre);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.outcome(), Some(Outcome::Completed));
    }

    #[test]
    fn test_cyclic_tree_rejected() {
        let tree = BinaryTree {
            nodes: vec![
                TreeNode { value: 1, left: Some(1), right: None },
                TreeNode { value: 2, left: Some(0), right: None },
            ],
            root: Some(0),
        };
        assert!(!tree.is_well_formed());
        assert_eq!(
            traverse_tree(&tree, TraversalOrder::Post).outcome(),
            Some(Outcome::InvalidArgument)
        );
    }
}
