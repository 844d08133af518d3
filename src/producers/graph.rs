//! Breadth- and depth-first traversal of an adjacency-list graph
//!
//! Three containers are shown: `nodes` (node ids), `frontier` (the queue or
//! stack contents, front/top at the respective end) and `visited` (visit
//! order). A node counts as visited when it leaves the frontier, not when it
//! enters it, so the frontier may briefly hold duplicates; a duplicate popped
//! after its first visit is skipped with a step of its own.

use crate::trace::{Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Undirected graph as adjacency lists, nodes are `0..adjacency.len()`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    pub adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(adjacency: Vec<Vec<usize>>) -> Self {
        Graph { adjacency }
    }

    /// The seven-node demo graph
    pub fn sample() -> Self {
        Graph::new(vec![
            vec![1, 2, 3],
            vec![0, 2, 4],
            vec![0, 1, 5],
            vec![0, 5, 6],
            vec![1, 5],
            vec![2, 3, 4, 6],
            vec![3, 5],
        ])
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.adjacency.len()
    }

    /// First neighbour entry that names a node outside the graph
    fn dangling_edge(&self) -> Option<(usize, usize)> {
        self.adjacency.iter().enumerate().find_map(|(from, tos)| {
            tos.iter()
                .find(|&&to| !self.contains(to))
                .map(|&to| (from, to))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
        }
    }

    fn listing(self) -> &'static Listing {
        match self {
            Strategy::Bfs => &BFS,
            Strategy::Dfs => &DFS,
        }
    }
}

pub const BFS: Listing = Listing {
    title: "Breadth-First Search",
    lines: &[
        "queue = [start]",
        "while queue not empty: node = queue.dequeue()",
        "  if node is visited: continue",
        "  mark node visited",
        "  if node == target: return node",
        "  for nb in adj[node]: if nb not visited: queue.enqueue(nb)",
        "return NOT_FOUND",
    ],
    shape: Shape::Graph,
};

pub const DFS: Listing = Listing {
    title: "Depth-First Search",
    lines: &[
        "stack = [start]",
        "while stack not empty: node = stack.pop()",
        "  if node is visited: continue",
        "  mark node visited",
        "  if node == target: return node",
        "  for nb in reverse(adj[node]): if nb not visited: stack.push(nb)",
        "return NOT_FOUND",
    ],
    shape: Shape::Graph,
};

/// Traverse from `start`; with a `target` the walk stops as soon as it is reached
pub fn traverse_graph(
    graph: &Graph,
    start: usize,
    strategy: Strategy,
    target: Option<usize>,
) -> Trace {
    let mut b = TraceBuilder::new(strategy.listing());
    let nodes = b.container(
        "nodes",
        (0..graph.len()).map(|k| Value::Int(k as i64)).collect(),
    );
    let frontier = b.container("frontier", Vec::new());
    let visited_c = b.container("visited", Vec::new());

    if !graph.contains(start) {
        return b.reject(format!("Unknown start node {}", start));
    }
    if let Some(t) = target.filter(|&t| !graph.contains(t)) {
        return b.reject(format!("Unknown target node {}", t));
    }
    if let Some((from, to)) = graph.dangling_edge() {
        return b.reject(format!("Edge {} -> {} leaves the graph", from, to));
    }

    let kind = match strategy {
        Strategy::Bfs => "queue",
        Strategy::Dfs => "stack",
    };
    let mut pending: VecDeque<usize> = VecDeque::from([start]);
    let mut visited: FxHashSet<usize> = FxHashSet::default();

    b.replace(frontier, vec![Value::Int(start as i64)]);
    b.point(Role::Current, nodes, start);
    b.emit(0, format!("{} = [{}]", kind, start));

    loop {
        let next = match strategy {
            Strategy::Bfs => pending.pop_front(),
            Strategy::Dfs => pending.pop_back(),
        };
        let Some(node) = next else {
            break;
        };
        b.replace(frontier, pending.iter().map(|&k| Value::Int(k as i64)).collect());
        b.clear_pointers();
        b.point(Role::Current, nodes, node);
        b.emit(1, format!("Took {} from the {}", node, kind));

        if visited.contains(&node) {
            b.emit(2, format!("{} was already visited, skipping", node));
            continue;
        }

        visited.insert(node);
        b.cells_mut(visited_c).push(Value::Int(node as i64));
        let last = b.cells(visited_c).len() - 1;
        b.point(Role::Output, visited_c, last);

        if target == Some(node) {
            return b.finish(
                Outcome::Found(node),
                Some(4),
                format!("Found node {} via {}!", node, strategy.name()),
            );
        }
        b.emit(3, format!("Visited {}", node));

        let neighbours: Vec<usize> = match strategy {
            Strategy::Bfs => graph.adjacency[node].clone(),
            Strategy::Dfs => graph.adjacency[node].iter().rev().copied().collect(),
        };
        for nb in neighbours {
            if visited.contains(&nb) {
                continue;
            }
            pending.push_back(nb);
            b.cells_mut(frontier).push(Value::Int(nb as i64));
            b.point(Role::Next, nodes, nb);
            b.emit(5, format!("Added neighbour {} of {} to the {}", nb, node, kind));
        }
    }

    b.clear_pointers();
    match target {
        Some(t) => b.finish(
            Outcome::NotFound,
            Some(6),
            format!("Node {} is not reachable from {}.", t, start),
        ),
        None => b.finish(
            Outcome::Completed,
            None,
            format!("{} Completed.", strategy.name()),
        ),
    }
}
