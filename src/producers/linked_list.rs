//! Search, insert and delete over the four linked-list variants
//!
//! The list is laid out as one `list` container in link order starting at the
//! head; links are implied by position. Circular variants compute successors
//! modulo the length, doubly-linked variants additionally point `left` at the
//! predecessor of the current node.

use crate::trace::value::ints;
use crate::trace::{ContainerId, Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};

/// Which linking scheme the list uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Singly,
    Doubly,
    Circular,
    DoublyCircular,
}

impl ListKind {
    pub const ALL: [ListKind; 4] = [
        ListKind::Singly,
        ListKind::Doubly,
        ListKind::Circular,
        ListKind::DoublyCircular,
    ];

    pub fn is_doubly(self) -> bool {
        matches!(self, ListKind::Doubly | ListKind::DoublyCircular)
    }

    pub fn is_circular(self) -> bool {
        matches!(self, ListKind::Circular | ListKind::DoublyCircular)
    }

    pub fn name(self) -> &'static str {
        match self {
            ListKind::Singly => "Singly Linked List",
            ListKind::Doubly => "Doubly Linked List",
            ListKind::Circular => "Circular Linked List",
            ListKind::DoublyCircular => "Doubly Circular Linked List",
        }
    }

    fn listing(self, op: ListOp) -> &'static Listing {
        use ListKind::*;
        use ListOp::*;
        match (self, op) {
            (Singly, Search) => &SINGLY_SEARCH,
            (Singly, Insert) => &SINGLY_INSERT,
            (Singly, Delete) => &SINGLY_DELETE,
            (Doubly, Search) => &DOUBLY_SEARCH,
            (Doubly, Insert) => &DOUBLY_INSERT,
            (Doubly, Delete) => &DOUBLY_DELETE,
            (Circular, Search) => &CIRCULAR_SEARCH,
            (Circular, Insert) => &CIRCULAR_INSERT,
            (Circular, Delete) => &CIRCULAR_DELETE,
            (DoublyCircular, Search) => &DOUBLY_CIRCULAR_SEARCH,
            (DoublyCircular, Insert) => &DOUBLY_CIRCULAR_INSERT,
            (DoublyCircular, Delete) => &DOUBLY_CIRCULAR_DELETE,
        }
    }

    /// Successor of `i` in a list of `len` nodes
    fn next(self, i: usize, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else if self.is_circular() {
            Some((i + 1) % len)
        } else {
            (i + 1 < len).then_some(i + 1)
        }
    }

    /// Predecessor of `i`, only tracked by doubly-linked kinds
    fn prev(self, i: usize, len: usize) -> Option<usize> {
        if !self.is_doubly() || len == 0 {
            None
        } else if self.is_circular() {
            Some((i + len - 1) % len)
        } else {
            i.checked_sub(1)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ListOp {
    Search,
    Insert,
    Delete,
}

const SEARCH_LINES: &[&str] = &[
    "node = head; i = 0",
    "while node != null:",
    "  if node.value == target: return i",
    "  node = node.next; i = i + 1",
    "return NOT_FOUND",
];

const CIRCULAR_SEARCH_LINES: &[&str] = &[
    "node = head; i = 0",
    "repeat n times:",
    "  if node.value == target: return i",
    "  node = node.next; i = (i + 1) % n",
    "return NOT_FOUND",
];

const INSERT_LINES: &[&str] = &[
    "newNode = Node(value)",
    "if position == 0: newNode.next = head; head = newNode",
    "prev = head; repeat position-1 times: prev = prev.next",
    "newNode.next = prev.next",
    "prev.next = newNode",
];

const DOUBLY_INSERT_LINES: &[&str] = &[
    "newNode = Node(value)",
    "if position == 0: newNode.next = head; head.prev = newNode; head = newNode",
    "prev = head; repeat position-1 times: prev = prev.next",
    "newNode.next = prev.next; newNode.prev = prev",
    "prev.next.prev = newNode; prev.next = newNode",
];

const DELETE_LINES: &[&str] = &[
    "if position < 0 or position >= n: invalid",
    "if position == 0: head = head.next",
    "prev = head; repeat position-1 times: prev = prev.next",
    "target = prev.next",
    "prev.next = target.next",
];

const DOUBLY_DELETE_LINES: &[&str] = &[
    "if position < 0 or position >= n: invalid",
    "if position == 0: head = head.next; head.prev = null",
    "prev = head; repeat position-1 times: prev = prev.next",
    "target = prev.next",
    "prev.next = target.next; target.next.prev = prev",
];

macro_rules! list_listing {
    ($name:ident, $title:literal, $lines:expr, $doubly:literal, $circular:literal $(,)?) => {
        const $name: Listing = Listing {
            title: $title,
            lines: $lines,
            shape: Shape::LinkedList {
                doubly: $doubly,
                circular: $circular,
            },
        };
    };
}

list_listing!(SINGLY_SEARCH, "Singly Linked List Search", SEARCH_LINES, false, false);
list_listing!(SINGLY_INSERT, "Singly Linked List Insert", INSERT_LINES, false, false);
list_listing!(SINGLY_DELETE, "Singly Linked List Delete", DELETE_LINES, false, false);
list_listing!(DOUBLY_SEARCH, "Doubly Linked List Search", SEARCH_LINES, true, false);
list_listing!(DOUBLY_INSERT, "Doubly Linked List Insert", DOUBLY_INSERT_LINES, true, false);
list_listing!(DOUBLY_DELETE, "Doubly Linked List Delete", DOUBLY_DELETE_LINES, true, false);
list_listing!(CIRCULAR_SEARCH, "Circular Linked List Search", CIRCULAR_SEARCH_LINES, false, true);
list_listing!(CIRCULAR_INSERT, "Circular Linked List Insert", INSERT_LINES, false, true);
list_listing!(CIRCULAR_DELETE, "Circular Linked List Delete", DELETE_LINES, false, true);
list_listing!(
    DOUBLY_CIRCULAR_SEARCH,
    "Doubly Circular Linked List Search",
    CIRCULAR_SEARCH_LINES,
    true,
    true,
);
list_listing!(
    DOUBLY_CIRCULAR_INSERT,
    "Doubly Circular Linked List Insert",
    DOUBLY_INSERT_LINES,
    true,
    true,
);
list_listing!(
    DOUBLY_CIRCULAR_DELETE,
    "Doubly Circular Linked List Delete",
    DOUBLY_DELETE_LINES,
    true,
    true,
);

/// Put `current` on node `i` together with its neighbours
fn focus(b: &mut TraceBuilder, kind: ListKind, list: ContainerId, i: usize) {
    let len = b.cells(list).len();
    b.point(Role::Current, list, i);
    b.point_opt(Role::Next, list, kind.next(i, len));
    b.point_opt(Role::Left, list, kind.prev(i, len));
}

/// Walk from the head one node per step, stopping on the first match
pub fn list_search(kind: ListKind, list: &[i64], target: i64) -> Trace {
    let mut b = TraceBuilder::new(kind.listing(ListOp::Search));
    let nodes = b.container("list", ints(list));
    let n = list.len();

    b.emit(0, format!("Searching the {} for {}", kind.name().to_lowercase(), target));

    let mut i = 0;
    for _ in 0..n {
        focus(&mut b, kind, nodes, i);
        if list[i] == target {
            return b.finish(Outcome::Found(i), Some(2), format!("Found {} at node {}!", target, i));
        }
        b.emit(3, format!("Node {} holds {}, moving on", i, list[i]));

        match kind.next(i, n) {
            // circular lists come back to the head, the visit count stops them
            Some(next) => i = next,
            None => break,
        }
    }

    b.clear_pointers();
    b.finish(Outcome::NotFound, Some(4), "Value NOT found.")
}

/// Insert `value` so that it ends up at `position`
pub fn list_insert(kind: ListKind, list: &[i64], position: usize, value: i64) -> Trace {
    let mut b = TraceBuilder::new(kind.listing(ListOp::Insert));
    let nodes = b.container("list", ints(list));
    let n = list.len();

    if position > n {
        return b.reject(format!("Invalid position {} (list has {} nodes).", position, n));
    }

    b.emit(0, format!("Created node with value {}", value));

    if position == 0 {
        b.cells_mut(nodes).insert(0, Value::Int(value));
        focus(&mut b, kind, nodes, 0);
        let message = if kind.is_circular() {
            format!("{} is the new head; tail now links to it", value)
        } else {
            format!("{} is the new head", value)
        };
        return b.finish(Outcome::Completed, Some(1), message);
    }

    let prev = position - 1;
    for i in 0..=prev {
        focus(&mut b, kind, nodes, i);
        b.emit(2, format!("prev = node {} ({})", i, list[i]));
    }

    b.point(Role::Current, nodes, prev);
    b.unpoint(Role::Left);
    let successor = kind.next(prev, n);
    b.point_opt(Role::Next, nodes, successor);
    b.emit(
        3,
        match successor {
            Some(s) => format!("newNode.next = node {} ({})", s, list[s]),
            None => "newNode.next = null".to_string(),
        },
    );

    b.cells_mut(nodes).insert(position, Value::Int(value));
    b.point(Role::Current, nodes, prev);
    b.point(Role::Next, nodes, position);
    b.finish(
        Outcome::Completed,
        Some(4),
        format!("Inserted {} at position {}.", value, position),
    )
}

/// Unlink the node at `position`
pub fn list_delete(kind: ListKind, list: &[i64], position: usize) -> Trace {
    let mut b = TraceBuilder::new(kind.listing(ListOp::Delete));
    let nodes = b.container("list", ints(list));
    let n = list.len();

    if position >= n {
        return b.reject(format!("Invalid position {} (list has {} nodes).", position, n));
    }

    b.emit(0, format!("Position {} is within 0..{}", position, n));

    if position == 0 {
        b.point(Role::Current, nodes, 0);
        b.emit(1, format!("Removing head {}", list[0]));

        b.cells_mut(nodes).remove(0);
        b.clear_pointers();
        if n > 1 {
            focus(&mut b, kind, nodes, 0);
        }
        return b.finish(Outcome::Completed, Some(1), format!("Deleted head {}.", list[0]));
    }

    let prev = position - 1;
    for i in 0..=prev {
        focus(&mut b, kind, nodes, i);
        b.emit(2, format!("prev = node {} ({})", i, list[i]));
    }

    b.point(Role::Current, nodes, prev);
    b.unpoint(Role::Left);
    b.point(Role::Next, nodes, position);
    b.emit(3, format!("target = node {} ({})", position, list[position]));

    b.cells_mut(nodes).remove(position);
    let successor = kind.next(prev, n - 1);
    b.point_opt(Role::Next, nodes, successor);
    b.finish(
        Outcome::Completed,
        Some(4),
        format!("Deleted node at position {}.", position),
    )
}
