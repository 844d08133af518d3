//! Stack push/pop and queue enqueue/dequeue
//!
//! A successful operation is always three steps: the bounds check, the index
//! update and the write (or removal), the last one terminal. Hitting a bound
//! produces a single `Overflow`/`Underflow` step instead. `capacity` of `None`
//! means unbounded.

use crate::trace::value::ints;
use crate::trace::{ContainerId, Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};

pub const STACK_PUSH: Listing = Listing {
    title: "Stack Push",
    lines: &[
        "if top == capacity - 1: overflow",
        "top = top + 1",
        "stack[top] = value",
        "return",
    ],
    shape: Shape::Stack,
};

pub const STACK_POP: Listing = Listing {
    title: "Stack Pop",
    lines: &[
        "if top == -1: underflow",
        "val = stack[top]",
        "top = top - 1",
        "return val",
    ],
    shape: Shape::Stack,
};

pub const QUEUE_ENQUEUE: Listing = Listing {
    title: "Queue Enqueue",
    lines: &[
        "if queue is full: overflow",
        "rear = rear + 1",
        "queue[rear] = value",
        "return",
    ],
    shape: Shape::Queue,
};

pub const QUEUE_DEQUEUE: Listing = Listing {
    title: "Queue Dequeue",
    lines: &[
        "if queue is empty: underflow",
        "val = queue[front]",
        "front = front + 1",
        "return val",
    ],
    shape: Shape::Queue,
};

fn is_full(len: usize, capacity: Option<usize>) -> bool {
    capacity.is_some_and(|c| len >= c)
}

/// Point `front`/`rear` at the ends of a non-empty queue
fn point_ends(b: &mut TraceBuilder, queue: ContainerId) {
    let n = b.cells(queue).len();
    b.point_opt(Role::Front, queue, (n > 0).then_some(0));
    b.point_opt(Role::Rear, queue, n.checked_sub(1));
}

pub fn stack_push(stack: &[i64], capacity: Option<usize>, value: i64) -> Trace {
    let mut b = TraceBuilder::new(&STACK_PUSH);
    let s = b.container("stack", ints(stack));
    let n = stack.len();
    b.point_opt(Role::Top, s, n.checked_sub(1));

    if is_full(n, capacity) {
        return b.finish(Outcome::Overflow, Some(0), "Stack Overflow! Cannot push.");
    }

    b.emit(0, format!("Stack has room (size {}), pushing {}", n, value));

    b.cells_mut(s).push(Value::Empty);
    b.point(Role::Top, s, n);
    b.emit(1, format!("top = {}", n));

    b.set(s, n, Value::Int(value));
    b.finish(Outcome::Completed, Some(2), format!("Pushed {} onto the stack", value))
}

pub fn stack_pop(stack: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&STACK_POP);
    let s = b.container("stack", ints(stack));
    let Some(top) = stack.len().checked_sub(1) else {
        return b.finish(Outcome::Underflow, Some(0), "Stack Underflow! Nothing to pop.");
    };

    b.point(Role::Top, s, top);
    b.emit(0, "Stack is not empty");

    let val = b.get(s, top);
    b.emit(1, format!("val = stack[{}] = {}", top, val));

    b.cells_mut(s).truncate(top);
    b.point_opt(Role::Top, s, top.checked_sub(1));
    b.finish(Outcome::Completed, Some(2), format!("Popped {}", val))
}

pub fn queue_enqueue(queue: &[i64], capacity: Option<usize>, value: i64) -> Trace {
    let mut b = TraceBuilder::new(&QUEUE_ENQUEUE);
    let q = b.container("queue", ints(queue));
    let n = queue.len();
    point_ends(&mut b, q);

    if is_full(n, capacity) {
        return b.finish(Outcome::Overflow, Some(0), "Overflow! Queue is full.");
    }

    b.emit(0, format!("Queue has room (size {}), enqueuing {}", n, value));

    b.cells_mut(q).push(Value::Empty);
    b.point(Role::Front, q, 0);
    b.point(Role::Rear, q, n);
    b.emit(1, format!("rear = {}", n));

    b.set(q, n, Value::Int(value));
    b.finish(Outcome::Completed, Some(2), format!("Enqueued {}.", value))
}

pub fn queue_dequeue(queue: &[i64]) -> Trace {
    let mut b = TraceBuilder::new(&QUEUE_DEQUEUE);
    let q = b.container("queue", ints(queue));
    point_ends(&mut b, q);

    if queue.is_empty() {
        return b.finish(Outcome::Underflow, Some(0), "Underflow! Queue is empty.");
    }

    b.emit(0, "Queue is not empty");

    let val = b.get(q, 0);
    b.unpoint(Role::Rear);
    b.emit(1, format!("val = queue[front] = {}", val));

    b.cells_mut(q).remove(0);
    point_ends(&mut b, q);
    b.finish(Outcome::Completed, Some(2), format!("Dequeued {}.", val))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::value::to_ints;

    fn final_cells(trace: &Trace, name: &str) -> Vec<i64> {
        trace
            .last()
            .and_then(|s| s.cells(name))
            .map(to_ints)
            .unwrap_or_default()
    }

    #[test]
    fn test_push_three_steps() {
        let trace = stack_push(&[1, 2], Some(5), 3);
        assert_eq!(trace.len(), 3);
        assert_eq!(final_cells(&trace, "stack"), vec![1, 2, 3]);
        assert_eq!(trace.last().and_then(|s| s.pointer(Role::Top)), Some(2));
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_push_index_update_reserves_slot() {
        let trace = stack_push(&[], None, 7);
        let update = trace
            .get(1)
            .map(|s| (s.pointer(Role::Top), s.cells("stack").map(<[Value]>::len)));
        assert_eq!(update, Some((Some(0), Some(1))));
    }

    #[test]
    fn test_push_overflow() {
        let trace = stack_push(&[1, 2, 3], Some(3), 4);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.outcome(), Some(Outcome::Overflow));
    }

    #[test]
    fn test_pop_and_underflow() {
        let trace = stack_pop(&[4, 5]);
        assert_eq!(trace.len(), 3);
        assert_eq!(final_cells(&trace, "stack"), vec![4]);
        assert_eq!(stack_pop(&[]).outcome(), Some(Outcome::Underflow));
        assert_eq!(stack_pop(&[]).len(), 1);
    }

    #[test]
    fn test_enqueue_overflow() {
        let trace = queue_enqueue(&[5, 10, 15], Some(3), 20);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.outcome(), Some(Outcome::Overflow));
    }

    #[test]
    fn test_enqueue_and_dequeue() {
        let trace = queue_enqueue(&[5, 10], None, 20);
        assert_eq!(final_cells(&trace, "queue"), vec![5, 10, 20]);
        assert_eq!(trace.last().and_then(|s| s.pointer(Role::Rear)), Some(2));

        let trace = queue_dequeue(&[5, 10, 15]);
        assert_eq!(trace.len(), 3);
        assert_eq!(final_cells(&trace, "queue"), vec![10, 15]);
        assert!(trace.validate().is_ok());

        let last = queue_dequeue(&[9]);
        assert!(last.validate().is_ok());
        assert_eq!(last.last().and_then(|s| s.pointer(Role::Front)), None);
    }
}
