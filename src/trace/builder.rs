//! Append-only trace construction
//!
//! [`TraceBuilder`] owns the working copy of the data structure a producer
//! operates on. Producers mutate that copy through the builder and call
//! [`TraceBuilder::emit`] whenever the visible state should become a step;
//! each call freezes a deep copy, so recursive producers (merge sort, quick
//! sort, tree traversal) just share one builder and append in call order.

use super::{
    Container, ContainerId, Listing, Outcome, Pointer, Pointers, RangeNode, Role, Step, Trace,
    Value,
};

/// Builds a [`Trace`] one frozen step at a time
#[derive(Debug)]
pub struct TraceBuilder {
    listing: &'static Listing,
    containers: Vec<Container>,
    pointers: Pointers,
    ranges: Vec<RangeNode>,
    steps: Vec<Step>,
}

impl TraceBuilder {
    pub fn new(listing: &'static Listing) -> Self {
        TraceBuilder {
            listing,
            containers: Vec::new(),
            pointers: Pointers::default(),
            ranges: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Register a container with its initial cells
    pub fn container(&mut self, name: &'static str, cells: Vec<Value>) -> ContainerId {
        self.containers.push(Container { name, cells });
        ContainerId(self.containers.len() - 1)
    }

    pub fn cells(&self, id: ContainerId) -> &[Value] {
        &self.containers[id.0].cells
    }

    pub fn cells_mut(&mut self, id: ContainerId) -> &mut Vec<Value> {
        &mut self.containers[id.0].cells
    }

    /// Read one cell, `Value::Empty` when out of range
    pub fn get(&self, id: ContainerId, index: usize) -> Value {
        self.cells(id).get(index).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: ContainerId, index: usize, value: Value) {
        if let Some(cell) = self.cells_mut(id).get_mut(index) {
            *cell = value;
        }
    }

    pub fn swap(&mut self, id: ContainerId, a: usize, b: usize) {
        self.cells_mut(id).swap(a, b);
    }

    /// Replace the whole content of a container
    pub fn replace(&mut self, id: ContainerId, cells: Vec<Value>) {
        self.containers[id.0].cells = cells;
    }

    /// Point a role at an index of a container
    pub fn point(&mut self, role: Role, container: ContainerId, index: usize) {
        let _ = self.pointers.insert(role, Pointer { container, index });
    }

    /// Set or clear a role from an optional index
    pub fn point_opt(&mut self, role: Role, container: ContainerId, index: Option<usize>) {
        match index {
            Some(index) => self.point(role, container, index),
            None => self.unpoint(role),
        }
    }

    pub fn unpoint(&mut self, role: Role) {
        let _ = self.pointers.remove(&role);
    }

    pub fn clear_pointers(&mut self) {
        self.pointers.clear();
    }

    pub fn ranges(&self) -> &[RangeNode] {
        &self.ranges
    }

    pub fn ranges_mut(&mut self) -> &mut Vec<RangeNode> {
        &mut self.ranges
    }

    /// Freeze the current state as a step highlighting a pseudocode line
    pub fn emit(&mut self, line: usize, message: impl Into<String>) {
        self.push(Some(line), message.into(), None);
    }

    /// Freeze the current state as a step with no highlighted line
    pub fn emit_unlined(&mut self, message: impl Into<String>) {
        self.push(None, message.into(), None);
    }

    /// Emit the terminal step and hand back the finished trace
    pub fn finish(
        mut self,
        outcome: Outcome,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Trace {
        self.push(line, message.into(), Some(outcome));
        log::trace!(
            "{}: produced {} steps ({})",
            self.listing.title,
            self.steps.len(),
            outcome
        );
        Trace::new(self.listing, self.steps)
    }

    /// Terminate with `InvalidArgument` and no pointers
    pub fn reject(mut self, message: impl Into<String>) -> Trace {
        let message = message.into();
        log::debug!("{}: rejected operands: {}", self.listing.title, message);
        self.clear_pointers();
        self.finish(Outcome::InvalidArgument, None, message)
    }

    fn push(&mut self, code_line: Option<usize>, message: String, outcome: Option<Outcome>) {
        self.steps.push(Step {
            containers: self.containers.clone(),
            pointers: self.pointers.clone(),
            ranges: self.ranges.clone(),
            code_line,
            message,
            outcome,
        });
    }
}
