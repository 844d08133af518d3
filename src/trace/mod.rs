//! Step and trace model
//!
//! This module provides the data every producer emits and the scheduler plays:
//! - [`value`]: container cell representation
//! - [`builder`]: append-only [`TraceBuilder`] used by all producers
//! - [`errors`]: [`TraceError`] for invariant violations
//!
//! # Model
//!
//! A [`Step`] is an immutable snapshot of one moment of an algorithm: the named
//! containers, the pointers into them, the highlighted pseudocode line and a
//! status message. A [`Trace`] is the complete ordered list of steps for one
//! operation, computed before playback starts. Only the last step of a trace
//! carries an [`Outcome`].
//!
//! Every step owns deep copies of its containers, so nothing a producer does
//! after emitting a step can change what that step shows.

pub mod builder;
pub mod errors;
pub mod value;

pub use builder::TraceBuilder;
pub use errors::TraceError;
pub use value::Value;

use rustc_hash::FxHashMap;
use std::fmt;

/// Logical role of a highlighted index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Current,
    I,
    J,
    Low,
    High,
    Mid,
    Pivot,
    Left,
    Right,
    Min,
    Key,
    Digit,
    Count,
    Top,
    Front,
    Rear,
    Next,
    Largest,
    Output,
}

impl Role {
    /// Short label shown under the highlighted cell
    pub fn label(self) -> &'static str {
        match self {
            Role::Current => "cur",
            Role::I => "i",
            Role::J => "j",
            Role::Low => "lo",
            Role::High => "hi",
            Role::Mid => "mid",
            Role::Pivot => "pivot",
            Role::Left => "L",
            Role::Right => "R",
            Role::Min => "min",
            Role::Key => "key",
            Role::Digit => "digit",
            Role::Count => "cnt",
            Role::Top => "top",
            Role::Front => "front",
            Role::Rear => "rear",
            Role::Next => "next",
            Role::Largest => "max",
            Role::Output => "out",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle to a container inside a step, returned by [`TraceBuilder::container`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub usize);

/// A highlighted index into one container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pointer {
    pub container: ContainerId,
    pub index: usize,
}

/// Pointer map of a step. A role missing from the map is a null pointer.
pub type Pointers = FxHashMap<Role, Pointer>;

/// A named sequence of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub name: &'static str,
    pub cells: Vec<Value>,
}

/// Lifecycle of a merge-sort split node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeStatus {
    Pending,
    Active,
    Leaf,
    Merging,
    Merged,
}

/// One node of the merge-sort split tree, keyed by its `[low, high]` range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeNode {
    pub low: usize,
    pub high: usize,
    pub depth: usize,
    pub values: Vec<Value>,
    pub status: RangeStatus,
}

/// Result reported by the terminal step of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Found(usize),
    NotFound,
    Completed,
    Overflow,
    Underflow,
    InvalidArgument,
}

impl Outcome {
    /// Whether the operation failed (as opposed to finishing normally)
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Outcome::Overflow | Outcome::Underflow | Outcome::InvalidArgument
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(index) => write!(f, "found at {}", index),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::Completed => write!(f, "completed"),
            Outcome::Overflow => write!(f, "overflow"),
            Outcome::Underflow => write!(f, "underflow"),
            Outcome::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

/// Snapshot of an algorithm at one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub containers: Vec<Container>,
    pub pointers: Pointers,
    pub ranges: Vec<RangeNode>,
    pub code_line: Option<usize>,
    pub message: String,
    pub outcome: Option<Outcome>,
}

impl Step {
    /// An empty display step showing only a message
    pub fn idle(message: impl Into<String>) -> Self {
        Step {
            message: message.into(),
            ..Step::default()
        }
    }

    /// True only on the last step of a trace
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Look up a container by name
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name == name)
    }

    /// Cells of a named container
    pub fn cells(&self, name: &str) -> Option<&[Value]> {
        self.container(name).map(|c| c.cells.as_slice())
    }

    /// Index held by a role, if the pointer is set
    pub fn pointer(&self, role: Role) -> Option<usize> {
        self.pointers.get(&role).map(|p| p.index)
    }

    /// Roles pointing into the given container, sorted for stable rendering
    pub fn pointers_into(&self, container: ContainerId) -> Vec<(Role, usize)> {
        let mut roles: Vec<(Role, usize)> = self
            .pointers
            .iter()
            .filter(|(_, p)| p.container == container)
            .map(|(role, p)| (*role, p.index))
            .collect();
        roles.sort();
        roles
    }

    /// Same snapshot with pointers and the code highlight removed
    pub fn without_highlights(&self) -> Self {
        Step {
            containers: self.containers.clone(),
            pointers: Pointers::default(),
            ranges: self.ranges.clone(),
            code_line: None,
            message: self.message.clone(),
            outcome: None,
        }
    }
}

/// How the view should lay out the containers of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Row of boxes (arrays, strings, searches)
    Boxes,
    /// Sorting: boxes plus bar heights
    Bars,
    /// Vertical stack, top at the end
    Stack,
    /// Horizontal queue, front at index 0
    Queue,
    /// Nodes linked left to right
    LinkedList { doubly: bool, circular: bool },
    /// Binary tree stored in level order
    Tree,
    /// Adjacency-list graph
    Graph,
}

/// The fixed pseudocode listing of a producer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub shape: Shape,
}

/// Complete, pre-computed sequence of steps for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    listing: &'static Listing,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(listing: &'static Listing, steps: Vec<Step>) -> Self {
        Trace { listing, steps }
    }

    pub fn listing(&self) -> &'static Listing {
        self.listing
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for traces built by producers
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// The terminal step
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Outcome carried by the terminal step
    pub fn outcome(&self) -> Option<Outcome> {
        self.steps.last().and_then(|s| s.outcome)
    }

    /// Check every step/trace invariant
    pub fn validate(&self) -> Result<(), TraceError> {
        let last = self.steps.len().checked_sub(1).ok_or(TraceError::Empty)?;

        for (index, step) in self.steps.iter().enumerate() {
            if index == last && !step.is_terminal() {
                return Err(TraceError::MissingTerminal { index });
            }
            if index != last && step.is_terminal() {
                return Err(TraceError::EarlyTerminal { index });
            }

            for (role, pointer) in &step.pointers {
                let container = step.containers.get(pointer.container.0).ok_or(
                    TraceError::UnknownContainer {
                        step: index,
                        role: *role,
                        container: pointer.container.0,
                    },
                )?;
                if pointer.index >= container.cells.len() {
                    return Err(TraceError::PointerOutOfBounds {
                        step: index,
                        role: *role,
                        container: container.name,
                        index: pointer.index,
                        len: container.cells.len(),
                    });
                }
            }

            if let Some(line) = step.code_line {
                if line >= self.listing.lines.len() {
                    return Err(TraceError::CodeLineOutOfRange {
                        step: index,
                        line,
                        lines: self.listing.lines.len(),
                    });
                }
            }
        }

        if matches!(
            self.outcome(),
            Some(Outcome::Overflow | Outcome::Underflow)
        ) && self.steps.len() != 1
        {
            return Err(TraceError::CapacityFailureNotSingleStep {
                len: self.steps.len(),
            });
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
