//! Trace invariant violations
//!
//! [`TraceError`] is returned by [`Trace::validate`](super::Trace::validate).
//! Producers never construct it: a well-formed producer always emits a valid
//! trace, so these errors indicate a producer bug rather than bad input.

use super::Role;
use thiserror::Error;

/// A trace broke one of the step/trace invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// A trace must hold at least one step
    #[error("trace has no steps")]
    Empty,

    /// The last step of a trace carries no outcome
    #[error("last step {index} is not terminal")]
    MissingTerminal { index: usize },

    /// A step before the last one carries an outcome
    #[error("step {index} is terminal but is not the last step")]
    EarlyTerminal { index: usize },

    /// A pointer names a container the step does not have
    #[error("step {step}: pointer {role} references unknown container {container}")]
    UnknownContainer {
        step: usize,
        role: Role,
        container: usize,
    },

    /// A pointer index falls outside its container
    #[error("step {step}: pointer {role} at {index} is out of bounds for {container} (len {len})")]
    PointerOutOfBounds {
        step: usize,
        role: Role,
        container: &'static str,
        index: usize,
        len: usize,
    },

    /// A highlighted code line is past the end of the listing
    #[error("step {step}: code line {line} is outside the {lines}-line listing")]
    CodeLineOutOfRange {
        step: usize,
        line: usize,
        lines: usize,
    },

    /// Capacity failures must be reported without any partial animation
    #[error("capacity failure reported after {len} steps, expected a single step")]
    CapacityFailureNotSingleStep { len: usize },
}
