//! Container cell representation
//!
//! This module defines the [`Value`] enum, the content of one cell in a
//! container snapshot. Producers for numeric structures store [`Value::Int`],
//! string producers store [`Value::Char`].
//!
//! # Empty Slots
//!
//! [`Value::Empty`] marks a slot that exists but holds nothing yet: the output
//! array of counting/radix sort before placement, or the slot a stack push
//! reserves before writing. Keeping the slot lets pointers stay in bounds.

use std::fmt;

/// One cell of a container snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Value {
    Int(i64),
    Char(char),
    #[default]
    Empty,
}

impl Value {
    /// Check if this slot holds something
    pub fn is_filled(&self) -> bool {
        !matches!(self, Value::Empty)
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the char value, returns None if not a Char
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Char(c) => write!(f, "{}", c),
            Value::Empty => write!(f, "·"),
        }
    }
}

/// Convert a numeric slice into container cells
pub fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

/// Convert a string into container cells, one per `char`
pub fn chars(text: &str) -> Vec<Value> {
    text.chars().map(Value::Char).collect()
}

/// Extract the integers of a container, skipping empty slots
pub fn to_ints(cells: &[Value]) -> Vec<i64> {
    cells.iter().filter_map(Value::as_int).collect()
}

/// Collect the characters of a container back into a string
pub fn to_string(cells: &[Value]) -> String {
    cells.iter().filter_map(Value::as_char).collect()
}
