//! Error types for the rpnsheet engine.

use thiserror::Error;

use crate::engine::{CellName, CircularDependency};

/// Errors that can occur while building or evaluating a sheet.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid cell name: {0:?}")]
    InvalidName(String),

    #[error("Cell {0} has not been computed")]
    NotComputed(CellName),

    #[error("Cell {0} is already computed")]
    AlreadyComputed(CellName),

    #[error("{}", unknown_cell_message(.name, .referenced_by))]
    UnknownCell {
        name: String,
        referenced_by: Option<CellName>,
    },

    #[error("Cell {name} is stored under key {key}")]
    MismatchedKey { key: CellName, name: CellName },

    #[error("Malformed expression in {cell} ({expression:?}): {reason}")]
    MalformedExpression {
        cell: CellName,
        expression: String,
        reason: String,
    },

    #[error(transparent)]
    CircularDependency(#[from] CircularDependency),
}

impl EngineError {
    /// The cycle, if this error reports one.
    pub fn as_circular(&self) -> Option<&CircularDependency> {
        match self {
            EngineError::CircularDependency(cycle) => Some(cycle),
            _ => None,
        }
    }
}

fn unknown_cell_message(name: &str, referenced_by: &Option<CellName>) -> String {
    match referenced_by {
        Some(by) => format!("Unknown cell {} referenced by {}", name, by),
        None => format!("Unknown cell {}", name),
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
