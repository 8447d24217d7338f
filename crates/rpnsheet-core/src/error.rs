//! Error types for rpnsheet core.

use thiserror::Error;

use rpnsheet_engine::{CircularDependency, EngineError};

/// Errors that can occur while loading, computing or printing a sheet.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl SheetError {
    /// The cycle, if this error reports one.
    pub fn as_circular(&self) -> Option<&CircularDependency> {
        match self {
            SheetError::Engine(e) => e.as_circular(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
