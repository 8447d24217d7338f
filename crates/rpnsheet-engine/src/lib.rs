//! rpnsheet_engine - Cell model and lazy postfix formula evaluation.

pub mod engine;
pub mod error;

pub use engine::{Cell, CellName, CircularDependency, Evaluator, format_number};
pub use error::{EngineError, Result};
