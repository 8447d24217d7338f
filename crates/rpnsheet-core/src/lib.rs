//! rpnsheet-core - Document model and storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::Document;
pub use error::{Result, SheetError};

pub use rpnsheet_engine::{Cell, CellName, CircularDependency, EngineError, Evaluator};
