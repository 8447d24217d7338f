use crate::error::Result;
use rpnsheet_engine::{Cell, CellName, Evaluator};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::info;

/// A loaded sheet and its evaluation state.
pub struct Document {
    evaluator: Evaluator,
    /// File the sheet was read from, if any
    pub file_path: Option<PathBuf>,
}

impl Document {
    /// Fails if a key is not the name of the cell stored under it.
    pub fn from_cells(cells: HashMap<CellName, Cell>) -> Result<Self> {
        Ok(Document {
            evaluator: Evaluator::new(cells)?,
            file_path: None,
        })
    }

    /// Evaluate every formula cell.
    ///
    /// A circular dependency surfaces as an error; use
    /// [`crate::SheetError::as_circular`] to tell it apart from fatal errors.
    pub fn compute(&mut self) -> Result<()> {
        let pending = self.evaluator.pending_len();
        self.evaluator.compute_all()?;
        info!(
            cells = self.evaluator.cells().len(),
            evaluated = pending,
            "sheet computed"
        );
        Ok(())
    }

    /// All values, sorted by cell name. Fails if the sheet is not computed.
    pub fn values(&self) -> Result<BTreeMap<CellName, f64>> {
        Ok(self.evaluator.values()?)
    }

    pub fn len(&self) -> usize {
        self.evaluator.cells().len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluator.cells().is_empty()
    }
}
