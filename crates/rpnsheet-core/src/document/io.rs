use super::Document;
use crate::error::Result;
use crate::storage::{parse_sheet, parse_sheet_file, write_values};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

impl Document {
    /// Load a sheet from a reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Document::from_cells(parse_sheet(reader)?)
    }

    /// Load a sheet from a file.
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "reading sheet");
        let mut doc = Document::from_cells(parse_sheet_file(path)?)?;
        doc.file_path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Print all computed values in name order. See
    /// [`crate::storage::write_values`] for the two layouts.
    pub fn print<W: Write>(&self, out: W, readable: bool) -> Result<()> {
        let values = self.values()?;
        write_values(out, &values, readable)?;
        Ok(())
    }
}
