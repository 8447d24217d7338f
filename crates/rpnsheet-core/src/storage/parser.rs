//! Parser for the sheet input format.
//!
//! ```text
//! 3          <- number of cells
//! A1         <- cell name (case-insensitive)
//! 5          <- literal value
//! A2
//! A1 A1 +    <- postfix formula
//! ...
//! ```

use crate::error::{Result, SheetError};
use rpnsheet_engine::{Cell, CellName, EngineError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::{debug, warn};

/// Parse a sheet file.
pub fn parse_sheet_file(path: &Path) -> Result<HashMap<CellName, Cell>> {
    let file = File::open(path)?;
    parse_sheet(BufReader::new(file))
}

/// Parse sheet content from a string.
pub fn parse_sheet_content(content: &str) -> Result<HashMap<CellName, Cell>> {
    parse_sheet(content.as_bytes())
}

/// Parse a sheet from any buffered reader. Later definitions of a name
/// replace earlier ones.
pub fn parse_sheet<R: BufRead>(reader: R) -> Result<HashMap<CellName, Cell>> {
    let mut lines = LineReader::new(reader);

    let count_line = lines.next_line("cell count")?;
    let count: usize = count_line.trim().parse().map_err(|_| SheetError::Parse {
        line: lines.line,
        message: format!("Invalid cell count: {:?}", count_line),
    })?;

    let mut cells = HashMap::new();
    for _ in 0..count {
        let name = lines.next_line("cell name")?.to_uppercase();
        let name_line = lines.line;
        let value = lines.next_line("cell value")?;

        let cell = Cell::new(&name, &value).map_err(|e| match e {
            EngineError::InvalidName(name) => SheetError::Parse {
                line: name_line,
                message: format!("Invalid cell name: {:?}", name),
            },
            other => SheetError::Engine(other),
        })?;
        if let Some(previous) = cells.insert(cell.name().clone(), cell) {
            warn!(
                cell = %previous.name(),
                line = name_line,
                "duplicate cell definition replaces earlier one"
            );
        }
    }

    debug!(cells = cells.len(), lines = lines.line, "sheet parsed");
    Ok(cells)
}

struct LineReader<R> {
    lines: Lines<R>,
    /// 1-based number of the last line read.
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        LineReader {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<String> {
        self.line += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(SheetError::Parse {
                line: self.line,
                message: format!("Unexpected end of input, expected {}", expected),
            }),
        }
    }
}
