//! Writer for computed values.

use rpnsheet_engine::{CellName, format_number};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Write values in name order.
///
/// Default mode emits the name and the value on separate lines; readable
/// mode emits one `NAME => VALUE` line per cell.
pub fn write_values<W: Write>(
    mut out: W,
    values: &BTreeMap<CellName, f64>,
    readable: bool,
) -> io::Result<()> {
    out.write_all(write_values_content(values, readable).as_bytes())?;
    out.flush()
}

/// Render values to a string, see [`write_values`].
pub fn write_values_content(values: &BTreeMap<CellName, f64>, readable: bool) -> String {
    let mut out = String::new();
    for (name, value) in values {
        if readable {
            out.push_str(&format!("{} => {}\n", name, format_number(*value)));
        } else {
            out.push_str(&format!("{}\n{}\n", name, format_number(*value)));
        }
    }
    out
}
