//! Sheet input and value output.

mod parser;
mod writer;

pub use parser::{parse_sheet, parse_sheet_content, parse_sheet_file};
pub use writer::{write_values, write_values_content};
