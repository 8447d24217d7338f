//! Sheet engine API.
//!
//! - [`CellName`] - Validated cell names (`A1`, `AZA10`)
//! - [`Cell`] - A literal or a not-yet-evaluated postfix formula
//! - [`Token`], [`Operator`] - Formula token classification
//! - [`Evaluator`] - Lazy, memoized evaluation with cycle detection
//! - [`format_number`] - Render computed values for output

mod cell;
mod cell_name;
mod cycle;
mod eval;
mod format;
mod token;

pub use cell::Cell;
pub use cell_name::CellName;
pub use cycle::CircularDependency;
pub use eval::Evaluator;
pub use format::format_number;
pub use token::{Operator, Token};
