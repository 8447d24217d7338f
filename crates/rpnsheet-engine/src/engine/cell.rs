//! Cell data structure.
//!
//! A [`Cell`] is created once from input and holds either a literal number
//! (computed from the start) or a postfix formula that the evaluator reduces
//! to a number exactly once.

use super::cell_name::CellName;
use crate::error::{EngineError, Result};

/// A named slot holding a literal or a formula.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    name: CellName,
    raw_value: String,
    computed: Option<f64>,
}

impl Cell {
    /// Create a cell. A raw value that parses as a number makes the cell
    /// computed immediately; anything else is kept verbatim as a formula.
    pub fn new(name: &str, raw_value: &str) -> Result<Cell> {
        let name = CellName::parse(name)?;
        Ok(Cell {
            name,
            computed: raw_value.trim().parse::<f64>().ok(),
            raw_value: raw_value.to_string(),
        })
    }

    /// A cell holding the literal `0`.
    pub fn with_name(name: &str) -> Result<Cell> {
        Cell::new(name, "0")
    }

    pub fn name(&self) -> &CellName {
        &self.name
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn is_computed(&self) -> bool {
        self.computed.is_some()
    }

    pub fn computed_value(&self) -> Result<f64> {
        self.computed
            .ok_or_else(|| EngineError::NotComputed(self.name.clone()))
    }

    /// Record the evaluated value. A cell can only be computed once.
    pub fn set_computed_value(&mut self, value: f64) -> Result<()> {
        if self.computed.is_some() {
            return Err(EngineError::AlreadyComputed(self.name.clone()));
        }
        self.computed = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_computed() {
        let cell = Cell::new("A1", "2.5").unwrap();
        assert!(cell.is_computed());
        assert_eq!(cell.computed_value().unwrap(), 2.5);
        assert_eq!(cell.raw_value(), "2.5");
    }

    #[test]
    fn test_literal_with_surrounding_whitespace() {
        let cell = Cell::new("A1", " -4 ").unwrap();
        assert_eq!(cell.computed_value().unwrap(), -4.0);
    }

    #[test]
    fn test_formula_is_not_computed() {
        let cell = Cell::new("B2", "A1 A1 +").unwrap();
        assert!(!cell.is_computed());
        assert_eq!(cell.raw_value(), "A1 A1 +");
        assert_eq!(
            cell.computed_value(),
            Err(EngineError::NotComputed(CellName::parse("B2").unwrap()))
        );
    }

    #[test]
    fn test_with_name_defaults_to_zero() {
        let cell = Cell::with_name("AZA10").unwrap();
        assert_eq!(cell.computed_value().unwrap(), 0.0);
        assert_eq!(cell.name().as_str(), "AZA10");
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert_eq!(
            Cell::with_name("A0"),
            Err(EngineError::InvalidName("A0".to_string()))
        );
        assert!(Cell::new("a1", "1").is_err());
    }

    #[test]
    fn test_set_computed_value_only_once() {
        let mut cell = Cell::new("C3", "A1 B1 *").unwrap();
        cell.set_computed_value(6.0).unwrap();
        assert_eq!(cell.computed_value().unwrap(), 6.0);
        assert!(matches!(
            cell.set_computed_value(7.0),
            Err(EngineError::AlreadyComputed(_))
        ));
        assert_eq!(cell.computed_value().unwrap(), 6.0);
    }

    #[test]
    fn test_literal_cannot_be_overwritten() {
        let mut cell = Cell::new("A1", "1").unwrap();
        assert!(cell.set_computed_value(2.0).is_err());
    }
}
