//! Cell name validation.
//!
//! A cell name is one or more uppercase letters followed by a row number
//! without leading zeros (e.g. "A1", "AN123", "AZA10").

use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{EngineError, Result};

/// A validated cell name.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellName(String);

impl CellName {
    /// Validate `name` and wrap it. Names are case-sensitive: callers
    /// normalize to uppercase before getting here.
    pub fn parse(name: &str) -> Result<CellName> {
        if Self::is_valid(name) {
            Ok(CellName(name.to_string()))
        } else {
            Err(EngineError::InvalidName(name.to_string()))
        }
    }

    pub fn is_valid(name: &str) -> bool {
        cell_name_re().is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn cell_name_re() -> &'static Regex {
    static CELL_NAME_RE: OnceLock<Regex> = OnceLock::new();
    CELL_NAME_RE.get_or_init(|| {
        Regex::new(r"^[A-Z]+[1-9][0-9]*$").expect("cell name regex must compile")
    })
}

impl std::str::FromStr for CellName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CellName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CellName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
