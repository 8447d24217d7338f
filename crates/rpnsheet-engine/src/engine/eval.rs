//! Lazy, memoized formula evaluation.
//!
//! The [`Evaluator`] owns every cell of a sheet. Evaluating a formula cell
//! first evaluates each cell it references, then reduces its postfix tokens
//! on an operand stack. Every result is stored on its cell, so a cell that
//! is referenced many times is only ever evaluated once.
//!
//! Evaluation runs on an explicit work stack of frames rather than
//! native recursion, so the length of a dependency chain is bounded by heap
//! memory, not by the thread's stack.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::{Cell, CellName, CircularDependency, Token};
use crate::error::{EngineError, Result};

/// Evaluates all cells of a sheet.
#[derive(Debug, Clone)]
pub struct Evaluator {
    cells: HashMap<CellName, Cell>,
    /// Cells whose formula has not been evaluated yet.
    pending: HashSet<CellName>,
    /// Cells with a frame on the work stack.
    in_progress: HashSet<CellName>,
}

/// One formula being reduced.
struct Frame {
    name: CellName,
    expression: String,
    /// Byte offset of the next token in `expression`.
    cursor: usize,
    operands: Vec<f64>,
}

impl Frame {
    fn new(name: CellName, expression: String) -> Self {
        Frame {
            name,
            expression,
            cursor: 0,
            operands: Vec::new(),
        }
    }

    /// The next single-space separated token, or None once consumed.
    fn next_token(&mut self) -> Option<String> {
        if self.cursor > self.expression.len() {
            return None;
        }
        let rest = &self.expression[self.cursor..];
        let token = match rest.find(' ') {
            Some(end) => {
                self.cursor += end + 1;
                &rest[..end]
            }
            None => {
                self.cursor = self.expression.len() + 1;
                rest
            }
        };
        Some(token.to_string())
    }

    fn malformed(&self, reason: impl Into<String>) -> EngineError {
        EngineError::MalformedExpression {
            cell: self.name.clone(),
            expression: self.expression.clone(),
            reason: reason.into(),
        }
    }

    fn finish(&self) -> Result<f64> {
        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(self.malformed("no value left on the stack")),
            rest => Err(self.malformed(format!(
                "{} values left on the stack, expected 1",
                rest.len()
            ))),
        }
    }
}

/// What the top frame needs next.
enum Step {
    /// Evaluate this cell and feed its value to the top frame.
    Descend(CellName),
    /// The top frame has consumed all of its tokens.
    Finished,
    Continue,
}

impl Evaluator {
    /// Build an evaluator over `cells`. Every key must be the name of the
    /// cell stored under it. The map is not modified afterwards apart from
    /// storing computed values.
    pub fn new(cells: HashMap<CellName, Cell>) -> Result<Self> {
        if let Some((key, cell)) = cells.iter().find(|(key, cell)| *key != cell.name()) {
            return Err(EngineError::MismatchedKey {
                key: key.clone(),
                name: cell.name().clone(),
            });
        }
        Ok(Evaluator::with_cells(cells))
    }

    fn with_cells(cells: HashMap<CellName, Cell>) -> Self {
        let pending = cells
            .iter()
            .filter(|(_, cell)| !cell.is_computed())
            .map(|(name, _)| name.clone())
            .collect();
        Evaluator {
            cells,
            pending,
            in_progress: HashSet::new(),
        }
    }

    /// Evaluate every cell that is not yet computed.
    ///
    /// Cells are picked in no particular order. The first error aborts the
    /// run; cells computed before it keep their values.
    pub fn compute_all(&mut self) -> Result<()> {
        while let Some(next) = self.pending.iter().next().cloned() {
            self.evaluate(next.as_str())?;
        }
        debug!(cells = self.cells.len(), "all cells computed");
        Ok(())
    }

    /// Evaluate `name`, evaluating any cell it depends on first.
    pub fn evaluate(&mut self, name: &str) -> Result<f64> {
        let (name, cell) = self.cells.get_key_value(name).ok_or_else(|| {
            EngineError::UnknownCell {
                name: name.to_string(),
                referenced_by: None,
            }
        })?;
        if let Ok(value) = cell.computed_value() {
            return Ok(value);
        }
        let name = name.clone();
        if self.in_progress.contains(&name) {
            return Err(CircularDependency::new(name.clone(), name).into());
        }

        let mut stack = vec![self.begin(name.clone())];
        let result = self.run(&name, &mut stack);
        if result.is_err() {
            // Unwind: every interrupted cell goes back to pending.
            for frame in stack {
                self.in_progress.remove(&frame.name);
                self.pending.insert(frame.name);
            }
        }
        result
    }

    fn begin(&mut self, name: CellName) -> Frame {
        debug!(cell = %name, "evaluating");
        self.pending.remove(&name);
        self.in_progress.insert(name.clone());
        // Trailing separators do not produce empty tokens.
        let expression = self
            .cells
            .get(&name)
            .map(|cell| cell.raw_value().trim_end_matches(' ').to_string())
            .unwrap_or_default();
        Frame::new(name, expression)
    }

    fn run(&mut self, root: &CellName, stack: &mut Vec<Frame>) -> Result<f64> {
        while let Some(frame) = stack.last_mut() {
            match self.step(frame)? {
                Step::Continue => {}
                Step::Descend(name) => {
                    let child = self.begin(name);
                    stack.push(child);
                }
                Step::Finished => {
                    let value = frame.finish()?;
                    let name = frame.name.clone();
                    stack.pop();
                    self.complete(&name, value)?;
                    match stack.last_mut() {
                        Some(parent) => parent.operands.push(value),
                        None => return Ok(value),
                    }
                }
            }
        }
        Err(EngineError::NotComputed(root.clone()))
    }

    /// Consume one token of `frame`.
    fn step(&self, frame: &mut Frame) -> Result<Step> {
        let Some(token) = frame.next_token() else {
            return Ok(Step::Finished);
        };
        trace!(cell = %frame.name, token = %token, "token");
        match Token::parse(&token) {
            Token::Operator(op) => {
                let (Some(d1), Some(d2)) = (frame.operands.pop(), frame.operands.pop())
                else {
                    return Err(frame.malformed(format!(
                        "operator {} needs two operands",
                        op.symbol()
                    )));
                };
                frame.operands.push(op.apply(d1, d2));
            }
            Token::Number(n) => frame.operands.push(n),
            Token::Reference(reference) => {
                let Some((key, cell)) = self.cells.get_key_value(reference) else {
                    return Err(EngineError::UnknownCell {
                        name: reference.to_string(),
                        referenced_by: Some(frame.name.clone()),
                    });
                };
                if let Ok(value) = cell.computed_value() {
                    frame.operands.push(value);
                } else if self.in_progress.contains(key) {
                    let cycle = CircularDependency::new(key.clone(), frame.name.clone());
                    warn!(first = %cycle.first, second = %cycle.second, "circular dependency");
                    return Err(cycle.into());
                } else {
                    return Ok(Step::Descend(key.clone()));
                }
            }
            Token::Invalid(token) => {
                return Err(frame.malformed(format!("invalid token {:?}", token)));
            }
        }
        Ok(Step::Continue)
    }

    fn complete(&mut self, name: &CellName, value: f64) -> Result<()> {
        self.in_progress.remove(name);
        let cell = self
            .cells
            .get_mut(name)
            .ok_or_else(|| EngineError::UnknownCell {
                name: name.to_string(),
                referenced_by: None,
            })?;
        cell.set_computed_value(value)?;
        debug!(cell = %name, value, "computed");
        Ok(())
    }

    /// Read-only view of all cells.
    pub fn cells(&self) -> &HashMap<CellName, Cell> {
        &self.cells
    }

    pub fn cell(&self, name: &str) -> Option<&Cell> {
        self.cells.get(name)
    }

    /// Number of cells still waiting to be evaluated.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// All computed values, sorted by cell name.
    pub fn values(&self) -> Result<BTreeMap<CellName, f64>> {
        self.cells
            .iter()
            .map(|(name, cell)| cell.computed_value().map(|value| (name.clone(), value)))
            .collect()
    }
}

impl FromIterator<Cell> for Evaluator {
    /// Later cells replace earlier cells of the same name.
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let cells = iter
            .into_iter()
            .map(|cell| (cell.name().clone(), cell))
            .collect();
        Evaluator::with_cells(cells)
    }
}
