//! Postfix formula tokens.
//!
//! Formulas are split on single spaces. Each piece is an operator, a numeric
//! literal or a cell name, checked in that order.

use super::CellName;

/// Binary arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn parse(token: &str) -> Option<Operator> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Apply to the two operands in the order they come off the stack:
    /// `d1` is the top, `d2` the one below it.
    ///
    /// Division by zero follows IEEE-754 and yields an infinity or NaN.
    pub fn apply(self, d1: f64, d2: f64) -> f64 {
        match self {
            Operator::Add => d1 + d2,
            Operator::Sub => d1 - d2,
            Operator::Mul => d1 * d2,
            Operator::Div => d1 / d2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// A classified formula token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    Operator(Operator),
    Number(f64),
    Reference(&'a str),
    Invalid(&'a str),
}

impl<'a> Token<'a> {
    pub fn parse(token: &'a str) -> Token<'a> {
        if let Some(op) = Operator::parse(token) {
            Token::Operator(op)
        } else if let Ok(n) = token.parse::<f64>() {
            Token::Number(n)
        } else if CellName::is_valid(token) {
            Token::Reference(token)
        } else {
            Token::Invalid(token)
        }
    }
}
