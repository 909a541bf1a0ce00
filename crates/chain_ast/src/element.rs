//! Chain elements: typed operands joined by elementary operations.

use std::fmt;

use crate::fraction::Fraction;
use crate::matrix::Matrix;

/// The five elementary operations a chain element can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            "^" => Some(Op::Pow),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A chain operand: either a scalar fraction or a matrix of fractions.
/// Every operation site matches exhaustively on this pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(Fraction),
    Matrix(Matrix),
}

impl Value {
    /// Lowercase kind label used in messages and on the wire.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Matrix(_) => "matrix",
        }
    }
}

/// One element of the chain. The name is a display label only; the
/// operation joins this element to the running result and is absent
/// exactly on the first element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainElement {
    pub name: String,
    pub value: Value,
    pub op: Option<Op>,
}
