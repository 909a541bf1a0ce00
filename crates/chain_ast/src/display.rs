//! Plain-text rendering of values and the chain formula preview.

use std::fmt;

use crate::element::{ChainElement, Value};

impl fmt::Display for Value {
    /// Scalars render as their fraction; matrices as rows of cells,
    /// space-separated within a row, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(fraction) => write!(f, "{fraction}"),
            Value::Matrix(matrix) => {
                for i in 0..matrix.rows() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    for j in 0..matrix.cols() {
                        if j > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}", matrix.get(i, j))?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// One-line formula preview, e.g. `A + B * k`.
///
/// Unnamed elements fall back to `M<i>` for matrices and `N<i>` for
/// scalars; a missing operation shows as `?`.
pub fn chain_formula(elements: &[ChainElement]) -> String {
    let mut out = String::new();
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            match element.op {
                Some(op) => {
                    out.push(' ');
                    out.push_str(op.symbol());
                    out.push(' ');
                }
                None => out.push_str(" ? "),
            }
        }
        if element.name.is_empty() {
            let prefix = match element.value {
                Value::Matrix(_) => 'M',
                Value::Scalar(_) => 'N',
            };
            out.push(prefix);
            out.push_str(&(index + 1).to_string());
        } else {
            out.push_str(&element.name);
        }
    }
    out
}
