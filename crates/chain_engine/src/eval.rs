//! The left-to-right chain fold.

use chain_ast::{ChainElement, Fraction, Matrix, Op, Value};
use tracing::debug;

use crate::error::EvalError;
use crate::matrix_ops;

/// Fold the chain into a single value, strictly left to right with no
/// operator precedence. The first element seeds the accumulator; every
/// later element must carry an operation and replaces the accumulator
/// with the combined result.
pub fn evaluate(elements: &[ChainElement]) -> Result<Value, EvalError> {
    let (first, rest) = elements.split_first().ok_or(EvalError::EmptyChain)?;
    let mut acc = first.value.clone();
    for (offset, element) in rest.iter().enumerate() {
        let index = offset + 1;
        let op = element.op.ok_or(EvalError::MissingOperation { index })?;
        debug!(index, %op, kind = element.value.kind_name(), "applying chain element");
        acc = apply(acc, op, &element.value)?;
    }
    Ok(acc)
}

fn apply(acc: Value, op: Op, operand: &Value) -> Result<Value, EvalError> {
    match operand {
        Value::Matrix(rhs) => apply_matrix_operand(acc, op, rhs),
        Value::Scalar(rhs) => apply_scalar_operand(acc, op, rhs),
    }
}

/// A matrix element can join with `+ - * /`; it can never be an exponent.
fn apply_matrix_operand(acc: Value, op: Op, rhs: &Matrix) -> Result<Value, EvalError> {
    match op {
        Op::Pow => Err(EvalError::InvalidOperationForType {
            op,
            reason: "a matrix cannot be used as an exponent".to_string(),
        }),
        Op::Div => Err(EvalError::UnsupportedOperation(
            "division by a matrix is not supported",
        )),
        Op::Add | Op::Sub => match acc {
            Value::Matrix(lhs) => {
                let combined = if op == Op::Add {
                    matrix_ops::add(&lhs, rhs)?
                } else {
                    matrix_ops::sub(&lhs, rhs)?
                };
                Ok(Value::Matrix(combined))
            }
            Value::Scalar(_) => Err(EvalError::InvalidOperationForType {
                op,
                reason: "cannot combine a scalar and a matrix elementwise".to_string(),
            }),
        },
        Op::Mul => match acc {
            Value::Matrix(lhs) => Ok(Value::Matrix(matrix_ops::mul(&lhs, rhs)?)),
            // scalar times matrix scales every cell
            Value::Scalar(lhs) => Ok(Value::Matrix(matrix_ops::scalar_mul(rhs, &lhs))),
        },
    }
}

/// A scalar element can join with `* / ^`; addition and subtraction are
/// reserved for matrix elements.
fn apply_scalar_operand(acc: Value, op: Op, rhs: &Fraction) -> Result<Value, EvalError> {
    match op {
        Op::Add | Op::Sub => Err(EvalError::InvalidOperationForType {
            op,
            reason: "scalar elements support only '*', '/' and '^'".to_string(),
        }),
        Op::Mul => Ok(match acc {
            Value::Scalar(lhs) => Value::Scalar(lhs.mul(rhs)),
            Value::Matrix(lhs) => Value::Matrix(matrix_ops::scalar_mul(&lhs, rhs)),
        }),
        Op::Div => match acc {
            Value::Scalar(lhs) => lhs
                .div(rhs)
                .map(Value::Scalar)
                .map_err(|_| EvalError::DivisionByZero),
            Value::Matrix(lhs) => Ok(Value::Matrix(matrix_ops::scalar_div(&lhs, rhs)?)),
        },
        Op::Pow => {
            let exponent = exponent_value(rhs)?;
            match acc {
                Value::Scalar(lhs) => lhs
                    .pow(exponent)
                    .map(Value::Scalar)
                    .map_err(|_| EvalError::DivisionByZero),
                Value::Matrix(lhs) => Ok(Value::Matrix(matrix_ops::pow(&lhs, exponent)?)),
            }
        }
    }
}

/// An exponent must be a scalar that reduces to an integer.
fn exponent_value(scalar: &Fraction) -> Result<i64, EvalError> {
    scalar.to_i64().ok_or(EvalError::InvalidExponent)
}
