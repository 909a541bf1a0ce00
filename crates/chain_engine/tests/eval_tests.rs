//! End-to-end chain evaluation scenarios, success and failure.

use chain_ast::{ChainElement, Fraction, Matrix, Op, Value};
use chain_engine::{evaluate, EvalError};

fn frac(text: &str) -> Fraction {
    Fraction::parse(text).unwrap()
}

fn matrix(rows: &[&[&str]]) -> Matrix {
    Matrix::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| frac(cell)).collect())
            .collect(),
    )
    .unwrap()
}

fn scalar_el(text: &str, op: Option<Op>) -> ChainElement {
    ChainElement {
        name: String::new(),
        value: Value::Scalar(frac(text)),
        op,
    }
}

fn matrix_el(rows: &[&[&str]], op: Option<Op>) -> ChainElement {
    ChainElement {
        name: String::new(),
        value: Value::Matrix(matrix(rows)),
        op,
    }
}

#[test]
fn empty_chain_fails() {
    assert_eq!(evaluate(&[]), Err(EvalError::EmptyChain));
}

#[test]
fn single_element_chain_returns_its_value() {
    let result = evaluate(&[scalar_el("5/10", None)]).unwrap();
    assert_eq!(result, Value::Scalar(frac("1/2")));
}

#[test]
fn missing_operation_names_the_element() {
    let chain = [scalar_el("1", None), scalar_el("2", None)];
    assert_eq!(
        evaluate(&chain),
        Err(EvalError::MissingOperation { index: 1 })
    );
}

#[test]
fn identity_plus_matrix_returns_the_sum() {
    let chain = [
        matrix_el(&[&["1", "0"], &["0", "1"]], None),
        matrix_el(&[&["1", "2"], &["3", "4"]], Some(Op::Add)),
    ];
    let result = evaluate(&chain).unwrap();
    assert_eq!(result, Value::Matrix(matrix(&[&["2", "2"], &["3", "5"]])));
}

#[test]
fn adding_to_the_zero_matrix_returns_the_operand() {
    let chain = [
        matrix_el(&[&["0", "0"], &["0", "0"]], None),
        matrix_el(&[&["1", "2"], &["3", "4"]], Some(Op::Add)),
    ];
    let result = evaluate(&chain).unwrap();
    assert_eq!(result, Value::Matrix(matrix(&[&["1", "2"], &["3", "4"]])));
}

#[test]
fn scalar_division_chain() {
    let chain = [scalar_el("6", None), scalar_el("3", Some(Op::Div))];
    let result = evaluate(&chain).unwrap();
    assert_eq!(result.to_string(), "2");
}

#[test]
fn rectangular_product_has_summed_cells() {
    let chain = [
        matrix_el(&[&["1", "2", "3"], &["4", "5", "6"]], None),
        matrix_el(&[&["7", "8"], &["9", "10"], &["11", "12"]], Some(Op::Mul)),
    ];
    let result = evaluate(&chain).unwrap();
    assert_eq!(
        result,
        Value::Matrix(matrix(&[&["58", "64"], &["139", "154"]]))
    );
}

#[test]
fn evaluation_is_left_to_right_without_precedence() {
    // 2 * 3 ^ 2 folds as (2 * 3) ^ 2, never 2 * (3 ^ 2)
    let chain = [
        scalar_el("2", None),
        scalar_el("3", Some(Op::Mul)),
        scalar_el("2", Some(Op::Pow)),
    ];
    assert_eq!(evaluate(&chain).unwrap().to_string(), "36");
}

#[test]
fn matrix_as_exponent_is_rejected() {
    let chain = [
        matrix_el(&[&["1", "0"], &["0", "1"]], None),
        matrix_el(&[&["1", "0"], &["0", "1"]], Some(Op::Pow)),
    ];
    assert!(matches!(
        evaluate(&chain),
        Err(EvalError::InvalidOperationForType { op: Op::Pow, .. })
    ));
}

#[test]
fn matrix_raised_to_scalar_power() {
    let chain = [
        matrix_el(&[&["1", "1"], &["0", "1"]], None),
        scalar_el("2", Some(Op::Pow)),
    ];
    let result = evaluate(&chain).unwrap();
    assert_eq!(result, Value::Matrix(matrix(&[&["1", "2"], &["0", "1"]])));
}

#[test]
fn matrix_power_zero_is_the_identity() {
    let chain = [
        matrix_el(&[&["3", "5"], &["1", "2"]], None),
        scalar_el("0", Some(Op::Pow)),
    ];
    assert_eq!(
        evaluate(&chain).unwrap(),
        Value::Matrix(Matrix::identity(2))
    );
}

#[test]
fn fractional_exponent_is_invalid() {
    let chain = [
        matrix_el(&[&["1", "0"], &["0", "1"]], None),
        scalar_el("1/2", Some(Op::Pow)),
    ];
    assert_eq!(evaluate(&chain), Err(EvalError::InvalidExponent));
}

#[test]
fn matrix_power_of_non_square_fails() {
    let chain = [
        matrix_el(&[&["1", "2", "3"], &["4", "5", "6"]], None),
        scalar_el("2", Some(Op::Pow)),
    ];
    assert_eq!(
        evaluate(&chain),
        Err(EvalError::NotSquare { rows: 2, cols: 3 })
    );
}

#[test]
fn zero_to_the_zero_is_one_by_convention() {
    let chain = [scalar_el("0", None), scalar_el("0", Some(Op::Pow))];
    assert_eq!(evaluate(&chain).unwrap(), Value::Scalar(Fraction::one()));
}

#[test]
fn matrix_divided_by_zero_scalar_fails() {
    let chain = [
        matrix_el(&[&["0"]], None),
        scalar_el("0", Some(Op::Div)),
    ];
    assert_eq!(evaluate(&chain), Err(EvalError::DivisionByZero));
}

#[test]
fn matrix_divided_by_matrix_is_unsupported() {
    let chain = [
        matrix_el(&[&["1"]], None),
        matrix_el(&[&["1"]], Some(Op::Div)),
    ];
    assert!(matches!(
        evaluate(&chain),
        Err(EvalError::UnsupportedOperation(_))
    ));
}

#[test]
fn scalar_addition_is_rejected() {
    let chain = [scalar_el("1", None), scalar_el("2", Some(Op::Add))];
    assert!(matches!(
        evaluate(&chain),
        Err(EvalError::InvalidOperationForType { op: Op::Add, .. })
    ));
}

#[test]
fn adding_a_matrix_to_a_scalar_is_rejected() {
    let chain = [
        scalar_el("1", None),
        matrix_el(&[&["1"]], Some(Op::Add)),
    ];
    assert!(matches!(
        evaluate(&chain),
        Err(EvalError::InvalidOperationForType { op: Op::Add, .. })
    ));
}

#[test]
fn scalar_accumulator_scales_a_matrix_operand() {
    let chain = [
        scalar_el("2", None),
        matrix_el(&[&["1", "1/2"], &["0", "3"]], Some(Op::Mul)),
    ];
    assert_eq!(
        evaluate(&chain).unwrap(),
        Value::Matrix(matrix(&[&["2", "1"], &["0", "6"]]))
    );
}

#[test]
fn matrix_times_scalar_scales_every_cell() {
    let chain = [
        matrix_el(&[&["1", "2"], &["3", "4"]], None),
        scalar_el("1/2", Some(Op::Mul)),
    ];
    assert_eq!(
        evaluate(&chain).unwrap(),
        Value::Matrix(matrix(&[&["1/2", "1"], &["3/2", "2"]]))
    );
}

#[test]
fn mismatched_addition_reports_both_shapes() {
    let chain = [
        matrix_el(&[&["1", "2"]], None),
        matrix_el(&[&["1"], &["2"]], Some(Op::Add)),
    ];
    assert_eq!(
        evaluate(&chain),
        Err(EvalError::DimensionMismatch {
            op: Op::Add,
            lhs_rows: 1,
            lhs_cols: 2,
            rhs_rows: 2,
            rhs_cols: 1,
        })
    );
}

#[test]
fn longer_chain_threads_the_accumulator() {
    // (((A + B) * C) / 2) with exact fractions all the way through
    let chain = [
        matrix_el(&[&["1", "0"], &["0", "1"]], None),
        matrix_el(&[&["1", "2"], &["3", "4"]], Some(Op::Add)),
        matrix_el(&[&["1", "1"], &["1", "1"]], Some(Op::Mul)),
        scalar_el("2", Some(Op::Div)),
    ];
    let result = evaluate(&chain).unwrap();
    assert_eq!(result, Value::Matrix(matrix(&[&["2", "2"], &["4", "4"]])));
}
