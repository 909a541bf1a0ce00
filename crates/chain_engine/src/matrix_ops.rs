//! Matrix combination rules used by the evaluator.

use chain_ast::{Fraction, Matrix, Op};

use crate::error::EvalError;

fn check_same_shape(op: Op, lhs: &Matrix, rhs: &Matrix) -> Result<(), EvalError> {
    if lhs.rows() != rhs.rows() || lhs.cols() != rhs.cols() {
        return Err(EvalError::DimensionMismatch {
            op,
            lhs_rows: lhs.rows(),
            lhs_cols: lhs.cols(),
            rhs_rows: rhs.rows(),
            rhs_cols: rhs.cols(),
        });
    }
    Ok(())
}

/// Elementwise sum. Shapes must match exactly.
pub fn add(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, EvalError> {
    check_same_shape(Op::Add, lhs, rhs)?;
    Ok(Matrix::from_fn(lhs.rows(), lhs.cols(), |i, j| {
        lhs.get(i, j).add(rhs.get(i, j))
    }))
}

/// Elementwise difference. Shapes must match exactly.
pub fn sub(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, EvalError> {
    check_same_shape(Op::Sub, lhs, rhs)?;
    Ok(Matrix::from_fn(lhs.rows(), lhs.cols(), |i, j| {
        lhs.get(i, j).sub(rhs.get(i, j))
    }))
}

/// Matrix product. `lhs` (m×n) * `rhs` (n×p) → m×p; each cell is the
/// dot product of a row and a column, accumulated from zero.
pub fn mul(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, EvalError> {
    if lhs.cols() != rhs.rows() {
        return Err(EvalError::DimensionMismatch {
            op: Op::Mul,
            lhs_rows: lhs.rows(),
            lhs_cols: lhs.cols(),
            rhs_rows: rhs.rows(),
            rhs_cols: rhs.cols(),
        });
    }
    let shared = lhs.cols();
    Ok(Matrix::from_fn(lhs.rows(), rhs.cols(), |i, j| {
        (0..shared).fold(Fraction::zero(), |sum, k| {
            sum.add(&lhs.get(i, k).mul(rhs.get(k, j)))
        })
    }))
}

/// Every cell multiplied by the scalar.
pub fn scalar_mul(matrix: &Matrix, scalar: &Fraction) -> Matrix {
    Matrix::from_fn(matrix.rows(), matrix.cols(), |i, j| {
        matrix.get(i, j).mul(scalar)
    })
}

/// Every cell divided by the scalar. Fails on a zero divisor.
pub fn scalar_div(matrix: &Matrix, scalar: &Fraction) -> Result<Matrix, EvalError> {
    let inverse = scalar.recip().map_err(|_| EvalError::DivisionByZero)?;
    Ok(scalar_mul(matrix, &inverse))
}

/// Integer power of a square matrix. Exponent 0 is the identity of the
/// same size; a positive exponent multiplies the running result against
/// the original base; negative exponents would need inversion and are
/// unsupported.
pub fn pow(base: &Matrix, exponent: i64) -> Result<Matrix, EvalError> {
    if !base.is_square() {
        return Err(EvalError::NotSquare {
            rows: base.rows(),
            cols: base.cols(),
        });
    }
    if exponent == 0 {
        return Ok(Matrix::identity(base.rows()));
    }
    if exponent < 0 {
        return Err(EvalError::UnsupportedOperation("negative matrix power"));
    }
    let mut result = base.clone();
    for _ in 1..exponent {
        result = mul(&result, base)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn add_is_elementwise() {
        let a = matrix(&[&["1", "2"], &["3", "4"]]);
        let b = matrix(&[&["5", "6"], &["7", "8"]]);
        assert_eq!(add(&a, &b).unwrap(), matrix(&[&["6", "8"], &["10", "12"]]));
    }

    #[test]
    fn add_rejects_shape_mismatch() {
        let a = matrix(&[&["1", "2"]]);
        let b = matrix(&[&["1"], &["2"]]);
        assert!(matches!(
            add(&a, &b),
            Err(EvalError::DimensionMismatch { op: Op::Add, .. })
        ));
    }

    #[test]
    fn sub_undoes_add() {
        let a = matrix(&[&["1/2", "2"], &["-3", "4"]]);
        let b = matrix(&[&["1/3", "1"], &["1", "1"]]);
        assert_eq!(sub(&add(&a, &b).unwrap(), &b).unwrap(), a);
    }

    #[test]
    fn mul_is_the_standard_product() {
        let a = matrix(&[&["1", "2"], &["3", "4"]]);
        let b = matrix(&[&["5", "6"], &["7", "8"]]);
        assert_eq!(
            mul(&a, &b).unwrap(),
            matrix(&[&["19", "22"], &["43", "50"]])
        );
    }

    #[test]
    fn mul_requires_compatible_inner_dimension() {
        let a = matrix(&[&["1", "2"], &["3", "4"]]);
        let b = matrix(&[&["1", "2", "3"]]);
        assert!(matches!(
            mul(&a, &b),
            Err(EvalError::DimensionMismatch { op: Op::Mul, .. })
        ));
    }

    #[test]
    fn scalar_mul_scales_every_cell() {
        let a = matrix(&[&["1", "1/2"], &["0", "-2"]]);
        assert_eq!(
            scalar_mul(&a, &frac("2/3")),
            matrix(&[&["2/3", "1/3"], &["0", "-4/3"]])
        );
    }

    #[test]
    fn scalar_div_scales_every_cell() {
        let a = matrix(&[&["1", "1/2"]]);
        assert_eq!(
            scalar_div(&a, &frac("2")).unwrap(),
            matrix(&[&["1/2", "1/4"]])
        );
    }

    #[test]
    fn scalar_div_by_zero_fails() {
        let a = matrix(&[&["1"]]);
        assert_eq!(
            scalar_div(&a, &Fraction::zero()),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn pow_zero_is_the_identity() {
        let a = matrix(&[&["2", "1"], &["1", "2"]]);
        assert_eq!(pow(&a, 0).unwrap(), Matrix::identity(2));
    }

    #[test]
    fn pow_repeats_multiplication_against_the_base() {
        let a = matrix(&[&["1", "1"], &["0", "1"]]);
        assert_eq!(pow(&a, 3).unwrap(), matrix(&[&["1", "3"], &["0", "1"]]));
    }

    #[test]
    fn pow_requires_a_square_base() {
        let a = matrix(&[&["1", "2", "3"], &["4", "5", "6"]]);
        assert_eq!(
            pow(&a, 2),
            Err(EvalError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn negative_pow_is_unsupported() {
        let a = matrix(&[&["1"]]);
        assert!(matches!(
            pow(&a, -1),
            Err(EvalError::UnsupportedOperation(_))
        ));
    }
}
