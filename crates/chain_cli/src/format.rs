//! Plain-text rendering of chain values for the terminal.

use chain_ast::{Matrix, Value};

/// Render a value for terminal output; matrix cells are right-aligned
/// per column so rows line up.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Scalar(fraction) => fraction.to_string(),
        Value::Matrix(matrix) => render_matrix(matrix),
    }
}

fn render_matrix(matrix: &Matrix) -> String {
    let mut widths = vec![0usize; matrix.cols()];
    for i in 0..matrix.rows() {
        for (j, width) in widths.iter_mut().enumerate() {
            *width = (*width).max(matrix.get(i, j).to_string().len());
        }
    }

    let mut out = String::new();
    for i in 0..matrix.rows() {
        if i > 0 {
            out.push('\n');
        }
        for (j, &width) in widths.iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:>width$}", matrix.get(i, j).to_string()));
        }
    }
    out
}
