//! Conversion between wire records and typed chain elements.

use chain_ast::{AstError, ChainElement, Fraction, Matrix, NumberError, Op, Value};
use thiserror::Error;

use crate::json_types::{CellsJson, ChainRequest, ElementJson, ElementKind};

/// Everything that can go wrong turning a wire chain into typed elements.
/// Indices are zero-based wire positions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("element {index}: {source}")]
    Cell {
        index: usize,
        #[source]
        source: NumberError,
    },

    #[error("element {index}: {source}")]
    Shape {
        index: usize,
        #[source]
        source: AstError,
    },

    #[error("element {index}: unknown operation '{symbol}'")]
    UnknownOperation { index: usize, symbol: String },

    /// Kind tag and value shape disagree
    #[error("element {index}: a scalar element carries one value, a matrix element carries rows")]
    KindMismatch { index: usize },
}

/// Parse every element of the request, in order. The first failure wins.
pub fn chain_from_request(request: &ChainRequest) -> Result<Vec<ChainElement>, IngestError> {
    request
        .elements
        .iter()
        .enumerate()
        .map(|(index, element)| element_from_json(index, element))
        .collect()
}

fn element_from_json(index: usize, json: &ElementJson) -> Result<ChainElement, IngestError> {
    let value = match (json.kind, &json.value) {
        (ElementKind::Scalar, CellsJson::Scalar(text)) => Value::Scalar(
            Fraction::parse(text).map_err(|source| IngestError::Cell { index, source })?,
        ),
        (ElementKind::Matrix, CellsJson::Matrix(rows)) => {
            let mut grid = Vec::with_capacity(rows.len());
            for row in rows {
                let cells = row
                    .iter()
                    .map(|cell| Fraction::parse(cell))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|source| IngestError::Cell { index, source })?;
                grid.push(cells);
            }
            Value::Matrix(
                Matrix::from_rows(grid).map_err(|source| IngestError::Shape { index, source })?,
            )
        }
        _ => return Err(IngestError::KindMismatch { index }),
    };

    let op = match &json.operation {
        Some(symbol) => Some(Op::from_symbol(symbol).ok_or_else(|| {
            IngestError::UnknownOperation {
                index,
                symbol: symbol.clone(),
            }
        })?),
        None => None,
    };

    Ok(ChainElement {
        name: json.name.clone(),
        value,
        op,
    })
}

/// Render a result value back into wire cells of display strings.
pub fn cells_from_value(value: &Value) -> CellsJson {
    match value {
        Value::Scalar(fraction) => CellsJson::Scalar(fraction.to_string()),
        Value::Matrix(matrix) => CellsJson::Matrix(
            (0..matrix.rows())
                .map(|i| matrix.row(i).iter().map(Fraction::to_string).collect())
                .collect(),
        ),
    }
}
