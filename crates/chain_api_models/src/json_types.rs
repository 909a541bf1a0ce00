//! Serializable request and reply types.

use serde::{Deserialize, Serialize};

/// Current schema version for the wire format.
pub const SCHEMA_VERSION: u32 = 1;

/// An ordered chain of elements to evaluate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChainRequest {
    pub elements: Vec<ElementJson>,
}

/// One element record as it travels on the wire. Cell values are text;
/// they are parsed into fractions at ingestion, never later.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElementJson {
    /// Display label; not used in computation
    #[serde(default)]
    pub name: String,
    pub kind: ElementKind,
    pub value: CellsJson,
    /// One of `+ - * / ^`; absent only on the first element
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub operation: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Matrix,
    Scalar,
}

/// Scalar cell text, or matrix rows of cell text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CellsJson {
    Scalar(String),
    Matrix(Vec<Vec<String>>),
}

/// Reply envelope: either a rendered result or a failure message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EvalReply {
    pub schema_version: u32,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<CellsJson>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl EvalReply {
    pub fn success(result: CellsJson) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}
