//! Wire model for chain evaluation.
//!
//! Provides the serializable request/response contract the engine honors
//! behind any transport, plus the single text-to-typed ingestion step:
//! every cell goes through `Fraction::parse` exactly once, here.

pub mod convert;
pub mod json_types;

pub use convert::{cells_from_value, chain_from_request, IngestError};
pub use json_types::{
    CellsJson, ChainRequest, ElementJson, ElementKind, EvalReply, SCHEMA_VERSION,
};
