//! Typed data model for exact-rational matrix chain arithmetic.
//!
//! A chain is an ordered list of named operands (scalar fractions or
//! matrices of fractions) joined by elementary operations. This crate
//! holds the value types and their construction rules; evaluation lives
//! in `chain_engine`.
#![allow(clippy::should_implement_trait)] // Fraction::div and pow are fallible, so the whole operation set stays inherent

pub mod display;
pub mod element;
pub mod error;
pub mod fraction;
pub mod matrix;

pub use display::chain_formula;
pub use element::{ChainElement, Op, Value};
pub use error::{AstError, NumberError};
pub use fraction::Fraction;
pub use matrix::Matrix;
