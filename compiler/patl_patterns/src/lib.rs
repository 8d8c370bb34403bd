#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! patl Patterns - the value model of the expression core.
//!
//! This crate provides:
//! - Runtime values (`Value`) and their cast/display conversions
//! - The `Pattern` capability: a shared, read-only handle onto decoded data
//! - The `DataSource` capability used to read the raw bytes behind patterns
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! # Ownership
//!
//! Values never own the patterns they reference. A `Value::Pattern` holds a
//! `SharedPattern` (`Arc<dyn Pattern>`); cloning a value clones the handle,
//! not the decoded data.

mod data_source;
mod errors;
mod pattern;
mod value;

pub use data_source::{DataSource, DataSourceError, MemoryDataSource};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use pattern::{DecodedPattern, Pattern, SharedPattern};
pub use value::Value;

// Re-export error constructors for use by other crates
pub use errors::{
    boolean_arithmetic, data_read, division_by_zero, invalid_cast, invalid_operand,
    negative_repeat_count, non_literal_operand, recursion_limit_exceeded, repeat_limit_exceeded,
    void_operand,
};
