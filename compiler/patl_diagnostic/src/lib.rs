//! Diagnostic system for evaluator error reporting.
//!
//! A [`Diagnostic`] carries everything needed to explain a failure:
//! - an error code for searchability
//! - a short message (what went wrong)
//! - a location (where it went wrong)
//! - an optional description and hint (why, and how to fix it)
//! - a call trace of locations leading to the failure
//!
//! Rendering is done by the pure functions in [`format`]. They perform no
//! I/O; writing rendered text to a sink is the job of an [`emitter`].
//!
//! ```text
//! error: Division by zero.
//!   -->   in main.hexpat:3:12
//! 3 | u32 x = 10 / 0;
//!                ^
//!
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod format;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use format::{
    format_compiler_error, format_location, format_runtime_error, format_runtime_error_short,
    format_source_excerpt,
};
