//! Error types for expression evaluation.
//!
//! `EvalErrorKind` provides typed error categories; factory functions
//! (e.g. `division_by_zero()`) are the public way to build errors and fill
//! in the title, description and hint that go with each kind.

use std::fmt;

use patl_ir::{BinaryOp, Location};
use smallvec::SmallVec;

use crate::data_source::DataSourceError;
use crate::value::Value;

mod diagnostics;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category for structured diagnostics.
///
/// The `Display` impl produces the error title shown to users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Operand
    VoidOperand,
    NonLiteralOperand,

    // Type/Operator
    InvalidOperand {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    InvalidCast {
        from: String,
        target: &'static str,
    },

    // Arithmetic
    DivisionByZero,
    BooleanArithmetic,
    NegativeRepeatCount,

    // Limits
    RepeatLimitExceeded {
        limit: u64,
    },
    RecursionLimitExceeded {
        limit: usize,
    },

    // Data
    DataRead {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VoidOperand => write!(f, "Void expression used in ternary expression."),
            Self::NonLiteralOperand | Self::InvalidOperand { .. } => {
                write!(f, "Invalid operand used in mathematical expression.")
            }
            Self::InvalidCast { from, target } => {
                write!(f, "Cannot convert value of type '{from}' to '{target}'.")
            }
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::BooleanArithmetic => write!(f, "Cannot divide boolean values."),
            Self::NegativeRepeatCount => {
                write!(f, "Cannot repeat string a negative number of times.")
            }
            Self::RepeatLimitExceeded { limit } => {
                write!(f, "Cannot repeat string more than {limit} times.")
            }
            Self::RecursionLimitExceeded { limit } => {
                write!(f, "Expression nesting exceeded the limit of {limit}.")
            }
            Self::DataRead { .. } => write!(f, "Failed to read pattern data."),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Title of the error. Equals `kind.to_string()` for factory-built errors.
    pub message: String,
    /// Longer explanation, if any.
    pub description: Option<String>,
    /// How to fix the error, if we know.
    pub hint: Option<String>,
    /// Source location where the error occurred.
    pub location: Option<Location>,
    /// Locations leading to the error, innermost first.
    pub trace: SmallVec<[Location; 4]>,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            description: None,
            hint: None,
            location: None,
            trace: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attach a source location to this error.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach `location` unless the error already points somewhere.
    ///
    /// Errors raised by a nested node keep the innermost location.
    #[must_use]
    pub fn or_location(mut self, location: &Location) -> Self {
        if self.location.is_none() && !location.is_synthetic() {
            self.location = Some(location.clone());
        }
        self
    }

    /// Append a location to the trace.
    #[must_use]
    pub fn with_trace_entry(mut self, location: Location) -> Self {
        self.trace.push(location);
        self
    }

    /// Append several locations to the trace, innermost first.
    #[must_use]
    pub fn with_trace(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.trace.extend(locations);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(description) = &self.description {
            write!(f, "\n{description}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<DataSourceError> for EvalError {
    fn from(err: DataSourceError) -> Self {
        data_read(&err)
    }
}

// Operand Errors

/// An operand produced no value.
#[cold]
pub fn void_operand() -> EvalError {
    EvalError::from_kind(EvalErrorKind::VoidOperand)
        .with_hint("If you used a function for one of the operands, make sure it returned a value.")
}

/// An operand did not reduce to a literal.
#[cold]
pub fn non_literal_operand() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonLiteralOperand)
}

// Type/Operator Errors

/// Operator not applicable to the operand types.
#[cold]
pub fn invalid_operand(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    let (left, right) = (left.type_name(), right.type_name());
    EvalError::from_kind(EvalErrorKind::InvalidOperand { op, left, right }).with_description(
        format!(
            "operator `{}` cannot be applied to `{left}` and `{right}`",
            op.as_symbol()
        ),
    )
}

/// A value has no interpretation as `target`.
#[cold]
pub fn invalid_cast(from: &str, target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCast {
        from: from.to_string(),
        target,
    })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn boolean_arithmetic() -> EvalError {
    EvalError::from_kind(EvalErrorKind::BooleanArithmetic)
}

#[cold]
pub fn negative_repeat_count() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeRepeatCount)
}

// Limit Errors

#[cold]
pub fn repeat_limit_exceeded(count: i128, limit: u64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RepeatLimitExceeded { limit })
        .with_description(format!("the string was to be repeated {count} times"))
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimitExceeded { limit })
}

// Data Errors

/// Reading the bytes behind a pattern failed.
#[cold]
pub fn data_read(err: &DataSourceError) -> EvalError {
    let message = err.to_string();
    EvalError::from_kind(EvalErrorKind::DataRead {
        message: message.clone(),
    })
    .with_description(message)
}
