//! Evaluation error to diagnostic conversion.
//!
//! # Error Code Ranges
//!
//! - E1xxx: operand errors (void, non-literal)
//! - E2xxx: type/operator errors (invalid operand, invalid cast)
//! - E3xxx: arithmetic errors (division by zero, boolean division, negative repeat)
//! - E4xxx: resource limits (repeat count, nesting depth)
//! - E5xxx: data source errors

use patl_diagnostic::{Diagnostic, ErrorCode};

use super::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    /// Map this error kind to its corresponding `ErrorCode`.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            // Operand
            Self::VoidOperand => ErrorCode::E1001,
            Self::NonLiteralOperand => ErrorCode::E1002,

            // Type/Operator
            Self::InvalidOperand { .. } => ErrorCode::E2001,
            Self::InvalidCast { .. } => ErrorCode::E2002,

            // Arithmetic
            Self::DivisionByZero => ErrorCode::E3001,
            Self::BooleanArithmetic => ErrorCode::E3002,
            Self::NegativeRepeatCount => ErrorCode::E3003,

            // Limits
            Self::RepeatLimitExceeded { .. } => ErrorCode::E4001,
            Self::RecursionLimitExceeded { .. } => ErrorCode::E4002,

            // Data
            Self::DataRead { .. } => ErrorCode::E5001,
        }
    }

    /// Produce an actionable suggestion for fixable errors.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::RepeatLimitExceeded { limit } => Some(format!(
                "keep the repetition count at or below {limit}"
            )),
            Self::RecursionLimitExceeded { .. } => {
                Some("split the expression into smaller parts".to_string())
            }
            _ => None,
        }
    }
}

impl EvalError {
    /// Convert this `EvalError` into a `Diagnostic`.
    ///
    /// An explicit hint on the error wins over the kind's suggestion.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(&self.message)
            .with_trace(self.trace.iter().cloned());

        if let Some(location) = &self.location {
            diag = diag.with_location(location.clone());
        }

        if let Some(description) = &self.description {
            diag = diag.with_description(description);
        }

        if let Some(hint) = self.hint.clone().or_else(|| self.kind.suggestion()) {
            diag = diag.with_hint(hint);
        }

        diag
    }
}
