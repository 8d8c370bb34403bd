//! Error codes for evaluator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E3001`) whose first digit
//! names the failure category. Codes are stable so they can be searched for
//! and documented.

use std::fmt;

/// Error codes for all evaluator diagnostics.
///
/// Format: E#### where the first digit indicates the category:
/// - E1xxx: Operand errors (missing or non-literal operands)
/// - E2xxx: Type/operator errors
/// - E3xxx: Arithmetic errors
/// - E4xxx: Resource limit errors
/// - E5xxx: Data source errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Operand Errors (E1xxx)
    /// Operand produced no value
    E1001,
    /// Operand is not a literal
    E1002,

    // Type/Operator Errors (E2xxx)
    /// Operator not applicable to operand types
    E2001,
    /// Value cannot be converted to the requested type
    E2002,

    // Arithmetic Errors (E3xxx)
    /// Division or modulus by zero
    E3001,
    /// Division or modulus of boolean values
    E3002,
    /// String repeated a negative number of times
    E3003,

    // Resource Limit Errors (E4xxx)
    /// String repetition count above the configured limit
    E4001,
    /// Expression nesting above the configured depth limit
    E4002,

    // Data Source Errors (E5xxx)
    /// Reading pattern bytes from the data source failed
    E5001,
}

impl ErrorCode {
    /// Every error code, in declaration order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E5001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E5001 => "E5001",
        }
    }

    /// One-line explanation of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "an operand of a binary expression produced no value",
            ErrorCode::E1002 => "an operand of a binary expression did not reduce to a literal",
            ErrorCode::E2001 => "the operator cannot be applied to the operand types",
            ErrorCode::E2002 => "a value could not be converted to the type required by its peer",
            ErrorCode::E3001 => "the right-hand side of a division or modulus was zero",
            ErrorCode::E3002 => "division and modulus are not defined for boolean values",
            ErrorCode::E3003 => "a string was repeated a negative number of times",
            ErrorCode::E4001 => "a string repetition exceeded the configured repeat limit",
            ErrorCode::E4002 => "expression nesting exceeded the configured depth limit",
            ErrorCode::E5001 => "the bytes backing a pattern could not be read",
        }
    }

    /// Check if this is an operand error (E1xxx range).
    pub fn is_operand_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Check if this is a type/operator error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }

    /// Check if this is an arithmetic error (E3xxx range).
    pub fn is_arithmetic_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003)
    }

    /// Check if this is a resource limit error (E4xxx range).
    pub fn is_limit_error(&self) -> bool {
        matches!(self, ErrorCode::E4001 | ErrorCode::E4002)
    }

    /// Check if this is a data source error (E5xxx range).
    pub fn is_data_error(&self) -> bool {
        matches!(self, ErrorCode::E5001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
