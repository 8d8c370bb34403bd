//! Runtime values of the expression core.
//!
//! A [`Value`] is what a literal node holds. Numeric conversions follow
//! fixed-width cast semantics: integers wrap, floats saturate when narrowed
//! to an integer, and anything converts to `bool` as "non-zero".

use std::fmt;
use std::sync::Arc;

use crate::errors::{invalid_cast, EvalError};
use crate::pattern::{Pattern, SharedPattern};

/// A concrete runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Unsigned integer (widest unsigned category).
    Unsigned(u128),
    /// Signed integer (widest signed category).
    Signed(i128),
    /// Double-precision float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Single character.
    Char(char),
    /// Owned string.
    String(String),
    /// Shared, read-only handle onto a decoded pattern.
    Pattern(SharedPattern),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Name of the value's type as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unsigned(_) => "unsigned",
            Value::Signed(_) => "signed",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::String(_) => "str",
            Value::Pattern(_) => "pattern",
        }
    }

    /// Convert to an unsigned integer.
    ///
    /// # Errors
    ///
    /// Strings and patterns have no numeric interpretation.
    pub fn to_unsigned(&self) -> Result<u128, EvalError> {
        match self {
            Value::Unsigned(v) => Ok(*v),
            Value::Signed(v) => Ok(*v as u128),
            Value::Float(v) => Ok(*v as u128),
            Value::Bool(b) => Ok(u128::from(*b)),
            Value::Char(c) => Ok(u128::from(u32::from(*c))),
            Value::String(_) | Value::Pattern(_) => Err(invalid_cast(self.type_name(), "unsigned")),
        }
    }

    /// Convert to a signed integer.
    ///
    /// # Errors
    ///
    /// Strings and patterns have no numeric interpretation.
    pub fn to_signed(&self) -> Result<i128, EvalError> {
        match self {
            Value::Unsigned(v) => Ok(*v as i128),
            Value::Signed(v) => Ok(*v),
            Value::Float(v) => Ok(*v as i128),
            Value::Bool(b) => Ok(i128::from(*b)),
            Value::Char(c) => Ok(i128::from(u32::from(*c))),
            Value::String(_) | Value::Pattern(_) => Err(invalid_cast(self.type_name(), "signed")),
        }
    }

    /// Convert to a float.
    ///
    /// # Errors
    ///
    /// Strings and patterns have no numeric interpretation.
    pub fn to_float(&self) -> Result<f64, EvalError> {
        match self {
            Value::Unsigned(v) => Ok(*v as f64),
            Value::Signed(v) => Ok(*v as f64),
            Value::Float(v) => Ok(*v),
            Value::Bool(b) => Ok(f64::from(u8::from(*b))),
            Value::Char(c) => Ok(f64::from(u32::from(*c))),
            Value::String(_) | Value::Pattern(_) => Err(invalid_cast(self.type_name(), "float")),
        }
    }

    /// Convert to a boolean ("non-zero").
    ///
    /// # Errors
    ///
    /// Strings and patterns have no boolean interpretation.
    pub fn to_bool(&self) -> Result<bool, EvalError> {
        match self {
            Value::Unsigned(v) => Ok(*v != 0),
            Value::Signed(v) => Ok(*v != 0),
            Value::Float(v) => Ok(*v != 0.0),
            Value::Bool(b) => Ok(*b),
            Value::Char(c) => Ok(*c != '\0'),
            Value::String(_) | Value::Pattern(_) => Err(invalid_cast(self.type_name(), "bool")),
        }
    }

    /// The user-facing string form of the value.
    ///
    /// Unlike `Display`, strings and chars are not quoted and patterns show
    /// their formatted value rather than their placement.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Unsigned(v) => v.to_string(),
            Value::Signed(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => c.to_string(),
            Value::String(s) => s.clone(),
            Value::Pattern(p) => p.display_value(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Signed(a), Value::Signed(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            // Handles are equal when they point at the same pattern
            (Value::Pattern(a), Value::Pattern(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{v}"),
            Value::Signed(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Pattern(p) => write!(
                f,
                "<pattern at {:#x}, {} bytes, {}>",
                p.offset(),
                p.size(),
                p.section()
            ),
        }
    }
}

impl From<u128> for Value {
    fn from(v: u128) -> Self {
        Value::Unsigned(v)
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Value::Signed(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<SharedPattern> for Value {
    fn from(p: SharedPattern) -> Self {
        Value::Pattern(p)
    }
}

#[cfg(test)]
mod tests;
