//! Numeric, boolean and character operand dispatcher.
//!
//! Both operands are cast to a common result kind chosen by
//! [`NumericKind::promote`], except for relational operators, which cast
//! the right operand to the left operand's own type.

use std::cmp::Ordering;

use patl_ir::BinaryOp;
use patl_patterns::{boolean_arithmetic, division_by_zero, invalid_operand, EvalResult, Value};

use super::relation_holds;

/// Type category of a numeric, boolean or character operand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumericKind {
    Unsigned,
    Signed,
    Float,
    Bool,
    Char,
}

impl NumericKind {
    /// Every kind, in declaration order.
    pub const ALL: [NumericKind; 5] = [
        NumericKind::Unsigned,
        NumericKind::Signed,
        NumericKind::Float,
        NumericKind::Bool,
        NumericKind::Char,
    ];

    /// The kind of `value`, or `None` for strings and patterns.
    pub fn of(value: &Value) -> Option<Self> {
        Num::of(value).map(Num::kind)
    }

    /// Result kind of a binary operator applied to `self` and `other`.
    ///
    /// Float wins over everything, then unsigned, then signed. Characters
    /// combined with characters or booleans widen to signed. Commutative.
    pub fn promote(self, other: Self) -> Self {
        match (self, other) {
            (Self::Float, _) | (_, Self::Float) => Self::Float,
            (Self::Unsigned, _) | (_, Self::Unsigned) => Self::Unsigned,
            (Self::Signed | Self::Char, _) | (_, Self::Signed | Self::Char) => Self::Signed,
            (Self::Bool, Self::Bool) => Self::Bool,
        }
    }
}

/// A numeric operand in its native representation.
#[derive(Copy, Clone, Debug)]
enum Num {
    Unsigned(u128),
    Signed(i128),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Num {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Unsigned(v) => Some(Num::Unsigned(*v)),
            Value::Signed(v) => Some(Num::Signed(*v)),
            Value::Float(v) => Some(Num::Float(*v)),
            Value::Bool(b) => Some(Num::Bool(*b)),
            Value::Char(c) => Some(Num::Char(*c)),
            Value::String(_) | Value::Pattern(_) => None,
        }
    }

    fn kind(self) -> NumericKind {
        match self {
            Num::Unsigned(_) => NumericKind::Unsigned,
            Num::Signed(_) => NumericKind::Signed,
            Num::Float(_) => NumericKind::Float,
            Num::Bool(_) => NumericKind::Bool,
            Num::Char(_) => NumericKind::Char,
        }
    }

    fn as_u128(self) -> u128 {
        match self {
            Num::Unsigned(v) => v,
            Num::Signed(v) => v as u128,
            Num::Float(v) => v as u128,
            Num::Bool(b) => u128::from(b),
            Num::Char(c) => u128::from(u32::from(c)),
        }
    }

    fn as_i128(self) -> i128 {
        match self {
            Num::Unsigned(v) => v as i128,
            Num::Signed(v) => v,
            Num::Float(v) => v as i128,
            Num::Bool(b) => i128::from(b),
            Num::Char(c) => i128::from(u32::from(c)),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Num::Unsigned(v) => v as f64,
            Num::Signed(v) => v as f64,
            Num::Float(v) => v,
            Num::Bool(b) => f64::from(u8::from(b)),
            Num::Char(c) => f64::from(u32::from(c)),
        }
    }

    /// Code point a value converts to when compared against a character.
    fn as_code_point(self) -> u32 {
        match self {
            Num::Unsigned(v) => v as u32,
            Num::Signed(v) => v as u32,
            Num::Float(v) => v as u32,
            Num::Bool(b) => u32::from(b),
            Num::Char(c) => u32::from(c),
        }
    }

    fn truthy(self) -> bool {
        match self {
            Num::Unsigned(v) => v != 0,
            Num::Signed(v) => v != 0,
            Num::Float(v) => v != 0.0,
            Num::Bool(b) => b,
            Num::Char(c) => c != '\0',
        }
    }

    /// Compare with `right` cast to this operand's own type.
    fn compare(self, right: Num) -> Option<Ordering> {
        match self {
            Num::Unsigned(a) => Some(a.cmp(&right.as_u128())),
            Num::Signed(a) => Some(a.cmp(&right.as_i128())),
            Num::Float(a) => a.partial_cmp(&right.as_f64()),
            Num::Bool(a) => Some(a.cmp(&right.truthy())),
            Num::Char(a) => Some(u32::from(a).cmp(&right.as_code_point())),
        }
    }
}

/// Evaluate an operation on two numeric, boolean or character operands.
pub(super) fn eval_numeric_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Some(l), Some(r)) = (Num::of(left), Num::of(right)) else {
        return Err(invalid_operand(op, left, right));
    };

    let kind = l.kind().promote(r.kind());
    tracing::debug!(left = ?l.kind(), right = ?r.kind(), result = ?kind, "numeric promotion");

    let result = match op {
        BinaryOp::Div | BinaryOp::Mod => return eval_division(kind, l, r, op),
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Gt
        | BinaryOp::Lt
        | BinaryOp::GtEq
        | BinaryOp::LtEq => Some(Value::Bool(relation_holds(l.compare(r), op))),
        BinaryOp::And => Some(Value::Bool(l.truthy() && r.truthy())),
        BinaryOp::Or => Some(Value::Bool(l.truthy() || r.truthy())),
        BinaryOp::Xor => Some(Value::Bool(l.truthy() != r.truthy())),
        // Unary operators in binary position apply to the right operand only
        BinaryOp::Not => Some(Value::Bool(!r.truthy())),
        BinaryOp::BitNot => complement(kind, r),
        _ => eval_in_kind(kind, l, r, op),
    };

    result.ok_or_else(|| invalid_operand(op, left, right))
}

/// `+ - * << >> & ^ |` with both operands cast to `kind`.
fn eval_in_kind(kind: NumericKind, l: Num, r: Num, op: BinaryOp) -> Option<Value> {
    match kind {
        NumericKind::Unsigned => eval_unsigned(l.as_u128(), r.as_u128(), shift_amount(r), op)
            .map(Value::Unsigned),
        NumericKind::Signed | NumericKind::Char => {
            eval_signed(l.as_i128(), r.as_i128(), shift_amount(r), op).map(Value::Signed)
        }
        NumericKind::Bool => eval_signed(l.as_i128(), r.as_i128(), shift_amount(r), op)
            .map(|v| Value::Bool(v != 0)),
        NumericKind::Float => {
            let (a, b) = (l.as_f64(), r.as_f64());
            match op {
                BinaryOp::Add => Some(Value::Float(a + b)),
                BinaryOp::Sub => Some(Value::Float(a - b)),
                BinaryOp::Mul => Some(Value::Float(a * b)),
                _ => None,
            }
        }
    }
}

fn eval_unsigned(a: u128, b: u128, shift: u32, op: BinaryOp) -> Option<u128> {
    Some(match op {
        BinaryOp::Add => a.wrapping_add(b),
        BinaryOp::Sub => a.wrapping_sub(b),
        BinaryOp::Mul => a.wrapping_mul(b),
        BinaryOp::Shl => a.wrapping_shl(shift),
        BinaryOp::Shr => a.wrapping_shr(shift),
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitXor => a ^ b,
        BinaryOp::BitOr => a | b,
        _ => return None,
    })
}

fn eval_signed(a: i128, b: i128, shift: u32, op: BinaryOp) -> Option<i128> {
    Some(match op {
        BinaryOp::Add => a.wrapping_add(b),
        BinaryOp::Sub => a.wrapping_sub(b),
        BinaryOp::Mul => a.wrapping_mul(b),
        BinaryOp::Shl => a.wrapping_shl(shift),
        BinaryOp::Shr => a.wrapping_shr(shift),
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitXor => a ^ b,
        BinaryOp::BitOr => a | b,
        _ => return None,
    })
}

/// Shift distance: the right operand reduced modulo the operand width.
fn shift_amount(r: Num) -> u32 {
    r.as_i128().rem_euclid(128) as u32
}

/// `~` applied to the right operand cast to `kind`.
fn complement(kind: NumericKind, r: Num) -> Option<Value> {
    match kind {
        NumericKind::Unsigned => Some(Value::Unsigned(!r.as_u128())),
        NumericKind::Signed | NumericKind::Char => Some(Value::Signed(!r.as_i128())),
        NumericKind::Bool => Some(Value::Bool(!r.as_i128() != 0)),
        NumericKind::Float => None,
    }
}

/// `/` and `%`.
///
/// A zero divisor is checked in the divisor's own type before anything
/// else; boolean division is rejected only after that.
fn eval_division(kind: NumericKind, l: Num, r: Num, op: BinaryOp) -> EvalResult {
    if !r.truthy() {
        return Err(division_by_zero());
    }

    let is_div = op == BinaryOp::Div;
    match kind {
        NumericKind::Bool => Err(boolean_arithmetic()),
        NumericKind::Unsigned => {
            let (a, b) = (l.as_u128(), r.as_u128());
            let result = if is_div { a.checked_div(b) } else { a.checked_rem(b) };
            result.map(Value::Unsigned).ok_or_else(division_by_zero)
        }
        NumericKind::Signed | NumericKind::Char => {
            let (a, b) = (l.as_i128(), r.as_i128());
            if b == 0 {
                return Err(division_by_zero());
            }
            let result = if is_div {
                a.wrapping_div(b)
            } else {
                a.wrapping_rem(b)
            };
            Ok(Value::Signed(result))
        }
        NumericKind::Float => {
            let (a, b) = (l.as_f64(), r.as_f64());
            Ok(Value::Float(if is_div { a / b } else { a % b }))
        }
    }
}
