//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch on the operand type pair. The type
//! set is closed, so pattern matching is preferred over trait objects.
//!
//! Dispatch order:
//! 1. pattern × pattern compares raw bytes
//! 2. pattern × scalar decodes the pattern to the scalar's type
//! 3. any string operand goes to the string dispatcher
//! 4. everything else is numeric/boolean/character

use std::cmp::Ordering;

use patl_ir::BinaryOp;
use patl_patterns::{invalid_operand, EvalResult, Value};

use crate::Evaluator;

mod numeric;
mod pattern;
mod string;

pub use numeric::NumericKind;

/// Evaluate a binary operation on two literal values.
pub fn evaluate_binary(
    evaluator: &Evaluator<'_>,
    left: &Value,
    right: &Value,
    op: BinaryOp,
) -> EvalResult {
    tracing::trace!(
        op = op.as_symbol(),
        left = left.type_name(),
        right = right.type_name(),
        "binary operation"
    );

    match (left, right) {
        (Value::Pattern(a), Value::Pattern(b)) => pattern::eval_pattern_binary(evaluator, a, b, op),
        (Value::Pattern(p), scalar) => {
            let decoded = pattern::decode_like(p, scalar)?;
            eval_relational_scalar(evaluator, &decoded, scalar, op)
        }
        (scalar, Value::Pattern(p)) => {
            let decoded = pattern::decode_like(p, scalar)?;
            eval_relational_scalar(evaluator, scalar, &decoded, op)
        }
        (Value::String(_), _) | (_, Value::String(_)) => {
            string::eval_string_binary(evaluator, left, right, op)
        }
        _ => numeric::eval_numeric_binary(left, right, op),
    }
}

/// Relational comparison of a scalar pair produced by pattern decoding.
fn eval_relational_scalar(
    evaluator: &Evaluator<'_>,
    left: &Value,
    right: &Value,
    op: BinaryOp,
) -> EvalResult {
    if !op.is_relational() {
        return Err(invalid_operand(op, left, right));
    }
    evaluate_binary(evaluator, left, right, op)
}

/// Apply a relational operator to the result of a comparison.
///
/// Unordered operands (NaN) are only unequal.
fn relation_holds(ordering: Option<Ordering>, op: BinaryOp) -> bool {
    let Some(ordering) = ordering else {
        return op == BinaryOp::NotEq;
    };
    match op {
        BinaryOp::Eq => ordering.is_eq(),
        BinaryOp::NotEq => ordering.is_ne(),
        BinaryOp::Gt => ordering.is_gt(),
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::GtEq => ordering.is_ge(),
        BinaryOp::LtEq => ordering.is_le(),
        _ => false,
    }
}
