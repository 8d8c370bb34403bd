//! String operand dispatcher.

use patl_ir::BinaryOp;
use patl_patterns::{
    invalid_operand, negative_repeat_count, repeat_limit_exceeded, EvalResult, Value,
};

use super::relation_holds;
use crate::{EvalLimits, Evaluator};

/// Evaluate an operation where at least one side is a string.
pub(super) fn eval_string_binary(
    evaluator: &Evaluator<'_>,
    left: &Value,
    right: &Value,
    op: BinaryOp,
) -> EvalResult {
    match (left, right, op) {
        (Value::String(a), Value::String(b), BinaryOp::Add) => {
            let mut result = String::with_capacity(a.len() + b.len());
            result.push_str(a);
            result.push_str(b);
            Ok(Value::String(result))
        }
        (Value::String(a), Value::String(b), _) if op.is_relational() => {
            Ok(Value::Bool(relation_holds(Some(a.cmp(b)), op)))
        }
        (Value::String(a), Value::Char(c), BinaryOp::Add) => {
            let mut result = a.clone();
            result.push(*c);
            Ok(Value::String(result))
        }
        (Value::Char(c), Value::String(b), BinaryOp::Add) => {
            let mut result = String::with_capacity(c.len_utf8() + b.len());
            result.push(*c);
            result.push_str(b);
            Ok(Value::String(result))
        }
        (
            Value::String(s),
            count @ (Value::Unsigned(_) | Value::Signed(_) | Value::Float(_) | Value::Bool(_)),
            BinaryOp::Mul,
        ) => repeat(evaluator, s, count.to_signed()?),
        _ => Err(invalid_operand(op, left, right)),
    }
}

/// Repeat `s` `count` times.
///
/// The count is capped by `max_repeat_count` and by how many copies of `s`
/// fit in `max_string_len` bytes; the result buffer is reserved fallibly.
fn repeat(evaluator: &Evaluator<'_>, s: &str, count: i128) -> EvalResult {
    if count < 0 {
        return Err(negative_repeat_count());
    }

    let limit = repeat_limit(evaluator.limits(), s.len());
    let Some(copies) = u64::try_from(count).ok().filter(|&copies| copies <= limit) else {
        tracing::warn!(count = %count, limit, len = s.len(), "string repetition limit reached");
        return Err(repeat_limit_exceeded(count, limit));
    };

    // copies * len <= max_string_len, so the product cannot overflow
    let mut result = String::new();
    let reserved = usize::try_from(copies * s.len() as u64)
        .is_ok_and(|bytes| result.try_reserve_exact(bytes).is_ok());
    if !reserved {
        tracing::warn!(count = %count, len = s.len(), "string repetition allocation failed");
        return Err(repeat_limit_exceeded(count, limit));
    }

    for _ in 0..copies {
        result.push_str(s);
    }
    Ok(Value::String(result))
}

/// Largest repetition count allowed for a string of `len` bytes.
fn repeat_limit(limits: &EvalLimits, len: usize) -> u64 {
    match u64::try_from(len) {
        Ok(0) => limits.max_repeat_count,
        Ok(len) => limits.max_repeat_count.min(limits.max_string_len / len),
        Err(_) => 0,
    }
}
