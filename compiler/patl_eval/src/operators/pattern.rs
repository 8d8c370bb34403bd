//! Pattern operands.
//!
//! Two patterns compare by the raw bytes they cover. A pattern against a
//! scalar compares by its decoded value, interpreted in the scalar's type.

use patl_ir::BinaryOp;
use patl_patterns::{
    data_read, invalid_operand, DataSourceError, EvalResult, Pattern, SharedPattern, Value,
};

use crate::Evaluator;

/// `==` / `!=` on the bytes behind two patterns.
///
/// Both patterns are read before the operator is checked; every call
/// issues two fresh reads.
pub(super) fn eval_pattern_binary(
    evaluator: &Evaluator<'_>,
    left: &SharedPattern,
    right: &SharedPattern,
    op: BinaryOp,
) -> EvalResult {
    let left_bytes = read_bytes(evaluator, left.as_ref())?;
    let right_bytes = read_bytes(evaluator, right.as_ref())?;

    if !op.is_equality() {
        return Err(invalid_operand(
            op,
            &Value::Pattern(left.clone()),
            &Value::Pattern(right.clone()),
        ));
    }
    Ok(Value::Bool((left_bytes == right_bytes) == (op == BinaryOp::Eq)))
}

/// Decode `pattern` with the interpretation matching `peer`'s type.
///
/// Characters compare against the signed interpretation. Strings compare
/// against the pattern's formatted display string, not its raw value.
pub(super) fn decode_like(pattern: &SharedPattern, peer: &Value) -> EvalResult {
    let decoded = match peer {
        Value::Unsigned(_) => Value::Unsigned(pattern.value().to_unsigned()?),
        Value::Signed(_) | Value::Char(_) => Value::Signed(pattern.value().to_signed()?),
        Value::Float(_) => Value::Float(pattern.value().to_float()?),
        Value::Bool(_) => Value::Bool(pattern.value().to_bool()?),
        Value::String(_) => Value::String(pattern.display_value()),
        Value::Pattern(_) => pattern.value(),
    };
    tracing::trace!(
        offset = pattern.offset(),
        as_type = decoded.type_name(),
        "decoded pattern operand"
    );
    Ok(decoded)
}

fn read_bytes(evaluator: &Evaluator<'_>, pattern: &dyn Pattern) -> EvalResult<Vec<u8>> {
    let size = usize::try_from(pattern.size()).map_err(|_| {
        data_read(&DataSourceError::Other(format!(
            "pattern of {} bytes does not fit in memory",
            pattern.size()
        )))
    })?;
    let mut buffer = vec![0; size];
    evaluator.read_data(pattern.offset(), &mut buffer, pattern.section())?;
    Ok(buffer)
}
