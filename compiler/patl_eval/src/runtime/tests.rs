use super::*;
use crate::{LiteralNode, Value};
use patl_ir::Source;
use patl_patterns::EvalErrorKind;
use pretty_assertions::assert_eq;

fn frame(line: u32) -> RuntimeFrame {
    let src = Source::new("r.hexpat", "a\nb\nc\nd");
    RuntimeFrame {
        name: "mathematical expression",
        location: Location::new(src, line, 1, 1),
    }
}

#[test]
fn test_push_pop() {
    let mut stack = RuntimeStack::new(None);
    assert!(stack.is_empty());
    assert_eq!(stack.push(frame(1)).ok(), Some(()));
    assert_eq!(stack.push(frame(2)).ok(), Some(()));
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.trace().next().map(|l| l.line), Some(2));

    stack.pop();
    assert_eq!(stack.trace().next().map(|l| l.line), Some(1));
}

#[test]
fn test_depth_limit() {
    let mut stack = RuntimeStack::new(Some(2));
    assert!(stack.push(frame(1)).is_ok());
    assert!(stack.push(frame(2)).is_ok());

    let err = stack.push(frame(3)).err().map(|e| e.kind);
    assert_eq!(err, Some(EvalErrorKind::RecursionLimitExceeded { limit: 2 }));
    // The failed frame is not pushed.
    assert_eq!(stack.depth(), 2);
}

#[test]
fn test_depth_limit_error_lists_enclosing_frames() {
    let mut stack = RuntimeStack::new(Some(2));
    assert!(stack.push(frame(1)).is_ok());
    assert!(stack.push(frame(2)).is_ok());

    let lines: Vec<u32> = stack
        .push(frame(3))
        .err()
        .map(|e| e.trace.iter().map(|l| l.line).collect())
        .unwrap_or_default();
    assert_eq!(lines, vec![2, 1]);
}

#[test]
fn test_trace_is_innermost_first() {
    let mut stack = RuntimeStack::new(None);
    for line in 1..=3 {
        assert!(stack.push(frame(line)).is_ok());
    }
    let lines: Vec<u32> = stack.trace().map(|l| l.line).collect();
    assert_eq!(lines, vec![3, 2, 1]);
}

#[test]
fn test_guard_pops_on_drop() {
    let mut evaluator = Evaluator::new();
    let node = LiteralNode::new(Value::Unsigned(1));
    {
        let scoped = evaluator.update_runtime(&node);
        assert_eq!(scoped.map(|g| g.runtime().depth()).ok(), Some(1));
    }
    assert!(evaluator.runtime().is_empty());
}

#[test]
fn test_guards_nest() {
    let mut evaluator = Evaluator::new();
    let outer = LiteralNode::new(Value::Unsigned(1));
    let inner = LiteralNode::new(Value::Unsigned(2));

    let Ok(mut scoped) = evaluator.update_runtime(&outer) else {
        panic!("no depth limit configured");
    };
    {
        let nested = scoped.update_runtime(&inner);
        assert_eq!(nested.map(|g| g.runtime().depth()).ok(), Some(2));
    }
    assert_eq!(scoped.runtime().depth(), 1);
    drop(scoped);
    assert_eq!(evaluator.runtime().depth(), 0);
}

#[test]
fn test_guard_pops_during_unwind() {
    let mut evaluator = Evaluator::new();
    let node = LiteralNode::new(Value::Unsigned(1));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _scoped = evaluator.update_runtime(&node);
        panic!("evaluation aborted");
    }));

    assert!(result.is_err());
    assert!(evaluator.runtime().is_empty());
}

#[test]
fn test_update_runtime_respects_limit() {
    let mut evaluator = Evaluator::builder().max_depth(0).build();
    let node = LiteralNode::new(Value::Unsigned(1));
    let err = evaluator.update_runtime(&node).err().map(|e| e.kind);
    assert_eq!(err, Some(EvalErrorKind::RecursionLimitExceeded { limit: 0 }));
    assert!(evaluator.runtime().is_empty());
}
