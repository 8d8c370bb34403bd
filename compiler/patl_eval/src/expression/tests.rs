use super::*;
use patl_ir::Source;
use patl_patterns::{EvalError, EvalErrorKind};
use pretty_assertions::assert_eq;

fn lit(value: Value) -> Box<dyn AstNode> {
    Box::new(LiteralNode::new(value))
}

fn binary(left: Value, right: Value, op: BinaryOp) -> MathematicalExpression {
    MathematicalExpression::new(lit(left), lit(right), op)
}

fn eval(expr: &MathematicalExpression) -> EvalResult {
    Evaluator::new().evaluate_to_value(expr)
}

/// A node that never reduces to a literal.
#[derive(Clone, Debug, Default)]
struct OpaqueNode {
    location: Location,
}

impl AstNode for OpaqueNode {
    fn location(&self) -> &Location {
        &self.location
    }

    fn node_name(&self) -> &'static str {
        "opaque"
    }

    fn evaluate(&self, _: &mut Evaluator<'_>) -> Result<Option<Box<dyn AstNode>>, EvalError> {
        Ok(Some(self.clone_node()))
    }

    fn clone_node(&self) -> Box<dyn AstNode> {
        Box::new(self.clone())
    }
}

/// A node that evaluates to nothing.
#[derive(Clone, Debug, Default)]
struct VoidNode {
    location: Location,
}

impl AstNode for VoidNode {
    fn location(&self) -> &Location {
        &self.location
    }

    fn node_name(&self) -> &'static str {
        "void"
    }

    fn evaluate(&self, _: &mut Evaluator<'_>) -> Result<Option<Box<dyn AstNode>>, EvalError> {
        Ok(None)
    }

    fn clone_node(&self) -> Box<dyn AstNode> {
        Box::new(self.clone())
    }
}

fn literal_value(node: Option<&dyn AstNode>) -> Option<&Value> {
    node.and_then(|n| n.as_literal()).map(LiteralNode::value)
}

#[test]
fn test_evaluates_to_literal_at_own_location() {
    let src = Source::new("e.hexpat", "u8 x = 2 + 3;");
    let loc = Location::new(src, 1, 10, 1);
    let expr =
        binary(Value::Unsigned(2), Value::Unsigned(3), BinaryOp::Add).with_location(loc.clone());

    let mut evaluator = Evaluator::new();
    let result = expr.evaluate(&mut evaluator).ok().flatten();
    let literal = result.as_deref().and_then(|n| n.as_literal());

    assert_eq!(literal.map(LiteralNode::value), Some(&Value::Unsigned(5)));
    assert_eq!(literal.map(|l| l.location().clone()), Some(loc));
}

#[test]
fn test_accessors() {
    let expr = binary(Value::Signed(1), Value::Bool(false), BinaryOp::Shl);
    assert_eq!(expr.operator(), BinaryOp::Shl);
    assert_eq!(
        literal_value(expr.left_operand()),
        Some(&Value::Signed(1))
    );
    assert_eq!(
        literal_value(expr.right_operand()),
        Some(&Value::Bool(false))
    );
    assert_eq!(expr.node_name(), "mathematical expression");
}

#[test]
fn test_children_untouched_by_evaluation() {
    let expr = binary(Value::string("ab"), Value::Unsigned(2), BinaryOp::Mul);
    assert_eq!(eval(&expr).ok(), Some(Value::string("abab")));
    assert_eq!(eval(&expr).ok(), Some(Value::string("abab")));
    assert_eq!(literal_value(expr.left_operand()), Some(&Value::string("ab")));
    assert_eq!(literal_value(expr.right_operand()), Some(&Value::Unsigned(2)));
}

#[test]
fn test_clone_is_independent_and_equivalent() {
    let original = binary(Value::Signed(-9), Value::Signed(4), BinaryOp::Mod);
    let copy = original.clone();
    drop(original);
    assert_eq!(eval(&copy).ok(), Some(Value::Signed(-1)));

    let boxed: Box<dyn AstNode> = Box::new(copy.clone());
    let mut evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate_to_value(boxed.clone().as_ref()).ok(),
        eval(&copy).ok()
    );
}

#[test]
fn test_nested_expressions() {
    // (2 + 3) * 4
    let inner = binary(Value::Unsigned(2), Value::Unsigned(3), BinaryOp::Add);
    let outer = MathematicalExpression::new(
        Box::new(inner),
        lit(Value::Unsigned(4)),
        BinaryOp::Mul,
    );
    assert_eq!(eval(&outer).ok(), Some(Value::Unsigned(20)));
}

#[test]
fn test_missing_operand_is_void() {
    let expr =
        MathematicalExpression::from_parts(Some(lit(Value::Unsigned(1))), None, BinaryOp::Add);
    let err = eval(&expr).err();
    assert_eq!(
        err.as_ref().map(|e| &e.kind),
        Some(&EvalErrorKind::VoidOperand)
    );
    assert!(err.and_then(|e| e.hint).is_some());

    let expr =
        MathematicalExpression::from_parts(None, Some(lit(Value::Unsigned(1))), BinaryOp::Add);
    assert_eq!(
        eval(&expr).err().map(|e| e.kind),
        Some(EvalErrorKind::VoidOperand)
    );
}

#[test]
fn test_void_child_is_void_operand() {
    let expr = MathematicalExpression::new(
        Box::new(VoidNode::default()),
        lit(Value::Unsigned(1)),
        BinaryOp::Add,
    );
    assert_eq!(
        eval(&expr).err().map(|e| e.kind),
        Some(EvalErrorKind::VoidOperand)
    );
}

#[test]
fn test_non_literal_child() {
    let src = Source::new("n.hexpat", "a + 1");
    let opaque_loc = Location::new(src.clone(), 1, 1, 1);
    let expr_loc = Location::new(src, 1, 3, 1);
    let expr = MathematicalExpression::new(
        Box::new(OpaqueNode {
            location: opaque_loc.clone(),
        }),
        lit(Value::Unsigned(1)),
        BinaryOp::Add,
    )
    .with_location(expr_loc.clone());

    let err = eval(&expr).err();
    assert_eq!(
        err.as_ref().map(|e| &e.kind),
        Some(&EvalErrorKind::NonLiteralOperand)
    );
    // Reported at the expression, not at the operand.
    assert_eq!(err.and_then(|e| e.location), Some(expr_loc));
}

#[test]
fn test_error_gets_expression_location() {
    let src = Source::new("z.hexpat", "u8 x = 1 / 0;");
    let loc = Location::new(src, 1, 10, 1);
    let expr =
        binary(Value::Unsigned(1), Value::Unsigned(0), BinaryOp::Div).with_location(loc.clone());

    let err = eval(&expr).err();
    assert_eq!(
        err.as_ref().map(|e| &e.kind),
        Some(&EvalErrorKind::DivisionByZero)
    );
    assert_eq!(err.and_then(|e| e.location), Some(loc));
}

#[test]
fn test_nested_error_keeps_innermost_location() {
    let src = Source::new("z.hexpat", "(1 / 0) + 2");
    let inner_loc = Location::new(src.clone(), 1, 4, 1);
    let outer_loc = Location::new(src, 1, 9, 1);
    let inner = binary(Value::Unsigned(1), Value::Unsigned(0), BinaryOp::Div)
        .with_location(inner_loc.clone());
    let outer =
        MathematicalExpression::new(Box::new(inner), lit(Value::Unsigned(2)), BinaryOp::Add)
            .with_location(outer_loc.clone());

    let err = eval(&outer).err();
    assert_eq!(err.as_ref().and_then(|e| e.location.clone()), Some(inner_loc));
    let trace: Vec<Location> = err.map(|e| e.trace.to_vec()).unwrap_or_default();
    assert_eq!(trace, vec![outer_loc]);
}

#[test]
fn test_trace_lists_enclosing_expressions_innermost_first() {
    let src = Source::new("z.hexpat", "((1 % 0) + 2) * 3");
    let loc = |column| Location::new(src.clone(), 1, column, 1);

    let failing = binary(Value::Unsigned(1), Value::Unsigned(0), BinaryOp::Mod)
        .with_location(loc(5));
    let middle =
        MathematicalExpression::new(Box::new(failing), lit(Value::Unsigned(2)), BinaryOp::Add)
            .with_location(loc(10));
    let outer =
        MathematicalExpression::new(Box::new(middle), lit(Value::Unsigned(3)), BinaryOp::Mul)
            .with_location(loc(15));

    let err = eval(&outer).err();
    let columns: Vec<u32> = err
        .map(|e| e.trace.iter().map(|l| l.column).collect())
        .unwrap_or_default();
    assert_eq!(columns, vec![10, 15]);
}

#[test]
fn test_synthetic_enclosing_expressions_are_not_traced() {
    let src = Source::new("z.hexpat", "1 / 0");
    let failing = binary(Value::Unsigned(1), Value::Unsigned(0), BinaryOp::Div)
        .with_location(Location::new(src, 1, 3, 1));
    let outer =
        MathematicalExpression::new(Box::new(failing), lit(Value::Unsigned(1)), BinaryOp::Add);

    let err = eval(&outer).err();
    assert_eq!(err.map(|e| e.trace.len()), Some(0));
}

#[test]
fn test_left_failure_skips_right() {
    /// Panics if evaluated.
    #[derive(Clone, Debug, Default)]
    struct Unreachable {
        location: Location,
    }

    impl AstNode for Unreachable {
        fn location(&self) -> &Location {
            &self.location
        }

        fn node_name(&self) -> &'static str {
            "unreachable"
        }

        fn evaluate(
            &self,
            _: &mut Evaluator<'_>,
        ) -> Result<Option<Box<dyn AstNode>>, EvalError> {
            panic!("right operand evaluated after the left one failed");
        }

        fn clone_node(&self) -> Box<dyn AstNode> {
            Box::new(self.clone())
        }
    }

    let failing = binary(Value::Unsigned(1), Value::Unsigned(0), BinaryOp::Mod);
    let expr = MathematicalExpression::new(
        Box::new(failing),
        Box::new(Unreachable::default()),
        BinaryOp::Add,
    );
    assert_eq!(
        eval(&expr).err().map(|e| e.kind),
        Some(EvalErrorKind::DivisionByZero)
    );
}

#[test]
fn test_runtime_stack_unwound_after_error() {
    let expr = binary(Value::Bool(true), Value::Bool(true), BinaryOp::Div);
    let mut evaluator = Evaluator::new();
    assert!(evaluator.evaluate_to_value(&expr).is_err());
    assert!(evaluator.runtime().is_empty());
}

#[test]
fn test_nested_repetition_is_bounded() {
    // ("ab" * 2^20) * 2^20 would need 2 TiB.
    let inner = binary(Value::string("ab"), Value::Unsigned(1 << 20), BinaryOp::Mul);
    let outer = MathematicalExpression::new(
        Box::new(inner),
        lit(Value::Unsigned(1 << 20)),
        BinaryOp::Mul,
    );

    let mut evaluator = Evaluator::new();
    let err = evaluator.evaluate_to_value(&outer).err().map(|e| e.kind);
    // 16 MiB holds eight copies of the 2 MiB inner result.
    assert_eq!(err, Some(EvalErrorKind::RepeatLimitExceeded { limit: 8 }));
    assert!(evaluator.runtime().is_empty());
}

fn chain(depth: usize) -> MathematicalExpression {
    let mut expr = binary(Value::Unsigned(0), Value::Unsigned(1), BinaryOp::Add);
    for _ in 1..depth {
        expr =
            MathematicalExpression::new(Box::new(expr), lit(Value::Unsigned(1)), BinaryOp::Add);
    }
    expr
}

#[test]
fn test_depth_limit() {
    let expr = chain(10);

    let mut limited = Evaluator::builder().max_depth(5).build();
    assert_eq!(
        limited.evaluate_to_value(&expr).err().map(|e| e.kind),
        Some(EvalErrorKind::RecursionLimitExceeded { limit: 5 })
    );
    assert!(limited.runtime().is_empty());

    let mut enough = Evaluator::builder().max_depth(10).build();
    assert_eq!(enough.evaluate_to_value(&expr).ok(), Some(Value::Unsigned(10)));
}

#[test]
fn test_deep_tree() {
    let expr = chain(2_000);
    assert_eq!(eval(&expr).ok(), Some(Value::Unsigned(2_000)));
}
