//! The binary-expression node.

use patl_ir::{BinaryOp, Location};
use patl_patterns::{non_literal_operand, void_operand, EvalError, EvalResult, Value};

use crate::node::{AstNode, LiteralNode};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::Evaluator;

/// A binary mathematical, bitwise, logical or relational expression.
///
/// Operand slots are optional so a parser can represent a void operand;
/// such an expression fails to evaluate with `VoidOperand`.
#[derive(Clone, Debug)]
pub struct MathematicalExpression {
    left: Option<Box<dyn AstNode>>,
    right: Option<Box<dyn AstNode>>,
    op: BinaryOp,
    location: Location,
}

impl MathematicalExpression {
    pub fn new(left: Box<dyn AstNode>, right: Box<dyn AstNode>, op: BinaryOp) -> Self {
        Self::from_parts(Some(left), Some(right), op)
    }

    /// Build an expression whose operands may be missing.
    pub fn from_parts(
        left: Option<Box<dyn AstNode>>,
        right: Option<Box<dyn AstNode>>,
        op: BinaryOp,
    ) -> Self {
        MathematicalExpression {
            left,
            right,
            op,
            location: Location::synthetic(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn left_operand(&self) -> Option<&dyn AstNode> {
        self.left.as_deref()
    }

    pub fn right_operand(&self) -> Option<&dyn AstNode> {
        self.right.as_deref()
    }

    pub fn operator(&self) -> BinaryOp {
        self.op
    }

    fn evaluate_operands(&self, evaluator: &mut Evaluator<'_>) -> EvalResult {
        let (Some(left), Some(right)) = (&self.left, &self.right) else {
            return Err(void_operand());
        };

        let left = left.evaluate(evaluator)?;
        let right = right.evaluate(evaluator)?;

        let left = extract_value(left.as_deref())?;
        let right = extract_value(right.as_deref())?;

        evaluate_binary(evaluator, left, right, self.op)
    }

    /// Point an error raised by this node at its location.
    ///
    /// The node that stamps the location also records the enclosing
    /// expressions, innermost first, unless the error already carries a
    /// trace. Errors already located below are passed through untouched.
    fn locate<'l>(
        &self,
        err: EvalError,
        enclosing: impl Iterator<Item = &'l Location>,
    ) -> EvalError {
        if err.location.is_some() || self.location.is_synthetic() {
            return err;
        }
        let err = err.with_location(self.location.clone());
        if !err.trace.is_empty() {
            return err;
        }
        err.with_trace(enclosing.filter(|loc| !loc.is_synthetic()).cloned())
    }
}

/// The value of an evaluated operand.
fn extract_value(node: Option<&dyn AstNode>) -> EvalResult<&Value> {
    node.ok_or_else(void_operand)?
        .as_literal()
        .map(LiteralNode::value)
        .ok_or_else(non_literal_operand)
}

impl AstNode for MathematicalExpression {
    fn location(&self) -> &Location {
        &self.location
    }

    fn node_name(&self) -> &'static str {
        "mathematical expression"
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = self.op.as_symbol()))]
    fn evaluate(&self, evaluator: &mut Evaluator<'_>) -> EvalResult<Option<Box<dyn AstNode>>> {
        let value = {
            let mut scoped = evaluator
                .update_runtime(self)
                .map_err(|err| self.locate(err, std::iter::empty()))?;
            let result = ensure_sufficient_stack(|| self.evaluate_operands(&mut scoped));
            result.map_err(|err| self.locate(err, scoped.runtime().trace().skip(1)))?
        };

        Ok(Some(Box::new(
            LiteralNode::new(value).with_location(self.location.clone()),
        )))
    }

    fn clone_node(&self) -> Box<dyn AstNode> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests;
