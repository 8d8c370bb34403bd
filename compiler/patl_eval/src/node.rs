//! The AST node contract and the literal node.

use std::fmt;

use patl_ir::Location;
use patl_patterns::{EvalResult, Value};

use crate::Evaluator;

/// A node of the expression tree.
///
/// Evaluating a node reduces it to another node: a literal for anything
/// that produces a value, or `None` for a void expression (e.g. a call to a
/// function that returns nothing).
pub trait AstNode: fmt::Debug {
    /// Where the node appears in the source.
    fn location(&self) -> &Location;

    /// Short name of the node kind, used in traces.
    fn node_name(&self) -> &'static str;

    /// Evaluate the node.
    fn evaluate(&self, evaluator: &mut Evaluator<'_>) -> EvalResult<Option<Box<dyn AstNode>>>;

    /// Deep-copy the node and all of its children.
    fn clone_node(&self) -> Box<dyn AstNode>;

    /// View the node as a literal, if it is one.
    fn as_literal(&self) -> Option<&LiteralNode> {
        None
    }
}

impl Clone for Box<dyn AstNode> {
    fn clone(&self) -> Self {
        self.clone_node()
    }
}

/// A node holding a concrete value.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralNode {
    value: Value,
    location: Location,
}

impl LiteralNode {
    pub fn new(value: Value) -> Self {
        LiteralNode {
            value,
            location: Location::synthetic(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for LiteralNode {
    fn from(value: Value) -> Self {
        LiteralNode::new(value)
    }
}

impl AstNode for LiteralNode {
    fn location(&self) -> &Location {
        &self.location
    }

    fn node_name(&self) -> &'static str {
        "literal"
    }

    fn evaluate(&self, _evaluator: &mut Evaluator<'_>) -> EvalResult<Option<Box<dyn AstNode>>> {
        Ok(Some(Box::new(self.clone())))
    }

    fn clone_node(&self) -> Box<dyn AstNode> {
        Box::new(self.clone())
    }

    fn as_literal(&self) -> Option<&LiteralNode> {
        Some(self)
    }
}
