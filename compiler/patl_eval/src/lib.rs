//! patl Eval - evaluator for binary expressions.
//!
//! This crate reduces a binary-expression node whose operands are literal
//! subtrees to a single literal node.
//!
//! # Architecture
//!
//! - `AstNode`: the node contract; every node evaluates to a node (or nothing)
//! - `LiteralNode`: a node holding a concrete `Value`
//! - `MathematicalExpression`: the binary-expression node
//! - `Evaluator`: runtime context (data source, limits, runtime stack)
//! - `evaluate_binary`: direct enum-based dispatch over the operand type pair
//!
//! # Example
//!
//! ```
//! use patl_eval::{BinaryOp, Evaluator, LiteralNode, MathematicalExpression, Value};
//!
//! let expr = MathematicalExpression::new(
//!     Box::new(LiteralNode::new(Value::string("ab"))),
//!     Box::new(LiteralNode::new(Value::Unsigned(3))),
//!     BinaryOp::Mul,
//! );
//!
//! let mut evaluator = Evaluator::new();
//! let value = evaluator.evaluate_to_value(&expr);
//! assert_eq!(value.ok(), Some(Value::string("ababab")));
//! ```

mod evaluator;
mod expression;
mod node;
mod operators;
mod runtime;
mod stack;

use std::sync::Once;

pub use evaluator::{
    EvalLimits, Evaluator, EvaluatorBuilder, DEFAULT_MAX_REPEAT_COUNT, DEFAULT_MAX_STRING_LEN,
};
pub use expression::MathematicalExpression;
pub use node::{AstNode, LiteralNode};
pub use operators::{evaluate_binary, NumericKind};
pub use runtime::{RuntimeFrame, RuntimeGuard, RuntimeStack};

pub use patl_diagnostic::{Diagnostic, ErrorCode};
pub use patl_ir::{BinaryOp, Location, SectionId};

// Re-export value and error types from patl_patterns
pub use patl_patterns::{
    DataSource, DataSourceError, DecodedPattern, EvalError, EvalErrorKind, EvalResult,
    MemoryDataSource, Pattern, SharedPattern, Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for evaluator debugging.
///
/// Controlled by the `RUST_LOG` environment variable. Nothing is installed
/// when it is unset.
///
/// Examples:
/// - `RUST_LOG=patl_eval=debug` - promotion decisions and reads
/// - `RUST_LOG=patl_eval=trace` - every node evaluation, as a tree
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}
