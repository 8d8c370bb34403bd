//! The evaluator: runtime context shared by all nodes of one evaluation.

use std::fmt;

use patl_ir::SectionId;
use patl_patterns::{
    data_read, non_literal_operand, void_operand, DataSource, DataSourceError, EvalResult,
};

use crate::runtime::RuntimeStack;
use crate::AstNode;

/// Default upper bound on string repetition counts.
pub const DEFAULT_MAX_REPEAT_COUNT: u64 = 1 << 20;

/// Default upper bound on the byte length of a repeated string (16 MiB).
pub const DEFAULT_MAX_STRING_LEN: u64 = 1 << 24;

/// Resource limits applied during evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalLimits {
    /// Largest count a string may be repeated with `*`.
    pub max_repeat_count: u64,
    /// Largest byte length a string repetition may produce.
    pub max_string_len: u64,
    /// Deepest allowed nesting of evaluating nodes. `None` is unlimited;
    /// deep trees are still protected by stack growth.
    pub max_depth: Option<usize>,
}

impl Default for EvalLimits {
    fn default() -> Self {
        EvalLimits {
            max_repeat_count: DEFAULT_MAX_REPEAT_COUNT,
            max_string_len: DEFAULT_MAX_STRING_LEN,
            max_depth: None,
        }
    }
}

/// Runtime context for evaluating expression trees.
pub struct Evaluator<'a> {
    data_source: Option<&'a dyn DataSource>,
    limits: EvalLimits,
    pub(crate) runtime: RuntimeStack,
}

impl<'a> Evaluator<'a> {
    /// An evaluator with default limits and no data source.
    pub fn new() -> Self {
        EvaluatorBuilder::new().build()
    }

    pub fn builder() -> EvaluatorBuilder<'a> {
        EvaluatorBuilder::new()
    }

    pub fn limits(&self) -> &EvalLimits {
        &self.limits
    }

    pub fn runtime(&self) -> &RuntimeStack {
        &self.runtime
    }

    pub fn has_data_source(&self) -> bool {
        self.data_source.is_some()
    }

    /// Fill `buffer` with the bytes at `offset` in `section`.
    ///
    /// Reads are not cached; every call reaches the data source.
    #[tracing::instrument(level = "debug", skip(self, buffer), fields(len = buffer.len()))]
    pub fn read_data(&self, offset: u64, buffer: &mut [u8], section: SectionId) -> EvalResult<()> {
        let Some(source) = self.data_source else {
            return Err(data_read(&DataSourceError::Other(
                "no data source attached".to_string(),
            )));
        };
        source.read_data(offset, buffer, section)?;
        Ok(())
    }

    /// Evaluate `node` down to a value.
    ///
    /// Fails with `VoidOperand` if the node produced nothing and
    /// `NonLiteralOperand` if it did not reduce to a literal.
    pub fn evaluate_to_value(&mut self, node: &dyn AstNode) -> EvalResult {
        let result = node.evaluate(self)?.ok_or_else(void_operand)?;
        result
            .as_literal()
            .map(|literal| literal.value().clone())
            .ok_or_else(|| non_literal_operand().or_location(result.location()))
    }
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Evaluator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("has_data_source", &self.data_source.is_some())
            .field("limits", &self.limits)
            .field("runtime", &self.runtime)
            .finish()
    }
}

/// Builder for [`Evaluator`].
#[derive(Default)]
pub struct EvaluatorBuilder<'a> {
    data_source: Option<&'a dyn DataSource>,
    limits: EvalLimits,
}

impl<'a> EvaluatorBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where pattern bytes are read from.
    #[must_use]
    pub fn data_source(mut self, data_source: &'a dyn DataSource) -> Self {
        self.data_source = Some(data_source);
        self
    }

    /// Replace all limits at once.
    #[must_use]
    pub fn limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn max_repeat_count(mut self, max_repeat_count: u64) -> Self {
        self.limits.max_repeat_count = max_repeat_count;
        self
    }

    #[must_use]
    pub fn max_string_len(mut self, max_string_len: u64) -> Self {
        self.limits.max_string_len = max_string_len;
        self
    }

    pub fn build(self) -> Evaluator<'a> {
        Evaluator {
            data_source: self.data_source,
            limits: self.limits,
            runtime: RuntimeStack::new(self.limits.max_depth),
        }
    }
}
