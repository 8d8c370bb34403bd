//! Runtime context tracking.
//!
//! Every node that evaluates children registers itself with
//! [`Evaluator::update_runtime`] first. The returned [`RuntimeGuard`] pops
//! the frame again when dropped, on success, on `?` propagation and during
//! unwinding alike.
//!
//! The guard holds `&mut Evaluator` and implements `Deref`/`DerefMut`, so
//! children are evaluated through it:
//!
//! ```text
//! let mut scoped = evaluator.update_runtime(self)?;
//! let left = self.left.evaluate(&mut scoped)?;
//! // frame popped here
//! ```

use std::ops::{Deref, DerefMut};

use patl_ir::Location;
use patl_patterns::{recursion_limit_exceeded, EvalError};

use crate::{AstNode, Evaluator};

/// One node currently being evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeFrame {
    /// Node kind, from [`AstNode::node_name`].
    pub name: &'static str,
    /// Source location of the node.
    pub location: Location,
}

impl RuntimeFrame {
    pub fn of(node: &dyn AstNode) -> Self {
        RuntimeFrame {
            name: node.node_name(),
            location: node.location().clone(),
        }
    }
}

/// Stack of nodes under evaluation, outermost first.
///
/// The depth check is part of `push()`: a frame is only pushed if the
/// optional limit allows it.
#[derive(Clone, Debug, Default)]
pub struct RuntimeStack {
    frames: Vec<RuntimeFrame>,
    max_depth: Option<usize>,
}

impl RuntimeStack {
    /// Create an empty stack. `None` means unlimited depth.
    pub fn new(max_depth: Option<usize>) -> Self {
        RuntimeStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow; the error's trace lists the
    /// frames already on the stack.
    pub fn push(&mut self, frame: RuntimeFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                tracing::warn!(limit = max, node = frame.name, "expression depth limit reached");
                let trace = self.trace().filter(|loc| !loc.is_synthetic()).cloned();
                return Err(recursion_limit_exceeded(max).with_trace(trace));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the innermost frame.
    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "pop on empty runtime stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Locations of the frames, innermost first.
    pub fn trace(&self) -> impl Iterator<Item = &Location> + '_ {
        self.frames.iter().rev().map(|frame| &frame.location)
    }
}

/// RAII guard for a runtime frame.
///
/// Access the evaluator through this guard; it implements `Deref` and
/// `DerefMut`. Dropping the guard pops the frame.
pub struct RuntimeGuard<'guard, 'eval> {
    evaluator: &'guard mut Evaluator<'eval>,
}

impl Drop for RuntimeGuard<'_, '_> {
    fn drop(&mut self) {
        self.evaluator.runtime.pop();
    }
}

impl<'eval> Deref for RuntimeGuard<'_, 'eval> {
    type Target = Evaluator<'eval>;

    fn deref(&self) -> &Self::Target {
        self.evaluator
    }
}

impl DerefMut for RuntimeGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.evaluator
    }
}

impl<'eval> Evaluator<'eval> {
    /// Make `node` the current runtime context.
    ///
    /// Fails with `RecursionLimitExceeded` when the configured depth limit
    /// is already reached; nothing is pushed in that case.
    pub fn update_runtime(
        &mut self,
        node: &dyn AstNode,
    ) -> Result<RuntimeGuard<'_, 'eval>, EvalError> {
        self.runtime.push(RuntimeFrame::of(node))?;
        Ok(RuntimeGuard { evaluator: self })
    }
}

#[cfg(test)]
mod tests;
