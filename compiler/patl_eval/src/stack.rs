//! Native stack headroom for `MathematicalExpression::evaluate`.
//!
//! Each nested operand calls back into `evaluate`, so a deep tree costs one
//! native frame group per level on top of its `RuntimeStack` entry. The
//! optional `max_depth` limit bounds how many levels are allowed;
//! [`ensure_sufficient_stack`] lets the thread reach that depth (or any
//! depth, when unset) by moving onto a fresh `stacker` segment once the red
//! zone is hit.
//! On `wasm32` the closure runs in place.

/// Remaining stack below which we grow (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
