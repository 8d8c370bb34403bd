//! The structured diagnostic type.
//!
//! A [`Diagnostic`] is built at the point of failure with the builder
//! methods below and rendered immediately. Rendering goes through the pure
//! functions in [`crate::format`].

use std::fmt;

use patl_ir::Location;

use crate::format::{format_compiler_error, format_runtime_error};
use crate::ErrorCode;

/// A rendered-on-demand error report.
///
/// Diagnostics carry no severity: everything the evaluator reports is an
/// error that ends evaluation of the current expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Short title of the error.
    pub message: String,
    /// Where the error occurred. Synthetic when unknown.
    pub location: Location,
    /// Longer free-form explanation. Empty when absent.
    pub description: String,
    /// Call sites leading to the error, innermost first.
    pub trace: Vec<Location>,
    /// How to fix the error, if we know.
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            location: Location::synthetic(),
            description: String::new(),
            trace: Vec::new(),
            hint: None,
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the error location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Set the longer description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a call site to the trace.
    pub fn with_trace_entry(mut self, location: Location) -> Self {
        self.trace.push(location);
        self
    }

    /// Append several call sites to the trace, innermost first.
    pub fn with_trace(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.trace.extend(locations);
        self
    }

    /// Set the hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Whether the diagnostic points at real source text.
    pub fn has_location(&self) -> bool {
        !self.location.is_synthetic()
    }

    /// Render in the compile-time layout (message, arrow, trace, excerpt).
    ///
    /// A hint, when present, is appended to the description block.
    pub fn render(&self) -> String {
        match &self.hint {
            Some(hint) if !hint.is_empty() => {
                let description = if self.description.is_empty() {
                    format!("hint: {hint}")
                } else {
                    format!("{}\nhint: {hint}", self.description)
                };
                format_compiler_error(&self.location, &self.message, &description, &self.trace)
            }
            _ => format_compiler_error(
                &self.location,
                &self.message,
                &self.description,
                &self.trace,
            ),
        }
    }

    /// Render in the runtime layout (used for failures during deferred evaluation).
    pub fn render_runtime(&self) -> String {
        format_runtime_error(
            &self.location,
            &self.message,
            &self.description,
            self.hint.as_deref(),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
