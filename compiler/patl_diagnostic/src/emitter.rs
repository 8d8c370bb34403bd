//! Diagnostic emitters.
//!
//! The formatter only produces text; emitters decide where it goes. The
//! host picks the sink (stderr, a log buffer, a UI panel) by choosing the
//! writer handed to [`TextEmitter`].

use std::io::{self, Write};

use crate::Diagnostic;

/// Which text layout an emitter renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// `error: ...` with arrow, trace and source excerpt.
    #[default]
    Compiler,
    /// `runtime error: ...` with location and hint lines.
    Runtime,
}

/// Trait for emitting diagnostics to some sink.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary line for `error_count` reported errors.
    fn emit_summary(&mut self, error_count: usize);
}

/// Plain-text emitter writing rendered diagnostics to any writer.
///
/// Write failures are ignored: diagnostics are best-effort output and a
/// broken sink must not mask the original error.
pub struct TextEmitter<W: Write> {
    writer: W,
    style: RenderStyle,
}

impl<W: Write> TextEmitter<W> {
    /// Create an emitter writing to `writer` in the given layout.
    pub fn new(writer: W, style: RenderStyle) -> Self {
        TextEmitter { writer, style }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextEmitter<io::Stderr> {
    /// Create an emitter for stderr.
    pub fn stderr(style: RenderStyle) -> Self {
        TextEmitter::new(io::stderr(), style)
    }
}

impl<W: Write> DiagnosticEmitter for TextEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let text = match self.style {
            RenderStyle::Compiler => diagnostic.render(),
            RenderStyle::Runtime => diagnostic.render_runtime(),
        };
        let _ = self.writer.write_all(text.as_bytes());
        if !text.ends_with('\n') {
            let _ = writeln!(self.writer);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        match error_count {
            0 => {}
            1 => {
                let _ = writeln!(self.writer, "error: aborting due to previous error");
            }
            n => {
                let _ = writeln!(self.writer, "error: aborting due to {n} previous errors");
            }
        }
    }
}

#[cfg(test)]
mod tests;
