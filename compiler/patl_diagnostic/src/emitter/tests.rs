use super::*;
use crate::ErrorCode;
use patl_ir::{Location, Source};
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    let src = Source::new("e.hexpat", "u8 a = 4 % 0;");
    Diagnostic::error(ErrorCode::E3001)
        .with_message("Division by zero.")
        .with_location(Location::new(src, 1, 10, 1))
}

fn emitted(style: RenderStyle, diagnostics: &[Diagnostic]) -> String {
    let mut emitter = TextEmitter::new(Vec::new(), style);
    emitter.emit_all(diagnostics);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn test_compiler_style_writes_rendered_text() {
    let diag = sample_diagnostic();
    let text = emitted(RenderStyle::Compiler, std::slice::from_ref(&diag));
    assert_eq!(text, diag.render());
}

#[test]
fn test_runtime_style_terminates_line() {
    let diag = sample_diagnostic().with_hint("guard the modulus");
    let text = emitted(RenderStyle::Runtime, std::slice::from_ref(&diag));

    // The runtime layout ends on the hint without a newline; the emitter adds one.
    assert_eq!(text, format!("{}\n", diag.render_runtime()));
}

#[test]
fn test_emit_all_preserves_order() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E2001).with_message("first"),
        Diagnostic::error(ErrorCode::E3001).with_message("second"),
    ];
    let text = emitted(RenderStyle::Compiler, &diagnostics);
    assert_eq!(text, "error: first\nerror: second\n");
}

#[test]
fn test_summary() {
    let mut emitter = TextEmitter::new(Vec::new(), RenderStyle::Compiler);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    emitter.emit_summary(3);
    let text = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        text,
        "error: aborting due to previous error\nerror: aborting due to 3 previous errors\n"
    );
}
