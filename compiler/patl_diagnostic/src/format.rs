//! Pure text rendering for diagnostics.
//!
//! These functions turn a location and a message into the exact text shown to
//! users. They are stateless and perform no I/O. The layout (arrow lines,
//! trace lines, excerpt and caret placement) is part of the output contract
//! and must stay byte-for-byte stable.
//!
//! # Excerpt windowing
//!
//! Lines longer than [`EXCERPT_MAX_WIDTH`] characters are cut down to the
//! window `[column - EXCERPT_RADIUS, column + EXCERPT_RADIUS]`. Each
//! edge of the window then moves outward, at most [`WORD_BOUNDARY_STEPS`]
//! times, until it reaches whitespace, so the excerpt does not start or end
//! in the middle of a word when that is avoidable.

use std::fmt::Write;

use patl_ir::Location;

/// Lines up to this many characters are shown in full.
pub const EXCERPT_MAX_WIDTH: usize = 40;

/// Characters kept on each side of the caret when windowing.
pub const EXCERPT_RADIUS: usize = 20;

/// Maximum outward steps per side while searching for whitespace.
pub const WORD_BOUNDARY_STEPS: usize = 10;

/// Render `<source-name>:<line>:<column>`.
///
/// Returns an empty string for synthetic locations.
pub fn format_location(location: &Location) -> String {
    if location.is_synthetic() {
        return String::new();
    }
    format!(
        "{}:{}:{}",
        location.source_name(),
        location.line,
        location.column
    )
}

/// Render the source line a location points at, with a caret marker.
///
/// Produces three lines: `<line> | <excerpt>`, the caret line, and a padding
/// line of the same width (without trailing newline) that callers may append
/// text to. The caret line starts with `len(prefix) + column` spaces, with
/// `column` rebased into the excerpt when the line is windowed. Returns an
/// empty string when the location has no source or its line is out of range.
pub fn format_source_excerpt(location: &Location) -> String {
    let Some(source) = location.source.as_deref() else {
        return String::new();
    };
    if location.line == 0 {
        return String::new();
    }
    let Some(raw_line) = source
        .content()
        .split('\n')
        .nth(location.line as usize - 1)
    else {
        return String::new();
    };

    let line: Vec<char> = raw_line.chars().filter(|&c| c != '\r').collect();
    let (excerpt, caret) = window_line(&line, location.column as usize);

    let prefix = format!("{} | ", location.line);
    let spacing = " ".repeat(prefix.len() + caret);
    let width = location.length as usize;

    let mut out = String::new();
    let _ = writeln!(out, "{prefix}{excerpt}");
    out.push_str(&spacing);
    out.push_str(&"^".repeat(width));
    out.push('\n');
    out.push_str(&spacing);
    out.push_str(&" ".repeat(width));
    out
}

/// Cut an overlong line down to the neighbourhood of `column`.
///
/// Returns the excerpt and the column rebased into it.
fn window_line(line: &[char], column: usize) -> (String, usize) {
    if line.len() <= EXCERPT_MAX_WIDTH {
        return (line.iter().collect(), column);
    }

    let mut start = column.saturating_sub(EXCERPT_RADIUS).min(line.len());
    let mut end = column.saturating_add(EXCERPT_RADIUS).min(line.len());

    for _ in 0..WORD_BOUNDARY_STEPS {
        if start > 0 && line.get(start).is_some_and(|c| !c.is_whitespace()) {
            start -= 1;
        }
        if end < line.len() && !line[end].is_whitespace() {
            end += 1;
        }
    }

    let excerpt = line[start..end].iter().collect();
    (excerpt, column - start)
}

/// Render a compile-time error.
///
/// Layout:
///
/// ```text
/// error: <message>
///   -->   in <location>
///    >> from <trace location>      (one per trace entry)
/// <excerpt>
///
/// <description>
/// ```
///
/// The arrow and excerpt are omitted for synthetic locations, the description
/// block when the description is empty.
pub fn format_compiler_error(
    location: &Location,
    message: &str,
    description: &str,
    trace: &[Location],
) -> String {
    let mut out = format!("error: {message}\n");

    if location.line > 0 {
        let _ = writeln!(out, "  -->   in {}", format_location(location));
    }

    for entry in trace {
        let _ = writeln!(out, "   >> from {}", format_location(entry));
    }

    if location.line > 0 {
        out.push_str(&format_source_excerpt(location));
        out.push('\n');
    }

    if !description.is_empty() {
        let _ = write!(out, "\n{description}\n");
    }

    out
}

/// Render a runtime error without location information.
pub fn format_runtime_error_short(title: &str, description: &str) -> String {
    if description.is_empty() {
        format!("runtime error: {title}")
    } else {
        format!("runtime error: {title}\n{description}")
    }
}

/// Render a runtime error with location and an optional hint.
///
/// The hint line is only present when a non-empty hint is supplied.
pub fn format_runtime_error(
    location: &Location,
    title: &str,
    description: &str,
    hint: Option<&str>,
) -> String {
    let mut out = format!("runtime error: {title}\n");

    if location.is_synthetic() {
        let _ = writeln!(out, "{description}");
    } else {
        let _ = writeln!(out, "{}: {description}", format_location(location));
    }

    if let Some(hint) = hint.filter(|h| !h.is_empty()) {
        let _ = write!(out, "hint: {hint}");
    }

    out
}
