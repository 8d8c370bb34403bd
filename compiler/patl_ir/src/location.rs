//! Source handles and token locations.
//!
//! A [`Location`] points at a token inside a [`Source`]: 1-based line and
//! column plus the token length in characters. Locations are either real
//! (line and column both positive) or synthetic (both zero). Synthetic
//! locations are produced for generated nodes and suppress snippet rendering.

use std::fmt;
use std::sync::Arc;

/// Shared handle to a source text.
pub type SourceRef = Arc<Source>;

/// A named source text.
///
/// Owns its display name (usually a file path) and full content. Every
/// location into the source holds a [`SourceRef`] to it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Source {
    name: String,
    content: String,
}

impl Source {
    /// Create a new shared source.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> SourceRef {
        Arc::new(Source {
            name: name.into(),
            content: content.into(),
        })
    }

    /// Display name of the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full source text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Compute the location of a token from its byte offset.
    ///
    /// Line and column are 1-based; the column counts characters, not bytes,
    /// from the start of the line. Offsets past the end clamp to the end of
    /// the text.
    pub fn location_at(self: &Arc<Self>, offset: usize, length: u32) -> Location {
        let offset = offset.min(self.content.len());
        let before = self.content.get(..offset).unwrap_or(&self.content);

        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let line = before.matches('\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;

        Location {
            source: Some(Arc::clone(self)),
            line: u32::try_from(line).unwrap_or(u32::MAX),
            column: u32::try_from(column).unwrap_or(u32::MAX),
            length,
        }
    }
}

/// Position of a token in a source text.
///
/// # Invariant
///
/// `line` and `column` are either both positive (a real location attached to
/// `source`) or both zero (a synthetic location).
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Location {
    /// Source this location points into. `None` for synthetic locations.
    pub source: Option<SourceRef>,
    /// 1-based line number, 0 when synthetic.
    pub line: u32,
    /// 1-based column number in characters, 0 when synthetic.
    pub column: u32,
    /// Length of the token in characters.
    pub length: u32,
}

impl Location {
    /// Create a location pointing into `source`.
    pub fn new(source: SourceRef, line: u32, column: u32, length: u32) -> Self {
        debug_assert!(
            (line == 0) == (column == 0),
            "line and column must both be positive or both be zero"
        );
        Location {
            source: Some(source),
            line,
            column,
            length,
        }
    }

    /// A location for generated code with no source text behind it.
    pub const fn synthetic() -> Self {
        Location {
            source: None,
            line: 0,
            column: 0,
            length: 0,
        }
    }

    /// Whether this location is synthetic (no line/column information).
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.line == 0 || self.column == 0
    }

    /// Display name of the source, or `<unknown>` when there is none.
    pub fn source_name(&self) -> &str {
        self.source.as_deref().map_or("<unknown>", Source::name)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_synthetic() {
            write!(f, "<synthetic>")
        } else {
            write!(
                f,
                "{}:{}:{}+{}",
                self.source_name(),
                self.line,
                self.column,
                self.length
            )
        }
    }
}
