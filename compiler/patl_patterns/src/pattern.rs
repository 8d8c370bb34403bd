//! The pattern capability.
//!
//! A pattern is a placed, decoded view of binary data: it knows where its
//! bytes live (offset, size, section) and how they read as a scalar. The
//! expression core only ever borrows patterns through [`SharedPattern`].

use std::fmt;
use std::sync::Arc;

use patl_ir::{Location, SectionId};

use crate::Value;

/// A decoded region of binary data.
///
/// Implementors must be read-only from the evaluator's point of view: every
/// method takes `&self` and none of them may change what later calls return.
pub trait Pattern: fmt::Debug + Send + Sync {
    /// Byte offset of the pattern within its section.
    fn offset(&self) -> u64;

    /// Size of the pattern in bytes.
    fn size(&self) -> u64;

    /// The section the pattern's bytes live in.
    fn section(&self) -> SectionId;

    /// The decoded scalar interpretation of the pattern.
    fn value(&self) -> Value;

    /// Formatted display string.
    ///
    /// Defaults to the display string of [`Pattern::value`]. A pattern whose
    /// value is itself a pattern shows its placement instead.
    fn display_value(&self) -> String {
        match self.value() {
            Value::Pattern(_) => format!("<pattern at {:#x}>", self.offset()),
            value => value.to_display_string(),
        }
    }

    /// Where the pattern was declared.
    fn location(&self) -> Location;
}

/// Shared handle to a pattern.
pub type SharedPattern = Arc<dyn Pattern>;

/// A pattern whose decoded value is already known.
///
/// Hosts that decode eagerly can hand these to the evaluator directly.
#[derive(Clone, Debug)]
pub struct DecodedPattern {
    offset: u64,
    size: u64,
    section: SectionId,
    value: Value,
    display: Option<String>,
    location: Location,
}

impl DecodedPattern {
    /// A pattern in the main section with a synthetic location.
    pub fn new(offset: u64, size: u64, value: Value) -> Self {
        DecodedPattern {
            offset,
            size,
            section: SectionId::MAIN,
            value,
            display: None,
            location: Location::synthetic(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: SectionId) -> Self {
        self.section = section;
        self
    }

    /// Override the formatted display string (e.g. an enum variant name).
    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn into_shared(self) -> SharedPattern {
        Arc::new(self)
    }
}

impl Pattern for DecodedPattern {
    fn offset(&self) -> u64 {
        self.offset
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn section(&self) -> SectionId {
        self.section
    }

    fn value(&self) -> Value {
        self.value.clone()
    }

    fn display_value(&self) -> String {
        match &self.display {
            Some(display) => display.clone(),
            None => match &self.value {
                Value::Pattern(_) => format!("<pattern at {:#x}>", self.offset),
                value => value.to_display_string(),
            },
        }
    }

    fn location(&self) -> Location {
        self.location.clone()
    }
}
