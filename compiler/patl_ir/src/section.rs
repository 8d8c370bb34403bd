//! Section identifiers.

use std::fmt;

/// Identifies one byte-addressable space a pattern's bytes live in.
///
/// Section 0 is the main data being decoded; other ids name heap or
/// user-defined sections owned by the host.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct SectionId(pub u64);

impl SectionId {
    /// The main section (the data being decoded).
    pub const MAIN: SectionId = SectionId(0);
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section {}", self.0)
    }
}
