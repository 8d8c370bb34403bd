//! patl IR - shared vocabulary types for the expression core.
//!
//! This crate contains the small set of types every other crate speaks:
//! - `Source` / `SourceRef`: a named source text shared by all locations into it
//! - `Location`: line/column/length position of a token
//! - `SectionId`: which byte-addressable space a pattern lives in
//! - `BinaryOp`: operator tags of binary expressions
//!
//! All types are cheap to clone. Locations hold an `Arc` to their source
//! rather than borrowing it, so diagnostics can outlive the parser.

mod location;
mod operators;
mod section;

pub use location::{Location, Source, SourceRef};
pub use operators::BinaryOp;
pub use section::SectionId;
