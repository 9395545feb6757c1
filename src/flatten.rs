//! flatten.rs
//!
//! The seam to whatever turns an uploaded form into plain text. The
//! parser expects cells separated by single spaces, line breaks typed
//! inside a cell kept as `\n`, and checked boxes rendered as their
//! bracketed icon path.

/// Converts a raw document into the flattened text the parser reads.
pub trait TextFlattener {
    fn flatten(&self, raw: &str) -> String;
}

/// For documents that were flattened upstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreFlattened;

impl TextFlattener for PreFlattened {
    fn flatten(&self, raw: &str) -> String {
        raw.to_string()
    }
}
