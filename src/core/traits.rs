//! Core traits for record parsing
//!
//! This module defines the trait abstraction shared by the header, data and
//! trailer parsers so that the sequencer can drive all of them the same way.

use crate::core::fields::RecordLine;
use crate::types::{FieldFormatError, RecordKind};

/// Trait for records extracted from a fixed-width line
///
/// Implementors only describe their fields; the length-then-marker checks
/// that precede every field extraction live in the provided `parse`.
pub trait FixedWidthRecord: Sized {
    /// The record kind this type is parsed from
    const KIND: RecordKind;

    /// Extract and validate fields from a line that already passed the
    /// minimum length and type marker checks
    fn parse_fields(line: &RecordLine<'_>) -> Result<Self, FieldFormatError>;

    /// Parse a decoded line into this record
    fn parse(line: &[char]) -> Result<Self, FieldFormatError> {
        let line = RecordLine::new(line);
        line.require_min_length(Self::KIND)?;
        line.require_marker(Self::KIND)?;
        Self::parse_fields(&line)
    }
}
