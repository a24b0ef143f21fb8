//! Fixed-offset field extraction
//!
//! `RecordLine` wraps a decoded line as a slice of characters so that field
//! offsets count characters rather than bytes. Every accessor validates what
//! it extracts and reports failures as `FieldFormatError`; none of them panic
//! on short input.

use crate::types::{FieldFormatError, RecordKind};
use std::ops::Range;

/// A decoded record line addressed by character offsets
#[derive(Debug, Clone, Copy)]
pub struct RecordLine<'a> {
    chars: &'a [char],
}

impl<'a> RecordLine<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the line is long enough to hold a field ending at `end`
    pub fn reaches(&self, end: usize) -> bool {
        self.chars.len() >= end
    }

    /// Fail with `LineTooShort` unless the line holds every mandatory field of `kind`
    pub fn require_min_length(&self, kind: RecordKind) -> Result<(), FieldFormatError> {
        if self.reaches(kind.min_length()) {
            Ok(())
        } else {
            Err(FieldFormatError::LineTooShort {
                kind,
                expected: kind.min_length(),
                actual: self.len(),
            })
        }
    }

    /// Fail with `RecordType` unless the line starts with the marker of `kind`
    pub fn require_marker(&self, kind: RecordKind) -> Result<(), FieldFormatError> {
        let found = self.text(0..1);
        if found.starts_with(kind.marker()) {
            Ok(())
        } else {
            Err(FieldFormatError::RecordType { kind, found })
        }
    }

    /// Raw field text, padding included
    ///
    /// Out-of-range offsets yield the characters that exist (possibly none).
    pub fn text(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Field text with trailing padding removed
    pub fn padded(&self, range: Range<usize>) -> String {
        self.text(range).trim_end().to_string()
    }

    /// Whether the field consists only of spaces (half- or full-width)
    pub fn is_blank(&self, range: Range<usize>) -> bool {
        self.text(range).chars().all(|c| c == ' ' || c == '\u{3000}')
    }

    /// A fixed-width field made only of ASCII digits
    pub fn digits(
        &self,
        field: &'static str,
        range: Range<usize>,
    ) -> Result<String, FieldFormatError> {
        let width = range.len();
        let value = self.text(range);
        if value.chars().count() == width && value.chars().all(|c| c.is_ascii_digit()) {
            Ok(value)
        } else {
            Err(FieldFormatError::not_numeric(field, width, &value))
        }
    }

    /// A fixed-width digit field read as an unsigned integer
    ///
    /// Leading zeros are accepted and dropped.
    pub fn number(&self, field: &'static str, range: Range<usize>) -> Result<u64, FieldFormatError> {
        let width = range.len();
        let value = self.digits(field, range)?;
        value
            .parse::<u64>()
            .map_err(|_| FieldFormatError::not_numeric(field, width, &value))
    }

    /// A field mapped through a fixed code table
    pub fn code<T>(
        &self,
        field: &'static str,
        range: Range<usize>,
        lookup: fn(&str) -> Option<T>,
    ) -> Result<T, FieldFormatError> {
        let value = self.text(range);
        lookup(&value).ok_or_else(|| FieldFormatError::unknown_code(field, &value))
    }
}
