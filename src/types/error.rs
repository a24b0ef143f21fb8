//! Error types for the Zengin parser
//!
//! This module defines all error types that can occur while reading a Zengin
//! file. Every error aborts the parse: there is no partial result mode.
//!
//! # Error Categories
//!
//! - **Structural Errors**: Illegal record ordering, missing trailer or end record
//! - **Field Format Errors**: Short lines, non-numeric fields, unmapped codes, bad dates
//! - **Reconciliation Errors**: Trailer count or amount disagrees with its block
//! - **Encoding Errors**: Bytes that are not valid in the file's encoding
//! - **File I/O Errors**: File not found, permission denied, etc.

use super::record::{Encoding, RecordKind};
use thiserror::Error;

/// Main error type for the parser
///
/// Each variant corresponds to one error kind, so callers can tell kinds
/// apart with a `match` instead of inspecting messages. Line numbers are
/// 1-based physical line numbers of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZenginError {
    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A line could not be decoded in the file's encoding
    #[error("Encoding error at line {line}: input is not valid {encoding}")]
    Encoding {
        /// Line that failed to decode
        line: usize,
        /// Encoding the line was decoded with
        encoding: Encoding,
    },

    /// Records appear in an illegal order, or the file ends early
    #[error("Structural error{}: {source}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Structural {
        /// Offending line (absent for end-of-input errors)
        line: Option<usize>,
        source: StructuralError,
    },

    /// A field does not have the required width, digits or code
    #[error("Field format error at line {line}: {source}")]
    FieldFormat {
        line: usize,
        source: FieldFormatError,
    },

    /// A trailer disagrees with the data records of its block
    #[error("Reconciliation error at line {line}: {source}")]
    Reconciliation {
        /// Line of the trailer record
        line: usize,
        source: ReconciliationError,
    },
}

/// Illegal record ordering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("data record found before header")]
    DataBeforeHeader,

    #[error("trailer record found before header")]
    TrailerBeforeHeader,

    #[error("end record found before trailer")]
    EndBeforeTrailer,

    /// A header arrived while the previous block still lacked its trailer
    #[error("header record found while previous block is missing its trailer")]
    MissingTrailer,

    #[error("{kind} record found after end record")]
    RecordAfterEnd { kind: RecordKind },

    #[error("unknown record type: '{content}'")]
    UnknownRecordType { content: String },

    #[error("unexpected end of file: missing {missing} record")]
    UnexpectedEndOfFile { missing: RecordKind },

    /// The input held no records at all
    #[error("no transfers found: input is empty")]
    EmptyInput,
}

/// A single field or line failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldFormatError {
    #[error("{kind} line too short: expected at least {expected} characters, got {actual}")]
    LineTooShort {
        kind: RecordKind,
        expected: usize,
        actual: usize,
    },

    /// Only raised when strict record length checking is enabled
    #[error("{kind} line has {actual} characters, expected exactly {expected}")]
    LengthMismatch {
        kind: RecordKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid record type '{found}' for {kind} record")]
    RecordType { kind: RecordKind, found: String },

    #[error("invalid {field}: expected {width} digits, got '{value}'")]
    NotNumeric {
        field: &'static str,
        width: usize,
        value: String,
    },

    #[error("unknown {field}: '{value}'")]
    UnknownCode { field: &'static str, value: String },

    #[error("invalid transfer date: '{value}' is not a valid MMDD day")]
    InvalidDate { value: String },
}

/// Trailer checksum disagreement
///
/// `expected` is the value computed from the block's data records and
/// `actual` is the value declared by the trailer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconciliationError {
    #[error("total count mismatch: expected {expected}, actual {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("total amount mismatch: expected {expected}, actual {actual}")]
    AmountMismatch { expected: u64, actual: u64 },

    #[error("total amount of block overflows")]
    AmountOverflow,
}

// Conversion from io::Error to ZenginError
impl From<std::io::Error> for ZenginError {
    fn from(error: std::io::Error) -> Self {
        ZenginError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ZenginError (table output only)
impl From<csv::Error> for ZenginError {
    fn from(error: csv::Error) -> Self {
        ZenginError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ZenginError {
    /// Create a Structural error tied to a line
    pub fn structural(line: usize, source: StructuralError) -> Self {
        ZenginError::Structural {
            line: Some(line),
            source,
        }
    }

    /// Create a Structural error for input that ended too early
    pub fn unexpected_eof(missing: RecordKind) -> Self {
        ZenginError::Structural {
            line: None,
            source: StructuralError::UnexpectedEndOfFile { missing },
        }
    }

    /// Create a FieldFormat error
    pub fn field_format(line: usize, source: FieldFormatError) -> Self {
        ZenginError::FieldFormat { line, source }
    }

    /// Create a Reconciliation error
    pub fn reconciliation(line: usize, source: ReconciliationError) -> Self {
        ZenginError::Reconciliation { line, source }
    }
}

impl FieldFormatError {
    /// Create a NotNumeric error
    pub fn not_numeric(field: &'static str, width: usize, value: &str) -> Self {
        FieldFormatError::NotNumeric {
            field,
            width,
            value: value.to_string(),
        }
    }

    /// Create an UnknownCode error
    pub fn unknown_code(field: &'static str, value: &str) -> Self {
        FieldFormatError::UnknownCode {
            field,
            value: value.to_string(),
        }
    }
}
