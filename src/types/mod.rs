//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Header, data and trailer records plus their enumerated codes
//! - `transfer`: The reconciled output unit
//! - `error`: Error types for the parser

pub mod error;
pub mod record;
pub mod transfer;

pub use error::{FieldFormatError, ReconciliationError, StructuralError, ZenginError};
pub use record::{
    AccountType, CategoryCode, DataRecord, Encoding, EncodingMarker, Header, NewCode, RecordKind,
    Trailer, TransferDate, RECORD_LENGTH,
};
pub use transfer::Transfer;
