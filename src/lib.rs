//! Zengin Parser Library
//! # Overview
//!
//! This library parses Zengin-format (全銀) bulk bank transfer files into a flat list of
//! transfers, checking record order and reconciling every block against its trailer.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (records, transfers, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Parsing logic:
//!   - [`core::classifier`] - Record kind recognition per line
//!   - [`core::parser`] - Fixed-offset field parsing of header, data and trailer records
//!   - [`core::sequencer`] - Record-order state machine over a whole file
//!   - [`core::reconciler`] - Trailer count and amount checks
//! - [`io`] - Encoding detection, decoding line reader and CSV table output
//! - [`pipeline`] - End-to-end parse of a byte source or file
//!
//! # Record Types
//!
//! Every line is a 120-character record whose first character names its kind:
//!
//! - **Header** (`1`): Opens a block; sender, transfer date and sender account
//! - **Data** (`2`): One transfer to a recipient account
//! - **Trailer** (`8`): Closes a block; declared record count and total amount
//! - **End** (`9`): Terminates the file
//!
//! A file holds one or more header/data/trailer blocks followed by exactly one end record.
//!
//! # Example
//!
//! ```no_run
//! use zengin_parser::{parse_file, ParseOptions};
//! use std::path::Path;
//!
//! let parsed = parse_file(Path::new("zengin.txt"), ParseOptions::default()).unwrap();
//! for transfer in &parsed.transfers {
//!     println!("{} -> {}: {}", transfer.sender_name, transfer.recipient_name, transfer.amount);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{parse_lines, ParserConfig, Sequencer};
pub use io::{write_table_csv, EncodingChoice, Language, Table};
pub use pipeline::{parse_file, parse_reader, process, ParseOptions, ParsedFile, TableOptions};
pub use types::{
    AccountType, DataRecord, Encoding, Header, Trailer, Transfer, TransferDate, ZenginError,
};
