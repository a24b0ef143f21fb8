//! I/O module
//!
//! Handles byte decoding of Zengin input and table output.
//!
//! # Components
//!
//! - `encoding` - Shift-JIS / UTF-8 detection from a leading sample
//! - `reader` - Decoding line reader with iterator interface
//! - `table` - Transfer table projection and CSV serialization

pub mod encoding;
pub mod reader;
pub mod table;

pub use encoding::{detect_encoding, EncodingChoice, DETECTION_SAMPLE_SIZE};
pub use reader::ZenginReader;
pub use table::{transfer_row, write_table_csv, Language, Table};
