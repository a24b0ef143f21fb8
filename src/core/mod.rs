//! Core parsing module
//!
//! This module contains the core Zengin parsing components:
//! - `classifier` - Decides which record kind a line resembles
//! - `fields` - Fixed-offset field extraction and validation
//! - `traits` - The `FixedWidthRecord` abstraction shared by the parsers
//! - `parser` - Header, data and trailer field parsers
//! - `sequencer` - Record-order state machine driving a whole file
//! - `reconciler` - Trailer checks and transfer building per block

pub mod classifier;
pub mod fields;
pub mod parser;
pub mod reconciler;
pub mod sequencer;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_lines;

pub use classifier::{classify, LineKind};
pub use parser::{parse_data, parse_header, parse_trailer};
pub use reconciler::{reconcile, Block};
pub use sequencer::{parse_lines, ParserConfig, Sequencer, SequencerState};
pub use traits::FixedWidthRecord;
