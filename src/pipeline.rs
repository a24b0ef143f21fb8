//! End-to-end parsing pipeline
//!
//! Ties the decoding reader, the sequencer and the table projection
//! together: bytes in, transfers (or a CSV table) out. Each call owns its
//! reader and result list, so independent files may be parsed in parallel
//! from separate threads without coordination.

use crate::core::{ParserConfig, Sequencer};
use crate::io::{write_table_csv, EncodingChoice, Language, Table, ZenginReader};
use crate::types::{Encoding, Transfer, ZenginError};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Options for a complete parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub encoding: EncodingChoice,
    pub parser: ParserConfig,
}

/// Outcome of a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    /// Encoding the input was decoded with
    pub encoding: Encoding,
    /// Every transfer of the file, in file order
    pub transfers: Vec<Transfer>,
}

/// Output table settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableOptions {
    pub language: Language,
    /// Lead with the transfer date column (Japanese layout only)
    pub with_date: bool,
}

/// Parse a Zengin file from any byte source
///
/// The parse is all-or-nothing: the first decoding, structural, field
/// format or reconciliation error is returned and no transfers are.
pub fn parse_reader<R: Read>(source: R, options: ParseOptions) -> Result<ParsedFile, ZenginError> {
    parse_decoded(ZenginReader::new(source, options.encoding)?, options.parser)
}

/// Parse a Zengin file from disk
pub fn parse_file(path: &Path, options: ParseOptions) -> Result<ParsedFile, ZenginError> {
    parse_decoded(ZenginReader::open(path, options.encoding)?, options.parser)
}

fn parse_decoded<R: Read>(
    reader: ZenginReader<R>,
    config: ParserConfig,
) -> Result<ParsedFile, ZenginError> {
    let encoding = reader.encoding();

    let mut sequencer = Sequencer::new(config);
    for line in reader {
        sequencer.feed(&line?)?;
    }
    let transfers = sequencer.finish()?;

    info!(transfers = transfers.len(), %encoding, "parse complete");
    Ok(ParsedFile {
        encoding,
        transfers,
    })
}

/// Project transfers into the requested table layout
pub fn project(transfers: &[Transfer], table: TableOptions) -> Table {
    match table.language {
        Language::English => Table::english(transfers),
        Language::Japanese => Table::japanese(transfers, table.with_date),
    }
}

/// Parse `input_path` and write its transfer table to `output` as CSV
///
/// Nothing is written unless the whole file parses.
pub fn process(
    input_path: &Path,
    options: ParseOptions,
    table: TableOptions,
    output: &mut dyn Write,
) -> Result<(), ZenginError> {
    let parsed = parse_file(input_path, options)?;
    write_table_csv(&project(&parsed.transfers, table), output)
}
