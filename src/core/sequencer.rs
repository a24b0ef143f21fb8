//! File-level record sequencing
//!
//! This module provides the `Sequencer`, a state machine that consumes the
//! decoded lines of a Zengin file one at a time, enforces the record order
//! and triggers reconciliation at the end of each block.
//!
//! The legal shape of a file is:
//!
//! ```text
//! (Header Data* Trailer)+ End
//! ```
//!
//! Transitions:
//! - Initial / InTrailer -> InHeader on a header (starts a block)
//! - InHeader / InData -> InData on a data record
//! - InHeader / InData -> InTrailer on a trailer (reconciles the block)
//! - InTrailer -> Ended on the end record
//!
//! Anything else is a `StructuralError`. The first error of any kind ends
//! the parse; there is no partial result.

use crate::core::classifier::{self, LineKind};
use crate::core::reconciler::{reconcile, Block};
use crate::core::traits::FixedWidthRecord;
use crate::types::{
    DataRecord, FieldFormatError, Header, RecordKind, StructuralError, Trailer, Transfer,
    ZenginError, RECORD_LENGTH,
};
use tracing::{debug, info, warn};

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Skip lines made only of invisible characters instead of failing
    pub skip_unprintable_lines: bool,

    /// Require every record line to be exactly 120 characters
    ///
    /// Off by default: files that stop after the last populated field are
    /// common, and optional trailing fields are gated by length instead.
    pub strict_record_length: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_unprintable_lines: true,
            strict_record_length: false,
        }
    }
}

/// Position of the sequencer within the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// No record read yet
    Initial,
    /// Header of the current block read, no data records yet
    InHeader,
    /// At least one data record of the current block read
    InData,
    /// Current block closed by its trailer
    InTrailer,
    /// End record read
    Ended,
}

/// Record-order state machine over a stream of decoded lines
#[derive(Debug)]
pub struct Sequencer {
    config: ParserConfig,
    state: SequencerState,
    /// The open block; `Some` exactly in `InHeader` and `InData`
    block: Option<Block>,
    transfers: Vec<Transfer>,
    /// 1-based number of the last line fed
    line: usize,
}

impl Sequencer {
    /// Create a sequencer in the initial state
    pub fn new(config: ParserConfig) -> Self {
        Sequencer {
            config,
            state: SequencerState::Initial,
            block: None,
            transfers: Vec::new(),
            line: 0,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Transfers from every block reconciled so far, in file order
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Process the next physical line of the file
    ///
    /// Blank lines are skipped but still counted, so line numbers in
    /// errors match the input. A leading byte-order mark is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first structural, field format or reconciliation error.
    /// The sequencer must not be fed again after an error.
    pub fn feed(&mut self, line: &str) -> Result<(), ZenginError> {
        self.line += 1;

        let chars: Vec<char> = line.chars().collect();
        let chars = classifier::strip_bom(&chars);
        if classifier::is_blank(chars) {
            return Ok(());
        }

        let Some(kind) = classifier::apparent_kind(chars) else {
            return self.on_unrecognized(chars);
        };

        self.check_order(kind)?;
        if classifier::classify(chars) == LineKind::Unrecognized {
            // A known marker on a short line is a truncated record, not noise.
            return Err(self.field_error(FieldFormatError::LineTooShort {
                kind,
                expected: kind.min_length(),
                actual: chars.len(),
            }));
        }
        self.check_record_length(kind, chars)?;

        match kind {
            RecordKind::Header => self.on_header(chars),
            RecordKind::Data => self.on_data(chars),
            RecordKind::Trailer => self.on_trailer(chars),
            RecordKind::End => self.on_end(),
        }
    }

    /// Finish the parse and hand back every transfer
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if no record was ever read
    /// - `UnexpectedEndOfFile` if the input stopped before the end record
    pub fn finish(self) -> Result<Vec<Transfer>, ZenginError> {
        match self.state {
            SequencerState::Ended => Ok(self.transfers),
            SequencerState::Initial => Err(ZenginError::Structural {
                line: None,
                source: StructuralError::EmptyInput,
            }),
            SequencerState::InHeader | SequencerState::InData => {
                Err(ZenginError::unexpected_eof(RecordKind::Trailer))
            }
            SequencerState::InTrailer => Err(ZenginError::unexpected_eof(RecordKind::End)),
        }
    }

    /// Fail unless a record of `kind` may follow the records read so far
    fn check_order(&self, kind: RecordKind) -> Result<(), ZenginError> {
        use SequencerState::*;

        let error = match (kind, self.state) {
            (_, Ended) => StructuralError::RecordAfterEnd { kind },
            (RecordKind::Header, Initial | InTrailer) => return Ok(()),
            (RecordKind::Header, InHeader | InData) => StructuralError::MissingTrailer,
            (RecordKind::Data | RecordKind::Trailer, InHeader | InData) => return Ok(()),
            (RecordKind::Data, Initial | InTrailer) => StructuralError::DataBeforeHeader,
            (RecordKind::Trailer, Initial | InTrailer) => StructuralError::TrailerBeforeHeader,
            (RecordKind::End, InTrailer) => return Ok(()),
            (RecordKind::End, Initial | InHeader | InData) => StructuralError::EndBeforeTrailer,
        };
        Err(self.structural(error))
    }

    fn check_record_length(&self, kind: RecordKind, chars: &[char]) -> Result<(), ZenginError> {
        if !self.config.strict_record_length || chars.len() == RECORD_LENGTH {
            return Ok(());
        }
        Err(self.field_error(FieldFormatError::LengthMismatch {
            kind,
            expected: RECORD_LENGTH,
            actual: chars.len(),
        }))
    }

    fn on_header(&mut self, chars: &[char]) -> Result<(), ZenginError> {
        let header = Header::parse(chars).map_err(|e| self.field_error(e))?;
        debug!(
            line = self.line,
            sender_code = %header.sender_code,
            transfer_date = %header.transfer_date,
            "header record"
        );

        self.block = Some(Block::new(header));
        self.state = SequencerState::InHeader;
        Ok(())
    }

    fn on_data(&mut self, chars: &[char]) -> Result<(), ZenginError> {
        let record = DataRecord::parse(chars).map_err(|e| self.field_error(e))?;
        debug!(
            line = self.line,
            bank_code = %record.recipient_bank_code,
            amount = record.amount,
            "data record"
        );

        let line = self.line;
        let block = self.block.as_mut().ok_or_else(|| {
            ZenginError::structural(line, StructuralError::DataBeforeHeader)
        })?;
        block.push(record);
        self.state = SequencerState::InData;
        Ok(())
    }

    fn on_trailer(&mut self, chars: &[char]) -> Result<(), ZenginError> {
        let trailer = Trailer::parse(chars).map_err(|e| self.field_error(e))?;
        let block = self
            .block
            .take()
            .ok_or_else(|| self.structural(StructuralError::TrailerBeforeHeader))?;

        let line = self.line;
        let transfers =
            reconcile(block, &trailer).map_err(|e| ZenginError::reconciliation(line, e))?;
        info!(
            line,
            count = trailer.total_count,
            amount = trailer.total_amount,
            "block reconciled"
        );

        self.transfers.extend(transfers);
        self.state = SequencerState::InTrailer;
        Ok(())
    }

    fn on_end(&mut self) -> Result<(), ZenginError> {
        debug!(line = self.line, "end record");
        self.state = SequencerState::Ended;
        Ok(())
    }

    /// A line without a record type marker
    fn on_unrecognized(&mut self, chars: &[char]) -> Result<(), ZenginError> {
        if self.config.skip_unprintable_lines && classifier::is_unprintable(chars) {
            warn!(line = self.line, "skipping unprintable line");
            return Ok(());
        }

        Err(self.structural(StructuralError::UnknownRecordType {
            content: chars.iter().collect(),
        }))
    }

    fn structural(&self, error: StructuralError) -> ZenginError {
        ZenginError::structural(self.line, error)
    }

    fn field_error(&self, error: FieldFormatError) -> ZenginError {
        ZenginError::field_format(self.line, error)
    }
}

/// Parse a complete file given as already-decoded lines
///
/// # Errors
///
/// Returns the first error encountered; see [`Sequencer::feed`] and
/// [`Sequencer::finish`].
pub fn parse_lines<I, S>(lines: I, config: ParserConfig) -> Result<Vec<Transfer>, ZenginError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sequencer = Sequencer::new(config);
    for line in lines {
        sequencer.feed(line.as_ref())?;
    }
    sequencer.finish()
}
