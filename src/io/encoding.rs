//! Encoding detection for raw Zengin files
//!
//! Zengin files arrive either as Shift-JIS (the traditional form) or already
//! transcoded to UTF-8. Shift-JIS cannot be recognised reliably from bytes
//! alone, so detection only asks whether a sample is confidently UTF-8 and
//! falls back to Shift-JIS otherwise.

use crate::types::Encoding;

/// Number of leading bytes inspected by [`detect_encoding`]
pub const DETECTION_SAMPLE_SIZE: usize = 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// How the decoder picks the input encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingChoice {
    /// Sample the input and detect
    #[default]
    Auto,
    /// Always decode as Shift-JIS
    ShiftJis,
    /// Always decode as UTF-8
    Utf8,
}

impl EncodingChoice {
    /// Resolve to a concrete encoding, sampling only for `Auto`
    pub fn resolve(self, sample: &[u8]) -> Encoding {
        match self {
            EncodingChoice::Auto => detect_encoding(sample),
            EncodingChoice::ShiftJis => Encoding::ShiftJis,
            EncodingChoice::Utf8 => Encoding::Utf8,
        }
    }
}

/// Guess the encoding of a file from its leading bytes
///
/// A UTF-8 byte-order mark means UTF-8, as does a sample holding at least one
/// non-ASCII byte that is otherwise valid UTF-8. A multi-byte sequence cut off
/// by the end of the sample does not count against UTF-8. Everything else,
/// including a pure ASCII sample, is taken to be Shift-JIS.
pub fn detect_encoding(sample: &[u8]) -> Encoding {
    if sample.starts_with(UTF8_BOM) {
        return Encoding::Utf8;
    }
    if sample.is_ascii() {
        return Encoding::ShiftJis;
    }
    match std::str::from_utf8(sample) {
        Ok(_) => Encoding::Utf8,
        // error_len() is None only for an incomplete sequence at the very end
        Err(e) if e.error_len().is_none() => Encoding::Utf8,
        Err(_) => Encoding::ShiftJis,
    }
}
