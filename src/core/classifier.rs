//! Line classification
//!
//! Decides which record kind a decoded line structurally resembles, without
//! parsing any fields. A line matches a kind when it starts with that kind's
//! type marker and is at least that kind's minimum length.

use crate::types::RecordKind;

/// Result of classifying one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Data,
    Trailer,
    End,
    Unrecognized,
}

impl From<RecordKind> for LineKind {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Header => LineKind::Header,
            RecordKind::Data => LineKind::Data,
            RecordKind::Trailer => LineKind::Trailer,
            RecordKind::End => LineKind::End,
        }
    }
}

/// Classify a line by type marker and minimum length
pub fn classify(line: &[char]) -> LineKind {
    match apparent_kind(line) {
        Some(kind) if line.len() >= kind.min_length() => kind.into(),
        _ => LineKind::Unrecognized,
    }
}

/// The record kind announced by the line's first character, ignoring length
pub fn apparent_kind(line: &[char]) -> Option<RecordKind> {
    line.first().copied().and_then(RecordKind::from_marker)
}

/// Drop a leading byte-order mark, if any
pub fn strip_bom(line: &[char]) -> &[char] {
    match line.split_first() {
        Some(('\u{feff}', rest)) => rest,
        _ => line,
    }
}

/// Whether a line holds nothing but spaces
pub fn is_blank(line: &[char]) -> bool {
    line.iter().all(|c| c.is_whitespace())
}

/// Whether a line holds only invisible characters (control or format)
///
/// Some exporters append such lines, e.g. a trailing SUB (0x1A).
pub fn is_unprintable(line: &[char]) -> bool {
    !line.is_empty()
        && line.iter().all(|&c| {
            c.is_control()
                || c.is_whitespace()
                || matches!(c, '\u{200b}'..='\u{200f}' | '\u{2060}' | '\u{feff}')
        })
}
