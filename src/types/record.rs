//! Record-level types for Zengin transfer files
//!
//! This module defines the three field-bearing record kinds of a Zengin file
//! (header, data, trailer) together with the enumerated codes they carry.
//! Values here are produced by the field parsers in `core::parser` and are
//! never constructed from unvalidated input elsewhere.

use chrono::NaiveDate;
use std::fmt;

/// Length of a canonical fixed-width Zengin record
pub const RECORD_LENGTH: usize = 120;

/// Structural kind of a record line, identified by its leading marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Header,
    Data,
    Trailer,
    End,
}

impl RecordKind {
    /// The single-character type marker that prefixes lines of this kind
    pub fn marker(self) -> char {
        match self {
            RecordKind::Header => '1',
            RecordKind::Data => '2',
            RecordKind::Trailer => '8',
            RecordKind::End => '9',
        }
    }

    /// Shortest line that still carries every mandatory field of this kind
    pub fn min_length(self) -> usize {
        match self {
            RecordKind::Header => 80,
            RecordKind::Data => 91,
            RecordKind::Trailer => 19,
            RecordKind::End => 1,
        }
    }

    /// Look up the record kind announced by a type marker
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '1' => Some(RecordKind::Header),
            '2' => Some(RecordKind::Data),
            '8' => Some(RecordKind::Trailer),
            '9' => Some(RecordKind::End),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Header => "header",
            RecordKind::Data => "data",
            RecordKind::Trailer => "trailer",
            RecordKind::End => "end",
        };
        f.write_str(name)
    }
}

/// Business purpose of a transfer batch (種別コード)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryCode {
    /// Combined transfer (総合振込), code "21"
    Combination,
    /// Salary payment, codes "11" and "71"
    Payment,
    /// Bonus payment, codes "12" and "72"
    Bonus,
}

impl CategoryCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "21" => Some(CategoryCode::Combination),
            "11" | "71" => Some(CategoryCode::Payment),
            "12" | "72" => Some(CategoryCode::Bonus),
            _ => None,
        }
    }
}

/// Deposit account classification (預金種目)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// 普通預金, code "1"
    Regular,
    /// 当座預金, code "2"
    Checking,
    /// 貯蓄預金, code "4"
    Savings,
}

impl AccountType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(AccountType::Regular),
            "2" => Some(AccountType::Checking),
            "4" => Some(AccountType::Savings),
            _ => None,
        }
    }

    /// The single-digit code this account type is written as
    pub fn code(self) -> &'static str {
        match self {
            AccountType::Regular => "1",
            AccountType::Checking => "2",
            AccountType::Savings => "4",
        }
    }
}

/// New-transfer code (新規コード) of a data record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewCode {
    /// 第1回振込分, code "1"
    FirstTransfer,
    /// Recipient bank, branch, account type or number changed, code "2"
    UpdateTransfer,
    /// code "0"
    Other,
}

impl NewCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(NewCode::FirstTransfer),
            "2" => Some(NewCode::UpdateTransfer),
            "0" => Some(NewCode::Other),
            _ => None,
        }
    }
}

/// Character-code marker in the header (コード区分)
///
/// Recorded as written. Values outside the standard pair are kept in
/// `Other` and never cross-checked against the detected file encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EncodingMarker {
    /// "0": JIS family, transmitted as Shift-JIS or a transcoded equivalent
    Jis,
    /// "1": EBCDIC
    Ebcdic,
    Other(String),
}

impl EncodingMarker {
    pub fn from_code(code: &str) -> Self {
        match code {
            "0" => EncodingMarker::Jis,
            "1" => EncodingMarker::Ebcdic,
            other => EncodingMarker::Other(other.to_string()),
        }
    }
}

/// Text encoding of a Zengin file as delivered on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    ShiftJis,
    Utf8,
}

impl Encoding {
    pub(crate) fn codec(self) -> &'static encoding_rs::Encoding {
        match self {
            Encoding::ShiftJis => encoding_rs::SHIFT_JIS,
            Encoding::Utf8 => encoding_rs::UTF_8,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec().name())
    }
}

/// Transfer date as written in the header (MMDD, no year)
///
/// Only constructed for month/day pairs that exist in some year, so
/// February 29th is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransferDate {
    month: u32,
    day: u32,
}

impl TransferDate {
    // Any leap year works; only month/day validity is checked.
    const REFERENCE_LEAP_YEAR: i32 = 2000;

    /// Build a date from a month/day pair, rejecting impossible days
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(Self::REFERENCE_LEAP_YEAR, month, day)?;
        Some(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Resolve against a concrete year
    ///
    /// Returns `None` for February 29th in a non-leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for TransferDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

/// Header record (ヘッダー・レコード), one per transfer batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub category: CategoryCode,
    pub encoding_marker: EncodingMarker,
    /// 10-digit requester code (依頼人コード)
    pub sender_code: String,
    /// Requester name, trailing padding removed
    pub sender_name: String,
    pub transfer_date: TransferDate,
    pub sender_bank_code: String,
    pub sender_bank_name: String,
    pub sender_branch_code: String,

    // Trailing fields, present only when the line reaches them.
    pub sender_branch_name: Option<String>,
    pub sender_account_type: Option<AccountType>,
    pub sender_account_number: Option<String>,
}

/// Data record (データ・レコード), one per individual transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRecord {
    pub recipient_bank_code: String,
    pub recipient_bank_name: String,
    pub recipient_branch_code: String,
    pub recipient_branch_name: String,
    /// 手形交換所番号; `None` when left blank
    pub exchange_office_code: Option<String>,
    pub recipient_account_type: AccountType,
    pub recipient_account_number: String,
    pub recipient_name: String,
    pub amount: u64,
    pub new_code: NewCode,

    /// 20-character block holding customer codes 1/2 or EDI information
    pub extra: Option<String>,
    /// 振込指定区分; `None` when absent or blank
    pub transfer_category: Option<u8>,
    /// Whether `extra` holds EDI information ("Y" marker)
    pub edi_present: Option<bool>,
}

/// Trailer record (トレーラ・レコード), the checksum record of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailer {
    pub total_count: usize,
    pub total_amount: u64,
}
