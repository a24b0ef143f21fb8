//! Field parsers for header, data and trailer records
//!
//! Each record kind implements `FixedWidthRecord`: the line is first checked
//! for its minimum length and type marker, then fields are extracted at fixed
//! character offsets and validated in order. The first invalid field ends the
//! parse with a `FieldFormatError` naming it.
//!
//! Trailing fields beyond the minimum length are optional. They are `None`
//! when the line stops before them, which keeps "absent" distinguishable
//! from "present but blank".

use crate::core::fields::RecordLine;
use crate::core::traits::FixedWidthRecord;
use crate::types::{
    AccountType, CategoryCode, DataRecord, EncodingMarker, FieldFormatError, Header, NewCode,
    RecordKind, Trailer, TransferDate,
};

mod header_layout {
    use std::ops::Range;

    pub const CATEGORY: Range<usize> = 1..3;
    pub const ENCODING: Range<usize> = 3..4;
    pub const SENDER_CODE: Range<usize> = 4..14;
    pub const SENDER_NAME: Range<usize> = 14..54;
    pub const TRANSFER_DATE: Range<usize> = 54..58;
    pub const BANK_CODE: Range<usize> = 58..62;
    pub const BANK_NAME: Range<usize> = 62..77;
    pub const BRANCH_CODE: Range<usize> = 77..80;
    pub const BRANCH_NAME: Range<usize> = 80..95;
    pub const ACCOUNT_TYPE: Range<usize> = 95..96;
    pub const ACCOUNT_NUMBER: Range<usize> = 96..103;
}

mod data_layout {
    use std::ops::Range;

    pub const BANK_CODE: Range<usize> = 1..5;
    pub const BANK_NAME: Range<usize> = 5..20;
    pub const BRANCH_CODE: Range<usize> = 20..23;
    pub const BRANCH_NAME: Range<usize> = 23..38;
    pub const EXCHANGE_OFFICE: Range<usize> = 38..42;
    pub const ACCOUNT_TYPE: Range<usize> = 42..43;
    pub const ACCOUNT_NUMBER: Range<usize> = 43..50;
    pub const RECIPIENT_NAME: Range<usize> = 50..80;
    pub const AMOUNT: Range<usize> = 80..90;
    pub const NEW_CODE: Range<usize> = 90..91;
    pub const EXTRA: Range<usize> = 91..111;
    pub const TRANSFER_CATEGORY: Range<usize> = 111..112;
    pub const EDI_FLAG: Range<usize> = 112..113;
}

mod trailer_layout {
    use std::ops::Range;

    pub const TOTAL_COUNT: Range<usize> = 1..7;
    pub const TOTAL_AMOUNT: Range<usize> = 7..19;
}

impl FixedWidthRecord for Header {
    const KIND: RecordKind = RecordKind::Header;

    fn parse_fields(line: &RecordLine<'_>) -> Result<Self, FieldFormatError> {
        use header_layout::*;

        let category = line.code("category code", CATEGORY, CategoryCode::from_code)?;
        let encoding_marker = EncodingMarker::from_code(&line.text(ENCODING));
        let sender_code = line.digits("sender code", SENDER_CODE)?;
        let sender_name = line.padded(SENDER_NAME);
        let transfer_date = parse_transfer_date(line)?;
        let sender_bank_code = line.digits("sender bank code", BANK_CODE)?;
        let sender_bank_name = line.padded(BANK_NAME);
        let sender_branch_code = line.digits("sender branch code", BRANCH_CODE)?;

        let sender_branch_name = line
            .reaches(BRANCH_NAME.end)
            .then(|| line.padded(BRANCH_NAME));

        let sender_account_type = if line.reaches(ACCOUNT_TYPE.end) {
            Some(line.code("sender account type", ACCOUNT_TYPE, AccountType::from_code)?)
        } else {
            None
        };

        let sender_account_number = if line.reaches(ACCOUNT_NUMBER.end) {
            Some(line.digits("sender account number", ACCOUNT_NUMBER)?)
        } else {
            None
        };

        Ok(Header {
            category,
            encoding_marker,
            sender_code,
            sender_name,
            transfer_date,
            sender_bank_code,
            sender_bank_name,
            sender_branch_code,
            sender_branch_name,
            sender_account_type,
            sender_account_number,
        })
    }
}

fn parse_transfer_date(line: &RecordLine<'_>) -> Result<TransferDate, FieldFormatError> {
    let range = header_layout::TRANSFER_DATE;
    let value = line.text(range.clone());
    let invalid = || FieldFormatError::InvalidDate {
        value: value.clone(),
    };

    let digits = line.digits("transfer date", range).map_err(|_| invalid())?;
    let month = digits[0..2].parse::<u32>().map_err(|_| invalid())?;
    let day = digits[2..4].parse::<u32>().map_err(|_| invalid())?;
    TransferDate::new(month, day).ok_or_else(invalid)
}

impl FixedWidthRecord for DataRecord {
    const KIND: RecordKind = RecordKind::Data;

    fn parse_fields(line: &RecordLine<'_>) -> Result<Self, FieldFormatError> {
        use data_layout::*;

        let recipient_bank_code = line.digits("recipient bank code", BANK_CODE)?;
        let recipient_bank_name = line.padded(BANK_NAME);
        let recipient_branch_code = line.digits("recipient branch code", BRANCH_CODE)?;
        let recipient_branch_name = line.padded(BRANCH_NAME);

        let exchange_office_code = if line.is_blank(EXCHANGE_OFFICE) {
            None
        } else {
            Some(line.digits("exchange office code", EXCHANGE_OFFICE)?)
        };

        let recipient_account_type =
            line.code("recipient account type", ACCOUNT_TYPE, AccountType::from_code)?;
        let recipient_account_number = line.digits("recipient account number", ACCOUNT_NUMBER)?;
        let recipient_name = line.padded(RECIPIENT_NAME);
        let amount = line.number("transfer amount", AMOUNT)?;
        let new_code = line.code("new code", NEW_CODE, NewCode::from_code)?;

        let extra = line.reaches(EXTRA.end).then(|| line.text(EXTRA));

        // A blank category is written by banks that leave it unspecified.
        let transfer_category = if !line.reaches(TRANSFER_CATEGORY.end)
            || line.is_blank(TRANSFER_CATEGORY)
        {
            None
        } else {
            let digit = line.number("transfer category", TRANSFER_CATEGORY)?;
            Some(digit as u8)
        };

        let edi_present = line
            .reaches(EDI_FLAG.end)
            .then(|| line.text(EDI_FLAG) == "Y");

        Ok(DataRecord {
            recipient_bank_code,
            recipient_bank_name,
            recipient_branch_code,
            recipient_branch_name,
            exchange_office_code,
            recipient_account_type,
            recipient_account_number,
            recipient_name,
            amount,
            new_code,
            extra,
            transfer_category,
            edi_present,
        })
    }
}

impl FixedWidthRecord for Trailer {
    const KIND: RecordKind = RecordKind::Trailer;

    fn parse_fields(line: &RecordLine<'_>) -> Result<Self, FieldFormatError> {
        use trailer_layout::*;

        let total_count = line.number("total count", TOTAL_COUNT)? as usize;
        let total_amount = line.number("total amount", TOTAL_AMOUNT)?;

        Ok(Trailer {
            total_count,
            total_amount,
        })
    }
}

/// Parse a header line
pub fn parse_header(line: &[char]) -> Result<Header, FieldFormatError> {
    Header::parse(line)
}

/// Parse a data line
pub fn parse_data(line: &[char]) -> Result<DataRecord, FieldFormatError> {
    DataRecord::parse(line)
}

/// Parse a trailer line
pub fn parse_trailer(line: &[char]) -> Result<Trailer, FieldFormatError> {
    Trailer::parse(line)
}
