//! Table projection of transfers and CSV output
//!
//! Transfers are flattened into rows of display strings with a fixed column
//! order, under either English or Japanese header labels. All projection
//! functions are pure; `write_table_csv` is the only one doing I/O.

use crate::types::{Transfer, ZenginError};
use std::io::Write;

/// English column labels
pub const ENGLISH_COLUMNS: [&str; 7] = [
    "SenderName",
    "RecipientBankCode",
    "RecipientBranchCode",
    "RecipientAccountType",
    "RecipientAccountNumber",
    "RecipientName",
    "Amount",
];

/// Japanese column labels, in the same order as [`ENGLISH_COLUMNS`]
pub const JAPANESE_COLUMNS: [&str; 7] = [
    "振込名義人",
    "金融機関コード",
    "支店コード",
    "科目",
    "口座番号",
    "口座名義人",
    "金額",
];

/// Japanese label of the optional leading transfer date column
pub const JAPANESE_DATE_COLUMN: &str = "振込指定日";

/// Header labels used for the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

/// A header row followed by one row per transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Project transfers under English labels
    pub fn english(transfers: &[Transfer]) -> Self {
        Table {
            header: ENGLISH_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: transfers.iter().map(transfer_row).collect(),
        }
    }

    /// Project transfers under Japanese labels
    ///
    /// With `with_date`, the transfer date (MMDD) is added as the first column.
    pub fn japanese(transfers: &[Transfer], with_date: bool) -> Self {
        let mut header: Vec<String> = Vec::with_capacity(JAPANESE_COLUMNS.len() + 1);
        if with_date {
            header.push(JAPANESE_DATE_COLUMN.to_string());
        }
        header.extend(JAPANESE_COLUMNS.iter().map(|c| c.to_string()));

        let rows = transfers
            .iter()
            .map(|transfer| {
                let mut row = Vec::with_capacity(header.len());
                if with_date {
                    row.push(transfer.transfer_date.to_string());
                }
                row.extend(transfer_row(transfer));
                row
            })
            .collect();

        Table { header, rows }
    }
}

/// The display strings of one transfer, in column order
pub fn transfer_row(transfer: &Transfer) -> Vec<String> {
    vec![
        transfer.sender_name.clone(),
        transfer.recipient_bank_code.clone(),
        transfer.recipient_branch_code.clone(),
        transfer.recipient_account_type.code().to_string(),
        transfer.recipient_account_number.clone(),
        transfer.recipient_name.clone(),
        transfer.amount.to_string(),
    ]
}

/// Write a table as CSV
///
/// # Arguments
///
/// * `table` - Header and rows to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ZenginError)` if a write error occurred
pub fn write_table_csv(table: &Table, output: &mut dyn Write) -> Result<(), ZenginError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
