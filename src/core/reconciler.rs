//! Block reconciliation and transfer building
//!
//! A block is one header plus the data records that follow it. When the
//! block's trailer arrives, the trailer's declared count and total amount are
//! checked against the accumulated records; only a block that balances is
//! turned into transfers.

use crate::types::{DataRecord, Header, ReconciliationError, Trailer, Transfer};

/// Accumulator for the block currently being read
///
/// Created on a header line, grown on each data line and consumed by
/// [`reconcile`] on the trailer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    header: Header,
    records: Vec<DataRecord>,
}

impl Block {
    /// Start a new block with no data records
    pub fn new(header: Header) -> Self {
        Block {
            header,
            records: Vec::new(),
        }
    }

    /// Append a data record in encounter order
    pub fn push(&mut self, record: DataRecord) {
        self.records.push(record);
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn records(&self) -> &[DataRecord] {
        &self.records
    }

    /// Sum of the accumulated amounts
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the sum does not fit in a `u64`.
    pub fn total_amount(&self) -> Result<u64, ReconciliationError> {
        self.records.iter().try_fold(0u64, |sum, record| {
            sum.checked_add(record.amount)
                .ok_or(ReconciliationError::AmountOverflow)
        })
    }
}

/// Verify a completed block against its trailer and build its transfers
///
/// Transfers come out in the order their data records were read.
///
/// # Errors
///
/// - `CountMismatch` if the trailer's count differs from the number of records
/// - `AmountMismatch` if the trailer's total differs from the summed amounts
/// - `AmountOverflow` if the summed amounts overflow
pub fn reconcile(block: Block, trailer: &Trailer) -> Result<Vec<Transfer>, ReconciliationError> {
    let count = block.records.len();
    if count != trailer.total_count {
        return Err(ReconciliationError::CountMismatch {
            expected: count,
            actual: trailer.total_count,
        });
    }

    let total = block.total_amount()?;
    if total != trailer.total_amount {
        return Err(ReconciliationError::AmountMismatch {
            expected: total,
            actual: trailer.total_amount,
        });
    }

    let Block { header, records } = block;
    let sender_name = header.sender_name.trim().to_string();

    let transfers = records
        .into_iter()
        .map(|record| Transfer {
            sender_name: sender_name.clone(),
            transfer_date: header.transfer_date,
            recipient_bank_code: record.recipient_bank_code,
            recipient_branch_code: record.recipient_branch_code,
            recipient_account_type: record.recipient_account_type,
            recipient_account_number: record.recipient_account_number,
            recipient_name: record.recipient_name.trim().to_string(),
            amount: record.amount,
        })
        .collect();

    Ok(transfers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse_data, parse_header};
    use crate::core::test_lines::{data_line, data_with_amount, header_line, DataLine, HeaderLine};
    use rstest::rstest;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn header() -> Header {
        parse_header(&chars(&header_line(&HeaderLine::default()))).unwrap()
    }

    fn record(amount: u64) -> DataRecord {
        parse_data(&chars(&data_with_amount(amount))).unwrap()
    }

    fn block(amounts: &[u64]) -> Block {
        let mut block = Block::new(header());
        for &amount in amounts {
            block.push(record(amount));
        }
        block
    }

    #[test]
    fn test_reconcile_single_record() {
        let transfers = reconcile(
            block(&[10]),
            &Trailer {
                total_count: 1,
                total_amount: 10,
            },
        )
        .unwrap();

        assert_eq!(transfers.len(), 1);
        let transfer = &transfers[0];
        assert_eq!(transfer.sender_name, "ｷﾔﾂｼﾕ ﾀﾛｳ");
        assert_eq!(transfer.transfer_date.to_string(), "0224");
        assert_eq!(transfer.recipient_bank_code, "2606");
        assert_eq!(transfer.recipient_branch_code, "020");
        assert_eq!(transfer.recipient_account_number, "9876543");
        assert_eq!(transfer.recipient_name, "ｷﾔﾂｼ ｼﾖｳｼﾞ");
        assert_eq!(transfer.amount, 10);
    }

    #[test]
    fn test_reconcile_preserves_record_order() {
        let transfers = reconcile(
            block(&[10, 20, 30]),
            &Trailer {
                total_count: 3,
                total_amount: 60,
            },
        )
        .unwrap();

        let amounts: Vec<u64> = transfers.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![10, 20, 30]);
    }

    #[test]
    fn test_reconcile_empty_block() {
        let transfers = reconcile(
            block(&[]),
            &Trailer {
                total_count: 0,
                total_amount: 0,
            },
        )
        .unwrap();
        assert!(transfers.is_empty());
    }

    #[rstest]
    #[case::count_too_high(&[10], 2, 10, ReconciliationError::CountMismatch { expected: 1, actual: 2 })]
    #[case::count_too_low(&[10, 20], 1, 30, ReconciliationError::CountMismatch { expected: 2, actual: 1 })]
    #[case::amount(&[10, 20], 2, 31, ReconciliationError::AmountMismatch { expected: 30, actual: 31 })]
    #[case::empty_block_with_count(&[], 1, 0, ReconciliationError::CountMismatch { expected: 0, actual: 1 })]
    fn test_reconcile_mismatch(
        #[case] amounts: &[u64],
        #[case] total_count: usize,
        #[case] total_amount: u64,
        #[case] expected: ReconciliationError,
    ) {
        let result = reconcile(
            block(amounts),
            &Trailer {
                total_count,
                total_amount,
            },
        );
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn test_total_amount_overflow() {
        let mut block = Block::new(header());
        let mut big = record(1);
        big.amount = u64::MAX;
        block.push(big);
        block.push(record(1));
        assert_eq!(
            block.total_amount(),
            Err(ReconciliationError::AmountOverflow)
        );
    }

    #[test]
    fn test_transfer_names_are_trimmed() {
        let mut header = header();
        header.sender_name = "  ｶﾌﾞｼｷｶﾞｲｼﾔ  ".to_string();
        let mut block = Block::new(header);
        block.push(
            parse_data(&chars(&data_line(&DataLine {
                recipient_name: " ﾔﾏﾀﾞ ﾀﾛｳ",
                ..DataLine::default()
            })))
            .unwrap(),
        );

        let transfers = reconcile(
            block,
            &Trailer {
                total_count: 1,
                total_amount: 10,
            },
        )
        .unwrap();
        assert_eq!(transfers[0].sender_name, "ｶﾌﾞｼｷｶﾞｲｼﾔ");
        assert_eq!(transfers[0].recipient_name, "ﾔﾏﾀﾞ ﾀﾛｳ");
    }
}
