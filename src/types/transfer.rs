//! Transfer output type
//!
//! A `Transfer` is the unit handed back to callers: one per data record,
//! carrying the sender details of the batch header it belongs to.

use super::record::{AccountType, TransferDate};

/// A single reconciled money transfer
///
/// Built only by the reconciler once the owning block's trailer checks out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Sender name from the batch header, whitespace-trimmed
    pub sender_name: String,

    /// Transfer date from the batch header
    pub transfer_date: TransferDate,

    /// 4-digit recipient bank code
    pub recipient_bank_code: String,

    /// 3-digit recipient branch code
    pub recipient_branch_code: String,

    pub recipient_account_type: AccountType,

    /// 7-digit recipient account number
    pub recipient_account_number: String,

    /// Recipient name, whitespace-trimmed
    pub recipient_name: String,

    /// Transfer amount in yen
    pub amount: u64,
}
