//! Builders for well-formed 120-character record lines used in tests

/// Header fields; widths are enforced by `header_line`
pub struct HeaderLine {
    pub category: &'static str,
    pub sender_code: &'static str,
    pub sender_name: &'static str,
    pub transfer_date: &'static str,
    pub bank_code: &'static str,
    pub bank_name: &'static str,
    pub branch_code: &'static str,
    pub branch_name: &'static str,
    pub account_type: &'static str,
    pub account_number: &'static str,
}

impl Default for HeaderLine {
    fn default() -> Self {
        Self {
            category: "21",
            sender_code: "0110999999",
            sender_name: "ｷﾔﾂｼﾕ ﾀﾛｳ",
            transfer_date: "0224",
            bank_code: "9999",
            bank_name: "ｷﾔﾂｼﾕｷﾞﾝｺｳ",
            branch_code: "010",
            branch_name: "ﾎﾝﾃﾝ",
            account_type: "2",
            account_number: "0999999",
        }
    }
}

pub fn header_line(h: &HeaderLine) -> String {
    format!(
        "1{}0{}{:<40}{}{}{:<15}{}{:<15}{}{}{:17}",
        h.category,
        h.sender_code,
        h.sender_name,
        h.transfer_date,
        h.bank_code,
        h.bank_name,
        h.branch_code,
        h.branch_name,
        h.account_type,
        h.account_number,
        ""
    )
}

/// Data record fields; widths are enforced by `data_line`
pub struct DataLine {
    pub bank_code: &'static str,
    pub bank_name: &'static str,
    pub branch_code: &'static str,
    pub branch_name: &'static str,
    pub exchange_office: &'static str,
    pub account_type: &'static str,
    pub account_number: &'static str,
    pub recipient_name: &'static str,
    pub amount: u64,
    pub new_code: &'static str,
    pub extra: &'static str,
    pub transfer_category: &'static str,
    pub edi_flag: &'static str,
}

impl Default for DataLine {
    fn default() -> Self {
        Self {
            bank_code: "2606",
            bank_name: "ｷﾔﾂｼﾕ ﾋｼﾑｹ",
            branch_code: "020",
            branch_name: "ｵﾓﾀﾆ1",
            exchange_office: "    ",
            account_type: "1",
            account_number: "9876543",
            recipient_name: "ｷﾔﾂｼ ｼﾖｳｼﾞ",
            amount: 10,
            new_code: "0",
            extra: "",
            transfer_category: " ",
            edi_flag: " ",
        }
    }
}

pub fn data_line(d: &DataLine) -> String {
    format!(
        "2{}{:<15}{}{:<15}{}{}{}{:<30}{:010}{}{:<20}{}{}{:7}",
        d.bank_code,
        d.bank_name,
        d.branch_code,
        d.branch_name,
        d.exchange_office,
        d.account_type,
        d.account_number,
        d.recipient_name,
        d.amount,
        d.new_code,
        d.extra,
        d.transfer_category,
        d.edi_flag,
        ""
    )
}

/// A data line with default recipient fields and the given amount
pub fn data_with_amount(amount: u64) -> String {
    data_line(&DataLine {
        amount,
        ..DataLine::default()
    })
}

pub fn trailer_line(count: usize, amount: u64) -> String {
    format!("8{:06}{:012}{:101}", count, amount, "")
}

pub fn end_line() -> String {
    format!("9{:119}", "")
}

#[test]
fn test_builders_produce_canonical_length() {
    let lines = [
        header_line(&HeaderLine::default()),
        data_line(&DataLine::default()),
        trailer_line(1, 10),
        end_line(),
    ];
    for line in lines {
        assert_eq!(line.chars().count(), crate::types::RECORD_LENGTH, "{line}");
    }
}
