//! Benchmark suite for Zengin parsing throughput
//!
//! This benchmark measures the full decode → parse → reconcile path using the
//! divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Inputs
//!
//! Inputs are generated in memory before timing starts:
//! - UTF-8 files with 100, 1,000 and 100,000 data records spread over blocks
//!   of 1,000 records
//! - The same files re-encoded as Shift-JIS

use divan::Bencher;
use zengin_parser::{parse_reader, ParseOptions};

fn main() {
    divan::main();
}

const BLOCK_SIZE: usize = 1_000;

fn header_line() -> String {
    format!(
        "1210{}{:<40}0224{}{:<15}010{:<15}20999999{:17}",
        "0110999999", "ｷﾔﾂｼﾕ ﾀﾛｳ", "9999", "ｷﾔﾂｼﾕｷﾞﾝｺｳ", "ﾎﾝﾃﾝ", ""
    )
}

fn data_line(amount: u64) -> String {
    format!(
        "22606{:<15}020{:<15}    19876543{:<30}{:010}0{:29}",
        "ｷﾔﾂｼﾕ ﾋｼﾑｹ", "ｵﾓﾀﾆ1", "ｷﾔﾂｼ ｼﾖｳｼﾞ", amount, ""
    )
}

/// Build a complete file with `records` data records
fn generate_file(records: usize) -> String {
    let mut lines = Vec::with_capacity(records + records / BLOCK_SIZE * 2 + 3);
    let mut remaining = records;
    while remaining > 0 {
        let count = remaining.min(BLOCK_SIZE);
        lines.push(header_line());
        let mut total = 0;
        for i in 0..count {
            let amount = (i as u64 % 9_999) + 1;
            total += amount;
            lines.push(data_line(amount));
        }
        lines.push(format!("8{:06}{:012}{:101}", count, total, ""));
        remaining -= count;
    }
    lines.push(format!("9{:119}", ""));
    lines.join("\r\n")
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn parse_utf8(bencher: Bencher, records: usize) {
    let input = generate_file(records);

    bencher.bench(|| {
        parse_reader(divan::black_box(input.as_bytes()), ParseOptions::default())
            .expect("Parsing failed")
    });
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn parse_shift_jis(bencher: Bencher, records: usize) {
    let input = generate_file(records);
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(&input);
    let bytes = bytes.into_owned();

    bencher.bench(|| {
        parse_reader(divan::black_box(&bytes[..]), ParseOptions::default())
            .expect("Parsing failed")
    });
}
