//! Zengin Parser CLI
//!
//! Command-line interface for converting Zengin bulk transfer files into CSV tables.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transfers.txt > transfers.csv
//! cargo run -- --lang ja --with-date transfers.txt > transfers.csv
//! cargo run -- --encoding shift-jis --strict-length transfers.txt > transfers.csv
//! RUST_LOG=debug cargo run -- transfers.txt > transfers.csv
//! ```
//!
//! The program reads the input file (default `zengin.txt`), validates record
//! order and reconciles every block against its trailer, and writes one CSV row
//! per transfer to stdout. Diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, undecodable bytes, malformed or inconsistent records)
//! - 2: Invalid command-line arguments

use std::process;
use tracing_subscriber::EnvFilter;
use zengin_parser::{cli, pipeline};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    init_logging(args.verbose);

    let options = args.to_parse_options();
    let table = args.to_table_options();

    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process(&args.input_file, options, table, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install the stderr log subscriber
///
/// `-v` flags take precedence over `RUST_LOG`; without either, only warnings are shown.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
