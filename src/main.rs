//! LedgerDesk batch CLI
//!
//! Command-line interface for importing support-ticket batches from CSV,
//! JSON, or XML files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- tickets.csv > result.json
//! cargo run -- --format json tickets.txt > result.json
//! cargo run -- --classify --stats tickets.xml > result.json
//! ```
//!
//! The program reads ticket records from the input file, imports them into
//! an in-memory store with row-by-row validation, and prints the import
//! result as pretty JSON to stdout. `--classify` and `--stats` append
//! further JSON documents. Logs go to stderr; set `RUST_LOG` to adjust the
//! filter.
//!
//! # Exit Codes
//!
//! - 0: Success (including imports where some or all rows were rejected)
//! - 1: Error (missing arguments, unreadable file, unrecognized extension)

use anyhow::Result;
use ledgerdesk::cli;

fn main() -> Result<()> {
    let args = cli::parse_args();

    setup_logging();

    cli::run(&args)?;

    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the JSON results, so logging goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
