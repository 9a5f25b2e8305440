// CLI module
// Command-line interface, argument parsing, and the batch pipeline

mod args;

pub use args::{CliArgs, FormatArg};

use clap::Parser;
use serde::Serialize;

use crate::core::{classify_all, TicketStore};
use crate::import::import_tickets;
use crate::types::DeskError;

/// Parse command-line arguments using clap
///
/// On invalid or missing arguments (or `--help`), clap prints its own
/// message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run the batch import pipeline for the parsed arguments
///
/// Reads the input file, imports it into a fresh store, and prints the
/// import result as pretty JSON to stdout. The `--classify` and
/// `--stats` flags append further JSON documents in that order.
///
/// # Errors
///
/// Fails when the format cannot be resolved, the file cannot be read,
/// or output serialization fails. Row-level import failures are not
/// errors; they are part of the printed result.
pub fn run(args: &CliArgs) -> Result<(), DeskError> {
    let format = args.resolve_format()?;
    let bytes = std::fs::read(&args.input_file)?;

    let mut store = TicketStore::new();
    let result = import_tickets(&mut store, format, &bytes);
    print_json(&result)?;

    if args.classify {
        print_json(&classify_all(&store))?;
    }
    if args.stats {
        print_json(&store.stats())?;
    }

    Ok(())
}

// Pretty JSON on stdout; logs stay on stderr
fn print_json<T: Serialize>(value: &T) -> Result<(), DeskError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|error| DeskError::internal(error.to_string()))?;
    println!("{rendered}");
    Ok(())
}
