use crate::import::ImportFormat;
use crate::types::DeskError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Import support-ticket batches with per-row error reporting
#[derive(Parser, Debug)]
#[command(name = "ledgerdesk")]
#[command(about = "Import support-ticket batches with per-row error reporting", long_about = None)]
pub struct CliArgs {
    /// Input batch file containing ticket records
    #[arg(value_name = "INPUT", help = "Path to the ticket batch file")]
    pub input_file: PathBuf,

    /// Input format, detected from the file extension when omitted
    #[arg(
        long = "format",
        value_name = "FORMAT",
        help = "Input format: 'csv', 'json', or 'xml' (default: detect from the extension)"
    )]
    pub format: Option<FormatArg>,

    /// Classify imported tickets by keyword after the import
    #[arg(long, help = "Print a classification suggestion for every stored ticket")]
    pub classify: bool,

    /// Print store statistics after the import
    #[arg(long, help = "Print ticket counts by category, priority, and status")]
    pub stats: bool,
}

/// Accepted values for the --format flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
    Xml,
}

impl From<FormatArg> for ImportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ImportFormat::Csv,
            FormatArg::Json => ImportFormat::Json,
            FormatArg::Xml => ImportFormat::Xml,
        }
    }
}

impl CliArgs {
    /// Determine the import format for the input file
    ///
    /// An explicit `--format` wins unconditionally; otherwise the format
    /// is detected from the filename extension.
    ///
    /// # Returns
    ///
    /// The resolved format, or an error when the flag is absent and the
    /// extension is not one of the supported three.
    pub fn resolve_format(&self) -> Result<ImportFormat, DeskError> {
        if let Some(format) = self.format {
            return Ok(format.into());
        }

        let name = self.input_file.to_string_lossy();
        ImportFormat::from_filename(&name).ok_or_else(|| {
            DeskError::unsupported_file(format!(
                "Cannot detect a format from '{name}'; pass --format csv|json|xml"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Format flag parsing tests
    #[rstest]
    #[case::no_flag(&["program", "input.csv"], None)]
    #[case::explicit_csv(&["program", "--format", "csv", "input.dat"], Some(FormatArg::Csv))]
    #[case::explicit_json(&["program", "--format", "json", "input.dat"], Some(FormatArg::Json))]
    #[case::explicit_xml(&["program", "--format", "xml", "input.dat"], Some(FormatArg::Xml))]
    fn test_format_flag_parsing(#[case] args: &[&str], #[case] expected: Option<FormatArg>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.format, expected);
    }

    // Output flag tests
    #[rstest]
    #[case::defaults(&["program", "input.csv"], false, false)]
    #[case::classify(&["program", "--classify", "input.csv"], true, false)]
    #[case::stats(&["program", "--stats", "input.csv"], false, true)]
    #[case::both(&["program", "--classify", "--stats", "input.csv"], true, true)]
    fn test_output_flags(#[case] args: &[&str], #[case] classify: bool, #[case] stats: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.classify, classify);
        assert_eq!(parsed.stats, stats);
    }

    // Format resolution tests
    #[rstest]
    #[case::from_csv_extension(&["program", "batch.csv"], ImportFormat::Csv)]
    #[case::from_json_extension(&["program", "data/batch.json"], ImportFormat::Json)]
    #[case::from_xml_extension(&["program", "batch.xml"], ImportFormat::Xml)]
    #[case::flag_overrides_extension(
        &["program", "--format", "xml", "batch.csv"],
        ImportFormat::Xml
    )]
    #[case::flag_covers_unknown_extension(
        &["program", "--format", "json", "batch.txt"],
        ImportFormat::Json
    )]
    fn test_format_resolution(#[case] args: &[&str], #[case] expected: ImportFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.resolve_format().unwrap(), expected);
    }

    #[test]
    fn test_unknown_extension_without_flag_is_rejected() {
        let parsed = CliArgs::try_parse_from(["program", "batch.txt"]).unwrap();
        let error = parsed.resolve_format().unwrap_err();
        assert!(error.to_string().contains("pass --format"));
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_format(&["program", "--format", "yaml", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
