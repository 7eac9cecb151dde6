//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetmap",
    version,
    about = "Inspect an XLSX spreadsheet, remap its columns, and export JSON",
    long_about = "Decode the first sheet of an XLSX file, render it for inspection,\n\
                  rename its columns to arbitrary target properties, and export the\n\
                  remapped records as a pretty-printed JSON array."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the decoded table.
    Show(ShowArgs),

    /// List the header fields of the first sheet.
    Headers(HeadersArgs),

    /// Apply column mappings and write the JSON export.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the XLSX file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sort the rendered rows by this field. Repeating the flag with the
    /// same field toggles the direction, like clicking a column header
    /// twice; a different field resets to ascending.
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Vec<String>,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// Path to the XLSX file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the XLSX file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column rename as SOURCE=TARGET. May be repeated; a later flag for the
    /// same source overwrites the earlier one.
    #[arg(long = "map", value_name = "SOURCE=TARGET", required = true)]
    pub map: Vec<String>,

    /// Directory to write mapped_data.json into (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
