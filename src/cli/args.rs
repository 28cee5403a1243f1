//! Defines the command-line arguments and subcommands for the Conform CLI.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "conform",
    version,
    about = "Runs expected-vs-actual conformance case files and reports the results."
)]
pub struct ConformArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every suite found under a path.
    Run {
        /// A case file, or a directory searched recursively for case files.
        #[arg(default_value = "suites")]
        path: PathBuf,
        /// Output format for the report stream.
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,
        /// Run only cases whose description contains this text.
        #[arg(short, long)]
        filter: Option<String>,
        /// Never color console output.
        #[arg(long)]
        no_color: bool,
    },
    /// List the suites found under a path without running them.
    List {
        #[arg(default_value = "suites")]
        path: PathBuf,
    },
}
