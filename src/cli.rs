//! The Conform Command-Line Interface.
//!
//! This is the host around the runner: it finds case files, runs each suite
//! with a reporter for the chosen format and turns the overall result into a
//! process exit code.

use crate::cli::args::{Command, ConformArgs};
use crate::config::{OutputFormat, RunConfig};
use crate::discovery::{load_suites, LoadedSuite};
use crate::errors::{HarnessError, Result};
use crate::runner::{RunSummary, Runner};
use clap::Parser;
use std::path::Path;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod args;

const LOG_ENV: &str = "CONFORM_LOG";

/// The main entry point for the CLI.
pub fn run() {
    init_logging();
    let args = ConformArgs::parse();

    let result = match args.command {
        Command::Run {
            path,
            format,
            filter,
            no_color,
        } => {
            let config = RunConfig {
                root: path,
                format,
                filter,
                use_colors: !no_color && RunConfig::default().use_colors,
            };
            handle_run(&config)
        }
        Command::List { path } => handle_list(&path).map(|_| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            report_error(e);
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn report_error(err: HarnessError) {
    eprintln!("{:?}", miette::Report::new(err));
}

/// Handles the `run` subcommand. Returns whether every suite loaded in full
/// and passed.
fn handle_run(config: &RunConfig) -> Result<bool> {
    let mut grand = RunSummary::from_counts(0, 0);
    let mut suites = 0;
    let mut load_failures = 0;
    let mut rejected_cases = 0;

    for loaded in load_suites(&config.root)? {
        let LoadedSuite {
            path,
            mut suite,
            rejected,
        } = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                load_failures += 1;
                report_error(e);
                continue;
            }
        };
        rejected_cases += rejected.len();
        rejected.into_iter().for_each(report_error);

        suite.retain(|case| config.matches(case));
        tracing::info!(path = %path.display(), "running suite");

        let mut runner = Runner::new(config.reporter());
        let summary = runner.run(&mut suite)?;
        grand = grand.merge(summary);
        suites += 1;
    }

    if config.format == OutputFormat::Console && suites + load_failures > 1 {
        println!(
            "\nAll suites: {} run, {} failed to load, {} cases rejected, total {}, passed {}, failed {}",
            suites, load_failures, rejected_cases, grand.total, grand.passed, grand.failed
        );
    }

    Ok(!grand.has_failures() && load_failures == 0 && rejected_cases == 0)
}

/// Handles the `list` subcommand.
fn handle_list(root: &Path) -> Result<()> {
    for loaded in load_suites(root)? {
        match loaded {
            Ok(LoadedSuite {
                path,
                suite,
                rejected,
            }) => {
                println!(
                    "{}: {} ({} cases)",
                    path.display(),
                    suite.header(),
                    suite.len()
                );
                rejected.into_iter().for_each(report_error);
            }
            Err(e) => report_error(e),
        }
    }
    Ok(())
}
