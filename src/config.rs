use crate::case::TestCase;
use crate::report::{ConsoleReporter, JsonLinesReporter, Reporter};
use clap::ValueEnum;
use std::path::PathBuf;

const DEFAULT_ROOT: &str = "suites";

/// How run output is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Shell-style lines, colored on a terminal.
    #[default]
    Console,
    /// One JSON object per event.
    Json,
}

/// Configuration for discovering, filtering and reporting suites.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub use_colors: bool,
    /// Case-insensitive substring a description must contain to run.
    pub filter: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            format: OutputFormat::default(),
            use_colors: atty::is(atty::Stream::Stdout),
            filter: None,
        }
    }
}

impl RunConfig {
    pub fn matches(&self, case: &TestCase) -> bool {
        match &self.filter {
            Some(filter) => case
                .description()
                .to_lowercase()
                .contains(&filter.to_lowercase()),
            None => true,
        }
    }

    /// A fresh stdout reporter for the configured format.
    pub fn reporter(&self) -> Box<dyn Reporter> {
        match self.format {
            OutputFormat::Console => Box::new(ConsoleReporter::stdout(self.use_colors)),
            OutputFormat::Json => Box::new(JsonLinesReporter::stdout()),
        }
    }
}
