use super::{ReportEvent, Reporter, SuiteHeader};
use crate::errors::{HarnessError, Result};
use crate::runner::{CaseOutcome, RunSummary};
use std::io::{self, Write};

/// JsonLinesReporter: writes one JSON object per event, one event per line.
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl JsonLinesReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: &ReportEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event).map_err(HarnessError::sink)?;
        writeln!(self.writer).map_err(HarnessError::sink)
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn header(&mut self, header: &SuiteHeader<'_>) -> Result<()> {
        self.emit(&ReportEvent::header(header))
    }

    fn result(&mut self, outcome: &CaseOutcome<'_>) -> Result<()> {
        self.emit(&ReportEvent::result(outcome))
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.emit(&ReportEvent::summary(summary))?;
        self.writer.flush().map_err(HarnessError::sink)
    }
}
