//! Human-readable report lines in the style of the classic conformance shell:
//!
//! ```text
//! 15.7.3.2-1 Number.MAX_VALUE
//! Number.MAX_VALUE = 1.7976931348623157e+308 PASSED!
//!
//! Test summary: total 1, passed 1, failed 0
//! OK
//! ```

use super::{Reporter, SuiteHeader};
use crate::errors::{HarnessError, Result};
use crate::eval::Verdict;
use crate::runner::{CaseOutcome, RunSummary};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// ConsoleReporter: writes report lines to any color-capable writer.
pub struct ConsoleReporter<W: WriteColor> {
    out: W,
}

impl ConsoleReporter<StandardStream> {
    /// A reporter on stdout; colors are used only when `use_colors` is set
    /// and the terminal supports them.
    pub fn stdout(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, text: &str, color: Color) -> std::io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_result(&mut self, outcome: &CaseOutcome<'_>) -> std::io::Result<()> {
        let case = outcome.case;
        write!(self.out, "{} = {} ", case.description(), case.actual())?;
        if outcome.passed() {
            self.colored("PASSED!", Color::Green)?;
            return writeln!(self.out);
        }
        self.colored("FAILED!", Color::Red)?;
        write!(self.out, " expected: {}", case.expected())?;
        if outcome.verdict == Verdict::TypeMismatch {
            write!(
                self.out,
                " (type mismatch: expected {}, got {})",
                case.expected().type_name(),
                case.actual().type_name()
            )?;
        }
        if let Some(reason) = case.reason() {
            write!(self.out, " [{}]", reason)?;
        }
        writeln!(self.out)
    }

    fn write_summary(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        writeln!(
            self.out,
            "\nTest summary: total {}, passed {}, failed {}",
            summary.total, summary.passed, summary.failed
        )?;
        if summary.ok {
            self.colored("OK", Color::Green)?;
        } else {
            self.colored("FAILED", Color::Red)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: WriteColor> Reporter for ConsoleReporter<W> {
    fn header(&mut self, header: &SuiteHeader<'_>) -> Result<()> {
        writeln!(self.out, "{}", header.title).map_err(HarnessError::sink)
    }

    fn result(&mut self, outcome: &CaseOutcome<'_>) -> Result<()> {
        self.write_result(outcome).map_err(HarnessError::sink)
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.write_summary(summary).map_err(HarnessError::sink)
    }
}
