//! The reporting boundary.
//!
//! A run produces exactly three kinds of event: one header, one result per
//! case in registration order, and one summary. [`Reporter`] is the seam
//! between the runner and whatever medium those events end up in; the
//! implementations here cover a colored console, a JSON-lines stream and an
//! in-memory log.

use crate::errors::Result;
use crate::runner::{CaseOutcome, RunSummary};
use crate::value::Value;
use serde::Serialize;

pub mod capture;
pub mod console;
pub mod json;

pub use capture::EventLog;
pub use console::ConsoleReporter;
pub use json::JsonLinesReporter;

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Receives the events of a run. Implementations only format and forward;
/// they never decide outcomes.
pub trait Reporter {
    fn header(&mut self, header: &SuiteHeader<'_>) -> Result<()>;
    fn result(&mut self, outcome: &CaseOutcome<'_>) -> Result<()>;
    fn summary(&mut self, summary: &RunSummary) -> Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn header(&mut self, header: &SuiteHeader<'_>) -> Result<()> {
        (**self).header(header)
    }

    fn result(&mut self, outcome: &CaseOutcome<'_>) -> Result<()> {
        (**self).result(outcome)
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        (**self).summary(summary)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn header(&mut self, header: &SuiteHeader<'_>) -> Result<()> {
        (**self).header(header)
    }

    fn result(&mut self, outcome: &CaseOutcome<'_>) -> Result<()> {
        (**self).result(outcome)
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        (**self).summary(summary)
    }
}

// ============================================================================
// EVENT MODEL
// ============================================================================

/// What a reporter sees once at the top of a run.
#[derive(Debug, Clone, Copy)]
pub struct SuiteHeader<'a> {
    /// `"<section> <title>"`.
    pub title: &'a str,
    pub version: Option<&'a str>,
}

/// A value as it appears in an emitted event. Keeping the display text
/// alongside the type means `NaN` and the infinities survive JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub display: String,
}

impl From<&Value> for ValueRecord {
    fn from(value: &Value) -> Self {
        Self {
            kind: value.type_name().to_string(),
            display: value.to_string(),
        }
    }
}

/// An owned copy of one reporter event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ReportEvent {
    Header {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<String>,
    },
    Result {
        section: String,
        description: String,
        expected: ValueRecord,
        actual: ValueRecord,
        passed: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    Summary {
        total: usize,
        passed: usize,
        failed: usize,
        ok: bool,
    },
}

impl ReportEvent {
    pub fn header(header: &SuiteHeader<'_>) -> Self {
        ReportEvent::Header {
            title: header.title.to_string(),
            version: header.version.map(str::to_string),
        }
    }

    pub fn result(outcome: &CaseOutcome<'_>) -> Self {
        let case = outcome.case;
        ReportEvent::Result {
            section: case.section().to_string(),
            description: case.description().to_string(),
            expected: case.expected().into(),
            actual: case.actual().into(),
            passed: outcome.passed(),
            reason: case.reason().map(str::to_string),
        }
    }

    pub fn summary(summary: &RunSummary) -> Self {
        ReportEvent::Summary {
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
            ok: summary.ok,
        }
    }
}
