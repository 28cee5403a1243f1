use super::{ReportEvent, Reporter, SuiteHeader};
use crate::errors::Result;
use crate::runner::{CaseOutcome, RunSummary};

/// EventLog: collects every event in memory for assertions or batched output.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<ReportEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ReportEvent> {
        self.events
    }

    /// The `passed` flag of every result event, in emission order.
    pub fn outcomes(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Result { passed, .. } => Some(*passed),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for EventLog {
    fn header(&mut self, header: &SuiteHeader<'_>) -> Result<()> {
        self.events.push(ReportEvent::header(header));
        Ok(())
    }

    fn result(&mut self, outcome: &CaseOutcome<'_>) -> Result<()> {
        self.events.push(ReportEvent::result(outcome));
        Ok(())
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.events.push(ReportEvent::summary(summary));
        Ok(())
    }
}
