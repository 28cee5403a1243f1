//! Drives a suite through the evaluator and a reporter.
//!
//! A run walks the cases strictly in registration order. Every case is
//! evaluated and reported, whatever the earlier outcomes were; only a failing
//! sink stops a run early.

use crate::case::{RunState, Suite, TestCase};
use crate::errors::{HarnessError, Result};
use crate::eval::{Evaluator, Verdict};
use crate::report::{Reporter, SuiteHeader};
use tracing::{debug, info};

/// Aggregate counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub ok: bool,
}

impl RunSummary {
    pub fn from_counts(passed: usize, failed: usize) -> Self {
        Self {
            total: passed + failed,
            passed,
            failed,
            ok: failed == 0,
        }
    }

    /// Folds another summary into this one.
    pub fn merge(self, other: RunSummary) -> Self {
        Self::from_counts(self.passed + other.passed, self.failed + other.failed)
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }

    /// Conventional process exit status for this summary.
    pub fn exit_code(&self) -> i32 {
        if self.ok {
            0
        } else {
            1
        }
    }
}

/// What a reporter sees for one evaluated case.
#[derive(Debug, Clone, Copy)]
pub struct CaseOutcome<'a> {
    pub case: &'a TestCase,
    pub verdict: Verdict,
}

impl CaseOutcome<'_> {
    pub fn passed(&self) -> bool {
        self.verdict.is_match()
    }
}

pub struct Runner<R: Reporter> {
    evaluator: Evaluator,
    reporter: R,
}

impl<R: Reporter> Runner<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            evaluator: Evaluator::new(),
            reporter,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Runs every case of `suite` once and reports the outcome.
    pub fn run(&mut self, suite: &mut Suite) -> Result<RunSummary> {
        if suite.state() != RunState::NotStarted {
            return Err(HarnessError::AlreadyRun {
                title: suite.header(),
            });
        }
        suite.set_state(RunState::Running);
        let title = suite.header();
        info!(suite = %title, cases = suite.len(), "starting run");
        self.reporter.header(&SuiteHeader {
            title: &title,
            version: suite.version(),
        })?;

        let (mut passed, mut failed) = (0, 0);
        for case in suite.cases_mut() {
            let verdict = self.evaluator.verdict(case);
            case.record(verdict.is_match());
            if verdict.is_match() {
                passed += 1;
            } else {
                failed += 1;
            }
            debug!(
                section = case.section(),
                description = case.description(),
                ?verdict,
                "case evaluated"
            );
            self.reporter.result(&CaseOutcome {
                case: &*case,
                verdict,
            })?;
        }

        let summary = RunSummary::from_counts(passed, failed);
        info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "run completed"
        );
        self.reporter.summary(&summary)?;
        suite.set_state(RunState::Completed);
        Ok(summary)
    }
}
