//! Case records and suite construction.
//!
//! A [`TestCase`] is captured in full when it is registered: both the expected
//! and the actual value exist before anything runs. [`CaseBuilder`] collects
//! cases in registration order and hands them out as a [`Suite`], which is the
//! only handle the caller keeps.

use crate::errors::{CaseField, HarnessError, Result};
use crate::value::Value;

// =============================================================================
// TEST CASE
// =============================================================================

/// One expected-vs-actual comparison plus its metadata.
#[derive(Debug, Clone)]
pub struct TestCase {
    section: String,
    description: String,
    expected: Value,
    actual: Value,
    reason: Option<String>,
    passed: Option<bool>,
}

impl TestCase {
    /// Builds a case, failing fast when a required text field is blank.
    pub fn new(
        section: impl Into<String>,
        description: impl Into<String>,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
    ) -> Result<Self> {
        let section = required(section.into(), CaseField::Section)?;
        let description = required(description.into(), CaseField::Description)?;
        Ok(Self {
            section,
            description,
            expected: expected.into(),
            actual: actual.into(),
            reason: None,
            passed: None,
        })
    }

    /// Attaches a note that is printed alongside a failure.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        self.reason = (!reason.trim().is_empty()).then_some(reason);
        self
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn actual(&self) -> &Value {
        &self.actual
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// `None` until the case has been run.
    pub fn passed(&self) -> Option<bool> {
        self.passed
    }

    /// Stores the outcome. Only the runner calls this, once per case.
    pub(crate) fn record(&mut self, passed: bool) {
        debug_assert!(self.passed.is_none(), "case outcome recorded twice");
        self.passed = Some(passed);
    }
}

fn required(value: String, field: CaseField) -> Result<String> {
    if value.trim().is_empty() {
        return Err(HarnessError::MissingField { field });
    }
    Ok(value)
}

// =============================================================================
// SUITE
// =============================================================================

/// Where a suite is in its single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Completed,
}

/// An ordered set of cases registered for one run.
#[derive(Debug)]
pub struct Suite {
    section: String,
    title: String,
    version: Option<String>,
    cases: Vec<TestCase>,
    state: RunState,
}

impl Suite {
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The language version the suite targets, e.g. `ECMA_1`.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The text written once at the top of a run: `"<section> <title>"`.
    pub fn header(&self) -> String {
        match (self.section.is_empty(), self.title.is_empty()) {
            (true, _) => self.title.clone(),
            (false, true) => self.section.clone(),
            (false, false) => format!("{} {}", self.section, self.title),
        }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Keeps only the cases matching `keep`. Has no effect once the suite
    /// has started running.
    pub fn retain(&mut self, keep: impl FnMut(&TestCase) -> bool) {
        if self.state == RunState::NotStarted {
            self.cases.retain(keep);
        }
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [TestCase] {
        &mut self.cases
    }

    pub(crate) fn set_state(&mut self, state: RunState) {
        self.state = state;
    }
}

// =============================================================================
// CASE BUILDER
// =============================================================================

/// Accumulates cases for a suite.
///
/// ```rust
/// use conform::case::CaseBuilder;
///
/// let mut builder = CaseBuilder::new("15.7.3.2-1", "Number.MAX_VALUE");
/// builder.check("Number.MAX_VALUE", 1.7976931348623157e308, f64::MAX).unwrap();
/// let suite = builder.build();
/// assert_eq!(suite.len(), 1);
/// assert_eq!(suite.header(), "15.7.3.2-1 Number.MAX_VALUE");
/// ```
#[derive(Debug)]
pub struct CaseBuilder {
    section: String,
    title: String,
    version: Option<String>,
    cases: Vec<TestCase>,
}

impl CaseBuilder {
    pub fn new(section: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            title: title.into(),
            version: None,
            cases: Vec::new(),
        }
    }

    /// Tags the suite with the language version it targets.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = (!version.trim().is_empty()).then_some(version);
        self
    }

    /// Registers a case whose actual value is already computed.
    pub fn case(
        &mut self,
        section: impl Into<String>,
        description: impl Into<String>,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
    ) -> Result<&mut Self> {
        let case = TestCase::new(section, description, expected, actual)?;
        Ok(self.push(case))
    }

    /// Registers a case whose actual value is produced by `actual`. The
    /// closure runs here, at registration, never during the run.
    pub fn case_with<V, F>(
        &mut self,
        section: impl Into<String>,
        description: impl Into<String>,
        expected: impl Into<Value>,
        actual: F,
    ) -> Result<&mut Self>
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        let section = required(section.into(), CaseField::Section)?;
        let description = required(description.into(), CaseField::Description)?;
        self.case(section, description, expected, actual())
    }

    /// Registers a case under the builder's own section.
    pub fn check(
        &mut self,
        description: impl Into<String>,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
    ) -> Result<&mut Self> {
        let section = self.section.clone();
        self.case(section, description, expected, actual)
    }

    /// Appends an already-built case. Any outcome it carries from an earlier
    /// run is cleared; the new suite starts with every case unrun.
    pub fn push(&mut self, mut case: TestCase) -> &mut Self {
        case.passed = None;
        self.cases.push(case);
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn build(self) -> Suite {
        Suite {
            section: self.section,
            title: self.title,
            version: self.version,
            cases: self.cases,
            state: RunState::NotStarted,
        }
    }
}
