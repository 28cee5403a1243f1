//! Conform: a deterministic expected-vs-actual case runner for language
//! conformance suites.
//!
//! Cases are registered with a [`CaseBuilder`](case::CaseBuilder), run once by
//! a [`Runner`](runner::Runner) and reported through a
//! [`Reporter`](report::Reporter).
//!
//! ```rust
//! use conform::prelude::*;
//!
//! let mut builder = CaseBuilder::new("15.7.3.2-1", "Number.MAX_VALUE");
//! builder.check("Number.MAX_VALUE", 1.7976931348623157e308, f64::MAX).unwrap();
//! let mut suite = builder.build();
//!
//! let mut runner = Runner::new(EventLog::new());
//! let summary = runner.run(&mut suite).unwrap();
//! assert!(summary.ok);
//! assert_eq!(runner.reporter().outcomes(), vec![true]);
//! ```

pub use crate::errors::{HarnessError, Result};

pub mod case;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod eval;
pub mod report;
pub mod runner;
pub mod value;

pub mod prelude {
    pub use crate::case::{CaseBuilder, RunState, Suite, TestCase};
    pub use crate::errors::{HarnessError, Result};
    pub use crate::eval::{same_value, Evaluator, Verdict};
    pub use crate::report::{
        ConsoleReporter, EventLog, JsonLinesReporter, ReportEvent, Reporter, SuiteHeader,
    };
    pub use crate::runner::{CaseOutcome, RunSummary, Runner};
    pub use crate::value::Value;
}
