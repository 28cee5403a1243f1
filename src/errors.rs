//! Conform error handling.
//!
//! Every failure the harness can surface is a variant of [`HarnessError`].
//! Comparison anomalies are not errors: they become failed cases.

use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// The required text fields of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseField {
    Section,
    Description,
}

impl CaseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseField::Section => "section",
            CaseField::Description => "description",
        }
    }
}

impl std::fmt::Display for CaseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("test case is missing its {field}")]
    #[diagnostic(
        code(conform::construct::missing_field),
        help("every case needs a non-empty section and description")
    )]
    MissingField { field: CaseField },

    #[error("suite '{title}' has already been run")]
    #[diagnostic(
        code(conform::run::already_run),
        help("build a fresh suite for every run")
    )]
    AlreadyRun { title: String },

    #[error("report sink failed")]
    #[diagnostic(code(conform::sink))]
    Sink(#[source] io::Error),

    #[error("no case files found under {}", root.display())]
    #[diagnostic(
        code(conform::load::empty),
        help("case files are `.yaml` or `.yml` files")
    )]
    NoSuites { root: PathBuf },

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(conform::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed case file {}", path.display())]
    #[diagnostic(
        code(conform::load::parse),
        help("a case file needs `section`, `title` and a `cases` list")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid case #{} in {}", index + 1, path.display())]
    #[diagnostic(code(conform::load::case))]
    InvalidCase {
        path: PathBuf,
        /// Zero-based position of the entry in the file's `cases` list.
        index: usize,
        #[source]
        source: Box<HarnessError>,
    },
}

impl HarnessError {
    pub(crate) fn sink(err: impl Into<io::Error>) -> Self {
        HarnessError::Sink(err.into())
    }
}
