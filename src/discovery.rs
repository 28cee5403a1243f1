//! Loading suites from YAML case files.
//!
//! A case file describes exactly one suite:
//!
//! ```yaml
//! section: "15.7.3.2-1"
//! title: "Number.MAX_VALUE"
//! cases:
//!   - description: "Number.MAX_VALUE"
//!     expected: 1.7976931348623157e308
//!     actual: 1.7976931348623157e308
//! ```
//!
//! Every case goes through [`CaseBuilder`], so a blank description is
//! reported as a construction error against the file it came from. A rejected
//! entry drops only itself; the rest of the file still forms the suite.

use crate::case::{CaseBuilder, Suite, TestCase};
use crate::errors::{HarnessError, Result};
use crate::value::Value;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// The on-disk shape of a suite.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    pub section: String,
    pub title: String,
    /// The language version the suite targets, e.g. `ECMA_1`.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub cases: Vec<CaseEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseEntry {
    /// Overrides the file's section for this case.
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub description: String,
    pub expected: Value,
    pub actual: Value,
    #[serde(default)]
    pub reason: Option<String>,
}

impl CaseFile {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| HarnessError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the suite from every valid entry. Entries that fail
    /// construction are returned alongside it as `InvalidCase` errors.
    pub fn into_suite(self, path: &Path) -> (Suite, Vec<HarnessError>) {
        let mut builder = CaseBuilder::new(self.section.clone(), self.title);
        if let Some(version) = self.version {
            builder = builder.with_version(version);
        }
        let mut rejected = Vec::new();
        for (index, entry) in self.cases.into_iter().enumerate() {
            let section = entry.section.unwrap_or_else(|| self.section.clone());
            match TestCase::new(section, entry.description, entry.expected, entry.actual) {
                Ok(case) => {
                    builder.push(match entry.reason {
                        Some(reason) => case.with_reason(reason),
                        None => case,
                    });
                }
                Err(err) => {
                    warn!(path = %path.display(), index, error = %err, "rejected case");
                    rejected.push(HarnessError::InvalidCase {
                        path: path.to_path_buf(),
                        index,
                        source: Box::new(err),
                    });
                }
            }
        }
        (builder.build(), rejected)
    }
}

/// A suite together with the file it was loaded from and the entries of that
/// file that could not be registered.
#[derive(Debug)]
pub struct LoadedSuite {
    pub path: PathBuf,
    pub suite: Suite,
    pub rejected: Vec<HarnessError>,
}

/// Discovers all YAML files under `root`, sorted by path. A `root` that is
/// itself a file is returned as the only entry.
pub fn discover_case_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Reads and builds the suite in a single case file.
pub fn load_suite(path: &Path) -> Result<LoadedSuite> {
    let content = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (suite, rejected) = CaseFile::parse(path, &content)?.into_suite(path);
    debug!(
        path = %path.display(),
        cases = suite.len(),
        rejected = rejected.len(),
        "loaded suite"
    );
    Ok(LoadedSuite {
        path: path.to_path_buf(),
        suite,
        rejected,
    })
}

/// Loads every suite under `root`. Files that fail to load are returned as
/// errors in place so the caller can report them and keep going.
pub fn load_suites(root: &Path) -> Result<Vec<Result<LoadedSuite>>> {
    let files = discover_case_files(root);
    if files.is_empty() {
        return Err(HarnessError::NoSuites {
            root: root.to_path_buf(),
        });
    }
    Ok(files
        .into_iter()
        .map(|path| load_suite(&path))
        .collect())
}
