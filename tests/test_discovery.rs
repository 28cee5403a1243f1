//! Loading suites from the YAML fixtures under tests/suites.

use conform::discovery::{discover_case_files, load_suite, load_suites};
use conform::prelude::*;
use std::path::Path;

#[test]
fn discovers_yaml_files_in_path_order() {
    let files = discover_case_files("tests/suites");
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["blank_description.yaml", "mixed.yaml", "number.yaml"]);
}

#[test]
fn a_single_file_root_is_its_own_suite() {
    let files = discover_case_files("tests/suites/passing/number.yaml");
    assert_eq!(files.len(), 1);
}

#[test]
fn loads_sections_values_and_overrides() {
    let loaded = load_suite(Path::new("tests/suites/passing/number.yaml")).unwrap();
    assert!(loaded.rejected.is_empty());
    let suite = loaded.suite;
    assert_eq!(suite.header(), "15.7.3 Number constants");
    assert_eq!(suite.version(), Some("ECMA_1"));
    assert_eq!(suite.len(), 3);

    let cases = suite.cases();
    assert_eq!(cases[0].section(), "15.7.3.2-1");
    assert_eq!(cases[0].expected().as_number(), Some(f64::MAX));
    assert!(cases[1].actual().as_number().unwrap().is_nan());
    assert_eq!(cases[2].section(), "15.7.3");
}

#[test]
fn loaded_suites_run_like_built_ones() {
    let mut suite = load_suite(Path::new("tests/suites/failing/mixed.yaml"))
        .unwrap()
        .suite;
    assert_eq!(suite.version(), None);
    assert_eq!(suite.cases()[2].reason(), Some("no coercion"));
    assert!(suite.cases()[3].expected().is_undefined());

    let mut runner = Runner::new(EventLog::new());
    let summary = runner.run(&mut suite).unwrap();
    assert_eq!(runner.reporter().outcomes(), vec![true, false, false, false]);
    assert_eq!(summary, RunSummary::from_counts(1, 3));
}

#[test]
fn blank_description_rejects_only_that_case() {
    let loaded = load_suite(Path::new("tests/suites/broken/blank_description.yaml")).unwrap();
    assert_eq!(loaded.suite.len(), 1);
    assert_eq!(loaded.suite.cases()[0].description(), "NaN");

    assert_eq!(loaded.rejected.len(), 1);
    match &loaded.rejected[0] {
        HarnessError::InvalidCase {
            path,
            index,
            source,
        } => {
            assert!(path.ends_with("blank_description.yaml"));
            assert_eq!(*index, 1);
            assert!(matches!(
                **source,
                HarnessError::MissingField {
                    field: conform::errors::CaseField::Description
                }
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn surviving_cases_of_a_partly_broken_file_still_run() {
    let mut suite = load_suite(Path::new("tests/suites/broken/blank_description.yaml"))
        .unwrap()
        .suite;
    let summary = Runner::new(EventLog::new()).run(&mut suite).unwrap();
    assert_eq!(summary, RunSummary::from_counts(1, 0));
}

#[test]
fn version_is_optional_in_case_files() {
    let file = conform::discovery::CaseFile::parse(
        Path::new("inline.yaml"),
        "section: '1'\ntitle: t\nversion: ECMA_1\ncases: []\n",
    )
    .unwrap();
    let (suite, rejected) = file.into_suite(Path::new("inline.yaml"));
    assert!(rejected.is_empty());
    assert_eq!(suite.version(), Some("ECMA_1"));
}

#[test]
fn missing_expected_is_a_parse_error() {
    let err = conform::discovery::CaseFile::parse(
        Path::new("inline.yaml"),
        "section: '1'\ntitle: t\ncases:\n  - description: d\n    actual: 1\n",
    )
    .unwrap_err();
    assert!(matches!(err, HarnessError::Parse { .. }));
}

#[test]
fn broken_files_do_not_hide_the_rest() {
    let loaded = load_suites(Path::new("tests/suites")).unwrap();
    assert_eq!(loaded.len(), 3);
    assert!(loaded.iter().all(|l| l.is_ok()));
    let rejected: usize = loaded
        .iter()
        .filter_map(|l| l.as_ref().ok())
        .map(|l| l.rejected.len())
        .sum();
    assert_eq!(rejected, 1);
}

#[test]
fn empty_roots_are_rejected() {
    let err = load_suites(Path::new("tests/no-such-dir")).unwrap_err();
    assert!(matches!(err, HarnessError::NoSuites { .. }));
}
