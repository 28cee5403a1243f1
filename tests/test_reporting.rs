//! Console and JSON-lines reporter output.

use conform::prelude::*;
use termcolor::Buffer;

fn run_into<R: Reporter>(reporter: R, suite: &mut Suite) -> R {
    let mut runner = Runner::new(reporter);
    runner.run(suite).unwrap();
    runner.into_reporter()
}

fn addition_suite() -> Suite {
    let mut builder = CaseBuilder::new("11.6.1", "The addition operator");
    builder.check("1 + 0", 1, 1).unwrap().check("1 + 1", 2, 3).unwrap();
    builder.push(
        TestCase::new("11.6.1", "'1' + 0", 10, "10")
            .unwrap()
            .with_reason("string concatenation"),
    );
    builder.build()
}

#[test]
fn console_lines_follow_the_shell_format() {
    let mut builder = CaseBuilder::new("15.7.3.2-1", "Number.MAX_VALUE");
    builder
        .check("Number.MAX_VALUE", 1.7976931348623157e308, f64::MAX)
        .unwrap();
    let mut suite = builder.build();

    let out = run_into(ConsoleReporter::new(Buffer::no_color()), &mut suite).into_inner();
    let text = String::from_utf8(out.into_inner()).unwrap();
    assert_eq!(
        text,
        "15.7.3.2-1 Number.MAX_VALUE\n\
         Number.MAX_VALUE = 1.7976931348623157e+308 PASSED!\n\
         \n\
         Test summary: total 1, passed 1, failed 0\n\
         OK\n"
    );
}

#[test]
fn console_failures_show_expected_type_and_reason() {
    let mut suite = addition_suite();
    let out = run_into(ConsoleReporter::new(Buffer::no_color()), &mut suite).into_inner();
    let text = String::from_utf8(out.into_inner()).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "11.6.1 The addition operator");
    assert_eq!(lines[1], "1 + 0 = 1 PASSED!");
    assert_eq!(lines[2], "1 + 1 = 3 FAILED! expected: 2");
    assert_eq!(
        lines[3],
        "'1' + 0 = 10 FAILED! expected: 10 (type mismatch: expected number, got string) [string concatenation]"
    );
    assert_eq!(lines[5], "Test summary: total 3, passed 1, failed 2");
    assert_eq!(lines[6], "FAILED");
}

#[test]
fn json_lines_carry_every_event() {
    let mut builder = CaseBuilder::new("15.7.3.4", "Number.NaN");
    builder.check("Number.NaN", f64::NAN, f64::NAN).unwrap();
    let mut suite = builder.build();

    let out = run_into(JsonLinesReporter::new(Vec::new()), &mut suite).into_inner();
    let text = String::from_utf8(out).unwrap();
    let events: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event"], "header");
    assert_eq!(events[0]["title"], "15.7.3.4 Number.NaN");
    assert!(events[0].get("version").is_none());
    assert_eq!(events[1]["event"], "result");
    assert_eq!(events[1]["expected"]["type"], "number");
    assert_eq!(events[1]["actual"]["display"], "NaN");
    assert_eq!(events[1]["passed"], true);
    assert!(events[1].get("reason").is_none());
    assert_eq!(events[2]["event"], "summary");
    assert_eq!(events[2]["total"], 1);
    assert_eq!(events[2]["ok"], true);
}

#[test]
fn json_header_names_the_suite_version() {
    let mut builder = CaseBuilder::new("15.7.3.2-1", "Number.MAX_VALUE").with_version("ECMA_1");
    builder.check("Number.MAX_VALUE", f64::MAX, f64::MAX).unwrap();
    let mut suite = builder.build();

    let out = run_into(JsonLinesReporter::new(Vec::new()), &mut suite).into_inner();
    let text = String::from_utf8(out).unwrap();
    let header: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(header["event"], "header");
    assert_eq!(header["version"], "ECMA_1");
}

#[test]
fn output_is_stable_across_runs() {
    let render = || {
        let mut suite = addition_suite();
        let out = run_into(JsonLinesReporter::new(Vec::new()), &mut suite).into_inner();
        String::from_utf8(out).unwrap()
    };
    assert_eq!(render(), render());
}
