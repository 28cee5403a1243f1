//! Same-value comparison of expected and actual values.

use crate::case::TestCase;
use crate::value::Value;

/// The outcome of comparing one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    /// Same type, different value.
    ValueMismatch,
    /// The two sides have different types; no coercion is attempted.
    TypeMismatch,
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

/// Same-value equality: `NaN` equals `NaN`, `+0` equals `-0`, and values of
/// different types are never equal.
pub fn same_value(expected: &Value, actual: &Value) -> bool {
    compare(expected, actual).is_match()
}

/// Classifies a pair of values under same-value equality.
pub fn compare(expected: &Value, actual: &Value) -> Verdict {
    let equal = match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
        _ => return Verdict::TypeMismatch,
    };
    if equal {
        Verdict::Match
    } else {
        Verdict::ValueMismatch
    }
}

/// Decides pass or fail for a single case from its captured values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn verdict(&self, case: &TestCase) -> Verdict {
        compare(case.expected(), case.actual())
    }

    pub fn evaluate(&self, case: &TestCase) -> bool {
        self.verdict(case).is_match()
    }
}
