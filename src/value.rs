use serde::Deserialize;
use std::fmt;

/// A primitive value captured on either side of a conformance case.
///
/// There is no `PartialEq`; values are compared with
/// [`crate::eval::same_value`], under which `NaN` equals `NaN`.
///
/// # Examples
///
/// ```rust
/// use conform::value::Value;
/// let n = Value::from(3.5);
/// assert_eq!(n.type_name(), "number");
/// let s = Value::from("hello");
/// assert_eq!(s.type_name(), "string");
/// assert!(Value::default().is_undefined());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Literal")]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Number(f64),
    String(String),
    Bool(bool),
}

impl Value {
    /// Returns the runtime type name of the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conform::value::Value;
    /// assert_eq!(Value::Bool(true).type_name(), "boolean");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "boolean",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns the contained number if this is a Number value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conform::value::Value;
    /// assert_eq!(Value::from(2.0).as_number(), Some(2.0));
    /// assert_eq!(Value::from("2").as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    /// Number-to-string conversion as the runtime under test performs it.
    fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
        if n.is_nan() {
            return write!(f, "NaN");
        }
        if n.is_infinite() {
            return write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" });
        }
        // Covers -0 as well.
        if n == 0.0 {
            return write!(f, "0");
        }
        let magnitude = n.abs();
        if !(1e-6..1e21).contains(&magnitude) {
            let scientific = format!("{:e}", n);
            return match scientific.split_once('e') {
                Some((mantissa, exp)) if exp.starts_with('-') => write!(f, "{}e{}", mantissa, exp),
                Some((mantissa, exp)) => write!(f, "{}e+{}", mantissa, exp),
                None => write!(f, "{}", scientific),
            };
        }
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Number(n) => Value::fmt_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

// ============================================================================
// CASE FILE REPRESENTATION
// ============================================================================

/// How a value is written in a YAML case file. Plain scalars map directly;
/// `undefined` has no scalar spelling and is written as `{ kind: undefined }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Marker(Marker),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Marker {
    kind: MarkerKind,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MarkerKind {
    Undefined,
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::String(s) => Value::String(s),
            Literal::Marker(Marker {
                kind: MarkerKind::Undefined,
            }) => Value::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn numbers_print_like_the_runtime() {
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(f64::MAX).to_string(), "1.7976931348623157e+308");
        assert_eq!(Value::from(5e-324).to_string(), "5e-324");
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn yaml_scalars_map_to_values() {
        let values: Vec<Value> =
            serde_yaml::from_str("[~, true, 42, .nan, \"42\", {kind: undefined}]").unwrap();
        let kinds: Vec<_> = values.iter().map(Value::type_name).collect();
        assert_eq!(
            kinds,
            ["null", "boolean", "number", "number", "string", "undefined"]
        );
        assert!(values[3].as_number().unwrap().is_nan());
        assert_eq!(values[4].as_str(), Some("42"));
    }
}
