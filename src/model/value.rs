//! Cell values.
//!
//! A cell's shape is decided once, when the record is ingested, so that
//! filtering, sorting and rendering never re-inspect raw JSON.

use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Prefix that marks a string cell as an image reference.
pub const IMAGE_URL_PREFIX: &str = "http";

/// A single scalar value stored in a record.
///
/// Sum type: exactly one variant per cell.
/// `Text` and `ImageUrl` both count as strings for search and sort.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Plain text.
    Text(String),
    /// Any JSON number, stored as `f64`.
    Number(f64),
    /// A string starting with `http`; the renderer shows it as an image.
    ImageUrl(String),
    /// Booleans, null and nested values. Never matched by search, never ordered.
    Other(Value),
}

impl CellValue {
    /// Classify a raw string.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.starts_with(IMAGE_URL_PREFIX) {
            Self::ImageUrl(text)
        } else {
            Self::Text(text)
        }
    }

    /// String contents if this cell is a string (`Text` or `ImageUrl`).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::ImageUrl(s) => Some(s),
            Self::Number(_) | Self::Other(_) => None,
        }
    }

    /// Numeric contents if this cell is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True for `null` cells.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Other(Value::Null))
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::from_text(s),
            // as_f64 only fails for arbitrary-precision numbers, which we don't enable
            Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Other(Value::Number(n)),
            },
            other => Self::Other(other),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::from_text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Other(Value::Bool(value))
    }
}

/// Export/display rendering.
///
/// Integral numbers print without a fractional part (`3`, not `3.0`),
/// `null` prints as nothing, nested values print as compact JSON.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::ImageUrl(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Other(Value::Null) => Ok(()),
            Self::Other(Value::String(s)) => f.write_str(s),
            Self::Other(other) => write!(f, "{}", other),
        }
    }
}

/// Strings as JSON strings, numbers as JSON numbers, other values unchanged.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) | Self::ImageUrl(s) => serializer.serialize_str(s),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

/// Shortest human form of a number.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_starting_with_http_is_image_url() {
        let cell = CellValue::from(json!("https://example.com/a.png"));
        assert!(matches!(cell, CellValue::ImageUrl(_)));
    }

    #[test]
    fn other_strings_are_text() {
        assert_eq!(CellValue::from(json!("alice")), CellValue::Text("alice".into()));
    }

    #[test]
    fn image_url_is_still_a_string() {
        let cell = CellValue::from_text("http://x");
        assert_eq!(cell.as_str(), Some("http://x"));
    }

    #[test]
    fn json_numbers_become_numbers() {
        assert_eq!(CellValue::from(json!(42)).as_number(), Some(42.0));
        assert_eq!(CellValue::from(json!(-1.5)).as_number(), Some(-1.5));
    }

    #[test]
    fn bool_and_null_are_other() {
        assert!(matches!(CellValue::from(json!(true)), CellValue::Other(_)));
        assert!(CellValue::from(json!(null)).is_null());
        assert_eq!(CellValue::from(json!(true)).as_str(), None);
    }

    #[test]
    fn display_integral_number_without_fraction() {
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Number(-7.0).to_string(), "-7");
    }

    #[test]
    fn display_null_is_empty() {
        assert_eq!(CellValue::Other(Value::Null).to_string(), "");
    }

    #[test]
    fn display_nested_value_as_json() {
        let cell = CellValue::from(json!([1, 2]));
        assert_eq!(cell.to_string(), "[1,2]");
    }
}
