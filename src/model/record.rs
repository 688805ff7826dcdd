//! A single table row.

use super::error::InvalidInputError;
use super::value::CellValue;
use serde_json::Value;
use std::collections::HashMap;

/// One row of input data: column name → cell value.
///
/// Keys are not required to match across records. Only the keys named in the
/// active column list are read for sorting and export; search looks at every value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    cells: HashMap<String, CellValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON object.
    ///
    /// `index` is the record's position in its input sequence; it is only used
    /// to report which element was malformed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError::NotAnObject` if `value` is not a JSON object.
    pub fn from_json(value: Value, index: usize) -> Result<Self, InvalidInputError> {
        match value {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, CellValue::from(v)))
                .collect()),
            _ => Err(InvalidInputError::NotAnObject { index }),
        }
    }

    /// Set a cell, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style [`Record::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Value at `column`, if present.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// All cell values, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.values()
    }

    /// All column names present in this record, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the record has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a JSON array of objects into records.
///
/// # Errors
///
/// `NotAnArray` if the top-level value is not an array,
/// `NotAnObject` for the first element that is not an object.
pub fn records_from_json(value: Value) -> Result<Vec<Record>, InvalidInputError> {
    let Value::Array(items) = value else {
        return Err(InvalidInputError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Record::from_json(item, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_object_classifies_cells() {
        let record = Record::from_json(json!({"name": "Ann", "age": 31}), 0).unwrap();

        assert_eq!(record.get("name"), Some(&CellValue::Text("Ann".into())));
        assert_eq!(record.get("age"), Some(&CellValue::Number(31.0)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn from_json_rejects_non_object_with_index() {
        let err = Record::from_json(json!([1, 2]), 7).unwrap_err();
        assert_eq!(err, InvalidInputError::NotAnObject { index: 7 });
    }

    #[test]
    fn missing_key_is_none() {
        let record = Record::new().with("a", 1i64);
        assert_eq!(record.get("b"), None);
    }

    #[test]
    fn records_from_json_parses_array() {
        let records = records_from_json(json!([{"a": 1}, {"a": 2}])).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn records_from_json_rejects_non_array() {
        let err = records_from_json(json!({"a": 1})).unwrap_err();
        assert_eq!(err, InvalidInputError::NotAnArray);
    }

    #[test]
    fn records_from_json_reports_first_bad_element() {
        let err = records_from_json(json!([{"a": 1}, "oops", 3])).unwrap_err();
        assert_eq!(err, InvalidInputError::NotAnObject { index: 1 });
    }
}
