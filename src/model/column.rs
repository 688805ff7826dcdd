//! Validated column list.

use super::error::InvalidInputError;
use super::record::Record;
use std::collections::HashSet;

/// Ordered, non-empty list of unique column names.
///
/// Order defines both display order and export order.
/// Smart constructor enforces the invariants; there is no way to build an
/// empty or duplicated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnList(Vec<String>);

impl ColumnList {
    /// Smart constructor.
    ///
    /// # Errors
    ///
    /// `EmptyColumns` for an empty list, `DuplicateColumn` naming the first
    /// repeated column.
    pub fn new<I, S>(columns: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        if columns.is_empty() {
            return Err(InvalidInputError::EmptyColumns);
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(InvalidInputError::DuplicateColumn { name: name.clone() });
            }
        }

        Ok(Self(columns))
    }

    /// Columns taken from the keys of `record`, sorted by name.
    ///
    /// # Errors
    ///
    /// `EmptyColumns` if the record has no keys.
    pub fn from_record(record: &Record) -> Result<Self, InvalidInputError> {
        let mut keys: Vec<&str> = record.keys().collect();
        keys.sort_unstable();
        Self::new(keys)
    }

    /// True if `name` is one of the columns.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    /// Column names in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over column names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of columns (always ≥ 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
