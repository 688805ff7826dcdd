//! Search filter.

use crate::model::Record;

/// Keep the records that match `term`.
///
/// Case-insensitive substring match against every string cell of the record
/// (`Text` and `ImageUrl`). Numbers and other values are never matched, so
/// searching `"42"` does not find a numeric `42`.
///
/// An empty term keeps everything. Input order is preserved.
pub fn filter<'a, I>(records: I, term: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if term.is_empty() {
        return records.into_iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

/// True if any string cell of `record` contains `needle_lower`.
///
/// `needle_lower` must already be lower-cased.
pub fn matches(record: &Record, needle_lower: &str) -> bool {
    record
        .values()
        .filter_map(|value| value.as_str())
        .any(|text| text.to_lowercase().contains(needle_lower))
}
