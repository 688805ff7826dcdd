//! Column sort.
//!
//! The comparator only orders like with like: two strings, or two numbers.
//! Every other pair (mixed types, missing keys, null) compares equal. That
//! makes it a non-transitive relation on heterogeneous columns, which the
//! standard library sort is allowed to panic on, so ordering goes through a
//! local stable merge sort that tolerates any comparator.

use crate::model::{CellValue, Record};
use crate::state::SortOrder;
use icu_collator::{Collator, CollatorOptions, Strength};
use serde::Deserialize;
use std::cmp::Ordering;
use unicase::UniCase;

/// Below this length a run is insertion-sorted instead of split.
const INSERTION_THRESHOLD: usize = 16;

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties left by the base letters, lowercase before uppercase.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "Root collator unavailable, falling back to case-folded order");
            None
        }
    }
}

/// How descending order is derived from the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescendingMode {
    /// Sort ascending, then reverse the whole sequence.
    /// Tied rows come out in reverse input order.
    #[default]
    Reverse,
    /// Sort with the flipped comparator. Tied rows keep input order.
    Stable,
}

/// Sort `records` by `column`. Descending is the reversed ascending result.
pub fn sort<'a, I>(records: I, column: &str, order: SortOrder) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    sort_with_mode(records, column, order, DescendingMode::Reverse)
}

/// Sort `records` by `column`, choosing how descending order is produced.
pub fn sort_with_mode<'a, I>(
    records: I,
    column: &str,
    order: SortOrder,
    mode: DescendingMode,
) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut rows: Vec<&'a Record> = records.into_iter().collect();

    match (order, mode) {
        (SortOrder::Asc, _) => {
            stable_sort_by(&mut rows, &mut |a, b| {
                compare_cells(a.get(column), b.get(column))
            });
        }
        (SortOrder::Desc, DescendingMode::Reverse) => {
            stable_sort_by(&mut rows, &mut |a, b| {
                compare_cells(a.get(column), b.get(column))
            });
            rows.reverse();
        }
        (SortOrder::Desc, DescendingMode::Stable) => {
            stable_sort_by(&mut rows, &mut |a, b| {
                compare_cells(b.get(column), a.get(column))
            });
        }
    }

    rows
}

/// Compare two cells of the same column.
///
/// - both strings: [`locale_compare`]
/// - both numbers: numeric (NaN compares equal)
/// - anything else: equal
pub fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    let (Some(a), Some(b)) = (a, b) else {
        return Ordering::Equal;
    };

    if let (Some(x), Some(y)) = (a.as_str(), b.as_str()) {
        return locale_compare(x, y);
    }

    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Dictionary order per the Unicode Collation Algorithm (CLDR root locale).
///
/// Base letters decide first, then accents, then case with lowercase first:
/// `"apple" < "banana" < "Banana" < "cherry"` and `"éclair" < "zebra"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.as_ref().map(|c| c.compare(a, b)))
        .unwrap_or_else(|| folded_compare(a, b))
}

fn folded_compare(a: &str, b: &str) -> Ordering {
    UniCase::new(a)
        .cmp(&UniCase::new(b))
        .then_with(|| case_tiebreak(a, b))
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Stable merge sort. Never panics, whatever `compare` returns.
fn stable_sort_by<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort_by(items, compare);
        return;
    }

    let mid = len / 2;
    stable_sort_by(&mut items[..mid], compare);
    stable_sort_by(&mut items[mid..], compare);

    let mut merged = Vec::with_capacity(len);
    let (mut i, mut j) = (0, mid);
    while i < mid && j < len {
        // Take from the right run only when strictly less: keeps ties in order.
        if compare(&items[j], &items[i]) == Ordering::Less {
            merged.push(items[j]);
            j += 1;
        } else {
            merged.push(items[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&items[i..mid]);
    merged.extend_from_slice(&items[j..]);
    items.copy_from_slice(&merged);
}

fn insertion_sort_by<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
