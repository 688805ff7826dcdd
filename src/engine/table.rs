//! Table orchestration.
//!
//! `DataTable` owns the raw records, the column list and the current
//! [`ViewState`]. Each interaction replaces the state; the filtered, sorted and
//! paged sets are recomputed from `(records, state)` on every call and never
//! cached.

use super::filter::filter;
use super::paginate::{self, paginate};
use super::sort::{sort_with_mode, DescendingMode};
use crate::export::{to_export_rows, to_table_rows, ExportRow, TableRows};
use crate::model::{records_from_json, ColumnList, InvalidInputError, Record};
use crate::state::{PageSize, SortState, ViewState};
use tracing::debug;

/// Behavior knobs that are fixed for the lifetime of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Page sizes the user may pick from. Never empty.
    pub page_size_options: Vec<PageSize>,
    /// Initial page size. Must be one of `page_size_options`.
    pub initial_page_size: PageSize,
    /// How descending order is derived.
    pub descending: DescendingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size_options: PageSize::DEFAULT_OPTIONS.to_vec(),
            initial_page_size: PageSize::DEFAULT,
            descending: DescendingMode::Reverse,
        }
    }
}

/// In-memory table engine.
#[derive(Debug, Clone)]
pub struct DataTable {
    records: Vec<Record>,
    columns: ColumnList,
    header: Option<String>,
    footer: Option<String>,
    options: TableOptions,
    state: ViewState,
}

impl DataTable {
    /// Create a table with default options.
    pub fn new(records: Vec<Record>, columns: ColumnList) -> Self {
        let options = TableOptions::default();
        let state = ViewState::new(options.initial_page_size);
        Self {
            records,
            columns,
            header: None,
            footer: None,
            options,
            state,
        }
    }

    /// Create a table from a JSON array of objects.
    ///
    /// # Errors
    ///
    /// `NotAnArray` / `NotAnObject` if the JSON is not a list of objects.
    pub fn from_json(value: serde_json::Value, columns: ColumnList) -> Result<Self, InvalidInputError> {
        Ok(Self::new(records_from_json(value)?, columns))
    }

    /// Replace the options and reset the page size to the configured initial one.
    ///
    /// # Errors
    ///
    /// `UnsupportedPageSize` if the initial size is not among the offered options.
    pub fn with_options(mut self, options: TableOptions) -> Result<Self, InvalidInputError> {
        if !options.page_size_options.contains(&options.initial_page_size) {
            return Err(InvalidInputError::UnsupportedPageSize {
                size: options.initial_page_size.get(),
            });
        }
        self.state = self.state.with_page_size(options.initial_page_size);
        self.options = options;
        Ok(self)
    }

    /// Attach header text. Passed through to the renderer untouched.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Attach footer text. Passed through to the renderer untouched.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    // ===== Accessors =====

    /// Current interaction state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Column list.
    pub fn columns(&self) -> &ColumnList {
        &self.columns
    }

    /// All raw records, in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Header text, if any.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Footer text, if any.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Table options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    // ===== Interactions =====

    /// Search box changed.
    pub fn on_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        let next = self.state.clone().with_search_term(term);
        self.replace_state(next);
        debug!(
            term = self.state.search_term(),
            matches = self.filtered_count(),
            "Search applied"
        );
    }

    /// Column header clicked.
    ///
    /// # Errors
    ///
    /// `UnknownColumn` if `column` is not in the column list.
    pub fn on_sort_column(&mut self, column: &str) -> Result<(), InvalidInputError> {
        if !self.columns.contains(column) {
            return Err(InvalidInputError::UnknownColumn {
                name: column.to_string(),
            });
        }
        let next = self.state.clone().with_sort_toggled(column);
        self.replace_state(next);
        debug!(sort = ?self.state.sort(), "Sort toggled");
        Ok(())
    }

    /// Page number clicked. Out-of-range pages are pulled back to the nearest valid page.
    pub fn on_page_change(&mut self, page: usize) {
        let next = self.state.clone().with_page(page);
        self.replace_state(next);
    }

    /// "Next" clicked. No-op on the last page.
    pub fn on_next_page(&mut self) {
        if self.has_next() {
            self.on_page_change(self.state.current_page() + 1);
        }
    }

    /// "Previous" clicked. No-op on the first page.
    pub fn on_previous_page(&mut self) {
        if self.has_previous() {
            self.on_page_change(self.state.current_page() - 1);
        }
    }

    /// Page-size selector changed.
    ///
    /// # Errors
    ///
    /// `ZeroPageSize` for 0, `UnsupportedPageSize` for a size not on offer.
    pub fn on_page_size_change(&mut self, size: usize) -> Result<(), InvalidInputError> {
        let page_size = PageSize::new(size)?;
        if !self.options.page_size_options.contains(&page_size) {
            return Err(InvalidInputError::UnsupportedPageSize { size });
        }
        let next = self.state.clone().with_page_size(page_size);
        self.replace_state(next);
        debug!(page_size = size, page = self.state.current_page(), "Page size changed");
        Ok(())
    }

    /// Replace the raw input. Search and sort stay; the page is re-clamped.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        let next = self.state.clone();
        self.replace_state(next);
    }

    /// Install `next`, keeping the current page within the filtered set.
    fn replace_state(&mut self, next: ViewState) {
        let count = filter(&self.records, next.search_term()).len();
        let requested = next.current_page();
        let clamped = next.clamped(count);
        if clamped.current_page() != requested {
            debug!(
                requested,
                page = clamped.current_page(),
                "Current page clamped"
            );
        }
        self.state = clamped;
    }

    // ===== Derived sets =====

    /// Records matching the search term, in input order.
    pub fn filtered(&self) -> Vec<&Record> {
        filter(&self.records, self.state.search_term())
    }

    /// Number of records matching the search term.
    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Filtered records in sort order.
    pub fn sorted(&self) -> Vec<&Record> {
        let filtered = self.filtered();
        match self.state.sort() {
            SortState::Unsorted => filtered,
            SortState::Sorted { column, order } => {
                sort_with_mode(filtered, column, *order, self.options.descending)
            }
        }
    }

    /// Records on the current page.
    pub fn page(&self) -> Vec<&Record> {
        let sorted = self.sorted();
        paginate(&sorted, self.state.current_page(), self.state.page_size()).to_vec()
    }

    /// `max(1, ceil(filtered_count / page_size))`.
    pub fn total_pages(&self) -> usize {
        self.state.total_pages(self.filtered_count())
    }

    /// True unless on the first page.
    pub fn has_previous(&self) -> bool {
        paginate::has_previous(self.state.current_page())
    }

    /// True unless on the last page.
    pub fn has_next(&self) -> bool {
        paginate::has_next(
            self.state.current_page(),
            self.filtered_count(),
            self.state.page_size(),
        )
    }

    // ===== Export =====

    /// Flat rows for CSV export: every filtered record, in sort order.
    pub fn export_rows(&self) -> Vec<ExportRow<'_>> {
        to_export_rows(&self.sorted(), &self.columns)
    }

    /// Header + value arrays for print export: every filtered record, in sort order.
    pub fn table_rows(&self) -> TableRows<'_> {
        to_table_rows(&self.sorted(), &self.columns)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
