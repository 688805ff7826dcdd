//! Table interaction state.
//!
//! `ViewState` is an immutable value. Every interaction produces a new value
//! and the old one is dropped; the derived sets (filtered, sorted, page) are
//! recomputed from `(records, ViewState)` each time they are needed.

use crate::engine::paginate::total_pages;
use crate::model::InvalidInputError;
use std::fmt;

// ===== PageSize =====

/// Number of rows shown per page. Never zero.
/// Smart constructor enforces the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(usize);

impl PageSize {
    /// Page size used when nothing is configured.
    pub const DEFAULT: PageSize = PageSize(10);

    /// Page sizes offered when nothing is configured.
    pub const DEFAULT_OPTIONS: [PageSize; 3] = [PageSize(10), PageSize(20), PageSize(50)];

    /// Smart constructor: rejects zero.
    pub fn new(size: usize) -> Result<Self, InvalidInputError> {
        if size == 0 {
            Err(InvalidInputError::ZeroPageSize)
        } else {
            Ok(Self(size))
        }
    }

    /// Raw row count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== SortOrder =====

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

// ===== SortState =====

/// Column-sort state machine.
///
/// States: `Unsorted` ∪ (column × {Asc, Desc}).
///
/// Transitions on a header click for column `c`:
/// - `Sorted(c, Asc)` → `Sorted(c, Desc)`
/// - anything else → `Sorted(c, Asc)`
///
/// There is no transition back to `Unsorted`: once a column has been clicked
/// the table stays sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    /// No column clicked yet; rows keep input order.
    #[default]
    Unsorted,
    /// Sorted by `column` in `order`.
    Sorted {
        /// Active sort column.
        column: String,
        /// Active direction.
        order: SortOrder,
    },
}

impl SortState {
    /// Apply one header click.
    pub fn toggle(self, clicked: &str) -> Self {
        let order = match &self {
            Self::Sorted {
                column,
                order: SortOrder::Asc,
            } if column == clicked => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        Self::Sorted {
            column: clicked.to_string(),
            order,
        }
    }

    /// Active column, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Unsorted => None,
            Self::Sorted { column, .. } => Some(column),
        }
    }

    /// Direction for `column`, if it is the active sort column.
    pub fn order_for(&self, column: &str) -> Option<SortOrder> {
        match self {
            Self::Sorted { column: c, order } if c == column => Some(*order),
            _ => None,
        }
    }
}

// ===== ViewState =====

/// Search, sort and pagination position for one table instance.
///
/// # Invariants
/// - `current_page >= 1`
/// - after [`ViewState::clamped`], `current_page <= max(1, ceil(count / page_size))`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    current_page: usize,
    page_size: PageSize,
    sort: SortState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::DEFAULT)
    }
}

impl ViewState {
    /// Initial state: no search, page 1, unsorted.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            page_size,
            sort: SortState::Unsorted,
        }
    }

    /// Current search term (may be empty).
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Replace the search term.
    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    /// Apply a header click on `column`.
    pub fn with_sort_toggled(self, column: &str) -> Self {
        Self {
            sort: self.sort.toggle(column),
            ..self
        }
    }

    /// Jump to `page`. Page 0 is read as page 1.
    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    /// Change rows per page. Does not move the current page; see [`ViewState::clamped`].
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self { page_size, ..self }
    }

    /// Pull `current_page` back into `[1, total_pages(count)]`.
    pub fn clamped(self, count: usize) -> Self {
        let last = total_pages(count, self.page_size);
        Self {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }

    /// Number of pages for `count` rows at the current page size.
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }
}

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
