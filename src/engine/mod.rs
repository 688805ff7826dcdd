//! Table engine (pure).
//!
//! Filtering, sorting and pagination over in-memory records, plus the
//! [`DataTable`] that wires them to a [`crate::state::ViewState`].

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod table;

pub use filter::filter;
pub use paginate::{paginate, total_pages};
pub use sort::{compare_cells, locale_compare, sort, sort_with_mode, DescendingMode};
pub use table::{DataTable, TableOptions};
