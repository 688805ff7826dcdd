//! In-memory data table engine.
//!
//! Takes an array of uniform records and a column list and produces a view:
//! case-insensitive search, a three-state column sort, fixed-size pagination,
//! and export of the whole filtered, sorted set to CSV or a printable table.
//!
//! The engine (`model`, `state`, `engine`, `export` projections) is pure.
//! Filesystem and terminal access live at the edges: `source`, `config`,
//! `logging`, the export writers and `view`.

pub mod config;
pub mod engine;
pub mod export;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

pub use engine::{DataTable, TableOptions};
pub use model::{AppError, CellValue, ColumnList, Record};
