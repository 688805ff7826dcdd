//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod column;
pub mod error;
pub mod record;
pub mod value;

// Re-export for convenience
pub use column::ColumnList;
pub use error::{AppError, ExportError, InputError, InvalidInputError};
pub use record::{records_from_json, Record};
pub use value::CellValue;
