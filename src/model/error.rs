//! Error types for datatable.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping all domain-specific failures
//!   - [`InvalidInputError`] - Caller broke the input contract (empty columns, non-object rows)
//!   - [`InputError`] - Reading records from a file or stdin failed
//!   - [`ExportError`] - Writing a CSV file or PDF print document failed
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failed
//!
//! # Recovery Strategy
//!
//! The engine itself is pure and has no runtime failures. The only errors it
//! raises are contract violations, reported eagerly instead of producing a
//! silently empty table. An out-of-range page is *not* an error: it yields an
//! empty page.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert into `AppError` via `From`, so the
/// binary can propagate everything with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The records or columns handed to the engine are malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Failed to read records from file or stdin.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Failed to write an export artifact.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Failed to load configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Writing the rendered page or an export to stdout failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Input-contract violations.
///
/// Raised when the table is constructed or when an interaction names something
/// that cannot exist. Each variant carries enough context to point at the
/// offending element.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The column list is empty; a table without columns shows nothing.
    #[error("Column list is empty")]
    EmptyColumns,

    /// The same column name appears twice in the column list.
    #[error("Duplicate column: {name}")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },

    /// The record source is not a sequence.
    #[error("Records must be a JSON array of objects")]
    NotAnArray,

    /// A record is not a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use datatable::model::error::InvalidInputError;
    ///
    /// let err = InvalidInputError::NotAnObject { index: 3 };
    /// assert!(err.to_string().contains("3"));
    /// ```
    #[error("Record at index {index} is not an object")]
    NotAnObject {
        /// Position of the offending element in the input sequence.
        index: usize,
    },

    /// A sort was requested on a column that is not in the column list.
    #[error("Unknown column: {name}")]
    UnknownColumn {
        /// The requested column name.
        name: String,
    },

    /// Page size must be at least one.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// Page size is not one of the configured options.
    #[error("Page size {size} is not one of the offered options")]
    UnsupportedPageSize {
        /// The rejected size.
        size: usize,
    },
}

/// Errors encountered when reading records from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified data file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use datatable::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The input is not valid JSON / JSON Lines.
    #[error("Parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line of the input where parsing failed.
        line: usize,
        /// Parser message.
        reason: String,
    },

    /// The JSON is well-formed but does not describe a table.
    #[error("{0}")]
    Shape(#[from] InvalidInputError),

    /// Generic I/O error reading from the input source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the export collaborators.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The PDF writer failed to assemble the print document.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Writing the output artifact failed.
    #[error("I/O error writing {path}: {source}")]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
