//! Record sources.
//!
//! Records come from a file or from piped stdin, as either one JSON array of
//! objects or JSON Lines (one object per line). The format is picked from the
//! first non-blank character.

use crate::model::error::InputError;
use crate::model::{records_from_json, Record};
use serde_json::Value;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load records from `file`, or from stdin when no file is given.
///
/// # Errors
///
/// - `InputError::FileNotFound` if `file` does not exist.
/// - `InputError::NoInput` if no file is given and stdin is a terminal.
/// - `InputError::Parse` / `InputError::Shape` for malformed content.
/// - `InputError::Io` for read failures.
pub fn load_records(file: Option<PathBuf>) -> Result<Vec<Record>, InputError> {
    match file {
        Some(path) => read_file(&path),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(InputError::NoInput);
            }
            read_from(stdin.lock())
        }
    }
}

/// Read and parse a record file.
///
/// # Errors
///
/// `InputError::FileNotFound` if the path does not exist, otherwise as
/// [`parse_records`].
pub fn read_file(path: &Path) -> Result<Vec<Record>, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    info!(path = %path.display(), records = records.len(), "Records loaded");
    Ok(records)
}

/// Read everything from `reader` and parse it.
///
/// # Errors
///
/// `InputError::Io` if reading fails, otherwise as [`parse_records`].
pub fn read_from<R: Read>(mut reader: R) -> Result<Vec<Record>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let records = parse_records(&text)?;
    info!(records = records.len(), "Records loaded from stdin");
    Ok(records)
}

/// Parse a JSON array of objects or JSON Lines into records.
///
/// Blank input yields no records. Blank lines in JSON Lines are skipped.
///
/// # Errors
///
/// `InputError::Parse` with the failing line for invalid JSON,
/// `InputError::Shape` when a value is not an object.
pub fn parse_records(text: &str) -> Result<Vec<Record>, InputError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(text).map_err(|e| InputError::Parse {
            line: e.line(),
            reason: e.to_string(),
        })?;
        debug!("Parsed input as JSON array");
        return Ok(records_from_json(value)?);
    }

    debug!("Parsing input as JSON Lines");
    let mut records = Vec::new();
    for (offset, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| InputError::Parse {
            line: offset + 1,
            reason: e.to_string(),
        })?;
        records.push(Record::from_json(value, records.len())?);
    }
    Ok(records)
}
