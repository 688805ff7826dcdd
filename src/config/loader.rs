//! Configuration file loading with precedence handling.

use crate::engine::{DescendingMode, TableOptions};
use crate::export::{PrintLayout, DEFAULT_CSV_FILENAME, DEFAULT_PRINT_FILENAME};
use crate::model::InvalidInputError;
use crate::state::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "DATATABLE_CONFIG";

/// Environment variable overriding the initial page size.
pub const PAGE_SIZE_ENV_VAR: &str = "DATATABLE_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/datatable/config.toml`:
///
/// ```toml
/// page_size = 20
/// page_size_options = [10, 20, 50]
/// descending = "stable"
/// csv_filename = "out.csv"
/// print_filename = "out.pdf"
/// print_lines_per_page = 60
/// log_file_path = "/tmp/datatable.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Page sizes offered by the selector.
    #[serde(default)]
    pub page_size_options: Option<Vec<usize>>,

    /// How descending order treats ties: `"reverse"` or `"stable"`.
    #[serde(default)]
    pub descending: Option<DescendingMode>,

    /// Output path for CSV export.
    #[serde(default)]
    pub csv_filename: Option<PathBuf>,

    /// Output path for the PDF print document.
    #[serde(default)]
    pub print_filename: Option<PathBuf>,

    /// Data rows per printed page.
    #[serde(default)]
    pub print_lines_per_page: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial rows per page.
    pub page_size: usize,
    /// Page sizes offered by the selector.
    pub page_size_options: Vec<usize>,
    /// Descending-order mode.
    pub descending: DescendingMode,
    /// CSV export path.
    pub csv_filename: PathBuf,
    /// Print document path.
    pub print_filename: PathBuf,
    /// Data rows per printed page.
    pub print_lines_per_page: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT.get(),
            page_size_options: PageSize::DEFAULT_OPTIONS.iter().map(|s| s.get()).collect(),
            descending: DescendingMode::default(),
            csv_filename: PathBuf::from(DEFAULT_CSV_FILENAME),
            print_filename: PathBuf::from(DEFAULT_PRINT_FILENAME),
            print_lines_per_page: PrintLayout::default().rows_per_page,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Engine options described by this config.
    ///
    /// # Errors
    ///
    /// `ZeroPageSize` if any size is 0, `UnsupportedPageSize` if `page_size`
    /// is not among `page_size_options`.
    pub fn table_options(&self) -> Result<TableOptions, InvalidInputError> {
        let page_size_options = self
            .page_size_options
            .iter()
            .map(|size| PageSize::new(*size))
            .collect::<Result<Vec<_>, _>>()?;
        let initial_page_size = PageSize::new(self.page_size)?;

        if !page_size_options.contains(&initial_page_size) {
            return Err(InvalidInputError::UnsupportedPageSize {
                size: self.page_size,
            });
        }

        Ok(TableOptions {
            page_size_options,
            initial_page_size,
            descending: self.descending,
        })
    }

    /// Print layout described by this config, with an optional title.
    pub fn print_layout(&self, title: Option<String>) -> PrintLayout {
        PrintLayout {
            rows_per_page: self.print_lines_per_page,
            title,
            ..PrintLayout::default()
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/datatable/datatable.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("datatable").join("datatable.log"),
        None => PathBuf::from("datatable.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/datatable/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("datatable").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DATATABLE_CONFIG` environment variable
/// 3. Default path `~/.config/datatable/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{} is empty", CONFIG_ENV_VAR)));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        page_size_options: config
            .page_size_options
            .unwrap_or(defaults.page_size_options),
        descending: config.descending.unwrap_or(defaults.descending),
        csv_filename: config.csv_filename.unwrap_or(defaults.csv_filename),
        print_filename: config.print_filename.unwrap_or(defaults.print_filename),
        print_lines_per_page: config
            .print_lines_per_page
            .unwrap_or(defaults.print_lines_per_page),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DATATABLE_PAGE_SIZE`: Override the initial page size. Values that are
///   not a number are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(size) = std::env::var(PAGE_SIZE_ENV_VAR)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
    {
        config.page_size = size;
    }

    config
}

/// Flags from the command line that override configured values.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--page-size`
    pub page_size: Option<usize>,
    /// `--output` for a CSV export
    pub csv_filename: Option<PathBuf>,
    /// `--output` for a print export
    pub print_filename: Option<PathBuf>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(size) = overrides.page_size {
        config.page_size = size;
    }

    if let Some(path) = overrides.csv_filename {
        config.csv_filename = path;
    }

    if let Some(path) = overrides.print_filename {
        config.print_filename = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
