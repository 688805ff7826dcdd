//! datatable - Entry Point

use clap::{Parser, ValueEnum};
use datatable::config::{self, CliOverrides, ResolvedConfig};
use datatable::export::{export_csv, write_csv};
use datatable::model::{AppError, ColumnList, Record};
use datatable::view::{constants::DEFAULT_RENDER_WIDTH, render_to_string};
use datatable::DataTable;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Comma-separated values, one line per matching record
    Csv,
    /// Paginated PDF table (header repeated on every page)
    Print,
}

/// datatable - search, sort, paginate and export tabular JSON
#[derive(Parser, Debug)]
#[command(name = "datatable")]
#[command(version)]
#[command(about = "Search, sort, paginate and export a table of JSON records")]
pub struct Args {
    /// JSON array or JSON Lines file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Columns to show, in order (defaults to the first record's keys)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Click a column header; repeat to toggle ascending/descending
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Page to show (pages past the end show the last page)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Rows per page (must be one of the configured options)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Export every matching row instead of rendering a page
    #[arg(short, long, value_enum)]
    pub export: Option<ExportTarget>,

    /// Export destination (use "-" for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text shown above the table
    #[arg(long)]
    pub header: Option<String>,

    /// Text shown below the table
    #[arg(long)]
    pub footer: Option<String>,

    /// Rendering width in columns
    #[arg(long, default_value_t = DEFAULT_RENDER_WIDTH)]
    pub width: u16,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides for the config precedence chain. `--output` applies to the
    /// chosen export target only.
    fn cli_overrides(&self) -> CliOverrides {
        let output = self.output.clone().filter(|path| !is_stdout(path));
        CliOverrides {
            page_size: self.page_size,
            csv_filename: output
                .clone()
                .filter(|_| self.export == Some(ExportTarget::Csv)),
            print_filename: output.filter(|_| self.export == Some(ExportTarget::Print)),
        }
    }
}

fn is_stdout(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    datatable::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    run(&args, &config)?;

    Ok(())
}

/// Load, apply the requested interactions, then render or export.
fn run(args: &Args, config: &ResolvedConfig) -> Result<(), AppError> {
    let records = datatable::source::load_records(args.file.clone())?;
    let table = build_table(args, config, records)?;

    match args.export {
        None => {
            let page = render_to_string(&table, args.width);
            std::io::stdout().lock().write_all(page.as_bytes())?;
        }
        Some(ExportTarget::Csv) => {
            let rows = table.export_rows();
            if args.output.as_deref().is_some_and(is_stdout) {
                write_csv(&rows, table.columns(), std::io::stdout().lock())?;
            } else {
                export_csv(&config.csv_filename, &rows, table.columns())?;
            }
        }
        Some(ExportTarget::Print) => {
            let mut layout = config.print_layout(args.header.clone());
            layout.generated_at = Some(chrono::Local::now().naive_local());
            let document = layout.render(&table.table_rows());
            if args.output.as_deref().is_some_and(is_stdout) {
                std::io::stdout().lock().write_all(&document.to_pdf()?)?;
            } else {
                document.save(&config.print_filename)?;
            }
        }
    }

    Ok(())
}

/// Build the table and replay the command-line interactions on it, in the
/// order a user would: search, header clicks, page size, then page.
fn build_table(
    args: &Args,
    config: &ResolvedConfig,
    records: Vec<Record>,
) -> Result<DataTable, AppError> {
    let columns = resolve_columns(&args.columns, &records)?;
    let mut table = DataTable::new(records, columns).with_options(config.table_options()?)?;

    if let Some(header) = &args.header {
        table = table.with_header(header.clone());
    }
    if let Some(footer) = &args.footer {
        table = table.with_footer(footer.clone());
    }

    if let Some(term) = &args.search {
        table.on_search(term.clone());
    }
    for column in &args.sort {
        table.on_sort_column(column)?;
    }
    table.on_page_change(args.page as usize);

    info!(
        records = table.records().len(),
        matches = table.filtered_count(),
        page = table.state().current_page(),
        pages = table.total_pages(),
        "Table prepared"
    );

    Ok(table)
}

/// The `--columns` list, or the first record's keys when none were given.
fn resolve_columns(requested: &[String], records: &[Record]) -> Result<ColumnList, AppError> {
    if !requested.is_empty() {
        return Ok(ColumnList::new(requested.iter().map(String::as_str))?);
    }

    match records.first() {
        Some(first) => Ok(ColumnList::from_record(first)?),
        None => Ok(ColumnList::new(Vec::<String>::new())?),
    }
}
