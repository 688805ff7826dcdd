//! Print-table export.
//!
//! Lays a [`TableRows`] projection out as paginated, fixed-width pages: the
//! header and rule repeat at the top of every page and each page ends with a
//! `Page i of n` footer. [`PrintDocument::to_pdf`] sets those pages in a
//! monospace font, one PDF page per layout page.

use super::TableRows;
use crate::model::ExportError;
use chrono::NaiveDateTime;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::Path;
use tracing::info;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// File name used when the caller does not pick one.
pub const DEFAULT_PRINT_FILENAME: &str = "table.pdf";

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";
const ELLIPSIS: char = '…';

// A4 landscape
const PAGE_WIDTH: Mm = Mm(297.0);
const PAGE_HEIGHT: Mm = Mm(210.0);
const MARGIN_MM: f32 = 12.0;
const FONT_SIZE_PT: f32 = 8.0;
const LINE_HEIGHT_MM: f32 = 3.5;
const LAYER_NAME: &str = "table";

/// Page geometry for the print document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintLayout {
    /// Data rows per printed page (header rows not counted). At least 1.
    pub rows_per_page: usize,
    /// Cells wider than this are cut with an ellipsis. At least 1.
    pub max_column_width: usize,
    /// Optional title printed above the table on every page.
    pub title: Option<String>,
    /// Optional timestamp printed under the title.
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for PrintLayout {
    fn default() -> Self {
        Self {
            rows_per_page: 40,
            max_column_width: 40,
            title: None,
            generated_at: None,
        }
    }
}

/// A laid-out document: one block of lines per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    title: Option<String>,
    pages: Vec<String>,
}

impl PrintDocument {
    /// Pages in order, as newline-terminated text. Never empty.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Set the pages in Courier on A4 landscape sheets.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Pdf` if the PDF cannot be assembled.
    pub fn to_pdf(&self) -> Result<Vec<u8>, ExportError> {
        let doc_title = self.title.as_deref().unwrap_or("Table");
        let (doc, first_page, first_layer) =
            PdfDocument::new(doc_title, PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        for (index, page) in self.pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME)
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            let mut y = PAGE_HEIGHT.0 - MARGIN_MM;
            for line in page.lines() {
                if !line.is_empty() {
                    layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
                }
                y -= LINE_HEIGHT_MM;
            }
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }

    /// Write the document to `path` as a PDF.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Pdf` if the PDF cannot be assembled and
    /// `ExportError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.to_pdf()?;
        std::fs::write(path, bytes).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), pages = self.page_count(), "Print document written");
        Ok(())
    }
}

impl PrintLayout {
    /// Lay `table` out into pages.
    pub fn render(&self, table: &TableRows<'_>) -> PrintDocument {
        let rows_per_page = self.rows_per_page.max(1);
        let max_width = self.max_column_width.max(1);

        let names: Vec<String> = table.header.iter().map(|name| printable(name)).collect();
        let body: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        cell.map(|value| printable(&value.to_string()))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = names
            .iter()
            .enumerate()
            .map(|(col, name)| {
                body.iter()
                    .filter_map(|row| row.get(col))
                    .map(|text| text.width())
                    .chain(std::iter::once(name.width()))
                    .max()
                    .unwrap_or(0)
                    .min(max_width)
            })
            .collect();

        let header = format_line(names.iter().map(String::as_str), &widths);
        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(RULE_SEPARATOR);

        let chunks: Vec<&[Vec<String>]> = if body.is_empty() {
            vec![&body[..]]
        } else {
            body.chunks(rows_per_page).collect()
        };
        let total = chunks.len();

        let pages = chunks
            .iter()
            .enumerate()
            .map(|(index, rows)| {
                let mut lines = self.preamble();
                lines.push(header.clone());
                lines.push(rule.clone());
                lines.extend(
                    rows.iter()
                        .map(|row| format_line(row.iter().map(String::as_str), &widths)),
                );
                lines.push(String::new());
                lines.push(format!("Page {} of {}", index + 1, total));

                let mut page = lines.join("\n");
                page.push('\n');
                page
            })
            .collect();

        PrintDocument {
            title: self.title.clone(),
            pages,
        }
    }

    fn preamble(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        if let Some(at) = self.generated_at {
            lines.push(format!("Generated {}", at.format("%Y-%m-%d %H:%M")));
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }
}

/// Pad or cut each cell to its column width and join with the separator.
fn format_line<'s>(cells: impl Iterator<Item = &'s str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(text, width)| fit(text, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    line.trim_end().to_string()
}

/// Control characters (newlines, tabs) become spaces so a cell stays on its line.
fn printable(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

/// Exactly `width` display columns: padded with spaces, or cut with `…`.
fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::to_table_rows;
    use crate::model::{ColumnList, Record};
    use chrono::NaiveDate;

    fn people(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                Record::new()
                    .with("name", format!("person{}", i))
                    .with("age", (20 + i) as i64)
            })
            .collect()
    }

    #[test]
    fn single_page_layout() {
        let records = people(2);
        let refs: Vec<&Record> = records.iter().collect();
        let columns = ColumnList::new(["name", "age"]).unwrap();
        let table = to_table_rows(&refs, &columns);

        let doc = PrintLayout::default().render(&table);

        assert_eq!(doc.page_count(), 1);
        assert_eq!(
            doc.pages()[0],
            "name    | age\n--------+----\nperson0 | 20\nperson1 | 21\n\nPage 1 of 1\n"
        );
    }

    #[test]
    fn header_repeats_on_every_page() {
        let records = people(5);
        let refs: Vec<&Record> = records.iter().collect();
        let columns = ColumnList::new(["name", "age"]).unwrap();
        let table = to_table_rows(&refs, &columns);

        let layout = PrintLayout {
            rows_per_page: 2,
            ..PrintLayout::default()
        };
        let doc = layout.render(&table);

        assert_eq!(doc.page_count(), 3);
        for (i, page) in doc.pages().iter().enumerate() {
            assert!(page.starts_with("name    | age\n"));
            assert!(page.ends_with(&format!("Page {} of 3\n", i + 1)));
        }
        assert!(doc.pages()[2].contains("person4"));
    }

    #[test]
    fn empty_table_still_has_one_page() {
        let columns = ColumnList::new(["name"]).unwrap();
        let table = to_table_rows(&[], &columns);

        let doc = PrintLayout::default().render(&table);

        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages()[0].contains("Page 1 of 1"));
    }

    #[test]
    fn missing_cells_print_blank() {
        let records = vec![Record::new().with("name", "Ann")];
        let refs: Vec<&Record> = records.iter().collect();
        let columns = ColumnList::new(["name", "age"]).unwrap();
        let table = to_table_rows(&refs, &columns);

        let doc = PrintLayout::default().render(&table);

        assert!(doc.pages()[0].contains("\nAnn  |\n"));
    }

    #[test]
    fn wide_cells_are_cut_with_ellipsis() {
        assert_eq!(fit("abcdefgh", 5), "abcd…");
        assert_eq!(fit("abc", 5), "abc  ");
    }

    #[test]
    fn title_and_timestamp_precede_table() {
        let columns = ColumnList::new(["name"]).unwrap();
        let table = to_table_rows(&[], &columns);
        let at = NaiveDate::from_ymd_opt(2026, 3, 4)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();

        let layout = PrintLayout {
            title: Some("Staff".to_string()),
            generated_at: Some(at),
            ..PrintLayout::default()
        };
        let doc = layout.render(&table);

        assert!(doc.pages()[0].starts_with("Staff\nGenerated 2026-03-04 09:30\n\nname\n"));
    }

    #[test]
    fn control_characters_do_not_break_the_grid() {
        let records = vec![Record::new().with("note", "two\nlines\tand tab").with("n", 1i64)];
        let refs: Vec<&Record> = records.iter().collect();
        let columns = ColumnList::new(["note", "n"]).unwrap();
        let table = to_table_rows(&refs, &columns);

        let doc = PrintLayout::default().render(&table);
        let lines: Vec<&str> = doc.pages()[0].lines().collect();

        assert_eq!(lines[2], "two lines and tab | 1");
        assert_eq!(lines[0].find('|'), lines[2].find('|'));
    }

    #[test]
    fn pdf_bytes_have_pdf_signature() {
        let records = people(5);
        let refs: Vec<&Record> = records.iter().collect();
        let columns = ColumnList::new(["name", "age"]).unwrap();
        let table = to_table_rows(&refs, &columns);

        let layout = PrintLayout {
            rows_per_page: 2,
            ..PrintLayout::default()
        };
        let bytes = layout.render(&table).to_pdf().unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn save_writes_pdf_file() {
        let dir = std::env::temp_dir().join("datatable_print_save");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("table.pdf");

        let records = people(3);
        let refs: Vec<&Record> = records.iter().collect();
        let columns = ColumnList::new(["name"]).unwrap();
        let table = to_table_rows(&refs, &columns);
        PrintLayout::default().render(&table).save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_reports_unwritable_path() {
        let columns = ColumnList::new(["name"]).unwrap();
        let table = to_table_rows(&[], &columns);
        let path = Path::new("/nonexistent-dir/datatable/table.pdf");

        let err = PrintLayout::default().render(&table).save(path).unwrap_err();

        assert!(matches!(err, ExportError::Io { .. }));
    }
}
