//! Table widget for one page of a [`DataTable`].

use super::constants::{CAPTION_HEIGHT, PAGINATION_BAR_HEIGHT, TABLE_CHROME_HEIGHT};
use super::pagination::PaginationBar;
use crate::engine::DataTable;
use crate::model::CellValue;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Text shown in place of rows when nothing matches.
pub const EMPTY_MESSAGE: &str = "No matching records";

/// Prefix for cells holding an image URL.
pub const IMAGE_LABEL: &str = "[image]";

/// Renders the header text, the column headers with sort indicator, the
/// current page's rows, the pagination bar and the footer text.
pub struct TableView<'a> {
    table: &'a DataTable,
}

impl<'a> TableView<'a> {
    /// Create a view over `table`.
    pub fn new(table: &'a DataTable) -> Self {
        Self { table }
    }

    /// Lines needed to show the whole current page without clipping.
    pub fn required_height(&self) -> u16 {
        let rows = self.table.page().len().max(1);
        let captions = [self.table.header(), self.table.footer()]
            .iter()
            .filter(|text| text.is_some())
            .count();

        let total = rows
            + usize::from(TABLE_CHROME_HEIGHT)
            + usize::from(PAGINATION_BAR_HEIGHT)
            + captions * usize::from(CAPTION_HEIGHT);
        u16::try_from(total).unwrap_or(u16::MAX)
    }

    fn column_headers(&self) -> Row<'a> {
        let sort = self.table.state().sort();
        let cells = self.table.columns().iter().map(|column| {
            let label = match sort.order_for(column) {
                Some(order) => format!("{} {}", column, order.indicator()),
                None => column.to_string(),
            };
            Cell::from(label)
        });

        Row::new(cells).style(Style::default().add_modifier(Modifier::BOLD))
    }

    fn column_widths(&self) -> Vec<Constraint> {
        vec![Constraint::Fill(1); self.table.columns().len()]
    }

    fn body(&self) -> Vec<Row<'a>> {
        let columns = self.table.columns();
        self.table
            .page()
            .into_iter()
            .map(|record| Row::new(columns.iter().map(|column| cell(record.get(column)))))
            .collect()
    }
}

/// Display form of one cell.
pub fn cell_text(value: Option<&CellValue>) -> String {
    match value {
        Some(CellValue::ImageUrl(url)) => format!("{} {}", IMAGE_LABEL, url),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn cell<'a>(value: Option<&CellValue>) -> Cell<'a> {
    let text = cell_text(value);
    match value {
        Some(CellValue::ImageUrl(_)) => {
            Cell::from(text).style(Style::default().fg(Color::Magenta))
        }
        _ => Cell::from(text),
    }
}

impl Widget for TableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = self.table.header();
        let footer = self.table.footer();

        let mut constraints = Vec::with_capacity(4);
        if header.is_some() {
            constraints.push(Constraint::Length(CAPTION_HEIGHT));
        }
        constraints.push(Constraint::Min(TABLE_CHROME_HEIGHT));
        constraints.push(Constraint::Length(PAGINATION_BAR_HEIGHT));
        if footer.is_some() {
            constraints.push(Constraint::Length(CAPTION_HEIGHT));
        }

        let areas = Layout::vertical(constraints).split(area);
        let mut slots = areas.iter().copied();

        if let Some(text) = header {
            if let Some(slot) = slots.next() {
                Paragraph::new(Line::from(text.to_string()))
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .render(slot, buf);
            }
        }

        let Some(table_area) = slots.next() else {
            return;
        };

        let state = self.table.state();
        let filtered = self.table.filtered_count();
        let block = Block::default().borders(Borders::ALL).title(format!(
            " {} of {} records ",
            filtered,
            self.table.records().len()
        ));

        let body = self.body();
        if body.is_empty() {
            let inner = block.inner(table_area);
            block.render(table_area, buf);
            let [header_row, message] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
            let widths = self.column_widths();
            Table::new(Vec::<Row>::new(), widths)
                .header(self.column_headers())
                .render(header_row, buf);
            Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .render(message, buf);
        } else {
            Table::new(body, self.column_widths())
                .header(self.column_headers())
                .block(block)
                .render(table_area, buf);
        }

        if let Some(slot) = slots.next() {
            PaginationBar::new(
                state.current_page(),
                self.table.total_pages(),
                state.page_size(),
                &self.table.options().page_size_options,
            )
            .render(slot, buf);
        }

        if let (Some(text), Some(slot)) = (footer, slots.next()) {
            Paragraph::new(text.to_string())
                .style(Style::default().fg(Color::Gray))
                .render(slot, buf);
        }
    }
}
