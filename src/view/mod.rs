//! Page rendering (impure shell).
//!
//! Widgets draw into a ratatui [`Buffer`]. The CLI has no interactive
//! terminal, so [`render_to_string`] renders into an off-screen buffer sized
//! to fit the page and returns its text.

pub mod constants;
mod pagination;
mod table_view;

pub use pagination::{page_slots, PageSlot, PaginationBar};
pub use table_view::{cell_text, TableView, EMPTY_MESSAGE, IMAGE_LABEL};

use crate::engine::DataTable;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Render the current page of `table` as plain text, `width` columns wide.
///
/// Trailing spaces are trimmed from every line. Styles are dropped.
pub fn render_to_string(table: &DataTable, width: u16) -> String {
    let view = TableView::new(table);
    let area = Rect::new(0, 0, width, view.required_height());
    let mut buffer = Buffer::empty(area);
    view.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

/// Text content of `buffer`, one line per row, right-trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut out = String::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
