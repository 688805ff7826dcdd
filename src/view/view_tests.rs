//! Rendering tests for the table view.

use super::*;
use crate::model::{ColumnList, Record};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn people(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::new()
                .with("name", format!("person{:02}", i))
                .with("age", (20 + i) as i64)
        })
        .collect()
}

fn table(n: usize) -> DataTable {
    DataTable::new(people(n), ColumnList::new(["name", "age"]).unwrap())
}

#[test]
fn renders_column_headers_and_page_rows() {
    let output = render_to_string(&table(25), 80);

    assert!(output.contains("name"));
    assert!(output.contains("age"));
    assert!(output.contains("person00"));
    assert!(output.contains("person09"));
    assert!(!output.contains("person10"));
}

#[test]
fn renders_pagination_bar() {
    let mut table = table(25);
    table.on_page_change(2);

    let output = render_to_string(&table, 80);

    assert!(output.contains("Previous 1 [2] 3 Next"));
    assert!(output.contains("Rows per page: [10] 20 50"));
}

#[test]
fn renders_sort_indicator_on_active_column() {
    let mut table = table(3);
    table.on_sort_column("age").unwrap();
    assert!(render_to_string(&table, 80).contains("age ▲"));

    table.on_sort_column("age").unwrap();
    let output = render_to_string(&table, 80);
    assert!(output.contains("age ▼"));
    assert!(!output.contains("name ▲"));
}

#[test]
fn renders_header_and_footer_text() {
    let table = table(2).with_header("Staff list").with_footer("Updated daily");
    let output = render_to_string(&table, 80);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.first(), Some(&"Staff list"));
    assert_eq!(lines.last(), Some(&"Updated daily"));
}

#[test]
fn renders_image_cells_as_labelled_urls() {
    let records = vec![Record::new()
        .with("name", "Ann")
        .with("photo", "https://img.test/a.png")];
    let table = DataTable::new(records, ColumnList::new(["name", "photo"]).unwrap());

    let output = render_to_string(&table, 100);

    assert!(output.contains("[image] https://img.test/a.png"));
}

#[test]
fn renders_empty_message_when_nothing_matches() {
    let mut table = table(5);
    table.on_search("nobody");

    let output = render_to_string(&table, 80);

    assert!(output.contains(EMPTY_MESSAGE));
    assert!(output.contains("0 of 5 records"));
}

#[test]
fn required_height_fits_page_and_captions() {
    let plain = table(25);
    assert_eq!(TableView::new(&plain).required_height(), 10 + 3 + 1);

    let captioned = table(25).with_header("h").with_footer("f");
    assert_eq!(TableView::new(&captioned).required_height(), 10 + 3 + 1 + 2);
}

#[test]
fn renders_into_terminal_frame() {
    let table = table(12);
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

    terminal
        .draw(|frame| frame.render_widget(TableView::new(&table), frame.area()))
        .unwrap();

    let output = buffer_to_string(terminal.backend().buffer());
    assert!(output.contains("person00"));
    assert!(output.contains("Next"));
}

#[test]
fn cell_text_formats_values() {
    assert_eq!(cell_text(None), "");
    assert_eq!(cell_text(Some(&"x".into())), "x");
    assert_eq!(cell_text(Some(&3i64.into())), "3");
    assert_eq!(
        cell_text(Some(&"http://a.test".into())),
        "[image] http://a.test"
    );
}
