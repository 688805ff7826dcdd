//! Pagination bar widget.
//!
//! `Previous`, the page numbers (active one bracketed), `Next`, then the
//! page-size options (active one bracketed). Buttons that would do nothing
//! are dimmed.

use super::constants::{MAX_LISTED_PAGES, PAGE_WINDOW_RADIUS};
use crate::state::PageSize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One slot in the page-number list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number.
    Page(usize),
    /// Elided run of pages.
    Gap,
}

/// Page-number slots for `current` out of `total` pages.
///
/// Small tables list every page. Larger ones keep the first page, the last
/// page and `PAGE_WINDOW_RADIUS` pages either side of `current`.
pub fn page_slots(current: usize, total: usize) -> Vec<PageSlot> {
    let total = total.max(1);
    if total <= MAX_LISTED_PAGES {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = current.clamp(1, total);
    let low = current.saturating_sub(PAGE_WINDOW_RADIUS).max(2);
    let high = (current + PAGE_WINDOW_RADIUS).min(total - 1);

    let mut slots = vec![PageSlot::Page(1)];
    if low > 2 {
        slots.push(PageSlot::Gap);
    }
    slots.extend((low..=high).map(PageSlot::Page));
    if high < total - 1 {
        slots.push(PageSlot::Gap);
    }
    slots.push(PageSlot::Page(total));
    slots
}

/// Pagination bar widget.
pub struct PaginationBar<'a> {
    current_page: usize,
    total_pages: usize,
    page_size: PageSize,
    page_size_options: &'a [PageSize],
}

impl<'a> PaginationBar<'a> {
    /// Create a pagination bar.
    pub fn new(
        current_page: usize,
        total_pages: usize,
        page_size: PageSize,
        page_size_options: &'a [PageSize],
    ) -> Self {
        Self {
            current_page,
            total_pages,
            page_size,
            page_size_options,
        }
    }

    /// Bar contents as a styled line.
    pub fn line(&self) -> Line<'static> {
        let enabled = Style::default().fg(Color::Cyan);
        let disabled = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
        let active = Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);

        let has_previous = self.current_page > 1;
        let has_next = self.current_page < self.total_pages;

        let mut spans = vec![Span::styled(
            "Previous",
            if has_previous { enabled } else { disabled },
        )];

        for slot in page_slots(self.current_page, self.total_pages) {
            spans.push(Span::raw(" "));
            spans.push(match slot {
                PageSlot::Page(n) if n == self.current_page => {
                    Span::styled(format!("[{}]", n), active)
                }
                PageSlot::Page(n) => Span::raw(n.to_string()),
                PageSlot::Gap => Span::raw("…"),
            });
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled("Next", if has_next { enabled } else { disabled }));
        spans.push(Span::raw("   Rows per page:"));

        for size in self.page_size_options {
            spans.push(Span::raw(" "));
            spans.push(if *size == self.page_size {
                Span::styled(format!("[{}]", size), active)
            } else {
                Span::raw(size.to_string())
            });
        }

        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bar: &PaginationBar<'_>) -> String {
        bar.line()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn lists_every_page_when_few() {
        assert_eq!(
            page_slots(2, 3),
            vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]
        );
    }

    #[test]
    fn zero_pages_still_lists_page_one() {
        assert_eq!(page_slots(1, 0), vec![PageSlot::Page(1)]);
    }

    #[test]
    fn windows_many_pages_around_current() {
        assert_eq!(
            page_slots(10, 20),
            vec![
                PageSlot::Page(1),
                PageSlot::Gap,
                PageSlot::Page(8),
                PageSlot::Page(9),
                PageSlot::Page(10),
                PageSlot::Page(11),
                PageSlot::Page(12),
                PageSlot::Gap,
                PageSlot::Page(20),
            ]
        );
    }

    #[test]
    fn window_at_start_has_no_leading_gap() {
        assert_eq!(
            page_slots(1, 20),
            vec![
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Page(3),
                PageSlot::Gap,
                PageSlot::Page(20),
            ]
        );
    }

    #[test]
    fn window_at_end_has_no_trailing_gap() {
        assert_eq!(
            page_slots(20, 20),
            vec![
                PageSlot::Page(1),
                PageSlot::Gap,
                PageSlot::Page(18),
                PageSlot::Page(19),
                PageSlot::Page(20),
            ]
        );
    }

    #[test]
    fn brackets_active_page_and_size() {
        let options = PageSize::DEFAULT_OPTIONS;
        let bar = PaginationBar::new(2, 3, PageSize::DEFAULT, &options);

        assert_eq!(
            text(&bar),
            "Previous 1 [2] 3 Next   Rows per page: [10] 20 50"
        );
    }

    #[test]
    fn dims_previous_on_first_page() {
        let options = PageSize::DEFAULT_OPTIONS;
        let bar = PaginationBar::new(1, 3, PageSize::DEFAULT, &options);
        let line = bar.line();

        assert!(line.spans[0].style.add_modifier.contains(Modifier::DIM));
        let next = line.spans.iter().find(|s| s.content == "Next").unwrap();
        assert!(!next.style.add_modifier.contains(Modifier::DIM));
    }
}
