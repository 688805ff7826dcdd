//! Pagination slicing.

use crate::state::PageSize;

/// Rows of `page` (1-based) at `page_size` rows per page.
///
/// Half-open range `[(page-1)*size, page*size)`, clipped to the slice. A page past
/// the end yields an empty slice, never an error. Page 0 is read as page 1.
pub fn paginate<T>(rows: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let first = page.max(1).saturating_sub(1).saturating_mul(size);
    if first >= rows.len() {
        return &[];
    }
    let last = first.saturating_add(size).min(rows.len());
    &rows[first..last]
}

/// `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// True if "Previous" does anything from `page`.
pub fn has_previous(page: usize) -> bool {
    page > 1
}

/// True if "Next" does anything from `page`.
pub fn has_next(page: usize, count: usize, page_size: PageSize) -> bool {
    page < total_pages(count, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn first_page_of_twenty_five() {
        let rows: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&rows, 1, size(10)), &rows[..10]);
    }

    #[test]
    fn last_page_is_short() {
        let rows: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&rows, 3, size(10)), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let rows: Vec<usize> = (0..25).collect();
        assert!(paginate(&rows, 4, size(10)).is_empty());
        assert!(paginate(&rows, usize::MAX, size(10)).is_empty());
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let rows: Vec<usize> = (0..5).collect();
        assert_eq!(paginate(&rows, 0, size(2)), &[0, 1]);
    }

    #[test]
    fn empty_input_has_one_empty_page() {
        let rows: Vec<usize> = Vec::new();
        assert_eq!(total_pages(rows.len(), size(10)), 1);
        assert!(paginate(&rows, 1, size(10)).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, size(10)), 3);
        assert_eq!(total_pages(30, size(10)), 3);
        assert_eq!(total_pages(31, size(10)), 4);
        assert_eq!(total_pages(1, size(50)), 1);
    }

    #[test]
    fn previous_disabled_on_first_page() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
    }

    #[test]
    fn next_disabled_on_last_page() {
        assert!(has_next(2, 25, size(10)));
        assert!(!has_next(3, 25, size(10)));
        assert!(!has_next(1, 0, size(10)));
    }

    #[test]
    fn concatenated_pages_cover_input() {
        let rows: Vec<usize> = (0..47).collect();
        let page_size = size(10);
        let pages = total_pages(rows.len(), page_size);

        let rebuilt: Vec<usize> = (1..=pages)
            .flat_map(|p| paginate(&rows, p, page_size).iter().copied())
            .collect();

        assert_eq!(rebuilt, rows);
    }
}
