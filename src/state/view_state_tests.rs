//! Tests for ViewState, SortState and PageSize.

use super::*;

// ===== PageSize Tests =====

#[test]
fn page_size_rejects_zero() {
    assert_eq!(PageSize::new(0), Err(InvalidInputError::ZeroPageSize));
}

#[test]
fn page_size_accepts_positive() {
    assert_eq!(PageSize::new(20).map(PageSize::get), Ok(20));
}

#[test]
fn page_size_default_is_ten() {
    assert_eq!(PageSize::default().get(), 10);
}

// ===== SortState Toggle Tests =====

#[test]
fn first_click_sorts_ascending() {
    let state = SortState::Unsorted.toggle("name");

    assert_eq!(
        state,
        SortState::Sorted {
            column: "name".to_string(),
            order: SortOrder::Asc
        }
    );
}

#[test]
fn second_click_on_same_column_sorts_descending() {
    let state = SortState::Unsorted.toggle("name").toggle("name");

    assert_eq!(state.order_for("name"), Some(SortOrder::Desc));
}

#[test]
fn third_click_returns_to_ascending_not_unsorted() {
    let state = SortState::Unsorted
        .toggle("name")
        .toggle("name")
        .toggle("name");

    assert_eq!(state.order_for("name"), Some(SortOrder::Asc));
}

#[test]
fn clicking_other_column_resets_to_ascending() {
    let state = SortState::Unsorted
        .toggle("name")
        .toggle("name")
        .toggle("age");

    assert_eq!(state.column(), Some("age"));
    assert_eq!(state.order_for("age"), Some(SortOrder::Asc));
    assert_eq!(state.order_for("name"), None);
}

#[test]
fn unsorted_has_no_column() {
    assert_eq!(SortState::Unsorted.column(), None);
}

#[test]
fn indicator_glyphs() {
    assert_eq!(SortOrder::Asc.indicator(), "▲");
    assert_eq!(SortOrder::Desc.indicator(), "▼");
}

// ===== ViewState Transition Tests =====

#[test]
fn new_state_starts_on_first_page_unsorted() {
    let state = ViewState::default();

    assert_eq!(state.current_page(), 1);
    assert_eq!(state.search_term(), "");
    assert_eq!(state.sort(), &SortState::Unsorted);
    assert_eq!(state.page_size(), PageSize::DEFAULT);
}

#[test]
fn with_page_zero_reads_as_first_page() {
    let state = ViewState::default().with_page(0);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn with_search_term_keeps_other_fields() {
    let state = ViewState::default()
        .with_page(3)
        .with_sort_toggled("name")
        .with_search_term("ann");

    assert_eq!(state.search_term(), "ann");
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.sort().column(), Some("name"));
}

#[test]
fn page_size_change_alone_does_not_move_page() {
    let state = ViewState::default()
        .with_page(5)
        .with_page_size(PageSize::new(50).unwrap());

    assert_eq!(state.current_page(), 5);
}

#[test]
fn clamped_pulls_page_back_to_last_page() {
    // 25 rows at 10 per page -> 3 pages
    let state = ViewState::default().with_page(7).clamped(25);
    assert_eq!(state.current_page(), 3);
}

#[test]
fn clamped_on_empty_set_is_page_one() {
    let state = ViewState::default().with_page(4).clamped(0);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn clamped_leaves_valid_page_alone() {
    let state = ViewState::default().with_page(2).clamped(25);
    assert_eq!(state.current_page(), 2);
}

#[test]
fn total_pages_uses_current_page_size() {
    let state = ViewState::new(PageSize::new(20).unwrap());
    assert_eq!(state.total_pages(41), 3);
    assert_eq!(state.total_pages(0), 1);
}
