//! Layout dimension constants for table rendering.

/// Lines taken by the table block outside its rows (top border, column
/// header row, bottom border).
pub const TABLE_CHROME_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the header or footer text in lines.
pub const CAPTION_HEIGHT: u16 = 1;

/// Up to this many pages, every page number is shown in the pagination bar.
/// Beyond it the bar shows the first and last page plus a window around the
/// current one.
pub const MAX_LISTED_PAGES: usize = 9;

/// Pages shown on each side of the current page in a windowed bar.
pub const PAGE_WINDOW_RADIUS: usize = 2;

/// Width used by [`crate::view::render_to_string`] callers that have no terminal.
pub const DEFAULT_RENDER_WIDTH: u16 = 100;
