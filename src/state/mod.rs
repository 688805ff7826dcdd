//! Interaction state (pure).
//!
//! All state transitions are pure functions that return a new value.

pub mod view_state;

pub use view_state::{PageSize, SortOrder, SortState, ViewState};
