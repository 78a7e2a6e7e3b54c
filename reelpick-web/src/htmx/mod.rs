//! HTMX partial update handlers
//!
//! These return HTML fragments swapped into the search page.

pub mod pick;
pub mod search;

pub use pick::{pick_all, pick_none, toggle_pick};
pub use search::htmx_search;
