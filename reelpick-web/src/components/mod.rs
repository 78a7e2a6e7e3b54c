//! Reusable HTML components for HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments that can be used
//! in full pages or as HTMX partial updates. All styling uses Tailwind CSS.
//! Text coming from a catalog must go through `escape_html` before it lands
//! in markup.

pub mod activity;
pub mod layout;
pub mod movie;
pub mod stats;

// Re-export main component functions
pub use activity::{notice_banner, notification_toast};
pub use layout::{button, card, input, nav_bar, page_header};
pub use movie::{movie_card, results_panel, selection_counter};
pub use stats::{mode_badge, status_indicator};
