//! Shared TUI components
//!
//! Presentational components for the popcorn screen. Each takes plain props
//! computed by `tui::model::compute_view_model`.

pub mod empty_state;
pub mod footer;
pub mod movie_detail;
pub mod movie_list;
pub mod nav_bar;
pub mod search_box;
pub mod shortcuts;
pub mod star_rating;
pub mod toggle_box;
pub mod watched_list;
pub mod watched_summary;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{Footer, FooterProps, Shortcut};
pub use movie_detail::{MovieDetailPanel, MovieDetailPanelProps};
pub use movie_list::{MovieList, MovieListProps, MovieRow, MovieRowProps};
pub use nav_bar::{NavBar, NavBarProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use shortcuts::ShortcutsBuilder;
pub use star_rating::{StarRating, StarRatingProps};
pub use toggle_box::{ToggleBox, ToggleBoxProps};
pub use watched_list::{WatchedList, WatchedListProps};
pub use watched_summary::{WatchedSummaryPanel, WatchedSummaryPanelProps};
