//! TUI module for the interactive movie browser
//!
//! - `model` - state, actions, reducer and view model (pure)
//! - `effects` - runs reducer effects against the movie API
//! - `app` - the root iocraft component
//! - `components` - presentational components

pub mod app;
pub mod components;
pub mod effects;
pub mod model;
pub mod rating;
pub mod theme;

pub use app::{PopcornApp, PopcornAppProps};
pub use model::{AppAction, AppState, Effect, compute_view_model, key_to_action, reduce_app_state};
pub use rating::{RatingConfig, StarRatingState};
pub use theme::Theme;
