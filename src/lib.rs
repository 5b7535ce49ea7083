pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod movies;
pub mod tui;
pub mod watched;

pub use config::Config;
pub use error::{PopcornError, Result};
pub use movies::{MovieApi, MovieDetail, OmdbClient, SearchOutcome, SearchResult};
pub use watched::{WatchedEntry, WatchedSummary};
