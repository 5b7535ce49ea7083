//! Movie database access.
//!
//! This module defines the normalized movie records the app works with and
//! the `MovieApi` trait that the OMDb client implements.

pub mod omdb;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use omdb::OmdbClient;

/// One row of a title search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// External identifier (IMDb id), unique per title
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

/// Full record for a single title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// Runtime as reported by the API, e.g. "148 min"
    pub runtime: String,
    /// External rating as reported by the API, e.g. "8.8" or "N/A"
    pub external_rating: String,
    pub plot: String,
    pub release_date: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

/// Result of a title search that reached the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one title matched
    Found(Vec<SearchResult>),
    /// The API answered but reported no match, with its reason
    NotFound(String),
}

/// Common interface for movie database backends
pub trait MovieApi: Send + Sync {
    /// Search titles matching `query`
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchOutcome>> + Send;

    /// Fetch the full record for a title id
    fn lookup(&self, id: &str) -> impl Future<Output = Result<MovieDetail>> + Send;
}
