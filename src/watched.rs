//! Watched movies and their aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::error::{PopcornError, Result};
use crate::movies::MovieDetail;

/// Highest user rating a watched entry may carry
pub const MAX_USER_RATING: u8 = 10;

/// A movie the user has watched and rated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// Leading integer of the API runtime text, `None` when it is not numeric
    pub runtime_minutes: Option<u32>,
    /// API rating, `None` when it is not numeric
    pub external_rating: Option<f64>,
    pub user_rating: u8,
}

impl WatchedEntry {
    /// Build an entry from a loaded detail record and the user's rating.
    ///
    /// Fails with `InvalidRating` unless `1 <= user_rating <= 10`.
    pub fn from_detail(detail: &MovieDetail, user_rating: u8) -> Result<Self> {
        if user_rating == 0 || user_rating > MAX_USER_RATING {
            return Err(PopcornError::InvalidRating(user_rating));
        }

        Ok(Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            runtime_minutes: parse_runtime(&detail.runtime),
            external_rating: parse_rating(&detail.external_rating),
            user_rating,
        })
    }
}

/// Parse `"148 min"` into `148`. Anything without a leading integer is `None`.
pub fn parse_runtime(text: &str) -> Option<u32> {
    text.split_whitespace().next()?.parse().ok()
}

/// Parse `"8.8"` into `8.8`. Non-finite and non-numeric values are `None`.
pub fn parse_rating(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Derived statistics over the watched collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_external_rating: Option<f64>,
    pub avg_user_rating: Option<f64>,
    pub avg_runtime: Option<f64>,
}

impl WatchedSummary {
    pub fn compute(entries: &[WatchedEntry]) -> Self {
        Self {
            count: entries.len(),
            avg_external_rating: mean(entries.iter().filter_map(|e| e.external_rating)),
            avg_user_rating: mean(entries.iter().map(|e| f64::from(e.user_rating))),
            avg_runtime: mean(
                entries
                    .iter()
                    .filter_map(|e| e.runtime_minutes.map(f64::from)),
            ),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0u32), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / f64::from(n))
}

/// Format an optional statistic, using "–" when absent
pub fn format_stat(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "–".to_string(),
    }
}
