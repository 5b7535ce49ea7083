//! OMDb provider implementation over its JSON HTTP API.
//!
//! # Security Note - Logging
//!
//! The API key travels as the `apikey` query parameter, so request URLs are
//! never logged. The key is held in a `SecretBox` and the client's `Debug`
//! output redacts it.

use std::fmt;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretBox};
use url::Url;

use crate::config::Config;
use crate::error::{PopcornError, Result};

use super::{MovieApi, MovieDetail, SearchOutcome, SearchResult};

const USER_AGENT: &str = concat!("popcorn/", env!("CARGO_PKG_VERSION"));

/// OMDb wire formats. Field names follow the API's capitalization.
mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct SearchResponse {
        pub response: String,
        #[serde(default)]
        pub search: Vec<SearchItem>,
        pub error: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct SearchItem {
        #[serde(rename = "imdbID")]
        pub imdb_id: String,
        pub title: String,
        #[serde(default)]
        pub year: String,
        #[serde(default)]
        pub poster: String,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct LookupResponse {
        pub response: Option<String>,
        pub error: Option<String>,
        #[serde(rename = "imdbID")]
        pub imdb_id: Option<String>,
        pub title: Option<String>,
        pub year: Option<String>,
        pub poster: Option<String>,
        pub runtime: Option<String>,
        #[serde(rename = "imdbRating")]
        pub imdb_rating: Option<String>,
        pub plot: Option<String>,
        pub released: Option<String>,
        pub actors: Option<String>,
        pub director: Option<String>,
        pub genre: Option<String>,
    }
}

/// OMDb client
pub struct OmdbClient {
    client: Client,
    api_key: SecretBox<String>,
    base_url: Url,
}

impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl OmdbClient {
    /// Create a new client from configuration
    ///
    /// Uses the configured request timeout for both connect and total time.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or(PopcornError::MissingApiKey)?;
        Self::new(&api_key, &config.api_url, config.timeout())
    }

    /// Create a new client for an explicit key and endpoint
    pub fn new(api_key: &str, base_url: &str, timeout: std::time::Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: SecretBox::new(Box::new(api_key.to_string())),
            base_url: Url::parse(base_url)?,
        })
    }

    fn request_url(&self, param: &str, value: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", self.api_key.expose_secret())
            .append_pair(param, value);
        url
    }

    /// Issue a GET and return the body, treating any non-2xx status as a failure
    async fn get_body(&self, param: &str, value: &str) -> Result<String> {
        let response = self.client.get(self.request_url(param, value)).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("OMDb returned HTTP {} for {}={}", status, param, value);
            return Err(PopcornError::HttpStatus(status));
        }

        Ok(response.text().await?)
    }
}

impl MovieApi for OmdbClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome> {
        tracing::debug!("searching OMDb for {:?}", query);
        let body = self.get_body("s", query).await?;
        parse_search_response(&body)
    }

    async fn lookup(&self, id: &str) -> Result<MovieDetail> {
        tracing::debug!("looking up {} on OMDb", id);
        let body = self.get_body("i", id).await?;
        parse_lookup_response(id, &body)
    }
}

fn is_true(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

/// Decode a search body into an outcome
///
/// `Response: "False"` and an empty `Search` list both mean "no match".
pub fn parse_search_response(body: &str) -> Result<SearchOutcome> {
    let parsed: wire::SearchResponse = serde_json::from_str(body)
        .map_err(|e| PopcornError::MalformedResponse(e.to_string()))?;

    if !is_true(&parsed.response) || parsed.search.is_empty() {
        let reason = parsed
            .error
            .unwrap_or_else(|| "Movie not found!".to_string());
        return Ok(SearchOutcome::NotFound(reason));
    }

    let results = parsed
        .search
        .into_iter()
        .map(|item| SearchResult {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: item.poster,
        })
        .collect();

    Ok(SearchOutcome::Found(results))
}

/// Decode a lookup body into a detail record for `id`
pub fn parse_lookup_response(id: &str, body: &str) -> Result<MovieDetail> {
    let parsed: wire::LookupResponse = serde_json::from_str(body)
        .map_err(|e| PopcornError::MalformedResponse(e.to_string()))?;

    if let Some(flag) = parsed.response.as_deref()
        && !is_true(flag)
    {
        let reason = parsed.error.unwrap_or_else(|| id.to_string());
        return Err(PopcornError::MovieNotFound(reason));
    }

    Ok(MovieDetail {
        id: parsed.imdb_id.unwrap_or_else(|| id.to_string()),
        title: parsed.title.unwrap_or_default(),
        year: parsed.year.unwrap_or_default(),
        poster_url: parsed.poster.unwrap_or_default(),
        runtime: parsed.runtime.unwrap_or_default(),
        external_rating: parsed.imdb_rating.unwrap_or_default(),
        plot: parsed.plot.unwrap_or_default(),
        release_date: parsed.released.unwrap_or_default(),
        actors: parsed.actors.unwrap_or_default(),
        director: parsed.director.unwrap_or_default(),
        genre: parsed.genre.unwrap_or_default(),
    })
}
