//! Mock data builders for movies and a fake movie API.
//!
//! Lets reducer and effect tests run without touching the network.

use std::collections::HashMap;

use popcorn::error::{PopcornError, Result};
use popcorn::movies::{MovieApi, MovieDetail, SearchOutcome, SearchResult};

/// Builder for full movie records
pub struct MovieBuilder {
    detail: MovieDetail,
}

impl MovieBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            detail: MovieDetail {
                id: id.to_string(),
                title: format!("Movie {id}"),
                year: "2000".to_string(),
                poster_url: "N/A".to_string(),
                runtime: "N/A".to_string(),
                external_rating: "N/A".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.detail.title = title.to_string();
        self
    }

    pub fn year(mut self, year: &str) -> Self {
        self.detail.year = year.to_string();
        self
    }

    pub fn poster(mut self, url: &str) -> Self {
        self.detail.poster_url = url.to_string();
        self
    }

    pub fn runtime(mut self, runtime: &str) -> Self {
        self.detail.runtime = runtime.to_string();
        self
    }

    pub fn rating(mut self, rating: &str) -> Self {
        self.detail.external_rating = rating.to_string();
        self
    }

    pub fn build(self) -> MovieDetail {
        self.detail
    }

    /// The search row for this movie
    pub fn search_result(&self) -> SearchResult {
        SearchResult {
            id: self.detail.id.clone(),
            title: self.detail.title.clone(),
            year: self.detail.year.clone(),
            poster_url: self.detail.poster_url.clone(),
        }
    }
}

pub fn inception() -> MovieBuilder {
    MovieBuilder::new("tt1375666")
        .title("Inception")
        .year("2010")
        .poster("https://m.media-amazon.com/images/inception.jpg")
        .runtime("148 min")
        .rating("8.8")
}

pub fn interstellar() -> MovieBuilder {
    MovieBuilder::new("tt0816692")
        .title("Interstellar")
        .year("2014")
        .runtime("169 min")
        .rating("8.7")
}

/// Create `n` search rows with sequential ids
pub fn mock_results(n: usize) -> Vec<SearchResult> {
    (0..n)
        .map(|i| MovieBuilder::new(&format!("tt{:07}", i)).search_result())
        .collect()
}

/// In-memory movie API keyed by lowercase query and by id
#[derive(Default)]
pub struct FakeApi {
    searches: HashMap<String, Vec<SearchResult>>,
    details: HashMap<String, MovieDetail>,
    broken: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a movie so it is found by `query` and by its id
    pub fn with_movie(mut self, query: &str, movie: MovieBuilder) -> Self {
        self.searches
            .entry(query.to_lowercase())
            .or_default()
            .push(movie.search_result());
        let detail = movie.build();
        self.details.insert(detail.id.clone(), detail);
        self
    }

    /// Fail every request as a transport error
    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }
}

impl MovieApi for FakeApi {
    async fn search(&self, query: &str) -> Result<SearchOutcome> {
        if self.broken {
            return Err(PopcornError::HttpStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        Ok(match self.searches.get(&query.to_lowercase()) {
            Some(results) => SearchOutcome::Found(results.clone()),
            None => SearchOutcome::NotFound("Movie not found!".to_string()),
        })
    }

    async fn lookup(&self, id: &str) -> Result<MovieDetail> {
        if self.broken {
            return Err(PopcornError::HttpStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| PopcornError::MovieNotFound("Incorrect IMDb ID.".to_string()))
    }
}
