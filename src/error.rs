use thiserror::Error;

#[derive(Error, Debug)]
pub enum PopcornError {
    #[error("movie not found: {0}")]
    MovieNotFound(String),

    #[error("unexpected HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    #[error("invalid user rating {0}, expected 1-10")]
    InvalidRating(u8),

    #[error("movie API key not configured. Set OMDB_API_KEY or run: popcorn config set api_key <key>")]
    MissingApiKey,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

impl PopcornError {
    /// Whether this error came from the network layer rather than the API's answer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PopcornError::Http(_) | PopcornError::HttpStatus(_) | PopcornError::MalformedResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PopcornError>;
