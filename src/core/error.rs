use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FxError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The provider answered without a `feed` array, usually because an API limit was hit.
    #[error("no news feed in response{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    MissingFeed {
        /// The provider's `Information`, `Note` or `Error Message` text, if any.
        message: Option<String>,
    },

    /// A relevance or topic pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A sentiment lexicon could not be parsed.
    #[error("invalid lexicon: {0}")]
    Lexicon(String),

    /// Writing the tabular export failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error while exporting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request parameters were rejected before anything was sent.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
