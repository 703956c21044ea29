//! Error types for configuration, feed retrieval, and summarization.
//!
//! Only [`ConfigError`] is fatal. Feed and summarization failures are
//! recovered by the brief builder and rendered as placeholder text.

use thiserror::Error;

/// Problems found while building the runtime [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read source table {path}: {source}")]
    ReadSources {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse source table {path}: {source}")]
    ParseSources {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Source table defines no categories")]
    NoCategories,

    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("Category '{0}' has no feeds")]
    NoFeeds(String),

    #[error("Feed URL '{url}' in category '{category}' is invalid: {reason}")]
    InvalidFeedUrl {
        category: String,
        url: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Failure of a single feed endpoint. The endpoint is skipped.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is not a readable feed: {reason}")]
    Parse { url: String, reason: String },
}

/// Outcome of fetching a whole category when no articles can be produced.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unknown category '{0}'")]
    CategoryNotFound(String),

    #[error("Every feed for '{category}' failed: {reason}")]
    FetchFailed { category: String, reason: String },
}

/// Remote summarization did not yield a summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Summarization service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Summarization service returned an unexpected body: {0}")]
    MalformedResponse(String),
}
