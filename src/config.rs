//! Runtime configuration built once at startup.
//!
//! [`Config`] bundles the category source table, the summarization endpoint
//! settings and HTTP tuning. It is constructed from the parsed [`Cli`] and
//! passed by reference to the fetcher, the summarizer and the brief builder.
//!
//! # Source Table File
//!
//! ```yaml
//! categories:
//!   - name: Technology
//!     feeds:
//!       - https://feeds.bbci.co.uk/news/technology/rss.xml
//! ```

use crate::cli::Cli;
use crate::errors::ConfigError;
use itertools::Itertools;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Hugging Face inference endpoint for `facebook/bart-large-cnn`.
pub const DEFAULT_SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Entries taken from each feed when `--limit` is not given.
pub const DEFAULT_LIMIT: usize = 5;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The feeds registered under one category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySources {
    pub name: String,
    pub feeds: Vec<String>,
}

impl CategorySources {
    fn new(name: &str, feeds: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            feeds: feeds.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Ordered mapping from category name to feed URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    pub categories: Vec<CategorySources>,
}

impl SourceTable {
    /// The table shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                CategorySources::new(
                    "Technology",
                    &[
                        "https://feeds.bbci.co.uk/news/technology/rss.xml",
                        "https://www.theverge.com/rss/index.xml",
                    ],
                ),
                CategorySources::new(
                    "Business",
                    &[
                        "https://feeds.bbci.co.uk/news/business/rss.xml",
                        "https://www.reuters.com/rssFeed/businessNews",
                    ],
                ),
                CategorySources::new("Sports", &["https://feeds.bbci.co.uk/sport/rss.xml"]),
                CategorySources::new("Health", &["https://feeds.bbci.co.uk/news/health/rss.xml"]),
                CategorySources::new(
                    "Entertainment",
                    &["https://feeds.bbci.co.uk/news/entertainment_and_arts/rss.xml"],
                ),
                CategorySources::new(
                    "Politics",
                    &["https://feeds.bbci.co.uk/news/politics/rss.xml"],
                ),
            ],
        }
    }

    /// Parse a YAML source table and validate it.
    ///
    /// # Arguments
    ///
    /// * `yaml` - Document with a top-level `categories` list of `name`/`feeds`
    /// * `path` - Where the document came from, used only in error messages
    ///
    /// # Returns
    ///
    /// The table in file order, or a [`ConfigError`] if the YAML is malformed or
    /// a category is unnamed, duplicated, empty, or lists an invalid URL.
    pub fn from_yaml(yaml: &str, path: &str) -> Result<Self, ConfigError> {
        let table: SourceTable =
            serde_yaml::from_str(yaml).map_err(|source| ConfigError::ParseSources {
                path: path.to_string(),
                source,
            })?;
        table.validate()?;
        Ok(table)
    }

    /// Read and validate a YAML source table from disk.
    #[instrument(level = "info")]
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::ReadSources {
                path: path.to_string(),
                source,
            })?;
        let table = Self::from_yaml(&yaml, path)?;
        info!(categories = table.categories.len(), "Loaded source table");
        Ok(table)
    }

    /// Check names are present and unique, and every feed is an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        if self.categories.iter().any(|c| c.name.trim().is_empty()) {
            return Err(ConfigError::EmptyCategoryName);
        }

        if let Some(dup) = self
            .categories
            .iter()
            .map(|c| c.name.trim().to_lowercase())
            .duplicates()
            .next()
        {
            return Err(ConfigError::DuplicateCategory(dup));
        }

        for category in &self.categories {
            if category.feeds.is_empty() {
                return Err(ConfigError::NoFeeds(category.name.clone()));
            }
            for feed in &category.feeds {
                check_feed_url(&category.name, feed)?;
            }
        }

        Ok(())
    }

    /// Case-insensitive lookup by category name.
    pub fn lookup(&self, name: &str) -> Option<&CategorySources> {
        let wanted = name.trim();
        self.categories
            .iter()
            .find(|c| c.name.trim().eq_ignore_ascii_case(wanted))
    }

    /// Category names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

fn check_feed_url(category: &str, feed: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidFeedUrl {
        category: category.to_string(),
        url: feed.to_string(),
        reason,
    };

    let url = Url::parse(feed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

/// Settings for the remote summarization call.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Endpoint receiving the POST request.
    pub endpoint: String,
    /// Bearer credential; requests are sent without one when absent.
    pub api_key: Option<String>,
    pub max_length: u32,
    pub min_length: u32,
    /// Trimmed inputs shorter than this many characters are returned as-is.
    pub min_input_chars: usize,
}

impl SummarizerConfig {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            max_length: 60,
            min_length: 25,
            min_input_chars: 50,
        }
    }
}

/// Everything the pipeline reads after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub sources: SourceTable,
    pub summarizer: SummarizerConfig,
    /// Entries taken from each feed.
    pub limit: usize,
    /// Requests in flight per stage.
    pub concurrency: usize,
    pub timeout: Duration,
}

impl Config {
    pub fn new(sources: SourceTable, summarizer: SummarizerConfig) -> Self {
        Self {
            sources,
            summarizer,
            limit: DEFAULT_LIMIT,
            concurrency: 4,
            timeout: Duration::from_secs(30),
        }
    }

    /// Build the configuration from parsed command-line arguments.
    #[instrument(level = "info", skip_all)]
    pub async fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let sources = match cli.sources.as_deref() {
            Some(path) => SourceTable::load(path).await?,
            None => SourceTable::builtin(),
        };

        let summarizer = SummarizerConfig::new(cli.summarizer_url.clone(), cli.api_key.clone());
        if summarizer.api_key.is_none() {
            debug!("No summarizer credential configured");
        }

        let mut config = Self::new(sources, summarizer);
        config.limit = cli.limit;
        config.concurrency = cli.concurrency.max(1);
        config.timeout = Duration::from_secs(cli.timeout_secs);
        Ok(config)
    }

    /// The HTTP client shared by feed retrieval and summarization.
    pub fn http_client(&self) -> Result<Client, ConfigError> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?)
    }
}
