//! Category feed retrieval.
//!
//! A category resolves to an ordered list of RSS or Atom endpoints in the
//! [`SourceTable`]. Each endpoint is downloaded and parsed, its first `limit`
//! entries become [`Article`]s, and the per-endpoint lists are concatenated
//! in registration order.
//!
//! # Failure Policy
//!
//! A failing endpoint (transport error, non-success status, unreadable feed)
//! is logged and skipped. Only when every endpoint of a category fails does
//! [`ArticleFetcher::fetch`] return [`FetchError::FetchFailed`].

use crate::config::SourceTable;
use crate::errors::{FeedError, FetchError};
use crate::models::Article;
use crate::utils::strip_markup;
use feed_rs::parser;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

const UNKNOWN_SOURCE: &str = "Unknown";
const UNTITLED: &str = "Untitled";

/// Fetches the articles registered under a category.
#[derive(Debug)]
pub struct ArticleFetcher<'a> {
    client: &'a Client,
    sources: &'a SourceTable,
    concurrency: usize,
}

impl<'a> ArticleFetcher<'a> {
    /// `concurrency` bounds how many endpoints of one category are in flight.
    pub fn new(client: &'a Client, sources: &'a SourceTable, concurrency: usize) -> Self {
        Self {
            client,
            sources,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetch up to `limit` articles from each endpoint of `category`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::CategoryNotFound`] if the name is not in the table
    /// - [`FetchError::FetchFailed`] if no endpoint could be read
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, category: &str, limit: usize) -> Result<Vec<Article>, FetchError> {
        let Some(entry) = self.sources.lookup(category) else {
            warn!("Category is not in the source table");
            return Err(FetchError::CategoryNotFound(category.to_string()));
        };

        let t0 = Instant::now();
        let results: Vec<(&String, Result<Vec<Article>, FeedError>)> = stream::iter(&entry.feeds)
            .map(|url| async move { (url, self.fetch_feed(url, limit).await) })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut articles = Vec::new();
        let mut failures = Vec::new();
        for (url, result) in results {
            match result {
                Ok(mut batch) => {
                    debug!(%url, count = batch.len(), "Fetched feed");
                    articles.append(&mut batch);
                }
                Err(e) => {
                    warn!(%url, error = %e, "Feed failed; skipping");
                    failures.push(e);
                }
            }
        }

        if !failures.is_empty() && failures.len() == entry.feeds.len() {
            return Err(FetchError::FetchFailed {
                category: entry.name.clone(),
                reason: failures.iter().join("; "),
            });
        }

        info!(
            category = %entry.name,
            count = articles.len(),
            failed_feeds = failures.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched category articles"
        );
        Ok(articles)
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_feed(&self, url: &str, limit: usize) -> Result<Vec<Article>, FeedError> {
        let request_error = |source: reqwest::Error| FeedError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        parse_feed(&body, limit).map_err(|reason| FeedError::Parse {
            url: url.to_string(),
            reason,
        })
    }
}

/// Map the first `limit` entries of an RSS or Atom document to articles.
///
/// Every article carries the feed's declared title as its source name, or
/// `"Unknown"` when the feed has none. A missing entry summary becomes an
/// empty string.
///
/// # Arguments
///
/// * `body` - Raw feed document as downloaded
/// * `limit` - Maximum number of entries to keep, counted from the top
///
/// # Returns
///
/// Articles in feed order with markup stripped from their summaries, or the
/// parser's message if `body` is not a readable feed.
pub fn parse_feed(body: &[u8], limit: usize) -> Result<Vec<Article>, String> {
    let feed = parser::parse(body).map_err(|e| e.to_string())?;

    let source_name = feed
        .title
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    let articles = feed
        .entries
        .into_iter()
        .take(limit)
        .map(|entry| Article {
            title: entry
                .title
                .map(|t| t.content.trim().to_string())
                .unwrap_or_else(|| UNTITLED.to_string()),
            raw_summary: entry
                .summary
                .map(|s| strip_markup(&s.content))
                .unwrap_or_default(),
            source_name: source_name.clone(),
        })
        .collect();

    Ok(articles)
}
