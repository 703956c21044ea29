//! Data models for feed articles and the rendered brief.
//!
//! - [`Article`]: one feed entry as fetched, before summarization
//! - [`Brief`]: the summarized articles for every selected category
//! - [`ReadingStyle`] and [`OutputFormat`]: presentation choices from the CLI

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single feed entry mapped to the fields the brief needs.
///
/// Articles are produced by the fetcher and consumed by one brief build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The entry title.
    pub title: String,
    /// The entry's own summary text, before remote summarization.
    pub raw_summary: String,
    /// The declared title of the feed the entry came from.
    pub source_name: String,
}

/// How much of each article the rendered brief shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStyle {
    /// Summary and source only.
    #[default]
    Short,
    /// Title, summary and source.
    Detailed,
}

/// Format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// One summarized article in a [`BriefSection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefItem {
    pub title: String,
    pub summary: String,
    pub source: String,
}

/// The summarized articles of a single category.
///
/// An empty `items` list renders as "No articles found."; `error` carries
/// the reason when the category could not be fetched at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefSection {
    pub category: String,
    pub items: Vec<BriefItem>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// Everything rendered for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    /// Display date; it does not filter feed entries.
    pub date: NaiveDate,
    pub style: ReadingStyle,
    pub sections: Vec<BriefSection>,
}

impl Brief {
    /// Total number of summarized articles across all sections.
    pub fn article_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
