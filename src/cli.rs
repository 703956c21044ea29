//! Command-line interface definitions for the daily news brief.
//!
//! Flags replace the interactive preferences panel: categories to include,
//! the brief date, the reading style and the output format. Credentials and
//! the summarizer endpoint can also come from the environment.

use crate::config::{DEFAULT_LIMIT, DEFAULT_SUMMARIZER_URL};
use crate::models::{OutputFormat, ReadingStyle};
use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the daily news brief.
///
/// # Examples
///
/// ```sh
/// # Today's technology news
/// daily_news_brief
///
/// # Several segments, detailed, as JSON
/// daily_news_brief -c Sports,Health --style detailed --format json
///
/// # Custom source table
/// daily_news_brief --sources ./sources.yaml -c Science
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News segments to include, in display order
    #[arg(
        short,
        long = "category",
        value_name = "NAME",
        num_args = 1..,
        value_delimiter = ',',
        default_value = "Technology"
    )]
    pub categories: Vec<String>,

    /// Date shown in the brief heading (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Reading preference
    #[arg(short, long, value_enum, default_value_t = ReadingStyle::Short)]
    pub style: ReadingStyle,

    /// Output format written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Entries taken from each feed
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Optional YAML file replacing the built-in category table
    #[arg(long)]
    pub sources: Option<String>,

    /// Hugging Face API token used for summarization
    #[arg(long, env = "HF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Summarization endpoint
    #[arg(long, env = "SUMMARIZER_URL", default_value = DEFAULT_SUMMARIZER_URL)]
    pub summarizer_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Requests in flight at once while fetching feeds or summarizing
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// Print the configured categories and exit
    #[arg(long)]
    pub list_categories: bool,
}
