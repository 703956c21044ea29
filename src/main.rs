//! # Daily News Brief
//!
//! Fetches news for the categories a reader cares about, condenses each
//! story's summary through a hosted summarization model, and prints a
//! per-category brief.
//!
//! ## Usage
//!
//! ```sh
//! HF_API_KEY=hf_xxx daily_news_brief -c Technology,Sports --style short
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: CLI flags and environment become one [`config::Config`]
//! 2. **Fetching**: each selected category's feeds are downloaded and parsed
//! 3. **Summarizing**: every article summary goes through the remote model
//! 4. **Output**: the brief is rendered as Markdown or JSON on stdout

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::io::Write;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod brief;
mod cli;
mod config;
mod errors;
mod fetcher;
mod models;
mod outputs;
#[cfg(test)]
mod test_support;
mod utils;

use api::HfSummarizer;
use brief::{Selection, build_brief};
use cli::Cli;
use config::Config;
use fetcher::ArticleFetcher;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr, stdout carries the brief) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_news_brief starting up");

    let args = Cli::parse();
    debug!(?args.categories, ?args.style, ?args.format, "Parsed CLI arguments");

    let config = Config::from_cli(&args).await?;

    if args.list_categories {
        let mut stdout = std::io::stdout().lock();
        for name in config.sources.names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let selection = Selection {
        categories: args
            .categories
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        style: args.style,
    };
    if selection.categories.is_empty() {
        warn!("No categories selected");
    }
    info!(
        categories = ?selection.categories,
        date = %selection.date,
        limit = config.limit,
        "Building brief"
    );

    let client = config.http_client()?;
    let fetcher = ArticleFetcher::new(&client, &config.sources, config.concurrency);
    let summarizer = HfSummarizer::new(&client, &config.summarizer);

    let brief = build_brief(&config, &fetcher, &summarizer, &selection).await;
    let rendered = outputs::render(&brief, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        sections = brief.sections.len(),
        articles = brief.article_count(),
        "Execution complete"
    );

    Ok(())
}
