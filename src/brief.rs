//! Brief assembly.
//!
//! Categories are processed in the order the user selected them. Within a
//! category the fetched articles are summarized through an ordered, bounded
//! stream so the rendered bullets follow feed order.

use crate::api::{Summarize, summarize_or_placeholder};
use crate::config::Config;
use crate::fetcher::ArticleFetcher;
use crate::models::{Article, Brief, BriefItem, BriefSection, ReadingStyle};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// What the user asked to see.
#[derive(Debug, Clone)]
pub struct Selection {
    pub categories: Vec<String>,
    pub date: NaiveDate,
    pub style: ReadingStyle,
}

/// Fetch and summarize every selected category.
///
/// A category that cannot be fetched becomes an empty section carrying the
/// error text; summarization failures become placeholder summaries. Neither
/// stops the run.
///
/// # Arguments
///
/// * `config` - Supplies the per-endpoint article limit and concurrency
/// * `fetcher` - Resolves categories to articles
/// * `summarizer` - Condenses each article's cleaned summary
/// * `selection` - Categories in display order, the brief date and style
///
/// # Returns
///
/// A [`Brief`] with one section per selected category, in selection order.
#[instrument(level = "info", skip_all, fields(categories = selection.categories.len()))]
pub async fn build_brief<S: Summarize>(
    config: &Config,
    fetcher: &ArticleFetcher<'_>,
    summarizer: &S,
    selection: &Selection,
) -> Brief {
    let t0 = Instant::now();
    let mut sections = Vec::with_capacity(selection.categories.len());

    for category in &selection.categories {
        let name = config
            .sources
            .lookup(category)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| category.trim().to_string());

        let section = match fetcher.fetch(category, config.limit).await {
            Ok(articles) => BriefSection {
                category: name,
                items: summarize_articles(config, summarizer, articles).await,
                error: None,
            },
            Err(e) => {
                warn!(category = %name, error = %e, "No articles for category");
                BriefSection {
                    category: name,
                    items: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        };
        sections.push(section);
    }

    let brief = Brief {
        date: selection.date,
        style: selection.style,
        sections,
    };

    info!(
        articles = brief.article_count(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Brief assembled"
    );
    brief
}

async fn summarize_articles<S: Summarize>(
    config: &Config,
    summarizer: &S,
    articles: Vec<Article>,
) -> Vec<BriefItem> {
    stream::iter(articles)
        .map(|article| async move {
            let summary = summarize_or_placeholder(summarizer, &article.raw_summary).await;
            BriefItem {
                title: article.title,
                summary,
                source: article.source_name,
            }
        })
        .buffered(config.concurrency.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HfSummarizer, PLACEHOLDER};
    use crate::config::{CategorySources, SourceTable, SummarizerConfig};
    use crate::errors::SummarizeError;
    use crate::outputs::markdown::brief_to_markdown;
    use crate::test_support::{numbered_rss, rss, rss_route, serve};
    use axum::routing::post;
    use axum::{Json, Router};
    use reqwest::Client;
    use serde_json::{Value, json};

    /// Upper-cases its input; fails on inputs containing "fail".
    struct StubSummarizer;

    impl Summarize for StubSummarizer {
        async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
            if text.contains("fail") {
                Err(SummarizeError::ServiceUnavailable("stub".to_string()))
            } else {
                Ok(text.to_uppercase())
            }
        }
    }

    fn selection(categories: &[&str]) -> Selection {
        Selection {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            date: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            style: ReadingStyle::Short,
        }
    }

    fn config_for(categories: Vec<(&str, Vec<String>)>, summarizer_url: String) -> Config {
        let sources = SourceTable {
            categories: categories
                .into_iter()
                .map(|(name, feeds)| CategorySources {
                    name: name.to_string(),
                    feeds,
                })
                .collect(),
        };
        Config::new(sources, SummarizerConfig::new(summarizer_url, None))
    }

    #[tokio::test]
    async fn test_sections_follow_selection_order() {
        let app = Router::new()
            .route(
                "/health.xml",
                rss_route(rss(Some("Health Desk"), &[("H", Some("healthy"))])),
            )
            .route(
                "/politics.xml",
                rss_route(rss(
                    Some("Politics Desk"),
                    &[("P1", Some("vote")), ("P2", Some("please fail"))],
                )),
            );
        let base = serve(app).await;

        let config = config_for(
            vec![
                ("Health", vec![format!("{base}/health.xml")]),
                ("Politics", vec![format!("{base}/politics.xml")]),
            ],
            format!("{base}/unused"),
        );
        let client = Client::new();
        let fetcher = ArticleFetcher::new(&client, &config.sources, config.concurrency);

        let brief = build_brief(
            &config,
            &fetcher,
            &StubSummarizer,
            &selection(&["politics", "Weather", "Health"]),
        )
        .await;

        let names: Vec<&str> = brief.sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Politics", "Weather", "Health"]);

        let politics = &brief.sections[0];
        assert_eq!(politics.items[0].summary, "VOTE");
        assert_eq!(politics.items[1].summary, PLACEHOLDER);
        assert_eq!(politics.items[1].title, "P2");
        assert_eq!(politics.error, None);

        let weather = &brief.sections[1];
        assert!(weather.items.is_empty());
        assert_eq!(
            weather.error.as_deref(),
            Some("Unknown category 'Weather'")
        );

        assert_eq!(brief.sections[2].items[0].source, "Health Desk");
        assert_eq!(brief.article_count(), 3);
    }

    #[tokio::test]
    async fn test_summaries_keep_feed_order_under_concurrency() {
        let app = Router::new().route("/feed.xml", rss_route(numbered_rss("Desk", "n", 8)));
        let base = serve(app).await;

        let mut config = config_for(
            vec![("Business", vec![format!("{base}/feed.xml")])],
            format!("{base}/unused"),
        );
        config.limit = 8;
        config.concurrency = 4;
        let client = Client::new();
        let fetcher = ArticleFetcher::new(&client, &config.sources, config.concurrency);

        let brief = build_brief(&config, &fetcher, &StubSummarizer, &selection(&["Business"])).await;

        let titles: Vec<&str> = brief.sections[0]
            .items
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["n-0", "n-1", "n-2", "n-3", "n-4", "n-5", "n-6", "n-7"]
        );
    }

    #[tokio::test]
    async fn test_end_to_end_sports_brief() {
        let long_summary = "a long fifty-plus character summary text goes here for real";
        let app = Router::new()
            .route(
                "/sport/rss.xml",
                rss_route(rss(
                    Some("BBC Sport"),
                    &[("A", Some("short text")), ("B", Some(long_summary))],
                )),
            )
            .route(
                "/summarize",
                post(|Json(body): Json<Value>| async move {
                    let expected = "a long fifty-plus character summary text goes here for real";
                    if body["inputs"] == expected {
                        Json(json!([{ "summary_text": "Short result" }]))
                    } else {
                        Json(json!([{ "summary_text": "unexpected input" }]))
                    }
                }),
            );
        let base = serve(app).await;

        let config = config_for(
            vec![("Sports", vec![format!("{base}/sport/rss.xml")])],
            format!("{base}/summarize"),
        );
        let client = Client::new();
        let fetcher = ArticleFetcher::new(&client, &config.sources, config.concurrency);
        let summarizer = HfSummarizer::new(&client, &config.summarizer);

        let brief = build_brief(&config, &fetcher, &summarizer, &selection(&["Sports"])).await;
        let section = &brief.sections[0];
        let summaries: Vec<&str> = section.items.iter().map(|i| i.summary.as_str()).collect();
        assert_eq!(summaries, vec!["short text", "Short result"]);
        assert!(section.items.iter().all(|i| i.source == "BBC Sport"));

        let md = brief_to_markdown(&brief);
        let lines: Vec<&str> = md.lines().collect();
        let sports = lines.iter().position(|l| *l == "## Sports").unwrap();
        assert_eq!(
            &lines[sports + 1..sports + 6],
            &[
                "",
                "- **short text**",
                "  _Source: BBC Sport_",
                "- **Short result**",
                "  _Source: BBC Sport_",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_selection_produces_empty_brief() {
        let config = config_for(
            vec![("Sports", vec!["https://example.com/rss.xml".to_string()])],
            "https://example.com/summarize".to_string(),
        );
        let client = Client::new();
        let fetcher = ArticleFetcher::new(&client, &config.sources, 1);

        let brief = build_brief(&config, &fetcher, &StubSummarizer, &selection(&[])).await;
        assert!(brief.sections.is_empty());
    }
}
