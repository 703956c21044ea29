//! Remote summarization client.
//!
//! Article summaries are condensed by a hosted summarization model (by
//! default Hugging Face's `facebook/bart-large-cnn`). The request is a single
//! POST with no retry; anything other than a well-formed HTTP 200 becomes a
//! [`SummarizeError`] that callers render as [`PLACEHOLDER`].
//!
//! # Architecture
//!
//! - [`Summarize`]: async text-to-summary seam used by the brief builder
//! - [`HfSummarizer`]: the HTTP implementation
//! - [`summarize_or_placeholder`]: folds failures into the placeholder text

use crate::config::SummarizerConfig;
use crate::errors::SummarizeError;
use crate::utils::{trimmed_len, truncate_for_log};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Text shown in place of a summary the service could not produce.
pub const PLACEHOLDER: &str = "Summary not available.";

/// Trait for async text summarization.
pub trait Summarize {
    /// Shorten `text`, or explain why no summary could be produced.
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

#[derive(Serialize)]
struct SummaryParameters {
    max_length: u32,
    min_length: u32,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary_text: String,
}

/// [`Summarize`] implementation backed by the Hugging Face inference API.
#[derive(Debug)]
pub struct HfSummarizer<'a> {
    client: &'a Client,
    config: &'a SummarizerConfig,
}

impl<'a> HfSummarizer<'a> {
    pub fn new(client: &'a Client, config: &'a SummarizerConfig) -> Self {
        Self { client, config }
    }
}

impl Summarize for HfSummarizer<'_> {
    /// Inputs shorter than `min_input_chars` once trimmed are returned as-is
    /// without contacting the service.
    #[instrument(level = "info", skip_all, fields(chars = trimmed_len(text)))]
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        if trimmed_len(text) < self.config.min_input_chars {
            debug!("Text too short to summarize; returning unchanged");
            return Ok(text.to_string());
        }

        let payload = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                max_length: self.config.max_length,
                min_length: self.config.min_length,
            },
        };

        let mut request = self.client.post(&self.config.endpoint).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let t0 = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Summarization request failed");
            SummarizeError::ServiceUnavailable(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                %status,
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Summarization service refused the request"
            );
            return Err(SummarizeError::ServiceUnavailable(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SummarizeError::MalformedResponse(e.to_string()))?;

        let summary = parse_summary(&body).inspect_err(|e| {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 200),
                "Summarization response did not match the expected shape"
            );
        })?;

        debug!(
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Summarization succeeded"
        );
        Ok(summary)
    }
}

/// Extract `summary_text` from a `[{"summary_text": "..."}]` body.
fn parse_summary(body: &str) -> Result<String, SummarizeError> {
    let parsed: Vec<SummaryResponse> = serde_json::from_str(body)
        .map_err(|e| SummarizeError::MalformedResponse(e.to_string()))?;

    parsed
        .into_iter()
        .next()
        .map(|r| r.summary_text)
        .ok_or_else(|| SummarizeError::MalformedResponse("empty result list".to_string()))
}

/// Summarize `text`, rendering any failure as [`PLACEHOLDER`].
pub async fn summarize_or_placeholder<S: Summarize>(summarizer: &S, text: &str) -> String {
    summarizer
        .summarize(text)
        .await
        .unwrap_or_else(|_| PLACEHOLDER.to_string())
}
