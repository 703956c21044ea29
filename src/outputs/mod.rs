//! Rendering of a finished [`Brief`](crate::models::Brief).
//!
//! # Submodules
//!
//! - [`markdown`]: human-readable brief, one section per category
//! - [`json`]: the brief as a JSON document for other tools
//!
//! Both write to a string; `main` prints it to stdout.

pub mod json;
pub mod markdown;

use crate::models::{Brief, OutputFormat};

/// Render `brief` in the requested format.
///
/// # Arguments
///
/// * `brief` - The assembled brief
/// * `format` - [`OutputFormat::Markdown`] or [`OutputFormat::Json`]
///
/// # Returns
///
/// The rendered document. Only JSON serialization can fail.
pub fn render(brief: &Brief, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Markdown => Ok(markdown::brief_to_markdown(brief)),
        OutputFormat::Json => json::brief_to_json(brief),
    }
}
