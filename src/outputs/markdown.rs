//! Markdown rendering of the brief.
//!
//! ```text
//! # Your Personalized News Brief: 06 May 2025
//!
//! ## Sports
//!
//! - **short text**
//!   _Source: BBC Sport_
//!
//! ---
//!
//! ## Weather
//!
//! No articles found.
//! ```

use crate::models::{Brief, BriefItem, ReadingStyle};
use crate::utils::collapse_whitespace;
use std::fmt::Write;
use tracing::{debug, instrument};

const NO_ARTICLES: &str = "No articles found.";
const NO_SELECTION: &str = "Please select at least one category.";

/// Convert a [`Brief`] to Markdown.
///
/// Sections with articles end with a `---` divider; empty sections show a
/// single "No articles found." line instead.
#[instrument(level = "debug", skip_all, fields(sections = brief.sections.len()))]
pub fn brief_to_markdown(brief: &Brief) -> String {
    let mut md = String::new();

    writeln!(
        md,
        "# Your Personalized News Brief: {}\n",
        brief.date.format("%d %b %Y")
    )
    .unwrap();

    if brief.sections.is_empty() {
        writeln!(md, "{NO_SELECTION}").unwrap();
        return md;
    }

    for section in &brief.sections {
        writeln!(md, "## {}\n", section.category).unwrap();

        if section.items.is_empty() {
            writeln!(md, "{NO_ARTICLES}\n").unwrap();
            continue;
        }

        for item in &section.items {
            write_item(&mut md, item, brief.style);
        }
        writeln!(md, "\n---\n").unwrap();
    }

    debug!(bytes = md.len(), "Rendered Markdown brief");
    md
}

fn write_item(md: &mut String, item: &BriefItem, style: ReadingStyle) {
    match style {
        ReadingStyle::Short => {
            writeln!(md, "- **{}**", inline(&item.summary)).unwrap();
        }
        ReadingStyle::Detailed => {
            writeln!(md, "- **{}**", inline(&item.title)).unwrap();
            writeln!(md, "  {}", inline(&item.summary)).unwrap();
        }
    }
    writeln!(md, "  _Source: {}_", inline(&item.source)).unwrap();
}

/// Fit feed or model text on one line inside emphasis markers.
fn inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in collapse_whitespace(text).chars() {
        if matches!(c, '*' | '_' | '`' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
