//! JSON rendering of the brief.
//!
//! ```json
//! {
//!   "date": "2025-05-06",
//!   "style": "short",
//!   "sections": [
//!     { "category": "Sports", "items": [{ "title": "A", "summary": "...", "source": "BBC Sport" }] },
//!     { "category": "Weather", "items": [], "error": "Unknown category 'Weather'" }
//!   ]
//! }
//! ```

use crate::models::Brief;
use tracing::{debug, instrument};

/// Serialize a [`Brief`] as pretty-printed JSON.
#[instrument(level = "debug", skip_all, fields(sections = brief.sections.len()))]
pub fn brief_to_json(brief: &Brief) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(brief)?;
    debug!(bytes = json.len(), "Rendered JSON brief");
    Ok(json)
}
