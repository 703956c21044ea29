//! Small text helpers shared by the fetcher, summarizer and renderers.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and the number
/// of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Reduce a feed summary to its visible text.
///
/// Tags are dropped and entities decoded. Text nodes are concatenated as-is,
/// so inline markup inside a word leaves the word intact; block elements
/// (`p`, `br`, `li`, `div`, ...) are separated by a space. Whitespace is
/// collapsed in every case, plain-text summaries included.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_markup("i<em>Phone</em> ships"), "iPhone ships");
/// assert_eq!(strip_markup("<p>One</p><p>Two</p>"), "One Two");
/// ```
pub fn strip_markup(raw: &str) -> String {
    if !raw.contains('<') {
        return collapse_whitespace(raw);
    }
    let fragment = Html::parse_fragment(raw);
    let mut text = String::with_capacity(raw.len());
    push_visible_text(fragment.root_element(), &mut text);
    collapse_whitespace(&text)
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let block = is_block(el.name());
                if block {
                    out.push(' ');
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    push_visible_text(child_el, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "br"
            | "div"
            | "li"
            | "ul"
            | "ol"
            | "blockquote"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "tr"
            | "td"
            | "hr"
            | "figure"
            | "figcaption"
    )
}

/// Replace every run of whitespace with one space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Character count of `text` once surrounding whitespace is removed.
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
