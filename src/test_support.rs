//! Local HTTP fixtures standing in for feed providers and the summarizer.

use axum::Router;
use axum::http::header;
use axum::routing::{MethodRouter, get};

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A GET route answering with the given RSS document.
pub fn rss_route(xml: String) -> MethodRouter {
    get(move || {
        let xml = xml.clone();
        async move { ([(header::CONTENT_TYPE, "application/rss+xml")], xml) }
    })
}

/// Build an RSS 2.0 document. Entries are `(title, description)`.
pub fn rss(title: Option<&str>, entries: &[(&str, Option<&str>)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\"><channel>",
    );
    if let Some(title) = title {
        xml.push_str(&format!("<title>{title}</title>"));
    }
    xml.push_str("<link>https://example.com/</link><description>fixture</description>");
    for (i, (entry_title, summary)) in entries.iter().enumerate() {
        xml.push_str("<item>");
        xml.push_str(&format!("<title>{entry_title}</title>"));
        xml.push_str(&format!("<link>https://example.com/{i}</link>"));
        xml.push_str(&format!("<guid>https://example.com/{i}</guid>"));
        if let Some(summary) = summary {
            xml.push_str(&format!("<description><![CDATA[{summary}]]></description>"));
        }
        xml.push_str("</item>");
    }
    xml.push_str("</channel></rss>");
    xml
}

/// An RSS document titled `title` with `count` entries named `{prefix}-{n}`.
pub fn numbered_rss(title: &str, prefix: &str, count: usize) -> String {
    let titles: Vec<String> = (0..count).map(|n| format!("{prefix}-{n}")).collect();
    let entries: Vec<(&str, Option<&str>)> = titles
        .iter()
        .map(|t| (t.as_str(), Some("summary")))
        .collect();
    rss(Some(title), &entries)
}
