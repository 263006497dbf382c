// src/updates.rs
//
// Regulatory updates: GET the news page, keep the text of the first few
// `<p>` elements. No caching or retry; errors go straight back to the caller.

use crate::core::{html, net};
use crate::errors::AppResult;

/// Text of every `<p>` element, in document order. Paragraphs that are
/// empty after stripping markup are kept, as they are on the page.
pub fn extract_paragraphs(doc: &str) -> Vec<String> {
    html::tag_blocks_ci(doc, "p")
        .into_iter()
        .map(html::strip_tags)
        .collect()
}

pub fn fetch_updates(url: &str, limit: usize) -> AppResult<Vec<String>> {
    let body = net::http_get(url)?;
    let mut paragraphs = extract_paragraphs(&body);
    logf!("Updates: {} paragraph(s) from {}", paragraphs.len(), url);
    paragraphs.truncate(limit);
    Ok(paragraphs)
}
