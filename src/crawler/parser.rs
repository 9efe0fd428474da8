//! HTML parser for extracting the page title and in-scope links
//!
//! Parsing is error-tolerant: malformed markup degrades to whatever the HTML5
//! parser can recover, and an empty or non-HTML body simply yields an empty
//! title and no links.

use crate::url::{is_in_scope, resolve_link};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Trimmed text of the first `<title>` element, empty if absent
    pub title: String,

    /// Absolute in-scope links, first occurrence order, no duplicates
    pub links: Vec<String>,
}

/// Parses HTML content and extracts the title and the followable links
///
/// Every `a[href]` is resolved against `base_url` and kept only if the
/// resolved string starts with `start_url` (see [`is_in_scope`]). If
/// `base_url` cannot be parsed no links are returned.
///
/// # Example
///
/// ```
/// use crawl_scraper::crawler::extract_page;
///
/// let html = r#"<html><head><title> Test </title></head>
///     <body><a href="/page">In</a><a href="https://elsewhere.test/">Out</a></body></html>"#;
/// let page = extract_page(html, "https://example.com/", "https://example.com/");
/// assert_eq!(page.title, "Test");
/// assert_eq!(page.links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn extract_page(html: &str, base_url: &str, start_url: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let links = match Url::parse(base_url) {
        Ok(base) => extract_links(&document, &base, start_url),
        Err(e) => {
            tracing::debug!("Cannot resolve links against {}: {}", base_url, e);
            Vec::new()
        }
    };

    ExtractedPage { title, links }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extracts all in-scope links from the HTML document
fn extract_links(document: &Html, base_url: &Url, start_url: &str) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .filter(|link| is_in_scope(link, start_url))
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
