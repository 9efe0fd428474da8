use url::Url;

/// Resolves a link href against the URL of the page it appears on
///
/// Every href that the URL parser can join is resolved, including
/// fragment-only and non-HTTP references; whether the result is followed is
/// decided by the scope check afterwards. Returns `None` only when the join
/// fails.
///
/// # Examples
///
/// ```
/// use crawl_scraper::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/intro").unwrap();
/// assert_eq!(resolve_link("setup", &base), Some("https://example.com/docs/setup".to_string()));
/// assert_eq!(resolve_link("/about", &base), Some("https://example.com/about".to_string()));
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    base_url.join(href.trim()).ok().map(|url| url.to_string())
}
