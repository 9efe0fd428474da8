use url::Url;

/// Extracts the network location (host and explicit port) from a URL string
///
/// The host is lowercased by the URL parser; default ports are dropped.
///
/// # Examples
///
/// ```
/// use crawl_scraper::url::extract_netloc;
///
/// assert_eq!(extract_netloc("https://Example.com/path"), Some("example.com".to_string()));
/// assert_eq!(extract_netloc("http://127.0.0.1:8080/"), Some("127.0.0.1:8080".to_string()));
/// assert_eq!(extract_netloc("not a url"), None);
/// ```
pub fn extract_netloc(url_str: &str) -> Option<String> {
    let url = Url::parse(url_str).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Returns the host part of report file names for a seed URL
///
/// Dots in the network location are replaced with underscores. An
/// unparsable seed yields an empty slug.
pub fn report_host_slug(start_url: &str) -> String {
    extract_netloc(start_url)
        .map(|netloc| netloc.replace('.', "_"))
        .unwrap_or_default()
}
