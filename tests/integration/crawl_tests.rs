//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use crawl_scraper::config::CrawlConfig;
use crawl_scraper::crawler::{crawl, Crawler, PageResult};
use crawl_scraper::output::read_json_report;
use crawl_scraper::state::EngineState;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a fast test configuration for the given seed
fn create_test_config(seed: &str, max_depth: u32, max_concurrency: usize) -> CrawlConfig {
    CrawlConfig {
        max_depth,
        max_concurrency,
        delay_secs: 0.0,
        timeout_secs: 5.0,
        ..CrawlConfig::with_start_url(seed)
    }
}

/// Builds a small HTML page with a title and links
fn html_page(title: &str, links: &[String]) -> String {
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}">{}</a>"#, link, link))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, anchors
    )
}

/// Mounts a GET mock for `route` serving an HTML page
async fn mount_page(server: &MockServer, route: &str, title: &str, links: &[String]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page(title, links))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn run(config: CrawlConfig) -> Vec<PageResult> {
    let mut crawler = Crawler::new(config);
    let results = crawler.run().await.expect("Crawl failed");
    assert_eq!(crawler.state(), EngineState::Done);
    results
}

fn find<'a>(results: &'a [PageResult], url: &str) -> &'a PageResult {
    results
        .iter()
        .find(|r| r.url == url)
        .unwrap_or_else(|| panic!("{} not in results: {:?}", url, results))
}

fn assert_unique_urls(results: &[PageResult]) {
    let unique: HashSet<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(unique.len(), results.len(), "duplicate URLs: {:?}", results);
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        "Home",
        &[format!("{}/page1", base_url), "/page2".to_string()],
    )
    .await;
    mount_page(&mock_server, "/page1", "Page 1", &[]).await;
    mount_page(&mock_server, "/page2", "Page 2", &[]).await;

    let seed = format!("{}/", base_url);
    let results = run(create_test_config(&seed, 2, 5)).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], PageResult::new(seed.as_str(), "Home", 0));
    assert_eq!(
        find(&results, &format!("{}/page1", base_url)),
        &PageResult::new(format!("{}/page1", base_url), "Page 1", 1)
    );
    assert_eq!(find(&results, &format!("{}/page2", base_url)).title, "Page 2");
}

#[tokio::test]
async fn test_other_origin_links_are_not_followed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        "Seed",
        &[
            format!("{}/a", base_url),
            "https://other.test/b".to_string(),
        ],
    )
    .await;
    mount_page(&mock_server, "/a", "A", &[]).await;

    let seed = format!("{}/", base_url);
    let results = run(create_test_config(&seed, 1, 5)).await;

    assert_eq!(
        results,
        vec![
            PageResult::new(seed.as_str(), "Seed", 0),
            PageResult::new(format!("{}/a", base_url), "A", 1),
        ]
    );
}

#[tokio::test]
async fn test_cyclic_links_terminate() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let seed = format!("{}/", base_url);
    let a = format!("{}/a", base_url);
    let b = format!("{}/b", base_url);

    mount_page(&mock_server, "/", "Root", &[a.clone()]).await;

    // A -> B -> A, each page fetched exactly once
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("A", &[b.clone()])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("B", &[a.clone()])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&seed, 50, 5);
    let results = tokio::time::timeout(Duration::from_secs(30), run(config))
        .await
        .expect("cyclic crawl did not terminate");

    assert_eq!(
        results,
        vec![
            PageResult::new(seed.as_str(), "Root", 0),
            PageResult::new(a, "A", 1),
            PageResult::new(b, "B", 2),
        ]
    );
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Chain: / -> level1 -> level2 -> level3
    mount_page(&mock_server, "/", "Root", &[format!("{}/level1", base_url)]).await;
    mount_page(&mock_server, "/level1", "Level 1", &[format!("{}/level2", base_url)]).await;
    mount_page(&mock_server, "/level2", "Level 2", &[format!("{}/level3", base_url)]).await;

    // Wiremock verifies expect(0) when the mock server drops
    Mock::given(method("GET"))
        .and(path("/level3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("Level 3", &[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let results = run(create_test_config(&format!("{}/", base_url), 2, 5)).await;

    let depths: Vec<u32> = results.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 2]);
    assert!(results.iter().all(|r| r.depth <= 2));
}

#[tokio::test]
async fn test_depth_zero_visits_only_seed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "Root", &[format!("{}/child", base_url)]).await;
    Mock::given(method("GET"))
        .and(path("/child"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let results = run(create_test_config(&format!("{}/", base_url), 0, 5)).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].depth, 0);
}

#[tokio::test]
async fn test_sequential_dispatch_follows_frontier_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let url = |p: &str| format!("{}{}", base_url, p);

    mount_page(&mock_server, "/", "Root", &[url("/c"), url("/a"), url("/b")]).await;
    mount_page(&mock_server, "/c", "C", &[url("/c/1"), url("/a")]).await;
    mount_page(&mock_server, "/a", "A", &[url("/a/1")]).await;
    mount_page(&mock_server, "/b", "B", &[url("/b/1"), url("/c/1")]).await;
    mount_page(&mock_server, "/c/1", "C1", &[]).await;
    mount_page(&mock_server, "/a/1", "A1", &[]).await;
    mount_page(&mock_server, "/b/1", "B1", &[]).await;

    let results = run(create_test_config(&url("/"), 3, 1)).await;

    let visited: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    let expected = vec![
        url("/"),
        url("/c"),
        url("/a"),
        url("/b"),
        url("/c/1"),
        url("/a/1"),
        url("/b/1"),
    ];
    assert_eq!(visited, expected.iter().map(String::as_str).collect::<Vec<_>>());

    let depths: Vec<u32> = results.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 1, 1, 2, 2, 2]);
}

#[tokio::test]
async fn test_depth_is_shortest_hop_count() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let url = |p: &str| format!("{}{}", base_url, p);

    // /b is reachable in one hop (seed -> b) and in two (seed -> a -> b)
    mount_page(&mock_server, "/", "Root", &[url("/a"), url("/b")]).await;
    mount_page(&mock_server, "/a", "A", &[url("/b"), url("/a/deep")]).await;
    mount_page(&mock_server, "/b", "B", &[url("/")]).await;
    mount_page(&mock_server, "/a/deep", "Deep", &[]).await;

    let results = run(create_test_config(&url("/"), 5, 4)).await;

    assert_unique_urls(&results);
    assert_eq!(results.len(), 4);
    assert_eq!(find(&results, &url("/")).depth, 0);
    assert_eq!(find(&results, &url("/a")).depth, 1);
    assert_eq!(find(&results, &url("/b")).depth, 1);
    assert_eq!(find(&results, &url("/a/deep")).depth, 2);
}

#[tokio::test]
async fn test_shared_link_fetched_once_across_batch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let url = |p: &str| format!("{}{}", base_url, p);

    mount_page(&mock_server, "/", "Root", &[url("/a"), url("/b")]).await;
    mount_page(&mock_server, "/a", "A", &[url("/shared")]).await;
    mount_page(&mock_server, "/b", "B", &[url("/shared")]).await;
    Mock::given(method("GET"))
        .and(path("/shared"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("Shared", &[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = run(create_test_config(&url("/"), 3, 10)).await;

    assert_unique_urls(&results);
    assert_eq!(results.len(), 4);
    assert_eq!(find(&results, &url("/shared")).depth, 2);
}

#[tokio::test]
async fn test_failed_fetch_records_empty_title_and_stops_branch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "Root", &[format!("{}/slow", base_url)]).await;

    // Answers after the client timeout; its link must never be followed
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Slow", &[format!("{}/hidden", base_url)]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = CrawlConfig {
        timeout_secs: 0.5,
        ..create_test_config(&format!("{}/", base_url), 3, 5)
    };
    let results = run(config).await;

    assert_eq!(results.len(), 2);
    assert_eq!(
        find(&results, &format!("{}/slow", base_url)),
        &PageResult::new(format!("{}/slow", base_url), "", 1)
    );
}

#[tokio::test]
async fn test_error_status_page_keeps_its_title() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "Root", &[format!("{}/gone", base_url)]).await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(html_page("Not Found", &[])),
        )
        .mount(&mock_server)
        .await;

    let results = run(create_test_config(&format!("{}/", base_url), 1, 5)).await;

    assert_eq!(find(&results, &format!("{}/gone", base_url)).title, "Not Found");
}

#[tokio::test]
async fn test_prefix_scope_is_literal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let url = |p: &str| format!("{}{}", base_url, p);

    mount_page(
        &mock_server,
        "/docs",
        "Docs",
        &[url("/docs/intro"), url("/docs-old"), url("/blog")],
    )
    .await;
    mount_page(&mock_server, "/docs/intro", "Intro", &[]).await;
    mount_page(&mock_server, "/docs-old", "Old Docs", &[]).await;
    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let results = run(create_test_config(&url("/docs"), 2, 5)).await;

    let visited: HashSet<&str> = results.iter().map(|r| r.url.as_str()).collect();
    let expected_docs = url("/docs");
    let expected_intro = url("/docs/intro");
    let expected_old = url("/docs-old");
    let expected: HashSet<&str> = [
        expected_docs.as_str(),
        expected_intro.as_str(),
        expected_old.as_str(),
    ]
    .into_iter()
    .collect();
    assert_eq!(visited, expected);
}

#[tokio::test]
async fn test_uppercase_seed_still_follows_its_links() {
    let mock_server = MockServer::start().await;
    let port = mock_server.address().port();

    mount_page(&mock_server, "/", "Home", &["/a".to_string()]).await;
    mount_page(&mock_server, "/a", "A", &[]).await;

    for (seed, host) in [
        (format!("HTTP://127.0.0.1:{}/", port), "127.0.0.1"),
        (format!("http://LOCALHOST:{}/", port), "localhost"),
    ] {
        let results = run(create_test_config(&seed, 1, 5)).await;

        let visited: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            visited,
            vec![
                format!("http://{}:{}/", host, port),
                format!("http://{}:{}/a", host, port),
            ],
            "seed {}",
            seed
        );
    }
}

#[tokio::test]
async fn test_delay_applies_per_page_within_batch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let url = |p: &str| format!("{}{}", base_url, p);

    mount_page(&mock_server, "/", "Root", &[url("/a"), url("/b"), url("/c")]).await;
    mount_page(&mock_server, "/a", "A", &[]).await;
    mount_page(&mock_server, "/b", "B", &[]).await;
    mount_page(&mock_server, "/c", "C", &[]).await;

    let config = CrawlConfig {
        delay_secs: 0.3,
        ..create_test_config(&url("/"), 1, 3)
    };

    let started = Instant::now();
    let results = run(config).await;
    let elapsed = started.elapsed();

    // Two batches, each pausing once in parallel; a serial pause per page would take 1.2s
    assert_eq!(results.len(), 4);
    assert!(elapsed >= Duration::from_millis(600), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(1100), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_ignore_robots_flag_is_inert() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // robots.txt is never requested, and its rules are never applied
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /"))
        .expect(0)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", "Home", &[format!("{}/admin", base_url)]).await;
    mount_page(&mock_server, "/admin", "Admin", &[]).await;

    for ignore_robots in [false, true] {
        let config = CrawlConfig {
            ignore_robots,
            ..create_test_config(&format!("{}/", base_url), 1, 5)
        };
        let results = run(config).await;
        assert_eq!(results.len(), 2, "ignore_robots = {}", ignore_robots);
    }
}

#[tokio::test]
async fn test_progress_counts_dispatched_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        "Home",
        &[format!("{}/a", base_url), format!("{}/missing", base_url)],
    )
    .await;
    mount_page(&mock_server, "/a", "A", &[]).await;

    let mut crawler = Crawler::new(create_test_config(&format!("{}/", base_url), 2, 5));
    let progress = crawler.progress();
    let results = crawler.run().await.expect("Crawl failed");

    // Unmatched routes get an empty 404 from wiremock and still count as found
    assert_eq!(results.len(), 3);
    assert_eq!(progress.pages_visited(), 3);
    assert_eq!(progress.pages_queued(), 0);
    assert_eq!(find(&results, &format!("{}/missing", base_url)).title, "");
}

#[tokio::test]
async fn test_crawl_writes_all_reports() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "Home, sweet home", &[format!("{}/a", base_url)]).await;
    mount_page(&mock_server, "/a", "A", &[]).await;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let prefix = dir.path().join("hasil");
    let config = CrawlConfig {
        output_prefix: prefix.to_str().expect("utf-8 path").to_string(),
        ..create_test_config(&format!("{}/", base_url), 1, 5)
    };

    let report = crawl(config).await.expect("Crawl failed");

    let host = url::Url::parse(&base_url).expect("Failed to parse base URL");
    let slug = format!(
        "{}:{}",
        host.host_str().expect("host").replace('.', "_"),
        host.port().expect("port")
    );
    let base = dir.path().join(format!("hasil_report_{}", slug));

    assert_eq!(report.files.txt, base.with_extension("txt"));
    assert_eq!(report.files.csv, base.with_extension("csv"));
    assert_eq!(report.files.json, base.with_extension("json"));

    let txt = std::fs::read_to_string(&report.files.txt).expect("txt report");
    assert_eq!(txt.lines().count(), 2);
    assert!(txt.starts_with(&format!("{}/\tHome, sweet home\t0\n", base_url)));

    let csv = std::fs::read_to_string(&report.files.csv).expect("csv report");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("url,title,depth"));
    assert_eq!(
        lines.next(),
        Some(format!("{}/,\"Home, sweet home\",0", base_url).as_str())
    );

    let parsed = read_json_report(&report.files.json).expect("json report");
    assert_eq!(parsed, report.results);

    assert_eq!(report.summary.total_pages, 2);
    assert_eq!(report.summary.titled_pages, 2);
}
