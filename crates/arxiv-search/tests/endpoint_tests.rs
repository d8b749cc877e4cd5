//! Search page endpoint tests.
//!
//! Drives the router directly with `tower::ServiceExt::oneshot` while wiremock
//! stands in for the arXiv API.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_search::client::ArxivClient;
use arxiv_search::config::Config;
use arxiv_search::server::SearchServer;

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn setup_router(mock_server: &MockServer) -> Router {
    let client = ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    SearchServer::new(client, static_dir()).unwrap().router()
}

fn entry_xml(id: &str, title: &str, published: &str, authors: &[&str]) -> String {
    let authors: String =
        authors.iter().map(|a| format!("<author><name>{a}</name></author>")).collect();
    format!(
        r#"<entry>
  <id>http://arxiv.org/abs/{id}</id>
  <published>{published}</published>
  <title>{title}</title>
  <summary>  Abstract for {title}.  </summary>
  {authors}
  <category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
</entry>"#
    )
}

fn feed_xml(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <opensearch:totalResults>{}</opensearch:totalResults>
  {}
</feed>"#,
        entries.len(),
        entries.join("\n")
    )
}

async fn get(router: Router, uri: &str) -> (StatusCode, String, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

// =============================================================================
// Empty query
// =============================================================================

#[tokio::test]
async fn test_empty_query_makes_no_upstream_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, content_type, body) = get(setup_router(&mock_server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<form"));
    assert!(!body.contains("class=\"paper\""));
}

#[tokio::test]
async fn test_whitespace_query_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, _, body) = get(setup_router(&mock_server), "/?query=%20%20&cat=cs.LG").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Results for"));
}

// =============================================================================
// Results
// =============================================================================

#[tokio::test]
async fn test_results_newest_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "diffusion"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            feed_xml(&[
                entry_xml("2401.00001v1", "January Paper", "2024-01-01T00:00:00Z", &["A"]),
                entry_xml("2406.00001v1", "June Paper", "2024-06-01T00:00:00Z", &["A", "B", "C"]),
            ]),
            "application/atom+xml",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, _, body) = get(setup_router(&mock_server), "/?query=diffusion").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Results for"));
    assert_eq!(body.matches("class=\"paper\"").count(), 2);

    let june = body.find("June Paper").unwrap();
    let january = body.find("January Paper").unwrap();
    assert!(june < january, "June record should render first");

    assert!(body.contains("A, B &amp; C"));
    assert!(body.contains("June 01, 2024"));
    assert!(body.contains("Abstract for June Paper."));
}

#[tokio::test]
async fn test_categories_build_boolean_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "(cat:cs.LG OR cat:cs.AI) AND all:graph"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(feed_xml(&[]), "application/atom+xml"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, _, body) =
        get(setup_router(&mock_server), "/?query=graph&cat=cs.LG&cat=cs.AI").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No papers found."));
    assert!(body.contains(r#"value="cs.LG" checked"#));
    assert!(body.contains(r#"value="cs.AI" checked"#));
}

#[tokio::test]
async fn test_query_text_escaped_in_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(feed_xml(&[]), "application/atom+xml"),
        )
        .mount(&mock_server)
        .await;

    let (status, _, body) =
        get(setup_router(&mock_server), "/?query=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<script>alert(1)"));
    assert!(body.contains("&lt;script&gt;"));
}

// =============================================================================
// Upstream failure
// =============================================================================

#[tokio::test]
async fn test_upstream_failure_returns_500_with_escaped_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<h1>Bad Gateway</h1>"))
        .mount(&mock_server)
        .await;

    let (status, content_type, body) = get(setup_router(&mock_server), "/?query=test").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.starts_with("text/plain"));
    assert!(body.starts_with("Search failed:"));
    assert!(body.contains("502"));
    assert!(!body.contains("<h1>"));
    assert!(body.contains("&lt;h1&gt;"));
}

#[tokio::test]
async fn test_rate_limited_upstream_asks_user_to_wait() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "5"))
        .mount(&mock_server)
        .await;

    let (status, _, body) = get(setup_router(&mock_server), "/?query=test").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Search failed: arXiv is rate limiting requests."), "got {body}");
    assert!(body.contains("5s"));
}

#[tokio::test]
async fn test_repeated_query_uses_last_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "second"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(feed_xml(&[]), "application/atom+xml"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, _, body) = get(setup_router(&mock_server), "/?query=first&query=second").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Results for &ldquo;second&rdquo;"));
}

#[tokio::test]
async fn test_unreachable_upstream_returns_500() {
    // Nothing listens on the mock server once it is dropped.
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = ArxivClient::new(Config::for_testing(&uri)).unwrap();
    let router = SearchServer::new(client, static_dir()).unwrap().router();

    let (status, _, body) = get(router, "/?query=test").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Search failed:"));
}

// =============================================================================
// Auxiliary routes
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;

    let (status, _, body) = get(setup_router(&mock_server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "arxiv-search");
}

#[tokio::test]
async fn test_static_assets_served() {
    let mock_server = MockServer::start().await;
    let router = setup_router(&mock_server);

    let (status, _, body) = get(router.clone(), "/manifest.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ArXiv Search"));

    let (status, _, _) = get(router.clone(), "/favicon.ico").await;
    assert_eq!(status, StatusCode::OK);

    let (status, content_type, _) = get(router.clone(), "/static/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/css"));

    let (status, _, _) = get(router, "/static/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
