//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → page requests → formatted lines

use gcli::http::{HttpClient, HttpClientConfig};
use gcli::search::HttpPageFetcher;
use gcli::{
    Credentials, Error, FormattedLine, ImageFilters, ImageType, LineFormat, RequestTemplate,
    RunSummary, SearchConfig, SearchConfigBuilder, SearchEngine, WriterSink,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/customsearch/v1";

// ============================================================================
// Helpers
// ============================================================================

fn builder(server: &MockServer) -> SearchConfigBuilder {
    SearchConfig::builder()
        .terms(["rust", "tokio"])
        .endpoint(format!("{}{SEARCH_PATH}", server.uri()))
        .timeout(Duration::from_secs(2))
}

fn engine(config: SearchConfig) -> SearchEngine {
    let config = Arc::new(config);
    let template = RequestTemplate::new(&config, &Credentials::new("test-key", "test-cx"));
    let client = HttpClient::with_config(
        HttpClientConfig::builder().timeout(config.timeout).build(),
    )
    .unwrap();
    SearchEngine::new(config, template, Arc::new(HttpPageFetcher::new(client)))
}

fn page_body(offset: u32, count: u32) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            let n = offset + i;
            json!({
                "title": format!("Result {n}"),
                "link": format!("https://example.com/{n}"),
                "snippet": format!("Snippet\nfor {n}")
            })
        })
        .collect();
    json!({ "kind": "customsearch#search", "items": items })
}

async fn mount_page(server: &MockServer, offset: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", (offset + 1).to_string()))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn run(engine: &SearchEngine) -> (Vec<String>, RunSummary) {
    let (lines, summary) = engine.collect().await.unwrap();
    let mut lines: Vec<String> = lines.into_iter().map(FormattedLine::into_string).collect();
    lines.sort();
    (lines, summary)
}

// ============================================================================
// End-to-end Tests
// ============================================================================

#[tokio::test]
async fn test_single_page_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("key", "test-key"))
        .and(query_param("cx", "test-cx"))
        .and(query_param("q", "rust tokio"))
        .and(query_param("safe", "off"))
        .and(query_param("start", "1"))
        .and(query_param("num", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = engine(builder(&server).max_results(5).build().unwrap());
    let (lines, summary) = run(&engine).await;

    assert_eq!(
        lines,
        vec![
            "Result 0 https://example.com/0",
            "Result 1 https://example.com/1",
            "Result 2 https://example.com/2",
        ]
    );
    assert!(summary.is_complete());
    assert_eq!(summary.lines_written, 3);
}

#[tokio::test]
async fn test_failed_page_does_not_block_others() {
    let server = MockServer::start().await;
    mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page_body(0, 10))).await;
    mount_page(&server, 10, ResponseTemplate::new(200).set_body_json(page_body(10, 10))).await;
    mount_page(
        &server,
        20,
        ResponseTemplate::new(403).set_body_string("quota exceeded"),
    )
    .await;

    let engine = engine(builder(&server).max_results(25).build().unwrap());
    let (lines, summary) = run(&engine).await;

    let mut expected: Vec<String> = (0..20)
        .map(|n| format!("Result {n} https://example.com/{n}"))
        .collect();
    expected.sort();
    assert_eq!(lines, expected);
    assert_eq!(summary.pages_requested, 3);
    assert_eq!(summary.pages_succeeded, 2);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].offset, 20);
    assert!(matches!(
        summary.failures[0].error,
        Error::HttpStatus { status: 403, ref body } if body == "quota exceeded"
    ));
}

#[tokio::test]
async fn test_undecodable_page_is_skipped() {
    let server = MockServer::start().await;
    mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page_body(0, 2))).await;
    mount_page(&server, 10, ResponseTemplate::new(200).set_body_string("<html>")).await;

    let engine = engine(builder(&server).max_results(10).build().unwrap());
    let (lines, summary) = run(&engine).await;

    assert_eq!(lines.len(), 2);
    assert!(matches!(summary.failures[0].error, Error::Decode { .. }));
}

#[tokio::test]
async fn test_timeout_is_a_page_failure() {
    let server = MockServer::start().await;
    mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page_body(0, 1))).await;
    mount_page(
        &server,
        10,
        ResponseTemplate::new(200)
            .set_body_json(page_body(10, 1))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let engine = engine(builder(&server).max_results(10).build().unwrap());
    let (lines, summary) = run(&engine).await;

    assert_eq!(lines, vec!["Result 0 https://example.com/0"]);
    assert!(matches!(summary.failures[0].error, Error::Timeout { .. }));
}

#[tokio::test]
async fn test_every_page_requested_once() {
    let server = MockServer::start().await;
    for offset in (0..=50).step_by(10) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("start", (offset + 1).to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(offset, 10)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let engine = engine(builder(&server).build().unwrap());
    let (lines, summary) = run(&engine).await;

    assert_eq!(lines.len(), 60);
    assert_eq!(summary.pages_requested, 6);
    assert!(summary.is_complete());
    server.verify().await;
}

#[tokio::test]
async fn test_image_search_with_snippets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("searchType", "image"))
        .and(query_param("imgType", "photo"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "title": "Ferris",
                    "link": "https://rustacean.net/ferris.png",
                    "snippet": "Ferris\nthe crab",
                    "image": {
                        "contextLink": "https://rustacean.net/",
                        "thumbnailLink": "https://tbn.example/ferris"
                    }
                },
                { "title": "Plain", "link": "https://plain.example/" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = builder(&server)
        .max_results(0)
        .image_search(true)
        .image_filters(ImageFilters {
            image_type: Some(ImageType::Photo),
            ..ImageFilters::default()
        })
        .include_snippet(true)
        .build()
        .unwrap();
    let (lines, _) = run(&engine(config)).await;

    assert_eq!(
        lines,
        vec![
            "Ferris https://rustacean.net/ferris.png Ferris the crab https://rustacean.net/ https://tbn.example/ferris",
            "Plain https://plain.example/",
        ]
    );
}

#[tokio::test]
async fn test_json_lines_to_writer() {
    let server = MockServer::start().await;
    mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page_body(0, 2))).await;

    let config = builder(&server)
        .max_results(0)
        .format(LineFormat::Json)
        .build()
        .unwrap();
    let outcome = engine(config)
        .run(WriterSink::new(Vec::new()))
        .await
        .unwrap();

    let written = String::from_utf8(outcome.sink.into_inner()).unwrap();
    let mut values: Vec<Value> = written
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    values.sort_by_key(|v| v["title"].as_str().unwrap_or_default().to_string());

    assert_eq!(
        values,
        vec![
            json!({"title": "Result 0", "link": "https://example.com/0"}),
            json!({"title": "Result 1", "link": "https://example.com/1"}),
        ]
    );
}
