//! Integration tests for the HTTP API.

use std::net::SocketAddr;

use paperstats_core::server::{AppState, FETCH_ERROR_MESSAGE, WELCOME_MESSAGE, router};
use paperstats_core::{ListingExtractor, ScraperConfig};
use reqwest::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

mod support;
use support::fixtures::{Row, detail_page, listing_page};
use support::socket_guard::{closed_local_origin, start_mock_server_or_skip};

/// Serves the API for `origin` on an ephemeral port and returns its address.
async fn spawn_api(origin: &str) -> SocketAddr {
    let extractor = ListingExtractor::new(ScraperConfig::new(origin).unwrap()).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(AppState::new(extractor)))
            .await
            .unwrap();
    });
    addr
}

#[tokio::test]
async fn test_index_returns_welcome_message() {
    let Some(_server) = start_mock_server_or_skip().await else {
        return;
    };
    let addr = spawn_api(&closed_local_origin()).await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), WELCOME_MESSAGE);
}

#[tokio::test]
async fn test_papers_endpoint_returns_resolved_records() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[
            Row::linked("/10.1000/first", "First paper"),
            Row::linked("/10.1000/second", "Second paper"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/10.1000/first"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page("//host/doc1.pdf")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/10.1000/second"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let addr = spawn_api(&server.uri()).await;
    let response = reqwest::get(format!("http://{addr}/api/papers"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    let papers = body.as_array().unwrap();
    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0]["doi"], "10.1000/first");
    assert_eq!(papers[0]["pdfLink"], "https://host/doc1.pdf");
    assert_eq!(papers[1]["doi"], "10.1000/second");
    assert_eq!(papers[1]["pdfLink"], "404");

    let mut keys: Vec<&str> = papers[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["author", "datetime", "doi", "journal", "pdfLink", "title", "year"]
    );
}

#[tokio::test]
async fn test_papers_endpoint_listing_failure_returns_generic_error() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let addr = spawn_api(&server.uri()).await;
    let response = reqwest::get(format!("http://{addr}/api/papers"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": FETCH_ERROR_MESSAGE }));
}
