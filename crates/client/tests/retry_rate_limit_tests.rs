//! Rate limit (429) retry behavior tests.
//!
//! This module tests the client's retry logic for HTTP 429 Too Many Requests
//! responses.
//!
//! # Invariants
//! - 429 responses trigger retry with exponential backoff (1s, 2s, 4s, ...)
//! - Retries stop once the budget is exhausted and surface MaxRetriesExceeded
//! - Other statuses do not retry
//!
//! # What this does NOT handle
//! - Transport errors (not retried; see error_tests.rs)

mod common;

use common::*;
use hostwatch_client::ClientError;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};

/// Minimal search page with `count` records.
fn page(count: usize, total_matching: usize) -> serde_json::Value {
    let hosts: Vec<serde_json::Value> = (0..count)
        .map(|i| serde_json::json!({"name": format!("host-{:03}.example.com", i)}))
        .collect();
    serde_json::json!({
        "total_returned": count,
        "host_list": hosts,
        "total_matching": total_matching,
    })
}

#[tokio::test(start_paused = true)]
async fn test_retry_on_429_success() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("hosts/mute_host.json");

    // Use wiremock's sequence feature to return 429 twice, then 200
    Mock::given(method("POST"))
        .and(path("/v1/host/web-01.example.com/mute"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "errors": ["Rate limited"]
        })))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/host/web-01.example.com/mute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let server_uri = mock_server.uri();
    let credentials = test_credentials();

    let result_handle = tokio::spawn({
        let client = client.clone();
        let server_uri = server_uri.clone();
        async move {
            endpoints::mute_host(
                &client,
                &server_uri,
                &credentials,
                "web-01.example.com",
                &Default::default(),
                3, // max_retries
            )
            .await
        }
    });

    assert_pending(&result_handle, "429 retry should wait for backoff").await;
    advance_and_yield(Duration::from_secs(1)).await;
    assert_pending(&result_handle, "second 429 retry should wait for backoff").await;
    advance_and_yield(Duration::from_secs(2)).await;
    let result = result_handle.await.expect("mute host task");

    // Should succeed after retries
    if let Err(ref e) = result {
        eprintln!("Mute host error: {:?}", e);
    }
    assert!(result.is_ok());
    assert_eq!(result.unwrap().action, "Muted");
}

#[tokio::test(start_paused = true)]
async fn test_retry_on_429_exhaustion() {
    let mock_server = MockServer::start().await;

    // Always return 429
    Mock::given(method("GET"))
        .and(path("/v1/hosts/totals"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "errors": ["Rate limited"]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let server_uri = mock_server.uri();
    let credentials = test_credentials();

    let result_handle = tokio::spawn({
        let client = client.clone();
        let server_uri = server_uri.clone();
        async move { endpoints::get_host_totals(&client, &server_uri, &credentials, 2).await }
    });

    assert_pending(&result_handle, "429 exhaustion should wait for backoff").await;
    advance_and_yield(Duration::from_secs(1)).await;
    assert_pending(
        &result_handle,
        "429 exhaustion should wait for second backoff",
    )
    .await;
    advance_and_yield(Duration::from_secs(2)).await;
    let result = result_handle.await.expect("get host totals task");

    // Should fail after exhausting retries
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::MaxRetriesExceeded(3))); // 2 retries + 1 initial attempt = 3 total
}

/// A 429 in the middle of a paginated search retries that page, and the walk
/// continues where it left off.
#[tokio::test(start_paused = true)]
async fn test_search_retries_rate_limited_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/hosts"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(100, 120)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/hosts"))
        .and(query_param("start", "80"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "errors": ["Rate limited"]
        })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/hosts"))
        .and(query_param("start", "80"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(40, 120)))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let server_uri = mock_server.uri();
    let credentials = test_credentials();

    let result_handle = tokio::spawn({
        let client = client.clone();
        let server_uri = server_uri.clone();
        async move { endpoints::search_hosts(&client, &server_uri, &credentials, "*", 3).await }
    });

    assert_pending(&result_handle, "rate-limited page should wait for backoff").await;
    advance_and_yield(Duration::from_secs(1)).await;
    let result = result_handle.await.expect("search hosts task");

    if let Err(ref e) = result {
        eprintln!("Search hosts error: {:?}", e);
    }
    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 140);
}
