//! Shared request dispatch for the Hostwatch REST API.
//!
//! This module is the single place requests leave the crate: a retry wrapper
//! for HTTP 429 rate limiting, a JSON request helper that attaches the
//! authentication headers, and a paginated driver that repeats a request
//! until the caller's paging closure signals completion.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{API_KEY_HEADER, APPLICATION_KEY_HEADER, Credentials};
use crate::error::{ClientError, Result};
use crate::models::ApiErrorResponse;

/// Maximum number of retry attempts for rate-limited requests.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Marker for requests that carry no JSON body at all.
pub const NO_BODY: Option<&()> = None;

/// Sends an HTTP request with automatic retry logic for HTTP 429 responses.
///
/// This function wraps a `reqwest::RequestBuilder` with retry logic that:
/// - Detects HTTP 429 (Too Many Requests) status codes
/// - Implements exponential backoff (1s, 2s, 4s = 2^attempt)
/// - Respects the `max_retries` parameter
/// - Logs retry attempts with `tracing::debug`
/// - Returns `MaxRetriesExceeded` error when retries are exhausted
///
/// Retry policy lives only here. The host endpoints treat every failure that
/// escapes this function as terminal.
///
/// # Arguments
///
/// * `builder` - The `reqwest::RequestBuilder` to execute
/// * `max_retries` - Maximum number of retry attempts (defaults to 3 if 0)
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when all retry attempts are exhausted.
/// Maps non-success statuses to `ClientError::ApiError` and propagates transport
/// failures as `ClientError::HttpError`.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        // Try to clone the builder for this attempt
        // On first attempt (0), we try to clone to see if retry is possible
        // On subsequent attempts, we clone again for the retry
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                // Can't clone - this is either:
                // 1. First attempt with a non-clonable builder - use it directly
                // 2. Subsequent attempt but can't clone - error out
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    return builder.send().await.map_err(ClientError::from);
                } else {
                    debug!("Cannot clone request builder for retry");
                    return Err(ClientError::MaxRetriesExceeded(attempt));
                }
            }
        };

        match attempt_builder.send().await {
            Ok(response) if response.status().as_u16() == 429 => {
                if attempt < max_retries {
                    // Calculate exponential backoff: 2^attempt seconds
                    let backoff_secs = 2u64.pow(attempt as u32);
                    debug!(
                        attempt = attempt + 1,
                        max_retries = max_retries + 1,
                        backoff_secs = backoff_secs,
                        "Rate limited (HTTP 429), retrying with exponential backoff"
                    );

                    tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                } else {
                    debug!(
                        attempts = attempt + 1,
                        "Max retries exhausted for rate-limited request"
                    );
                    return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
                }
            }
            Ok(response) => {
                if response.status().is_success() {
                    // Successful response
                    if attempt > 0 {
                        debug!(attempt = attempt + 1, "Request succeeded after retry");
                    }
                    return Ok(response);
                } else {
                    // Handle non-success status codes
                    let status = response.status().as_u16();
                    let url = response.url().to_string();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Could not read error response body".to_string());

                    // Try to parse the Hostwatch error envelope for a cleaner display
                    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                        Ok(envelope) if !envelope.errors.is_empty() => {
                            envelope.errors.join("; ")
                        }
                        _ => body,
                    };

                    return Err(ClientError::ApiError {
                        status,
                        url,
                        message,
                    });
                }
            }
            Err(e) => {
                // For non-429 errors, propagate immediately
                return Err(ClientError::from(e));
            }
        }
    }

    // This should never be reached, but handle it for completeness
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Performs one authenticated JSON request against the Hostwatch API.
///
/// Joins `base_url` (normalized, no trailing slash) with `path` (absolute,
/// query string included), attaches both key headers, JSON-encodes `body`
/// when present, and decodes the response body into `T`.
///
/// # Errors
///
/// Returns `ClientError::InvalidResponse` when the response body is not the
/// JSON shape `T` expects, plus everything `send_request_with_retry` returns.
pub async fn request_json<T, B>(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    method: Method,
    path: &str,
    body: Option<&B>,
    max_retries: usize,
) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let url = format!("{}{}", base_url, path);

    let mut builder = client
        .request(method, &url)
        .header(API_KEY_HEADER, credentials.api_key())
        .header(APPLICATION_KEY_HEADER, credentials.application_key());

    if let Some(body) = body {
        builder = builder.json(body);
    }

    let response = send_request_with_retry(builder, max_retries).await?;

    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response JSON: {}", e)))
}

/// Drives a sequence of JSON requests until the paging closure stops it.
///
/// `next_path` is called with `None` before the first request and with
/// `Some(&page)` after each decoded page; it returns the path for the next
/// request, or `None` to finish. Each decoded page is handed to `combine`
/// exactly once, in arrival order. The first failed page aborts the whole
/// sequence; pages already combined are the caller's to discard.
pub async fn request_json_paginated<T, F, C>(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    method: Method,
    mut next_path: F,
    mut combine: C,
    max_retries: usize,
) -> Result<()>
where
    T: DeserializeOwned,
    F: FnMut(Option<&T>) -> Option<String>,
    C: FnMut(T) -> Result<()>,
{
    let mut next = next_path(None);
    while let Some(path) = next {
        debug!(path = %path, "Requesting page");
        let page: T = request_json(
            client,
            base_url,
            credentials,
            method.clone(),
            &path,
            NO_BODY,
            max_retries,
        )
        .await?;

        next = next_path(Some(&page));
        combine(page)?;
    }

    Ok(())
}
