//! Host directory endpoints.

use reqwest::{Client, Method};
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{NO_BODY, request_json, request_json_paginated};
use crate::error::Result;
use crate::models::{Host, HostActionResponse, HostMute, HostSearchResponse, HostTotals};

/// Records per full page; the service never returns more.
const PAGE_LIMIT: usize = 100;

/// Offset advance after a full page. Less than `PAGE_LIMIT` on purpose: the
/// 20-record overlap absorbs result-set drift between fetches, at the cost of
/// possible duplicates near page boundaries.
const PAGE_ADVANCE: usize = 80;

/// Search the hosts facet and return every matching host record.
///
/// The filter expression goes into the query string exactly as provided; its
/// syntax is owned by the service. Pages are fetched until one comes back
/// with fewer than 100 records and appended in arrival order. Because
/// consecutive pages overlap by 20 records, the result may contain
/// duplicates near page boundaries; callers must not assume uniqueness.
///
/// Any page failure fails the whole call and discards pages already fetched.
pub async fn search_hosts(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    filter: &str,
    max_retries: usize,
) -> Result<Vec<Host>> {
    let mut start = 0usize;
    let mut hosts: Vec<Host> = Vec::new();

    request_json_paginated(
        client,
        base_url,
        credentials,
        Method::GET,
        |page: Option<&HostSearchResponse>| {
            match page {
                None => start = 0,
                Some(page) if page.total_returned == PAGE_LIMIT => start += PAGE_ADVANCE,
                Some(_) => return None,
            }
            Some(format!("/v1/hosts?filter={}&start={}", filter, start))
        },
        |page: HostSearchResponse| {
            hosts.extend(page.host_list);
            Ok(())
        },
        max_retries,
    )
    .await?;

    debug!(filter = %filter, hosts = hosts.len(), "Host search complete");
    Ok(hosts)
}

/// Mute all monitors on the given host.
///
/// Omitted directive fields are absent from the request body. The service
/// decides what values are acceptable; nothing is validated locally.
pub async fn mute_host(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    hostname: &str,
    mute: &HostMute,
    max_retries: usize,
) -> Result<HostActionResponse> {
    let path = format!("/v1/host/{}/mute", encode_path_segment(hostname));

    request_json(
        client,
        base_url,
        credentials,
        Method::POST,
        &path,
        Some(mute),
        max_retries,
    )
    .await
}

/// Unmute all monitors on the given host. Sends no request body.
pub async fn unmute_host(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    hostname: &str,
    max_retries: usize,
) -> Result<HostActionResponse> {
    let path = format!("/v1/host/{}/unmute", encode_path_segment(hostname));

    request_json(
        client,
        base_url,
        credentials,
        Method::POST,
        &path,
        NO_BODY,
        max_retries,
    )
    .await
}

/// Get infrastructure-wide host totals.
///
/// Counts the service does not report come back as `None`; they are unknown,
/// not zero. Nothing is computed or verified locally.
pub async fn get_host_totals(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    max_retries: usize,
) -> Result<HostTotals> {
    request_json(
        client,
        base_url,
        credentials,
        Method::GET,
        "/v1/hosts/totals",
        NO_BODY,
        max_retries,
    )
    .await
}
