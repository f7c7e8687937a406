//! Host directory API methods for [`HostwatchClient`].
//!
//! # What this module handles:
//! - Searching the hosts facet with paginated accumulation
//! - Muting and unmuting all monitors on a host
//! - Infrastructure-wide host totals
//!
//! # What this module does NOT handle:
//! - Low-level host endpoint HTTP calls (in [`crate::endpoints::hosts`])
//! - Filter expression syntax (owned entirely by the service)

use crate::client::HostwatchClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Host, HostActionResponse, HostMute, HostTotals};

impl HostwatchClient {
    /// Search the hosts facet and return every matching host record.
    ///
    /// Fetches pages until exhaustion and appends them in arrival order.
    /// Because consecutive pages overlap, the result may contain duplicates
    /// near page boundaries; callers must not assume uniqueness. Any page
    /// failure fails the whole call with no partial result.
    pub async fn search_hosts(&self, filter: &str) -> Result<Vec<Host>> {
        endpoints::search_hosts(
            &self.http,
            &self.base_url,
            &self.credentials,
            filter,
            self.max_retries,
        )
        .await
    }

    /// Mute all monitors on the given host.
    pub async fn mute_host(&self, hostname: &str, mute: &HostMute) -> Result<HostActionResponse> {
        endpoints::mute_host(
            &self.http,
            &self.base_url,
            &self.credentials,
            hostname,
            mute,
            self.max_retries,
        )
        .await
    }

    /// Unmute all monitors on the given host.
    pub async fn unmute_host(&self, hostname: &str) -> Result<HostActionResponse> {
        endpoints::unmute_host(
            &self.http,
            &self.base_url,
            &self.credentials,
            hostname,
            self.max_retries,
        )
        .await
    }

    /// Get infrastructure-wide host totals.
    ///
    /// A count the service does not report comes back as `None` (unknown,
    /// not zero).
    pub async fn get_host_totals(&self) -> Result<HostTotals> {
        endpoints::get_host_totals(
            &self.http,
            &self.base_url,
            &self.credentials,
            self.max_retries,
        )
        .await
    }
}
