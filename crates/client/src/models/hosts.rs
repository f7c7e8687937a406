//! Host models for the Hostwatch host directory API.
//!
//! This module contains the host record returned by search, the mute
//! directive sent to the service, and the responses for mute/unmute and
//! infrastructure totals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A host known to Hostwatch.
///
/// Read-only projection of what the service knows about one host at search
/// time. Responses are sparse; any field the service omits decodes to its
/// zero value.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Host {
    #[serde(default)]
    pub name: String,
    /// Whether the host has reported within the service's "up" window
    /// (the past two hours).
    #[serde(default)]
    pub up: bool,
    /// Whether monitors on this host are currently muted.
    #[serde(default)]
    pub is_muted: bool,
    /// Unix timestamp of the last received report.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::i64_from_string_or_number"
    )]
    pub last_reported_time: i64,
    #[serde(default)]
    pub apps: Vec<String>,
    /// Tags grouped by the integration that reported them.
    #[serde(default)]
    pub tags_by_source: HashMap<String, Vec<String>>,
    /// Cloud-provider display name, when the host runs on AWS.
    #[serde(default)]
    pub aws_name: String,
    /// Free-form snapshot metrics (cpu, iowait, load, ...).
    #[serde(default)]
    pub metrics: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub sources: Vec<String>,
    /// Free-form agent and platform metadata.
    #[serde(default)]
    pub meta: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub host_name: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::i64_from_string_or_number"
    )]
    pub id: i64,
    /// Alternate names the service has folded into this host.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// One page of a host search.
#[derive(Debug, Deserialize, Clone)]
pub struct HostSearchResponse {
    /// Number of records in this page. The service caps a page at 100;
    /// a full page means more records may follow.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub total_returned: usize,
    #[serde(default)]
    pub host_list: Vec<Host>,
    /// Number of records matching the filter across all pages.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub total_matching: usize,
}

/// A mute directive for a host.
///
/// Every field is optional and omitted fields are absent from the request
/// body, not sent as defaults. The service is the sole authority on
/// acceptable values; nothing is validated locally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostMute {
    /// Note attached to the mute, shown alongside the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Unix timestamp (as a string) at which the mute expires.
    #[serde(rename = "end", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Replace an existing mute instead of rejecting the request.
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_existing: Option<bool>,
}

/// Response to a host mute or unmute request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HostActionResponse {
    pub action: String,
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Infrastructure-wide host counts.
///
/// `total_up` counts hosts that reported within the past two hours,
/// `total_active` within the past hour, both as defined by the service.
/// A missing count means the service did not report it, not that it is zero.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HostTotals {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_i64_from_string_or_number"
    )]
    pub total_up: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_i64_from_string_or_number"
    )]
    pub total_active: Option<i64>,
}
