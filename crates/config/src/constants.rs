//! Centralized constants for the Hostwatch workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default base URL for the hosted Hostwatch API.
pub const DEFAULT_BASE_URL: &str = "https://api.hostwatch.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed number of retries for failed requests.
pub const MAX_MAX_RETRIES: usize = 10;
