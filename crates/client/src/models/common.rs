//! Common types shared across Hostwatch API models.
//!
//! This module contains types used by multiple resource modules and by the
//! transport layer. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

/// The Hostwatch error envelope.
///
/// Non-success responses usually carry `{"errors": ["...", ...]}`. The
/// transport layer parses this for readable error messages and falls back to
/// the raw body when the envelope is absent.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiErrorResponse {
    pub errors: Vec<String>,
}
