//! Hostwatch REST API client.
//!
//! This crate provides a type-safe client for the Hostwatch monitoring
//! API v1. Every request authenticates with an API key and an application
//! key sent as headers; rate-limited calls are retried with exponential
//! backoff.

mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod serde_helpers;
pub mod testing;

pub mod endpoints;

pub use auth::Credentials;
pub use client::HostwatchClient;
pub use client::builder::HostwatchClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ApiErrorResponse, Host, HostActionResponse, HostMute, HostSearchResponse, HostTotals,
};
