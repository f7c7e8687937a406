//! Data models for Hostwatch API responses.
//!
//! This module provides types for serializing Hostwatch REST API requests
//! and deserializing responses. Types are organized by resource in
//! submodules and re-exported here for convenient access.

pub mod common;
pub mod hosts;

pub use common::ApiErrorResponse;
pub use hosts::{Host, HostActionResponse, HostMute, HostSearchResponse, HostTotals};
