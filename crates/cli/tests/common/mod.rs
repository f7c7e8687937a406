//! Shared test utilities for hostwatch integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (keys, base URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `HOSTWATCH_API_KEY` and `HOSTWATCH_APP_KEY` are set to dummy values
//!   unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `hostwatch` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Both API keys are set to dummy values to satisfy config validation.
/// - Other connection env vars are cleared to ensure no leakage from the host.
pub fn hostwatch_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hostwatch");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Satisfy configuration requirements for non-config tests
    cmd.env("HOSTWATCH_API_KEY", "test-api-key");
    cmd.env("HOSTWATCH_APP_KEY", "test-app-key");

    // Clear potential host leakage
    cmd.env_remove("HOSTWATCH_BASE_URL")
        .env_remove("HOSTWATCH_TIMEOUT")
        .env_remove("HOSTWATCH_MAX_RETRIES")
        .env_remove("HOSTWATCH_SKIP_VERIFY");

    cmd
}

/// Returns a hermetic `hostwatch` command with a specific base URL.
///
/// This is a convenience wrapper around `hostwatch_cmd()` that sets
/// `HOSTWATCH_BASE_URL` to the provided value. All other hermeticity
/// guarantees (DOTENV_DISABLED=1, cleared env vars) are preserved.
#[allow(dead_code)]
pub fn hostwatch_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = hostwatch_cmd();
    cmd.env("HOSTWATCH_BASE_URL", base_url);
    cmd
}
