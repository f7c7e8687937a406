//! Test data generators using the fake crate.
//!
//! Provides configurable generators for realistic Hostwatch host data:
//! single host records, full search pages, and sparse records that exercise
//! tolerant decoding.

use fake::Fake;
use fake::faker::internet::en::IPv4;
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;

/// Configuration for field omission in generated host records.
///
/// Hostwatch search responses are sparse in practice; generators can mimic
/// that by dropping optional fields with a configured probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sparsity {
    /// Every field is present
    Full,
    /// Some fields missing (15% chance per field)
    Sparse,
    /// Most optional fields missing (50% chance per field)
    Dense,
    /// Custom percentage (0-100)
    Percent(u8),
}

impl Sparsity {
    /// Returns true if a field should be omitted based on the configured probability.
    fn should_omit<R: Rng>(&self, rng: &mut R) -> bool {
        let probability = match self {
            Sparsity::Full => 0,
            Sparsity::Sparse => 15,
            Sparsity::Dense => 50,
            Sparsity::Percent(p) => (*p).min(100),
        };
        rng.gen_ratio(probability as u32, 100)
    }
}

// =============================================================================
// Host Generator
// =============================================================================

/// Generates realistic Hostwatch host records and search pages.
///
/// # Example
/// ```ignore
/// use hostwatch_client::testing::generators::{HostGenerator, Sparsity};
///
/// let generator = HostGenerator::new().with_sparsity(Sparsity::Sparse);
///
/// // One host record
/// let host = generator.generate_one(0);
///
/// // A full search page: 100 records, 140 matching overall
/// let page = generator.generate_page(100, 140);
/// ```
#[derive(Debug, Clone)]
pub struct HostGenerator {
    sparsity: Sparsity,
    roles: Vec<String>,
    apps: Vec<String>,
    environments: Vec<String>,
}

impl Default for HostGenerator {
    fn default() -> Self {
        Self {
            sparsity: Sparsity::Full,
            roles: vec![
                "web".to_string(),
                "db".to_string(),
                "cache".to_string(),
                "queue".to_string(),
                "worker".to_string(),
                "api".to_string(),
            ],
            apps: vec![
                "nginx".to_string(),
                "postgres".to_string(),
                "redis".to_string(),
                "kafka".to_string(),
                "docker".to_string(),
            ],
            environments: vec![
                "env:prod".to_string(),
                "env:staging".to_string(),
                "env:dev".to_string(),
            ],
        }
    }
}

impl HostGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure how often optional fields are omitted.
    pub fn with_sparsity(mut self, sparsity: Sparsity) -> Self {
        self.sparsity = sparsity;
        self
    }

    /// Set custom host roles used in generated names and tags.
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Generate a single host record as a JSON Value.
    ///
    /// `seq` keeps names unique and deterministic within a page.
    pub fn generate_one(&self, seq: usize) -> Value {
        let mut rng = rand::thread_rng();

        let role = self.roles.choose(&mut rng).cloned().unwrap_or_default();
        let name = format!("{}-{:03}.example.com", role, seq);

        let mut host = serde_json::Map::new();
        host.insert("name".to_string(), Value::String(name.clone()));
        host.insert("up".to_string(), Value::Bool(rng.gen_bool(0.9)));
        host.insert("is_muted".to_string(), Value::Bool(rng.gen_bool(0.1)));

        if !self.sparsity.should_omit(&mut rng) {
            host.insert(
                "last_reported_time".to_string(),
                (1_600_000_000i64..1_800_000_000).fake::<i64>().into(),
            );
        }

        if !self.sparsity.should_omit(&mut rng) {
            let apps: Vec<Value> = self
                .apps
                .iter()
                .filter(|_| rng.gen_bool(0.4))
                .map(|a| Value::String(a.clone()))
                .collect();
            host.insert("apps".to_string(), Value::Array(apps));
        }

        if !self.sparsity.should_omit(&mut rng) {
            let env = self.environments.choose(&mut rng).cloned().unwrap_or_default();
            host.insert(
                "tags_by_source".to_string(),
                serde_json::json!({ "agent": [env, format!("role:{}", role)] }),
            );
        }

        if !self.sparsity.should_omit(&mut rng) {
            host.insert(
                "aws_name".to_string(),
                Value::String(format!("{}-{:03}", role, seq)),
            );
        }

        if !self.sparsity.should_omit(&mut rng) {
            host.insert(
                "metrics".to_string(),
                serde_json::json!({
                    "cpu": (rng.gen_range(0..1000) as f64) / 10.0,
                    "iowait": (rng.gen_range(0..100) as f64) / 10.0,
                    "load": (rng.gen_range(0..400) as f64) / 100.0,
                }),
            );
        }

        if !self.sparsity.should_omit(&mut rng) {
            host.insert("sources".to_string(), serde_json::json!(["agent"]));
        }

        if !self.sparsity.should_omit(&mut rng) {
            host.insert(
                "meta".to_string(),
                serde_json::json!({
                    "platform": (["linux", "windows"].choose(&mut rng).unwrap()),
                    "notes": Sentence(3..6).fake::<String>(),
                }),
            );
        }

        host.insert("host_name".to_string(), Value::String(name.clone()));
        host.insert(
            "id".to_string(),
            Value::Number(rng.gen_range(1_000_000i64..10_000_000).into()),
        );

        if !self.sparsity.should_omit(&mut rng) {
            let short = name.split('.').next().unwrap_or(&name).to_string();
            host.insert(
                "aliases".to_string(),
                serde_json::json!([short, IPv4().fake::<String>()]),
            );
        }

        Value::Object(host)
    }

    /// Generate a search page with `count` records.
    ///
    /// `total_matching` is reported as-is; pass the overall match count the
    /// scenario calls for.
    pub fn generate_page(&self, count: usize, total_matching: usize) -> Value {
        let hosts: Vec<Value> = (0..count).map(|i| self.generate_one(i)).collect();

        serde_json::json!({
            "total_returned": count,
            "host_list": hosts,
            "total_matching": total_matching,
        })
    }
}

// =============================================================================
// Proptest Integration
// =============================================================================

/// Wrap fake-based generators for use with proptest.
///
/// This module provides strategy functions that use fake generators
/// internally, allowing seamless integration with existing proptest tests.
#[cfg(feature = "test-utils")]
pub mod proptest_strategies {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating sparse host records using fake.
    ///
    /// Useful for asserting that `Host` decoding tolerates any combination
    /// of missing optional fields.
    pub fn sparse_host_strategy() -> impl Strategy<Value = Value> {
        let generator = HostGenerator::new().with_sparsity(Sparsity::Dense);
        (0..1000usize).prop_map(move |seq| generator.generate_one(seq))
    }

    /// Strategy for generating whole search pages of a given size.
    pub fn host_page_strategy(count: usize) -> impl Strategy<Value = Value> {
        let generator = HostGenerator::new().with_sparsity(Sparsity::Sparse);
        (0..1000usize).prop_map(move |_| generator.generate_page(count, count))
    }
}
