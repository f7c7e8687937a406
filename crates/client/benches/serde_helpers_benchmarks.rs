//! Benchmarks for serde helper functions.
//!
//! These helpers handle Hostwatch's inconsistent JSON typing (numbers as strings).

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde::Deserialize;

// Wrapper structs for benchmarking the serde helpers
// Fields are used by serde but not directly accessed, hence allow(dead_code)
#[derive(Deserialize)]
#[allow(dead_code)]
struct I64Wrapper {
    #[serde(deserialize_with = "hostwatch_client::serde_helpers::i64_from_string_or_number")]
    value: i64,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct OptI64Wrapper {
    #[serde(
        default,
        deserialize_with = "hostwatch_client::serde_helpers::opt_i64_from_string_or_number"
    )]
    value: Option<i64>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct UsizeWrapper {
    #[serde(deserialize_with = "hostwatch_client::serde_helpers::usize_from_string_or_number")]
    value: usize,
}

fn bench_i64_from_number(c: &mut Criterion) {
    c.bench_function("i64_from_number", |b| {
        let json = r#"{"value": 1693420084}"#;
        b.iter(|| {
            let result: I64Wrapper = serde_json::from_str(black_box(json)).unwrap();
            black_box(result)
        })
    });
}

fn bench_i64_from_string(c: &mut Criterion) {
    c.bench_function("i64_from_string", |b| {
        let json = r#"{"value": "1693420084"}"#;
        b.iter(|| {
            let result: I64Wrapper = serde_json::from_str(black_box(json)).unwrap();
            black_box(result)
        })
    });
}

fn bench_usize_from_number(c: &mut Criterion) {
    c.bench_function("usize_from_number", |b| {
        let json = r#"{"value": 123456789}"#;
        b.iter(|| {
            let result: UsizeWrapper = serde_json::from_str(black_box(json)).unwrap();
            black_box(result)
        })
    });
}

fn bench_usize_from_string(c: &mut Criterion) {
    c.bench_function("usize_from_string", |b| {
        let json = r#"{"value": "123456789"}"#;
        b.iter(|| {
            let result: UsizeWrapper = serde_json::from_str(black_box(json)).unwrap();
            black_box(result)
        })
    });
}

fn bench_opt_i64_some(c: &mut Criterion) {
    c.bench_function("opt_i64_some", |b| {
        let json = r#"{"value": 1693420084}"#;
        b.iter(|| {
            let result: OptI64Wrapper = serde_json::from_str(black_box(json)).unwrap();
            black_box(result)
        })
    });
}

fn bench_opt_i64_none(c: &mut Criterion) {
    c.bench_function("opt_i64_none", |b| {
        let json = r#"{}"#;
        b.iter(|| {
            let result: OptI64Wrapper = serde_json::from_str(black_box(json)).unwrap();
            black_box(result)
        })
    });
}

criterion_group!(
    benches,
    bench_i64_from_number,
    bench_i64_from_string,
    bench_usize_from_number,
    bench_usize_from_string,
    bench_opt_i64_some,
    bench_opt_i64_none,
);
criterion_main!(benches);
