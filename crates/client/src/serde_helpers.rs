//! Serde helpers for Hostwatch's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//! - Normalizing units or performing domain conversions.
//!
//! Invariants / assumptions:
//! - Hostwatch may return numeric fields as `"123"` strings or as `123` numbers
//!   depending on endpoint and account age.
//! - These helpers must not log or print secrets; errors should be generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    I64(i64),
    U64(u64),
    String(String),
}

pub fn i64_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = NumberOrString::deserialize(deserializer)?;
    match value {
        NumberOrString::I64(v) => Ok(v),
        NumberOrString::U64(v) => i64::try_from(v).map_err(D::Error::custom),
        NumberOrString::String(s) => s.parse::<i64>().map_err(D::Error::custom),
    }
}

pub fn opt_i64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrString::I64(v)) => Ok(Some(v)),
        Some(NumberOrString::U64(v)) => Ok(Some(i64::try_from(v).map_err(D::Error::custom)?)),
        Some(NumberOrString::String(s)) => Ok(Some(s.parse::<i64>().map_err(D::Error::custom)?)),
    }
}

pub fn usize_from_string_or_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = NumberOrString::deserialize(deserializer)?;
    match value {
        NumberOrString::I64(v) => usize::try_from(v).map_err(D::Error::custom),
        NumberOrString::U64(v) => usize::try_from(v).map_err(D::Error::custom),
        NumberOrString::String(s) => s.parse::<usize>().map_err(D::Error::custom),
    }
}
