//! Row-to-entity parsing helpers.
//!
//! Repositories decode `libsql::Row` values by column index into typed entity
//! structs. The helpers here keep that decoding in one place, including the
//! two datetime shapes a TEXT column can hold (`SQLite`'s `strftime` default
//! vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))?;
    Ok(naive.and_utc())
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the belt-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    let value = serde_json::Value::String(s.to_owned());
    serde_json::from_value(value)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column, folding the empty string into `None`.
///
/// Nullable columns must be read as `Option<String>`: a plain
/// `row.get::<String>(idx)` on SQL NULL is an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    let value = row.get::<Option<String>>(idx)?;
    Ok(value.filter(|s| !s.is_empty()))
}
