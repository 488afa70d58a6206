//! Column decoding shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use eb_core::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(row: &SqliteRow, column: &'static str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| DbError::CorruptRow {
        column,
        message: format!("invalid UUID: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn timestamp(row: &SqliteRow, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    let secs: i64 = row.try_get(column)?;
    from_secs(secs, column)
}

#[track_caller]
pub(crate) fn optional_timestamp(
    row: &SqliteRow,
    column: &'static str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    let secs: Option<i64> = row.try_get(column)?;
    secs.map(|s| from_secs(s, column)).transpose()
}

/// Decode a text column through the type's `FromStr`
#[track_caller]
pub(crate) fn parsed<T>(row: &SqliteRow, column: &'static str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|e| DbError::CorruptRow {
        column,
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn from_secs(secs: i64, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::CorruptRow {
        column,
        message: format!("timestamp out of range: {}", secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
