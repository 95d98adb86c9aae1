use std::str::FromStr;

use sea_orm::DbErr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an integer path identifier.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `entity` - Entity name used in the error message (`post`, `comment`, ...)
///
/// # Returns
/// - `Ok(i32)` - Parsed identifier
/// - `Err(AppError::BadRequest)` - "Invalid <entity> ID format"
pub fn parse_id(value: &str, entity: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {} ID format", entity)))
}

/// Parses an enum-like value read back from the database at the repository boundary.
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(DbErr::Custom)` - The column holds a value this build does not know
pub fn parse_stored<T: FromStr>(kind: &'static str, value: &str) -> Result<T, DbErr> {
    value.parse::<T>().map_err(|_| {
        DbErr::Custom(
            InternalError::UnknownStoredValue {
                kind,
                value: value.to_string(),
            }
            .to_string(),
        )
    })
}

/// Decodes a JSON column into its domain type at the repository boundary.
pub fn parse_json_column<T: serde::de::DeserializeOwned>(
    column: &'static str,
    value: serde_json::Value,
) -> Result<T, DbErr> {
    serde_json::from_value(value)
        .map_err(|source| {
            DbErr::Custom(InternalError::InvalidJsonColumn { column, source }.to_string())
        })
}
