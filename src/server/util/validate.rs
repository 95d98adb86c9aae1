//! Input validation shared by the create/update operations.

use url::Url;

use crate::server::error::AppError;

/// Checks that a trimmed value holds between `min` and `max` characters.
pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.trim().chars().count();
    if len < min {
        if min == 1 {
            return Err(AppError::BadRequest(format!("{} must not be empty", field)));
        }
        return Err(AppError::BadRequest(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Like `require_length` but only upper-bounded, and skipped for `None`.
pub fn optional_max_length(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(value) if value.chars().count() > max => Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        ))),
        _ => Ok(()),
    }
}

/// Parses an absolute `http`/`https` URL.
pub fn require_http_url(value: &str) -> Result<Url, AppError> {
    let invalid = || AppError::BadRequest("Invalid URL".to_string());

    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(invalid()),
    }
}
