use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token in the `Authorization` header, or the token failed verification.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Could not validate credentials")]
    InvalidToken,

    /// The token is valid but its user no longer exists or has been deactivated.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} not found or inactive")]
    UserNotFoundOrInactive(i32),

    /// Login attempted with an unknown name or wrong password.
    #[error("Incorrect name or password")]
    InvalidCredentials,

    /// Login attempted on a deactivated account.
    #[error("Account {0} is deactivated")]
    AccountDeactivated(String),

    /// The user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The message is logged only.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during the Dropbox OAuth callback.
    ///
    /// The state in the callback URL does not match the value stored in the session.
    /// Results in a 400 Bad Request response.
    #[error("OAuth callback CSRF state mismatch")]
    CsrfValidationFailed,

    /// Token signing failed.
    #[error("Failed to issue access token: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification failed inside bcrypt.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing messages:
/// - `InvalidToken` → 401 "Could not validate credentials"
/// - `UserNotFoundOrInactive` → 401 "User not found or inactive"
/// - `InvalidCredentials` → 401 "Incorrect name or password"
/// - `AccountDeactivated` → 401 "Account is deactivated"
/// - `AccessDenied` → 403 "Not enough permissions"
/// - `CsrfValidationFailed` → 400
/// - Other errors → 500 Internal Server Error with generic message
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Could not validate credentials"),
            Self::UserNotFoundOrInactive(_) => {
                (StatusCode::UNAUTHORIZED, "User not found or inactive")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Incorrect name or password"),
            Self::AccountDeactivated(_) => (StatusCode::UNAUTHORIZED, "Account is deactivated"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Not enough permissions"),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue authorizing Dropbox, please try again.",
            ),
            Self::TokenIssue(_) | Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
