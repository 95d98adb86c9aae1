use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the outbound services (SMTP, Telegram, Cloudinary, Dropbox).
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// The integration has no credentials configured.
    ///
    /// Results in 503 Service Unavailable naming the integration.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Transport-level failure reaching the upstream API.
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with an error payload.
    #[error("{service} returned an error: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    /// OAuth token exchange with Dropbox failed.
    #[error("OAuth token exchange failed: {0}")]
    OAuth(String),

    /// Building or sending an email failed.
    #[error("Email delivery failed: {0}")]
    Mail(String),
}

impl IntoResponse for IntegrationError {
    fn into_response(self) -> Response {
        match self {
            Self::NotConfigured(_) => {
                tracing::warn!("{}", self);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Upstream service request failed".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
