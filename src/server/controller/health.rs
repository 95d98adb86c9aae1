use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::ConnectionTrait;

use crate::{
    model::api::{HealthDto, RootDto},
    server::{error::AppError, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Service banner.
#[utoipa::path(
    get,
    path = "/api",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is running", body = RootDto)
    ),
)]
pub async fn root() -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(RootDto {
            message: "Yskandar API".to_string(),
            status: "running".to_string(),
        }),
    ))
}

/// Liveness check that also pings the database.
///
/// Always answers `200 OK`; an unreachable database is reported in the body so load
/// balancers keep routing while the operator investigates.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Health report", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let database = match state.db.execute_unprepared("SELECT 1").await {
        Ok(_) => "connected".to_string(),
        Err(e) => {
            tracing::warn!("Health check database ping failed: {}", e);
            "disconnected".to_string()
        }
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "degraded"
    };

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: status.to_string(),
            database,
        }),
    ))
}
