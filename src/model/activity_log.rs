use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EventTypeDto {
    Login,
    Logout,
    PasswordChange,
    PostView,
    AdminAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityLogDto {
    pub id: i32,
    pub username: String,
    pub event_type: EventTypeDto,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub success: bool,
    #[schema(value_type = Option<Object>)]
    pub additional_info: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventCountsDto {
    pub success: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityStatsDto {
    pub period_days: i64,
    pub total_events: u64,
    pub by_event: BTreeMap<String, EventCountsDto>,
    pub unique_users: u64,
    pub failed_logins: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CleanupResultDto {
    pub deleted_count: u64,
    pub cutoff_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkDeleteLogsDto {
    pub usernames: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkDeleteResultDto {
    pub deleted_count: u64,
    /// Deleted entries per username.
    pub deletion_summary: BTreeMap<String, u64>,
}
