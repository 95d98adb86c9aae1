use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OnlineUserDto {
    pub id: i32,
    pub name: String,
    pub avatar: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
}
