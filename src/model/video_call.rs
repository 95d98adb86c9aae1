use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CallTypeDto {
    Private,
    Meeting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CallStatusDto {
    Waiting,
    Active,
    Ended,
}

fn default_max_participants() -> i32 {
    50
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCallDto {
    pub call_type: CallTypeDto,
    #[serde(default)]
    pub invited_users: Vec<i32>,
    #[serde(default = "default_max_participants")]
    pub max_participants: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMeetingRoomDto {
    pub room_name: String,
    pub description: Option<String>,
    #[serde(default = "default_max_participants")]
    pub max_participants: i32,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct JoinCallDto {
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDto {
    pub user_id: i32,
    pub username: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoCallDto {
    pub id: i32,
    pub channel_name: String,
    pub creator_id: i32,
    pub creator_name: String,
    pub call_type: CallTypeDto,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub invited_users: Vec<i32>,
    pub status: CallStatusDto,
    pub max_participants: i32,
    pub is_public: bool,
    pub has_password: bool,
    pub participants: Vec<ParticipantDto>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CallHistoryEntryDto {
    #[serde(flatten)]
    pub call: VideoCallDto,
    /// Seconds between start and end, when both are known.
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateTokenDto {
    pub channel_name: String,
    pub uid: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CallTokenDto {
    pub token: Option<String>,
    pub channel: String,
    pub uid: i64,
    #[serde(rename = "appId")]
    pub app_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoHealthDto {
    pub status: String,
    pub service: String,
    pub active_calls: u64,
}
