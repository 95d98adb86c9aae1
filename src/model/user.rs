use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Admin,
    #[default]
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailPreferencesDto {
    pub new_posts: bool,
    pub admin_notifications: bool,
    pub comment_replies: bool,
    pub new_comments: bool,
    pub weekly_digest: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TelegramPreferencesDto {
    pub enabled: bool,
    pub login_notifications: bool,
    pub new_posts: bool,
    pub comment_replies: bool,
    pub admin_notifications: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: RoleDto,
    pub is_active: bool,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub email_preferences: EmailPreferencesDto,
    pub telegram_id: Option<String>,
    pub telegram_preferences: TelegramPreferencesDto,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub role: RoleDto,
    pub phone: Option<String>,
}

/// Admin-side partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<RoleDto>,
    pub is_active: Option<bool>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

/// Self-service profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}
