use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::TelegramPreferencesDto;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTelegramPreferencesDto {
    pub enabled: Option<bool>,
    pub login_notifications: Option<bool>,
    pub new_posts: Option<bool>,
    pub comment_replies: Option<bool>,
    pub admin_notifications: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfigureTelegramDto {
    pub telegram_id: String,
    #[serde(default)]
    pub preferences: UpdateTelegramPreferencesDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TelegramConfigDto {
    pub telegram_id: Option<String>,
    pub preferences: TelegramPreferencesDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TelegramMessageDto {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TelegramBroadcastResultDto {
    pub success: bool,
    pub sent_count: usize,
    pub failed_count: usize,
    pub total_users: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TelegramStatsDto {
    pub total_users: u64,
    pub users_with_telegram: u64,
    pub telegram_enabled: u64,
    pub admin_notifications_enabled: u64,
    /// Percentage of users that linked a Telegram id.
    pub adoption_rate: f64,
    /// Percentage of linked users with notifications turned on.
    pub enabled_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BotInfoDto {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}
