use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::EmailPreferencesDto;

/// Partial email preference update; missing fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmailPreferencesDto {
    pub new_posts: Option<bool>,
    pub admin_notifications: Option<bool>,
    pub comment_replies: Option<bool>,
    pub new_comments: Option<bool>,
    pub weekly_digest: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BroadcastEmailDto {
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub include_unsubscribed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BroadcastResultDto {
    pub success: bool,
    pub message: String,
    pub sent_count: usize,
    pub total_users: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipientDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PreferenceCountsDto {
    pub new_posts: usize,
    pub admin_notifications: usize,
    pub comment_replies: usize,
    pub new_comments: usize,
    pub weekly_digest: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipientSummaryDto {
    pub total_active_users: usize,
    pub subscribed: PreferenceCountsDto,
    pub admin_notification_recipients: Vec<RecipientDto>,
    pub new_post_recipients: Vec<RecipientDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkPreferencesDto {
    pub user_ids: Vec<i32>,
    pub preferences: UpdateEmailPreferencesDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkUpdateResultDto {
    pub updated_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPreferencesDto {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub email_preferences: EmailPreferencesDto,
}
