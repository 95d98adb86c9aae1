//! Chat message factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a chat message from `username`, created `seconds_ago` seconds in the past.
pub async fn create_chat_message(
    db: &DatabaseConnection,
    username: &str,
    message: &str,
    seconds_ago: i64,
) -> Result<entity::chat_message::Model, DbErr> {
    entity::chat_message::ActiveModel {
        user_id: ActiveValue::Set(None),
        username: ActiveValue::Set(username.to_string()),
        message: ActiveValue::Set(message.to_string()),
        message_type: ActiveValue::Set("text".to_string()),
        created_at: ActiveValue::Set(Utc::now() - Duration::seconds(seconds_ago)),
        ..Default::default()
    }
    .insert(db)
    .await
}
