//! Chat message data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::chat::{ChatMessage, TEXT_MESSAGE};

/// Repository providing database operations for the community chat.
pub struct ChatMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatMessageRepository<'a> {
    /// Creates a new ChatMessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChatMessageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a text message.
    ///
    /// # Arguments
    /// - `user_id` - Sender id, if the sender is a registered user
    /// - `username` - Display name of the sender
    /// - `message` - Message body
    pub async fn create(
        &self,
        user_id: Option<i32>,
        username: String,
        message: String,
    ) -> Result<ChatMessage, DbErr> {
        let entity = entity::chat_message::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            username: ActiveValue::Set(username),
            message: ActiveValue::Set(message),
            message_type: ActiveValue::Set(TEXT_MESSAGE.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ChatMessage::from_entity(entity))
    }

    /// Gets the newest `limit` messages in chronological order.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<ChatMessage>, DbErr> {
        let mut messages: Vec<ChatMessage> = entity::prelude::ChatMessage::find()
            .order_by_desc(entity::chat_message::Column::CreatedAt)
            .order_by_desc(entity::chat_message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(ChatMessage::from_entity)
            .collect();

        messages.reverse();

        Ok(messages)
    }
}
