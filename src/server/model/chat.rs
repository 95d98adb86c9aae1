use chrono::{DateTime, Utc};

use crate::model::chat::ChatMessageDto;

pub const TEXT_MESSAGE: &str = "text";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub user_id: Option<i32>,
    pub username: String,
    pub message: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_entity(entity: entity::chat_message::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            username: entity.username,
            message: entity.message,
            message_type: entity.message_type,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            user_id: self.user_id,
            username: self.username,
            message: self.message,
            message_type: self.message_type,
            created_at: self.created_at,
        }
    }
}
