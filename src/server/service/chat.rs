//! Community chat.
//!
//! Messages arrive over HTTP or the websocket; both paths persist the message, fan it out
//! through the hub and feed the admin activity debounce.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::chat_message::ChatMessageRepository,
    error::AppError,
    model::{chat::ChatMessage, user::User},
    realtime::{
        event::ServerEvent,
        hub::{Hub, SocketId},
    },
    service::notification::dispatcher::Notifier,
    util::validate::require_length,
};

pub const DEFAULT_HISTORY_LIMIT: u64 = 50;
pub const MAX_HISTORY_LIMIT: u64 = 200;
pub const MAX_MESSAGE_CHARS: usize = 1000;

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a Hub,
    notifier: &'a Notifier,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a Hub, notifier: &'a Notifier) -> Self {
        Self { db, hub, notifier }
    }

    /// Gets the newest messages in chronological order.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `limit` outside 1..=200
    pub async fn recent(&self, limit: Option<u64>) -> Result<Vec<ChatMessage>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_HISTORY_LIMIT
            )));
        }

        Ok(ChatMessageRepository::new(self.db).get_recent(limit).await?)
    }

    /// Stores a message from `sender` and relays it to connected sockets.
    ///
    /// # Arguments
    /// - `sender` - Authenticated author
    /// - `message` - Message body, 1..=1000 characters after trimming
    /// - `except` - Socket that sent the message over the websocket, skipped by the relay
    ///
    /// # Returns
    /// - `Ok(ChatMessage)` - The stored message
    /// - `Err(AppError::BadRequest)` - Empty or oversized message
    pub async fn send(
        &self,
        sender: &User,
        message: &str,
        except: Option<SocketId>,
    ) -> Result<ChatMessage, AppError> {
        require_length("message", message, 1, MAX_MESSAGE_CHARS)?;

        let stored = ChatMessageRepository::new(self.db)
            .create(Some(sender.id), sender.name.clone(), message.trim().to_string())
            .await?;

        let delivered = self
            .hub
            .broadcast(&ServerEvent::ReceiveMessage(stored.clone().into_dto()), except)
            .await;
        tracing::debug!("Chat message {} relayed to {} sockets", stored.id, delivered);

        if self.hub.record_chat_activity(Utc::now()).await {
            self.notifier.chat_activity(
                Some(sender.id),
                sender.name.clone(),
                stored.message.clone(),
            );
        }

        Ok(stored)
    }
}
