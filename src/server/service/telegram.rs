//! Telegram account linking, test messages and admin broadcasts.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    integration::telegram::TelegramBotInfo,
    model::{
        telegram::{TelegramBroadcastOutcome, TelegramStats},
        user::{TelegramPreferencesUpdate, User},
    },
    service::notification::{builder, dispatcher::Notifier},
    util::validate::require_length,
};

pub struct TelegramService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> TelegramService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Fetches the bot profile. Fails with 503 when no bot token is configured.
    pub async fn bot_info(&self) -> Result<TelegramBotInfo, AppError> {
        Ok(self.notifier.telegram().get_me().await?)
    }

    /// Links `telegram_id` to the user and applies the preference changes.
    pub async fn configure(
        &self,
        user: &User,
        telegram_id: &str,
        preferences: TelegramPreferencesUpdate,
    ) -> Result<User, AppError> {
        require_length("telegram_id", telegram_id, 1, 64)?;

        let user = UserRepository::new(self.db)
            .update_telegram(user.id, Some(telegram_id.trim().to_string()), preferences)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("User {} linked Telegram chat {}", user.name, telegram_id);

        Ok(user)
    }

    /// Sends a test message to the caller's own chat.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The caller has not linked Telegram
    /// - `Err(AppError::IntegrationErr)` - Bot disabled or Telegram rejected the message
    pub async fn send_test(&self, user: &User, message: &str) -> Result<(), AppError> {
        let Some(chat_id) = user.telegram_id.as_deref() else {
            return Err(AppError::BadRequest(
                "Telegram is not configured for this account".to_string(),
            ));
        };
        require_length("message", message, 1, 4000)?;

        let text = builder::admin_notice("Mensaje de prueba", message, Utc::now());
        self.notifier.telegram().send_message(chat_id, &text).await?;

        Ok(())
    }

    /// Sends an admin notice to every active user subscribed to admin notifications.
    pub async fn broadcast(
        &self,
        sender: &User,
        message: &str,
    ) -> Result<TelegramBroadcastOutcome, AppError> {
        require_length("message", message, 1, 4000)?;

        let recipients: Vec<User> = UserRepository::new(self.db)
            .get_active()
            .await?
            .into_iter()
            .filter(|user| {
                user.telegram_id.is_some()
                    && user.telegram_preferences.enabled
                    && user.telegram_preferences.admin_notifications
            })
            .collect();

        let text = builder::admin_notice(
            &format!("Mensaje de {}", sender.name),
            message,
            Utc::now(),
        );

        let mut outcome = TelegramBroadcastOutcome {
            sent_count: 0,
            failed_count: 0,
            total_users: recipients.len(),
        };
        for user in &recipients {
            let Some(chat_id) = user.telegram_id.as_deref() else {
                continue;
            };
            if self.notifier.send_telegram(chat_id, &text).await {
                outcome.sent_count += 1;
            } else {
                outcome.failed_count += 1;
            }
        }

        tracing::info!(
            "Telegram broadcast by {}: {}/{} delivered",
            sender.name,
            outcome.sent_count,
            outcome.total_users
        );

        Ok(outcome)
    }

    pub async fn stats(&self) -> Result<TelegramStats, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(TelegramStats::from_users(&users))
    }
}
