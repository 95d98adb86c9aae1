//! Email notifications: admin broadcasts and subscriber preferences.
//!
//! Event-driven notifications (new posts, comments, logins, chat activity) are sent by the
//! [`dispatcher::Notifier`]; message bodies come from [`builder`].

pub mod builder;
pub mod dispatcher;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        notification::{BroadcastOutcome, RecipientSummary},
        user::{EmailPreferencesUpdate, User},
    },
    service::notification::dispatcher::Notifier,
    util::validate::require_length,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Emails an admin message to active users.
    ///
    /// Recipients are the active users subscribed to admin notifications, or every active
    /// user when `include_unsubscribed` is set. Messages go out in batches of 50; a failed
    /// batch is logged and does not count towards `sent_count`.
    ///
    /// # Arguments
    /// - `subject` - Email subject, prefixed with 📢
    /// - `message` - Plain text body
    /// - `include_unsubscribed` - Ignore the admin_notifications preference
    /// - `sender` - Name of the admin sending the broadcast
    ///
    /// # Returns
    /// - `Ok(BroadcastOutcome)` - Counts of the run, `success: false` when nobody qualified
    /// - `Err(AppError::BadRequest)` - Empty subject or message
    pub async fn broadcast(
        &self,
        subject: &str,
        message: &str,
        include_unsubscribed: bool,
        sender: &str,
    ) -> Result<BroadcastOutcome, AppError> {
        require_length("subject", subject, 1, 200)?;
        require_length("message", message, 1, 10_000)?;

        let recipients: Vec<String> = UserRepository::new(self.db)
            .get_active()
            .await?
            .into_iter()
            .filter(|user| include_unsubscribed || user.email_preferences.admin_notifications)
            .map(|user| user.email)
            .collect();

        if recipients.is_empty() {
            return Ok(BroadcastOutcome {
                success: false,
                message: "No recipients found".to_string(),
                sent_count: 0,
                total_users: 0,
            });
        }

        let (subject, html) = builder::broadcast_email(subject.trim(), message, sender);
        let sent_count = self
            .notifier
            .send_email_batches(&recipients, &subject, &html)
            .await;

        tracing::info!(
            "Admin broadcast by {} reached {}/{} users",
            sender,
            sent_count,
            recipients.len()
        );

        Ok(BroadcastOutcome {
            success: true,
            message: format!("Broadcast sent successfully to {} users", sent_count),
            sent_count,
            total_users: recipients.len(),
        })
    }

    /// Subscriber counts and lists among active users.
    pub async fn recipients(&self) -> Result<RecipientSummary, AppError> {
        let users = UserRepository::new(self.db).get_active().await?;

        Ok(RecipientSummary::from_active_users(users))
    }

    /// Applies a partial preference update to one user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with updated preferences
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn update_preferences(
        &self,
        user_id: i32,
        update: EmailPreferencesUpdate,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_email_preferences(user_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies the same preference update to several users.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of updated users
    /// - `Err(AppError::BadRequest)` - No users or no preferences given
    pub async fn bulk_update(
        &self,
        user_ids: &[i32],
        update: EmailPreferencesUpdate,
    ) -> Result<u64, AppError> {
        if user_ids.is_empty() {
            return Err(AppError::BadRequest("No user IDs provided".to_string()));
        }
        if update.is_empty() {
            return Err(AppError::BadRequest("No preferences to update".to_string()));
        }

        Ok(UserRepository::new(self.db)
            .update_email_preferences_many(user_ids, update)
            .await?)
    }

    /// Every user with their preferences, newest first.
    pub async fn all_preferences(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }
}
