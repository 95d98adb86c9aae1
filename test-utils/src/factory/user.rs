//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .name("CustomUser")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    password_hash: String,
    admin: bool,
    is_active: bool,
    telegram_id: Option<String>,
    telegram_enabled: bool,
    email_comment_replies: bool,
    last_seen: Option<DateTime<Utc>>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - password_hash: placeholder that never verifies
    /// - admin: `false`, active: `true`, no Telegram, never seen
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            password_hash: "!".to_string(),
            admin: false,
            is_active: true,
            telegram_id: None,
            telegram_enabled: false,
            email_comment_replies: true,
            last_seen: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored password hash. Tests that log in should pass a real bcrypt hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Links a Telegram chat id and turns Telegram notifications on.
    pub fn telegram(mut self, telegram_id: impl Into<String>) -> Self {
        self.telegram_id = Some(telegram_id.into());
        self.telegram_enabled = true;
        self
    }

    pub fn comment_replies(mut self, enabled: bool) -> Self {
        self.email_comment_replies = enabled;
        self
    }

    pub fn last_seen(mut self, last_seen: DateTime<Utc>) -> Self {
        self.last_seen = Some(last_seen);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(if self.admin { "admin" } else { "normal" }.to_string()),
            is_active: ActiveValue::Set(self.is_active),
            avatar: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            email_new_posts: ActiveValue::Set(true),
            email_admin_notifications: ActiveValue::Set(true),
            email_comment_replies: ActiveValue::Set(self.email_comment_replies),
            email_new_comments: ActiveValue::Set(true),
            email_weekly_digest: ActiveValue::Set(false),
            telegram_id: ActiveValue::Set(self.telegram_id),
            telegram_enabled: ActiveValue::Set(self.telegram_enabled),
            telegram_login_notifications: ActiveValue::Set(true),
            telegram_new_posts: ActiveValue::Set(true),
            telegram_comment_replies: ActiveValue::Set(true),
            telegram_admin_notifications: ActiveValue::Set(true),
            last_seen: ActiveValue::Set(self.last_seen),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
