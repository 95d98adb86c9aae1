//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, profile and preference updates, presence timestamps and
//! the recipient queries used by notifications.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{
    CreateUserParams, EmailPreferences, EmailPreferencesUpdate, Role, TelegramPreferences,
    TelegramPreferencesUpdate, UpdateUserParams, User,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with default notification preferences.
    ///
    /// # Arguments
    /// - `params` - Account data with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email or name
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let email = EmailPreferences::default();
        let telegram = TelegramPreferences::default();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            avatar: ActiveValue::Set(None),
            phone: ActiveValue::Set(params.phone),
            email_new_posts: ActiveValue::Set(email.new_posts),
            email_admin_notifications: ActiveValue::Set(email.admin_notifications),
            email_comment_replies: ActiveValue::Set(email.comment_replies),
            email_new_comments: ActiveValue::Set(email.new_comments),
            email_weekly_digest: ActiveValue::Set(email.weekly_digest),
            telegram_id: ActiveValue::Set(None),
            telegram_enabled: ActiveValue::Set(telegram.enabled),
            telegram_login_notifications: ActiveValue::Set(telegram.login_notifications),
            telegram_new_posts: ActiveValue::Set(telegram.new_posts),
            telegram_comment_replies: ActiveValue::Set(telegram.comment_replies),
            telegram_admin_notifications: ActiveValue::Set(telegram.admin_notifications),
            last_seen: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets every user, newest account first.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Gets every active user ordered by name.
    pub async fn get_active(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Gets every active admin.
    pub async fn get_admins(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IsActive.eq(true))
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Checks whether any admin account exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial update. Missing fields keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including unique violations
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(avatar) = params.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        User::from_entity(updated).map(Some)
    }

    pub async fn set_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when the user does not exist)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Records user activity for presence tracking.
    pub async fn touch_last_seen(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::LastSeen, Expr::value(at))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets active users seen after `since`, most recent first.
    pub async fn find_seen_since(&self, since: DateTime<Utc>) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IsActive.eq(true))
            .filter(entity::user::Column::LastSeen.gt(since))
            .order_by_desc(entity::user::Column::LastSeen)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Clears `last_seen` for users inactive since before `before`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users marked offline
    pub async fn clear_last_seen_before(&self, before: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::LastSeen,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::user::Column::LastSeen.lte(before))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies a partial email preference update to one user.
    pub async fn update_email_preferences(
        &self,
        id: i32,
        update: EmailPreferencesUpdate,
    ) -> Result<Option<User>, DbErr> {
        if self.update_email_preferences_many(&[id], update).await? == 0 && !update.is_empty() {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Applies the same partial email preference update to several users.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of updated users (0 for an empty update)
    pub async fn update_email_preferences_many(
        &self,
        ids: &[i32],
        update: EmailPreferencesUpdate,
    ) -> Result<u64, DbErr> {
        use entity::user::Column;

        let columns = [
            (Column::EmailNewPosts, update.new_posts),
            (Column::EmailAdminNotifications, update.admin_notifications),
            (Column::EmailCommentReplies, update.comment_replies),
            (Column::EmailNewComments, update.new_comments),
            (Column::EmailWeeklyDigest, update.weekly_digest),
        ];

        if update.is_empty() || ids.is_empty() {
            return Ok(0);
        }

        let mut query = entity::prelude::User::update_many();
        for (column, value) in columns {
            if let Some(value) = value {
                query = query.col_expr(column, Expr::value(value));
            }
        }

        let result = query
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links a Telegram chat id and applies a partial Telegram preference update.
    pub async fn update_telegram(
        &self,
        id: i32,
        telegram_id: Option<String>,
        update: TelegramPreferencesUpdate,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(telegram_id) = telegram_id {
            active.telegram_id = ActiveValue::Set(Some(telegram_id));
        }
        if let Some(enabled) = update.enabled {
            active.telegram_enabled = ActiveValue::Set(enabled);
        }
        if let Some(value) = update.login_notifications {
            active.telegram_login_notifications = ActiveValue::Set(value);
        }
        if let Some(value) = update.new_posts {
            active.telegram_new_posts = ActiveValue::Set(value);
        }
        if let Some(value) = update.comment_replies {
            active.telegram_comment_replies = ActiveValue::Set(value);
        }
        if let Some(value) = update.admin_notifications {
            active.telegram_admin_notifications = ActiveValue::Set(value);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        User::from_entity(updated).map(Some)
    }
}
