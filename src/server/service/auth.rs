//! Password authentication.
//!
//! Users log in with their name and password and receive a bearer token. Every login
//! attempt, logout and password change is written to the activity log.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{activity_log::EventType, user::User},
    service::{activity_log::ActivityLogService, token::TokenService},
    util::request::RequestMeta,
};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Hashes a password with bcrypt's default cost.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Compares a password with a stored hash. Malformed hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Rejects passwords shorter than `MIN_PASSWORD_LEN` characters.
pub fn check_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown names and wrong passwords produce the same error so the response does not
    /// reveal which names exist. On success the user's presence is refreshed.
    ///
    /// # Arguments
    /// - `name` - Login name, surrounding whitespace ignored
    /// - `password` - Plain text password
    /// - `meta` - Client address and user agent for the activity log
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and a signed token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown name or wrong password
    /// - `Err(AuthError::AccountDeactivated)` - Credentials are right but the account is off
    pub async fn login(
        &self,
        name: &str,
        password: &str,
        meta: &RequestMeta,
    ) -> Result<(User, String), AppError> {
        let name = name.trim();
        let activity = ActivityLogService::new(self.db);
        let repo = UserRepository::new(self.db);

        let user = match repo.find_by_name(name).await? {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                activity
                    .record(
                        name,
                        EventType::Login,
                        meta,
                        false,
                        Some(json!({ "reason": "invalid_credentials" })),
                    )
                    .await;
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !user.is_active {
            activity
                .record(
                    &user.name,
                    EventType::Login,
                    meta,
                    false,
                    Some(json!({ "reason": "account_deactivated" })),
                )
                .await;
            return Err(AuthError::AccountDeactivated(user.name).into());
        }

        let token = self.tokens.issue(&user)?;
        repo.touch_last_seen(user.id, Utc::now()).await?;
        activity
            .record(
                &user.name,
                EventType::Login,
                meta,
                true,
                Some(json!({ "role": user.role.as_str() })),
            )
            .await;

        tracing::info!("User {} logged in", user.name);

        Ok((user, token))
    }

    pub async fn logout(&self, user: &User, meta: &RequestMeta) {
        ActivityLogService::new(self.db)
            .record(&user.name, EventType::Logout, meta, true, None)
            .await;
    }

    /// Replaces the user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Wrong current password or weak new password
    pub async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
        meta: &RequestMeta,
    ) -> Result<(), AppError> {
        let activity = ActivityLogService::new(self.db);

        if !verify_password(current_password, &user.password_hash) {
            activity
                .record(
                    &user.name,
                    EventType::PasswordChange,
                    meta,
                    false,
                    Some(json!({ "reason": "wrong_current_password" })),
                )
                .await;
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }
        check_password_strength(new_password)?;

        let hash = hash_password(new_password)?;
        UserRepository::new(self.db)
            .set_password(user.id, hash)
            .await?;

        activity
            .record(&user.name, EventType::PasswordChange, meta, true, None)
            .await;

        Ok(())
    }
}
