//! Bearer token authentication guard.
//!
//! Handlers build an `AuthGuard` from the request headers and call `require` with the
//! permissions they need. The guard verifies the token, reloads the user so deactivation
//! takes effect immediately, checks permissions and refreshes the user's presence.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated, active user holding all permissions
    /// - `Err(AuthError::InvalidToken)` - Missing, malformed or expired bearer token
    /// - `Err(AuthError::UserNotFoundOrInactive)` - Token user deleted or deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::InvalidToken)?;
        let user = authenticate(self.db, self.tokens, token).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from `Authorization: Bearer <token>`. The scheme is case-insensitive.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Resolves a raw token to its active user and refreshes their presence.
///
/// Shared by the HTTP guard and the websocket handshake.
pub async fn authenticate(
    db: &DatabaseConnection,
    tokens: &TokenService,
    token: &str,
) -> Result<User, AppError> {
    let claims = tokens.verify(token)?;
    let repo = UserRepository::new(db);

    let mut user = match repo.find_by_id(claims.user_id).await? {
        Some(user) if user.is_active => user,
        _ => return Err(AuthError::UserNotFoundOrInactive(claims.user_id).into()),
    };

    let now = Utc::now();
    match repo.touch_last_seen(user.id, now).await {
        Ok(()) => user.last_seen = Some(now),
        Err(e) => tracing::warn!("Failed to refresh presence for user {}: {}", user.id, e),
    }

    Ok(user)
}
