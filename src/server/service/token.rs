//! Signed access tokens.
//!
//! Tokens are HS256 JWTs valid for seven days. The claims carry enough of the user to
//! render a session client-side, but the auth guard always reloads the user from the
//! database so deactivation takes effect immediately.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::user::User};

const TOKEN_LIFETIME_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User email.
    pub sub: String,
    pub user_id: i32,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    pub exp: i64,
    pub iat: i64,
}

/// Issues and verifies access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for `user`.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::TokenIssue)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.email.clone(),
            user_id: user.id,
            name: user.name.clone(),
            role: user.role.as_str().to_string(),
            is_active: user.is_active,
            exp: (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
            iat: now.timestamp(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verifies signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("Token rejected: {}", err);
                AuthError::InvalidToken
            })
    }
}
