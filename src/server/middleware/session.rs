//! Session storage for the Dropbox authorization flow.
//!
//! The API itself is stateless (bearer tokens); the session only carries the OAuth CSRF
//! state between `/dropbox/auth` and `/dropbox/callback`.

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_DROPBOX_CSRF_STATE: &str = "dropbox:csrf_state";

/// CSRF protection session management.
///
/// Handles CSRF state storage and validation for the Dropbox OAuth flow. The state is
/// stored when the authorization URL is generated and checked during the callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new CsrfSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF state in the session.
    ///
    /// # Returns
    /// - `Ok(())` - State successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_state(&self, state: String) -> Result<(), AppError> {
        self.session.insert(SESSION_DROPBOX_CSRF_STATE, state).await?;
        Ok(())
    }

    /// Removes the stored state and compares it with the one from the callback.
    ///
    /// The state is removed even on mismatch so each value can only be used once.
    ///
    /// # Returns
    /// - `Ok(())` - States match
    /// - `Err(AuthError::CsrfValidationFailed)` - No stored state or a different one
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        let stored: Option<String> = self.session.remove(SESSION_DROPBOX_CSRF_STATE).await?;

        match stored {
            Some(stored) if stored == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}
