//! Outbound clients for third-party services.
//!
//! Every client is cheap to clone and can run disabled: when its credentials are not
//! configured, calls fail with `IntegrationError::NotConfigured` instead of panicking, so
//! best-effort callers simply log and move on.

pub mod cloudinary;
pub mod dropbox;
pub mod mailer;
pub mod telegram;
