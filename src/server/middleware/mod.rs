//! Request guards.
//!
//! - `auth` - Bearer token authentication and permission checks
//! - `session` - Session-backed CSRF state for the Dropbox authorization flow

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
