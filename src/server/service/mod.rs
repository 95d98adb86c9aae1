//! Business rules for every API module.
//!
//! A service is built per request from borrowed state (`&DatabaseConnection`, the notifier)
//! and owns the checks that do not belong in SQL: who may edit what, length and format limits,
//! poll and call state transitions. Notifications are queued on the `Notifier` and never change
//! the outcome of the request that triggered them.


pub mod activity_log;
pub mod auth;
pub mod backup;
pub mod category;
pub mod chat;
pub mod comment;
pub mod doodle;
pub mod file;
pub mod news;
pub mod notification;
pub mod post;
pub mod presence;
pub mod telegram;
pub mod token;
pub mod user;
pub mod video_call;

#[cfg(test)]
mod test;
