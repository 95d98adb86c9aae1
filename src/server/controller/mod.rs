//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into service
//! parameters, call the service layer and convert the resulting domain models back into DTOs.
//! Every handler carries a `#[utoipa::path]` annotation so the router can assemble the
//! OpenAPI document from the same definitions.

pub mod activity_log;
pub mod auth;
pub mod backup;
pub mod calendar;
pub mod category;
pub mod chat;
pub mod comment;
pub mod dropbox;
pub mod file;
pub mod health;
pub mod news;
pub mod notification;
pub mod post;
pub mod presence;
pub mod telegram;
pub mod user;
pub mod video_call;
