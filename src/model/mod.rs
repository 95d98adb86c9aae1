//! Wire types shared by every HTTP endpoint.
//!
//! DTOs are plain serde structs annotated with utoipa `ToSchema` so they appear in the
//! generated OpenAPI document. Server-side domain models convert into these at the
//! controller boundary.

pub mod activity_log;
pub mod api;
pub mod auth;
pub mod backup;
pub mod calendar;
pub mod category;
pub mod chat;
pub mod comment;
pub mod file;
pub mod news;
pub mod notification;
pub mod post;
pub mod presence;
pub mod telegram;
pub mod user;
pub mod video_call;
