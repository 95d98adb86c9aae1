//! Domain types passed between repositories, services and controllers.
//!
//! Rows are turned into these with `from_entity` when they leave `data/`, and into DTOs with
//! `into_dto` just before a handler responds. Text columns holding roles, statuses and event
//! types become enums here, so a bad value surfaces as an error at the repository.


pub mod activity_log;
pub mod backup;
pub mod category;
pub mod chat;
pub mod comment;
pub mod doodle;
pub mod file;
pub mod news;
pub mod notification;
pub mod post;
pub mod telegram;
pub mod user;
pub mod video_call;
