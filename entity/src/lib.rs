//! SeaORM entity models for every table owned by the community backend.

pub mod prelude;

pub mod activity_log;
pub mod category;
pub mod chat_message;
pub mod comment;
pub mod doodle;
pub mod doodle_option;
pub mod doodle_response;
pub mod file;
pub mod news;
pub mod post;
pub mod user;
pub mod video_call;
pub mod video_call_participant;
