//! SeaORM repositories, one per table.
//!
//! Repositories take `&DatabaseConnection`, run the query and return domain models. Child rows
//! (poll options and responses, call participants) are loaded alongside their parent.


pub mod activity_log;
pub mod category;
pub mod chat_message;
pub mod comment;
pub mod doodle;
pub mod file;
pub mod news;
pub mod post;
pub mod user;
pub mod video_call;

#[cfg(test)]
mod test;
