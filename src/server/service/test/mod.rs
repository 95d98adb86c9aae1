mod auth;
mod category;
mod chat;
mod comment;
mod doodle;
mod file;
mod news;
mod post;
mod telegram;
mod user;
mod video_call;

use crate::server::model::user::User;

/// Converts a factory row into the domain user services expect.
fn domain_user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}
