use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::post::{CreatePostParams, UpdatePostParams},
    service::{post::PostService, test::domain_user},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn params(author: &entity::user::Model, category_id: Option<i32>) -> CreatePostParams {
    CreatePostParams {
        title: "Quantum notes".to_string(),
        content: "Entanglement without the hype".to_string(),
        category_id,
        author_id: author.id,
        author_name: author.name.clone(),
    }
}
