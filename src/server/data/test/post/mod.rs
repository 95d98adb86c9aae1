use crate::server::{data::post::PostRepository, model::post::CreatePostParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
