use crate::server::{
    error::AppError,
    service::{comment::CommentService, test::domain_user},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_tree;
