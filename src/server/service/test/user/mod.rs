use crate::server::{
    config::DefaultAdminConfig,
    error::AppError,
    model::user::Role,
    service::{test::domain_user, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod ensure_default_admin;
mod toggle_status;
