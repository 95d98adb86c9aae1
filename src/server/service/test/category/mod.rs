use crate::server::{
    error::AppError,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
    service::category::{CategoryService, DEFAULT_CATEGORIES},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod initialize_defaults;
mod update;
