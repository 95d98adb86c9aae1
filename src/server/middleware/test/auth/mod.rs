use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
    model::user::User,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod bearer_token;
mod require;

const SECRET: &str = "test-secret";

fn headers_with_token(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn load_user(db: &sea_orm::DatabaseConnection, id: i32) -> User {
    UserRepository::new(db).find_by_id(id).await.unwrap().unwrap()
}
