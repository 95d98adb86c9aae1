use crate::server::{
    data::activity_log::ActivityLogRepository,
    error::{auth::AuthError, AppError},
    model::activity_log::{ActivityLogFilter, EventType},
    service::{
        auth::{hash_password, verify_password, AuthService},
        test::domain_user,
        token::TokenService,
    },
    util::request::RequestMeta,
};
use test_utils::{builder::TestBuilder, factory};

mod change_password;
mod login;

fn meta() -> RequestMeta {
    RequestMeta {
        ip_address: "203.0.113.7".to_string(),
        user_agent: Some("test-agent".to_string()),
    }
}

fn login_filter(username: &str) -> ActivityLogFilter {
    ActivityLogFilter {
        username: Some(username.to_string()),
        event_type: Some(EventType::Login),
        limit: 10,
        ..Default::default()
    }
}
