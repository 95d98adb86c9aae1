use crate::server::{
    config::CloudinaryConfig,
    error::AppError,
    integration::cloudinary::CloudinaryClient,
    service::file::{FileService, Link},
};
use test_utils::{builder::TestBuilder, factory};

use super::domain_user;

mod delete;

fn storage(base_url: &str) -> CloudinaryClient {
    CloudinaryClient::with_base_url(
        reqwest::Client::new(),
        base_url,
        Some(CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        }),
    )
}
