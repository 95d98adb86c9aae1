use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::server::{config::CloudinaryConfig, error::integration::IntegrationError};

pub const CLOUDINARY_API_URL: &str = "https://api.cloudinary.com/v1_1";

/// Folder every upload is stored under.
pub const UPLOAD_FOLDER: &str = "iskandar_community";

const SERVICE: &str = "Cloudinary";

/// Cloudinary resource type for a MIME type: `image` for images, `raw` for everything else.
pub fn resource_type_for(content_type: &str) -> &'static str {
    if content_type.starts_with("image/") {
        "image"
    } else {
        "raw"
    }
}

/// Signs request parameters the way Cloudinary expects.
///
/// Parameters are sorted by name, joined as `k=v` pairs with `&`, suffixed with the API
/// secret and hashed with SHA-256 (hex encoded).
pub fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Asset stored in Cloudinary after a successful upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedAsset {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default)]
    pub bytes: i64,
    pub resource_type: String,
}

#[derive(Deserialize)]
struct CloudinaryErrorBody {
    error: CloudinaryErrorMessage,
}

#[derive(Deserialize)]
struct CloudinaryErrorMessage {
    message: String,
}

/// Signed upload client for Cloudinary.
#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    base_url: String,
    config: Option<CloudinaryConfig>,
}

impl CloudinaryClient {
    pub fn new(http: reqwest::Client, config: Option<CloudinaryConfig>) -> Self {
        Self::with_base_url(http, CLOUDINARY_API_URL, config)
    }

    pub fn with_base_url(
        http: reqwest::Client,
        base_url: &str,
        config: Option<CloudinaryConfig>,
    ) -> Self {
        if config.is_none() {
            tracing::warn!("Cloudinary credentials not set, file uploads are disabled");
        }
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Uploads a file into the community folder.
    ///
    /// # Arguments
    /// - `bytes` - File content
    /// - `filename` - Original file name, forwarded to Cloudinary
    /// - `content_type` - MIME type, decides between `image` and `raw` resource types
    ///
    /// # Returns
    /// - `Ok(UploadedAsset)` - Stored asset with its public id and secure URL
    /// - `Err(IntegrationError)` - Storage disabled, unreachable or rejected the upload
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadedAsset, IntegrationError> {
        let config = self.config()?;
        let resource_type = resource_type_for(content_type);
        let timestamp = Utc::now().timestamp().to_string();

        let signature = sign_params(
            &[
                ("folder", UPLOAD_FOLDER.to_string()),
                ("timestamp", timestamp.clone()),
            ],
            &config.api_secret,
        );

        let file = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;

        let form = Form::new()
            .part("file", file)
            .text("api_key", config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", UPLOAD_FOLDER)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let url = format!(
            "{}/{}/{}/upload",
            self.base_url, config.cloud_name, resource_type
        );

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;

        Self::parse(response).await
    }

    /// Deletes a stored asset by public id.
    pub async fn destroy(
        &self,
        public_id: &str,
        resource_type: &str,
    ) -> Result<(), IntegrationError> {
        let config = self.config()?;
        let timestamp = Utc::now().timestamp().to_string();

        let signature = sign_params(
            &[
                ("public_id", public_id.to_string()),
                ("timestamp", timestamp.clone()),
            ],
            &config.api_secret,
        );

        let url = format!(
            "{}/{}/{}/destroy",
            self.base_url, config.cloud_name, resource_type
        );

        let response = self
            .http
            .post(url)
            .form(&[
                ("public_id", public_id),
                ("timestamp", timestamp.as_str()),
                ("api_key", config.api_key.as_str()),
                ("signature", signature.as_str()),
                ("signature_algorithm", "sha256"),
            ])
            .send()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;

        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }

    fn config(&self) -> Result<&CloudinaryConfig, IntegrationError> {
        self.config
            .as_ref()
            .ok_or(IntegrationError::NotConfigured(SERVICE))
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, IntegrationError> {
        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<CloudinaryErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("HTTP {}", status),
            };
            return Err(IntegrationError::Upstream {
                service: SERVICE,
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })
    }
}
