use std::{sync::Arc, time::Duration};

use oauth2::{
    basic::{BasicClient, BasicErrorResponseType, BasicTokenType},
    AuthUrl, AuthorizationCode, Client, ClientId, ClientSecret, CsrfToken, EmptyExtraTokenFields,
    EndpointNotSet, EndpointSet, RedirectUrl, RefreshToken, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse, TokenResponse, TokenUrl,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{sync::Mutex, time::Instant};
use url::Url;

use crate::server::{config::DropboxConfig, error::integration::IntegrationError};

pub const DROPBOX_API_URL: &str = "https://api.dropboxapi.com";
pub const DROPBOX_CONTENT_URL: &str = "https://content.dropboxapi.com";

const SERVICE: &str = "Dropbox";

/// Access tokens are refreshed this long before Dropbox reports them expired.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Type alias for the OAuth2 client configured for Dropbox authorization.
pub(crate) type DropboxOAuthClient = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Tokens returned by a code or refresh-token exchange.
#[derive(Debug, Clone)]
pub struct DropboxTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<Duration>,
}

/// File or folder entry returned by `list_folder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropboxEntry {
    #[serde(rename = ".tag", default)]
    pub tag: String,
    pub name: String,
    pub path_display: Option<String>,
    pub size: Option<u64>,
    pub server_modified: Option<String>,
}

impl DropboxEntry {
    pub fn is_file(&self) -> bool {
        self.tag == "file"
    }
}

#[derive(Deserialize)]
struct ListFolderResponse {
    entries: Vec<DropboxEntry>,
    cursor: String,
    has_more: bool,
}

#[derive(Deserialize)]
struct TemporaryLinkResponse {
    link: String,
}

struct CachedToken {
    value: String,
    expires_at: Option<Instant>,
}

/// Dropbox API client authenticated through a long-lived refresh token.
#[derive(Clone)]
pub struct DropboxClient {
    http: reqwest::Client,
    oauth: Option<DropboxOAuthClient>,
    refresh_token: Option<String>,
    api_url: String,
    content_url: String,
    access_token: Arc<Mutex<Option<CachedToken>>>,
}

impl DropboxClient {
    /// Creates the client against the public Dropbox endpoints.
    ///
    /// # Returns
    /// - `Ok(DropboxClient)` - Configured (or disabled) client
    /// - `Err(IntegrationError::OAuth)` - One of the configured OAuth URLs is malformed
    pub fn new(
        http: reqwest::Client,
        config: Option<&DropboxConfig>,
    ) -> Result<Self, IntegrationError> {
        Self::with_base_urls(http, config, DROPBOX_API_URL, DROPBOX_CONTENT_URL)
    }

    pub fn with_base_urls(
        http: reqwest::Client,
        config: Option<&DropboxConfig>,
        api_url: &str,
        content_url: &str,
    ) -> Result<Self, IntegrationError> {
        let oauth = match config {
            Some(config) => Some(setup_oauth_client(config)?),
            None => {
                tracing::warn!("Dropbox credentials not set, backups are disabled");
                None
            }
        };

        Ok(Self {
            http,
            oauth,
            refresh_token: config.and_then(|c| c.refresh_token.clone()),
            api_url: api_url.trim_end_matches('/').to_string(),
            content_url: content_url.trim_end_matches('/').to_string(),
            access_token: Arc::new(Mutex::new(None)),
        })
    }

    /// Whether both app credentials and a refresh token are available.
    pub fn is_configured(&self) -> bool {
        self.oauth.is_some() && self.refresh_token.is_some()
    }

    /// Builds the authorization URL for the offline-access consent screen.
    ///
    /// # Returns
    /// - `Ok((Url, CsrfToken))` - URL to redirect the operator to and the CSRF state to store
    /// - `Err(IntegrationError::NotConfigured)` - App credentials are not set
    pub fn authorize_url(&self) -> Result<(Url, CsrfToken), IntegrationError> {
        let oauth = self.oauth()?;

        Ok(oauth
            .authorize_url(CsrfToken::new_random)
            .add_extra_param("token_access_type", "offline")
            .url())
    }

    /// Exchanges an authorization code for access and refresh tokens.
    pub async fn exchange_code(&self, code: String) -> Result<DropboxTokens, IntegrationError> {
        let token = self
            .oauth()?
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http)
            .await
            .map_err(|e| IntegrationError::OAuth(e.to_string()))?;

        Ok(DropboxTokens {
            access_token: token.access_token().secret().clone(),
            refresh_token: token.refresh_token().map(|t| t.secret().clone()),
            expires_in: token.expires_in(),
        })
    }

    /// Exchanges the configured refresh token for a fresh access token.
    pub async fn refresh(&self) -> Result<DropboxTokens, IntegrationError> {
        let Some(refresh_token) = &self.refresh_token else {
            return Err(IntegrationError::NotConfigured("Dropbox refresh token"));
        };

        let token = self
            .oauth()?
            .exchange_refresh_token(&RefreshToken::new(refresh_token.clone()))
            .request_async(&self.http)
            .await
            .map_err(|e| IntegrationError::OAuth(e.to_string()))?;

        Ok(DropboxTokens {
            access_token: token.access_token().secret().clone(),
            refresh_token: token.refresh_token().map(|t| t.secret().clone()),
            expires_in: token.expires_in(),
        })
    }

    /// Returns a cached access token, refreshing it when missing or about to expire.
    async fn access_token(&self) -> Result<String, IntegrationError> {
        let mut cached = self.access_token.lock().await;

        if let Some(token) = cached.as_ref() {
            let fresh = token
                .expires_at
                .is_none_or(|expires_at| Instant::now() + EXPIRY_MARGIN < expires_at);
            if fresh {
                return Ok(token.value.clone());
            }
        }

        let tokens = self.refresh().await?;
        tracing::debug!("Refreshed Dropbox access token");

        *cached = Some(CachedToken {
            value: tokens.access_token.clone(),
            expires_at: tokens.expires_in.map(|ttl| Instant::now() + ttl),
        });

        Ok(tokens.access_token)
    }

    /// Uploads a file, auto-renaming on conflict.
    ///
    /// # Returns
    /// - `Ok(DropboxEntry)` - Metadata of the stored file
    /// - `Err(IntegrationError)` - Not configured, unreachable or rejected
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
    ) -> Result<DropboxEntry, IntegrationError> {
        let token = self.access_token().await?;
        let arg = serde_json::json!({
            "path": path,
            "mode": "add",
            "autorename": true,
            "mute": false
        });

        let response = self
            .http
            .post(format!("{}/2/files/upload", self.content_url))
            .bearer_auth(token)
            .header("Dropbox-API-Arg", arg.to_string())
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(request_error)?;

        let mut entry: DropboxEntry = parse(response).await?;
        // upload responses omit the tag
        if entry.tag.is_empty() {
            entry.tag = "file".to_string();
        }
        Ok(entry)
    }

    /// Lists a folder, following pagination cursors. A missing folder lists as empty.
    pub async fn list_folder(&self, path: &str) -> Result<Vec<DropboxEntry>, IntegrationError> {
        let first = self
            .rpc::<ListFolderResponse>("files/list_folder", serde_json::json!({ "path": path }))
            .await;

        let mut page = match first {
            Ok(page) => page,
            Err(IntegrationError::Upstream { message, .. }) if message.contains("not_found") => {
                return Ok(Vec::new())
            }
            Err(err) => return Err(err),
        };

        let mut entries = std::mem::take(&mut page.entries);
        while page.has_more {
            page = self
                .rpc::<ListFolderResponse>(
                    "files/list_folder/continue",
                    serde_json::json!({ "cursor": page.cursor }),
                )
                .await?;
            entries.append(&mut page.entries);
        }

        Ok(entries)
    }

    pub async fn delete(&self, path: &str) -> Result<(), IntegrationError> {
        self.rpc::<serde_json::Value>("files/delete_v2", serde_json::json!({ "path": path }))
            .await
            .map(|_| ())
    }

    /// Creates a four-hour download link for a stored file.
    pub async fn temporary_link(&self, path: &str) -> Result<String, IntegrationError> {
        self.rpc::<TemporaryLinkResponse>(
            "files/get_temporary_link",
            serde_json::json!({ "path": path }),
        )
        .await
        .map(|response| response.link)
    }

    async fn rpc<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<T, IntegrationError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .post(format!("{}/2/{}", self.api_url, endpoint))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        parse(response).await
    }

    fn oauth(&self) -> Result<&DropboxOAuthClient, IntegrationError> {
        self.oauth
            .as_ref()
            .ok_or(IntegrationError::NotConfigured(SERVICE))
    }
}

/// Creates the OAuth2 client for the Dropbox authorization code flow.
fn setup_oauth_client(config: &DropboxConfig) -> Result<DropboxOAuthClient, IntegrationError> {
    let invalid = |e: url::ParseError| IntegrationError::OAuth(format!("invalid URL: {}", e));

    Ok(BasicClient::new(ClientId::new(config.client_id.clone()))
        .set_client_secret(ClientSecret::new(config.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.auth_url.clone()).map_err(invalid)?)
        .set_token_uri(TokenUrl::new(config.token_url.clone()).map_err(invalid)?)
        .set_redirect_uri(RedirectUrl::new(config.redirect_url.clone()).map_err(invalid)?))
}

fn request_error(source: reqwest::Error) -> IntegrationError {
    IntegrationError::Request {
        service: SERVICE,
        source,
    }
}

async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, IntegrationError> {
    if !response.status().is_success() {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", status));
        return Err(IntegrationError::Upstream {
            service: SERVICE,
            message,
        });
    }

    response.json::<T>().await.map_err(request_error)
}
