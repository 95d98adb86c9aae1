use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::error::integration::IntegrationError;

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

const SERVICE: &str = "Telegram";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bot API envelope: `{"ok": bool, "result": ..., "description": ...}`.
#[derive(Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

/// Subset of the `getMe` result exposed to admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramBotInfo {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

/// Minimal Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl TelegramClient {
    /// Creates a client against the public Bot API.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `token` - Bot token, `None` to run disabled
    pub fn new(http: reqwest::Client, token: Option<String>) -> Self {
        Self::with_base_url(http, TELEGRAM_API_URL, token)
    }

    pub fn with_base_url(http: reqwest::Client, base_url: &str, token: Option<String>) -> Self {
        if token.is_none() {
            tracing::warn!("TELEGRAM_BOT_TOKEN not set, Telegram notifications are disabled");
        }
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Sends an HTML formatted message to a chat.
    ///
    /// # Arguments
    /// - `chat_id` - Telegram chat id of the recipient
    /// - `text` - Message body using Telegram's HTML subset
    ///
    /// # Returns
    /// - `Ok(())` - Telegram accepted the message
    /// - `Err(IntegrationError)` - Disabled, unreachable, or rejected by Telegram
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), IntegrationError> {
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        self.call::<serde_json::Value, _>("sendMessage", Some(&body))
            .await
            .map(|_| ())
    }

    /// Fetches the bot's own profile via `getMe`.
    pub async fn get_me(&self) -> Result<TelegramBotInfo, IntegrationError> {
        self.call::<TelegramBotInfo, ()>("getMe", None).await
    }

    async fn call<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &str,
        body: Option<&B>,
    ) -> Result<T, IntegrationError> {
        let Some(token) = &self.token else {
            return Err(IntegrationError::NotConfigured(SERVICE));
        };

        let url = format!("{}/bot{}/{}", self.base_url, token, method);
        let request = match body {
            Some(body) => self.http.post(url).json(body),
            None => self.http.get(url),
        };

        let response = request
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?
            .json::<TelegramResponse<T>>()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;

        match (response.ok, response.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(IntegrationError::Upstream {
                service: SERVICE,
                message: response
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }
}
