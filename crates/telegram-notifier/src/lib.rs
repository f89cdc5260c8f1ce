use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// Errors from the notification system.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Telegram API error: {0}")]
    Telegram(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Trait for delivery channels.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
    fn name(&self) -> &str;
}

/// Delivers the rendered report to a Telegram chat via the Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Result<Self, NotifyError> {
        if bot_token.is_empty() || chat_id.is_empty() {
            return Err(NotifyError::Config(
                "bot token and chat id are required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            client,
            bot_token,
            chat_id,
        })
    }

    fn endpoint(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token)
    }
}

#[async_trait]
impl NotificationChannel for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let payload = json!({
            "chat_id": self.chat_id,
            "text": message,
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        });

        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Telegram(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        tracing::debug!("telegram notification sent");
        Ok(())
    }

    fn name(&self) -> &str {
        "telegram"
    }
}
