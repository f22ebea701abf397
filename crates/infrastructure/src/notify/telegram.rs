use async_trait::async_trait;
use blockcheck_application::ports::NotificationSink;
use blockcheck_domain::DomainError;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Delivers report summaries via the Telegram Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("Blockcheck/1.0 (report)")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            bot_token,
            chat_id,
        })
    }
}

#[async_trait]
impl NotificationSink for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), DomainError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": message,
            }))
            .send()
            .await
            .map_err(|e| DomainError::NotificationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::NotificationFailed(format!(
                "Telegram API returned {status}"
            )));
        }

        debug!("Report delivered to Telegram");
        Ok(())
    }
}
