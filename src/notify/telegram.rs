/// Telegram Bot API client for alert delivery
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{MonitorError, Result};

const BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram notifier bound to one bot token and one recipient
pub struct TelegramNotifier {
    client: Client,
    bot_token: String,
    chat_id: String,
    base_url: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        TelegramNotifier {
            client,
            bot_token,
            chat_id,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API host (tests, proxies)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Deliver a text message to the configured chat
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .client
            .post(format!(
                "{}/bot{}/sendMessage",
                self.base_url, self.bot_token
            ))
            .json(&request)
            .send()
            .await
            .map_err(|e| MonitorError::NotifyFailed(format!("Request error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MonitorError::NotifyFailed(format!("Body read error: {}", e)))?;

        debug!("sendMessage response status: {}, body: {}", status, body);

        let send_response: SendMessageResponse = serde_json::from_str(&body)
            .map_err(|e| MonitorError::NotifyFailed(format!("Parse error: {}", e)))?;

        if !send_response.ok {
            return Err(MonitorError::NotifyFailed(format!(
                "Telegram API rejected message: {}",
                send_response.description.unwrap_or_default()
            )));
        }

        info!("Alert delivered to chat {}", self.chat_id);
        Ok(())
    }
}

/// Alert text for a band entry
pub fn format_alert(index_symbol: &str, price: f64, center: f64) -> String {
    format!(
        "{} ALERT: approximated {:.2} is near your target center at {:.2}",
        index_symbol, price, center
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_alert() {
        let text = format_alert("SPX", 5910.4, 5900.0);
        assert_eq!(
            text,
            "SPX ALERT: approximated 5910.40 is near your target center at 5900.00"
        );
    }

    #[test]
    fn test_rejected_send_decodes_description() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        let response: SendMessageResponse = serde_json::from_str(body).unwrap();
        assert!(!response.ok);
        assert_eq!(
            response.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }
}
