use crate::shared::infrastructure::notifier::{NotificationFailure, Notifier};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: i64,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Delivers messages through the Telegram Bot API `sendMessage` method.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_token: String,
}

impl TelegramNotifier {
    pub fn new(
        api_base: impl Into<String>,
        bot_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotificationFailure> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| NotificationFailure::Transport(err.to_string()))?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), NotificationFailure> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessageBody { chat_id, text })
            .send()
            .await
            .map_err(|err| NotificationFailure::Transport(err.without_url().to_string()))?;

        let body: BotApiResponse = response
            .json()
            .await
            .map_err(|err| NotificationFailure::Transport(err.without_url().to_string()))?;

        if body.ok {
            Ok(())
        } else {
            Err(NotificationFailure::Rejected(
                body.description.unwrap_or_else(|| "unknown reason".into()),
            ))
        }
    }
}
