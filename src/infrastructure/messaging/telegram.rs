use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    application::services::notifier::NotifierClient,
    domain::{
        errors::DeliveryError,
        models::{OutboundMessage, SentMessage},
    },
};

pub struct TelegramClient {
    http: Client,
    base_url: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(bot_token: String) -> Arc<dyn NotifierClient> {
        Self::with_base_url(bot_token, "https://api.telegram.org".to_string())
    }

    /// Base URL override for tests pointing at a mock server.
    pub fn with_base_url(bot_token: String, base_url: String) -> Arc<dyn NotifierClient> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("gameday-notifier/telegram")
                .build()
                .expect("failed to build telegram client"),
            base_url,
            bot_token,
        }) as Arc<dyn NotifierClient>
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.bot_token, method)
    }
}

#[async_trait]
impl NotifierClient for TelegramClient {
    async fn send_message(
        &self,
        message: &OutboundMessage,
    ) -> Result<SentMessage, DeliveryError> {
        let url = self.build_url("sendMessage");
        let body = SendMessageBody {
            chat_id: &message.recipient,
            text: &message.text,
        };
        let response = self.http.post(url).json(&body).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SendMessageResponse = response.json().await?;
        if !payload.ok {
            return Err(DeliveryError::Api {
                status: status.as_u16(),
                body: payload
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        let result = payload.result.ok_or_else(|| DeliveryError::Api {
            status: status.as_u16(),
            body: "missing result in response".to_string(),
        })?;

        info!(
            "message sent successfully: {}",
            result.text.as_deref().unwrap_or_default()
        );

        Ok(SentMessage {
            message_id: result.message_id,
            text: result.text,
        })
    }
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
    #[serde(default)]
    result: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
struct TelegramMessage {
    message_id: i64,
    text: Option<String>,
}
