use serde::{Deserialize, Serialize};

/// Outbound chat message, built fresh for every invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub recipient: String,
    pub text: String,
}

/// The provider's confirmed message object, returned after a successful send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
    pub text: Option<String>,
}
