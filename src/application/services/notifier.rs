use async_trait::async_trait;

use crate::domain::{
    errors::DeliveryError,
    models::{OutboundMessage, SentMessage},
};

#[async_trait]
pub trait NotifierClient: Send + Sync {
    async fn send_message(
        &self,
        message: &OutboundMessage,
    ) -> Result<SentMessage, DeliveryError>;
}
