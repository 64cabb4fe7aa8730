use crate::domain::ports::CallbackChannel;
use crate::domain::receipt::TransactionReceipt;
use crate::error::{EngineError, Result};
use async_trait::async_trait;

/// Delivers transaction callbacks to a webhook endpoint.
///
/// Serializes the receipt to the JSON body a receiver would get and records
/// the outbound delivery. Transport is simulated: no request leaves the
/// process and delivery reports success.
pub struct WebhookCallback {
    endpoint: String,
}

impl WebhookCallback {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CallbackChannel for WebhookCallback {
    async fn send(&self, receipt: &TransactionReceipt) -> Result<()> {
        let payload = serde_json::to_string(receipt)?;
        tracing::info!(
            endpoint = %self.endpoint,
            %payload,
            "sending transaction callback"
        );
        Ok(())
    }
}

/// Callback channel that refuses every delivery.
///
/// Lets the rejection path be exercised from the command line and in tests
/// without a failing endpoint.
pub struct RejectingCallback;

#[async_trait]
impl CallbackChannel for RejectingCallback {
    async fn send(&self, receipt: &TransactionReceipt) -> Result<()> {
        Err(EngineError::Callback(format!(
            "delivery refused for {}",
            receipt.identifier
        )))
    }
}
