//! HTTP delivery — POSTs one push payload per attachment to the endpoint.

use reqwest::header::CONTENT_TYPE;

use crate::config::RelayConfig;
use crate::error::{ConfigError, Error, PushError};
use crate::message::WebhookMessage;
use crate::payload::PushPayload;

/// Client for a single push endpoint.
pub struct PushClient {
    endpoint_url: String,
    client: reqwest::Client,
}

impl PushClient {
    /// Build a client from config (timeout and User-Agent applied).
    pub fn new(config: RelayConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "http_client".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            endpoint_url: config.endpoint_url,
            client,
        })
    }

    /// Client with default config for the given endpoint.
    pub fn for_endpoint(url: impl Into<String>) -> Result<Self, Error> {
        Self::new(RelayConfig::for_endpoint(url))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Forward a webhook message: one POST per attachment, in order.
    ///
    /// Stops at the first failure; remaining attachments are not sent.
    pub async fn send_message(&self, msg: &WebhookMessage) -> Result<(), PushError> {
        for att in &msg.attachments {
            let payload = PushPayload::from_attachment(att);
            self.send_payload(&payload).await?;
        }
        Ok(())
    }

    /// POST a single payload and check the response status.
    pub async fn send_payload(&self, payload: &PushPayload) -> Result<(), PushError> {
        let body = serde_json::to_vec(payload)?;

        let resp = self
            .client
            .post(&self.endpoint_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| PushError::Network {
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PushError::Delivery {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        tracing::debug!(
            status = status.as_u16(),
            title = %payload.title,
            "push payload delivered"
        );
        Ok(())
    }
}

/// Forward a webhook message to the given endpoint with a default client.
///
/// Entry point for callers that hold only a destination URL.
pub async fn send_push_message(url: &str, msg: &WebhookMessage) -> Result<(), Error> {
    let client = PushClient::for_endpoint(url)?;
    client.send_message(msg).await?;
    Ok(())
}
