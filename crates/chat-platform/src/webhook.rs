//! Webhook adapter.
//!
//! Posts conversation turns as JSON using browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use chat_core::ports::{WebhookPort, WebhookResponse};
use chat_types::{ChatError, Result, webhook::WebhookRequest};

/// Webhook client backed by `fetch()`.
#[derive(Debug, Default, Clone)]
pub struct GlooWebhookClient;

impl GlooWebhookClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl WebhookPort for GlooWebhookClient {
    async fn post(&self, url: &str, request: &WebhookRequest) -> Result<WebhookResponse> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("Webhook {} answered HTTP {}", url, status);
        }

        Ok(WebhookResponse::new(status, body))
    }
}
