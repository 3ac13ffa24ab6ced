//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters) and
//! `chat-ui` (toasts). The core never imports platform code.

use async_trait::async_trait;
use chat_types::{
    Result,
    notification::Notification,
    webhook::WebhookRequest,
};

// ─── Webhook Port ────────────────────────────────────────────

/// Raw transport result of a webhook call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait WebhookPort {
    /// POST one conversation turn as JSON.
    ///
    /// `Err` means the request never produced an HTTP response
    /// (network failure, CORS rejection, ...). Any status code,
    /// success or not, comes back as `Ok`.
    async fn post(&self, url: &str, request: &WebhookRequest) -> Result<WebhookResponse>;
}

// ─── Notifier Port ───────────────────────────────────────────

pub trait NotifierPort {
    fn notify(&self, notification: Notification);
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// List keys with a given prefix
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
