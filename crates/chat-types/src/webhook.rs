use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// JSON body posted to an agent webhook for one conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub message: String,
    pub conversation_id: String,
    pub message_id: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

impl WebhookRequest {
    /// Build a request for `text`, minting a new message id and
    /// capturing the current time.
    pub fn new(text: impl Into<String>, conversation_id: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            conversation_id: conversation_id.into(),
            message_id: crate::new_id(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
