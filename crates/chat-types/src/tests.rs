#[cfg(test)]
mod tests {
    use crate::{new_id, Result};
    use crate::message::*;
    use crate::event::*;
    use crate::webhook::*;
    use crate::notification::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hola");
        assert_eq!(msg.role(), Role::User);
        assert_eq!(msg.content(), "Hola");
        assert!(!msg.id().is_empty());
    }

    #[test]
    fn test_message_agent() {
        let msg = Message::agent("Bien, gracias");
        assert_eq!(msg.role(), Role::Agent);
        assert_eq!(msg.content(), "Bien, gracias");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("x");
        let b = Message::user("x");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), r#""agent""#);
        let role: Role = serde_json::from_str(r#""agent""#).unwrap();
        assert_eq!(role, Role::Agent);
    }

    #[test]
    fn test_new_id_is_uuid_v4() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    // ─── Webhook Request Tests ───────────────────────────────

    #[test]
    fn test_webhook_request_camel_case_keys() {
        let req = WebhookRequest::new("Hola", "conv-1");
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["message"], "Hola");
        assert_eq!(obj["conversationId"], "conv-1");
        assert!(obj["messageId"].as_str().is_some());
        assert!(obj["timestamp"].as_str().is_some());
    }

    #[test]
    fn test_webhook_request_timestamp_is_utc_iso8601() {
        let req = WebhookRequest::new("x", "c");
        assert!(req.timestamp.ends_with('Z'), "got {}", req.timestamp);
        let parsed = chrono::DateTime::parse_from_rfc3339(&req.timestamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        // millisecond precision: 2026-10-18T09:30:00.123Z
        assert_eq!(req.timestamp.len(), 24);
    }

    #[test]
    fn test_webhook_request_fresh_message_id() {
        let a = WebhookRequest::new("x", "c");
        let b = WebhookRequest::new("x", "c");
        assert_ne!(a.message_id, b.message_id);
    }

    // ─── Notification Tests ──────────────────────────────────

    #[test]
    fn test_notification_error() {
        let n = Notification::error("Error", "HTTP error! status: 500");
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.title, "Error");
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains(r#""severity":"error""#));
    }

    #[test]
    fn test_notification_info() {
        let n = Notification::info("Ajustes", "Se restauraron los valores por defecto");
        assert_eq!(n.severity, Severity::Info);
        assert_eq!(n.title, "Ajustes");
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::SessionStarted {
            conversation_id: "abc".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("SessionStarted"));
        assert!(json.contains("abc"));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.default_agent, "salud");
        assert!(config.agent("salud").is_some());
        assert!(config.agent("comida").is_some());
        assert_eq!(config.stale_replies, StaleReplyPolicy::Discard);
        assert_eq!(config.ordering, SubmitOrdering::Concurrent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_endpoint_for() {
        let config = ChatConfig::default();
        assert!(config.endpoint_for("comida").unwrap().ends_with("/comida"));
        assert_eq!(
            config.endpoint_for("viajes"),
            Err(ChatError::UnknownAgent("viajes".to_string()))
        );
    }

    #[test]
    fn test_config_validate_missing_default_agent() {
        let config = ChatConfig {
            default_agent: "viajes".to_string(),
            ..ChatConfig::default()
        };
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_config_validate_relative_url() {
        let mut config = ChatConfig::default();
        config.agents[0].url = "/webhook/salud".to_string();
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: ChatConfig = serde_json::from_str(r#"{"default_agent":"comida"}"#).unwrap();
        assert_eq!(config.default_agent, "comida");
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.toast_seconds, 4.0);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = ChatConfig::default();
        config.stale_replies = StaleReplyPolicy::Append;
        config.ordering = SubmitOrdering::Serialized;
        let json = serde_json::to_string(&config).unwrap();
        let back: ChatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            ChatError::Status { status: 500 }.to_string(),
            "HTTP error! status: 500"
        );
        assert_eq!(
            ChatError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ChatError::MissingReply.to_string(),
            "Response did not contain a reply"
        );
        assert_eq!(
            ChatError::Superseded.to_string(),
            "Request dropped: conversation was reset"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        let chat_err: ChatError = err.into();
        assert!(matches!(chat_err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_result_alias() {
        let ok: Result<u8> = Ok(1);
        assert_eq!(ok, Ok(1));
    }
}
