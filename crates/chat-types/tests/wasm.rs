//! WASM-target tests for chat-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_types::message::*;
use chat_types::webhook::*;
use chat_types::config::*;
use chat_types::error::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hola");
    assert_eq!(msg.role(), Role::User);
    assert_eq!(msg.content(), "Hola");
}

#[wasm_bindgen_test]
fn message_ids_unique() {
    assert_ne!(Message::agent("a").id(), Message::agent("a").id());
}

// ─── Webhook Request Tests ───────────────────────────────

#[wasm_bindgen_test]
fn webhook_request_timestamp_from_js_clock() {
    // chrono reads the JS Date clock on wasm32 via the wasmbind feature
    let req = WebhookRequest::new("Hola", "conv");
    assert!(req.timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&req.timestamp).is_ok());
}

#[wasm_bindgen_test]
fn webhook_request_ids_from_js_rng() {
    let a = WebhookRequest::new("x", "c");
    let b = WebhookRequest::new("x", "c");
    assert_ne!(a.message_id, b.message_id);
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn config_default_is_valid() {
    assert!(ChatConfig::default().validate().is_ok());
}

#[wasm_bindgen_test]
fn config_unknown_agent() {
    let config = ChatConfig::default();
    assert!(matches!(
        config.endpoint_for("nope"),
        Err(ChatError::UnknownAgent(_))
    ));
}
