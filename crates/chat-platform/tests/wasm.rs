//! WASM-target tests for chat-platform (Node.js runtime).
//!
//! Tests MemoryStorage and SettingsStore under wasm32-unknown-unknown
//! via `wasm-pack test --node`.
//!
//! IndexedDB and fetch need a browser and are exercised by the app.

use wasm_bindgen_test::*;

use chat_platform::settings::SettingsStore;
use chat_platform::storage::MemoryStorage;
use chat_core::ports::StoragePort;
use chat_types::config::{ChatConfig, SubmitOrdering};
use std::rc::Rc;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", b"v1").await.unwrap();
    storage.set("key", b"v2").await.unwrap();
    assert_eq!(storage.get("key").await.unwrap(), Some(b"v2".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_delete_nonexistent() {
    let storage = MemoryStorage::new();
    storage.delete("nonexistent").await.unwrap();
}

// ─── SettingsStore Tests ─────────────────────────────────

#[wasm_bindgen_test]
async fn settings_roundtrip() {
    let settings = SettingsStore::new(Rc::new(MemoryStorage::new()));
    assert!(settings.load().await.unwrap().is_none());

    let config = ChatConfig {
        ordering: SubmitOrdering::Serialized,
        toast_seconds: 8.0,
        ..ChatConfig::default()
    };
    settings.save(&config).await.unwrap();
    assert_eq!(settings.load().await.unwrap(), Some(config));
}
