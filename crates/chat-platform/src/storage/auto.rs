//! Auto-detect the best available storage backend.
//!
//! Priority: IndexedDB → Memory (fallback)

use std::rc::Rc;
use chat_core::ports::StoragePort;
use super::{IndexedDbStorage, MemoryStorage};

/// Open the best available storage backend. Never fails: without
/// IndexedDB, settings live in memory for the page's lifetime.
pub async fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match IndexedDbStorage::open().await {
        Ok(idb) => {
            log::info!("Settings backend: IndexedDB");
            Rc::new(idb)
        }
        Err(e) => {
            log::warn!("IndexedDB unavailable ({}), settings kept in memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
