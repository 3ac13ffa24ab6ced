//! Settings persistence.
//!
//! Stores the `ChatConfig` as JSON in whichever storage backend the app
//! selected. Only configuration is stored; conversations never are.

use std::rc::Rc;

use chat_core::ports::StoragePort;
use chat_types::{Result, config::ChatConfig};

pub const SETTINGS_KEY: &str = "chat:settings";

#[derive(Clone)]
pub struct SettingsStore {
    storage: Rc<dyn StoragePort>,
}

impl SettingsStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Load saved settings, `None` when nothing has been saved yet.
    pub async fn load(&self) -> Result<Option<ChatConfig>> {
        match self.storage.get(SETTINGS_KEY).await? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    pub async fn save(&self, config: &ChatConfig) -> Result<()> {
        let json = serde_json::to_vec(config)?;
        self.storage.set(SETTINGS_KEY, &json).await?;
        log::info!("Settings saved to {}", self.storage.backend_name());
        Ok(())
    }

    /// Forget saved settings so the defaults apply on next load.
    pub async fn clear(&self) -> Result<()> {
        self.storage.delete(SETTINGS_KEY).await
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }
}
