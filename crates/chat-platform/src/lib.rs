//! Browser adapters for the chat-core ports.

pub mod webhook;
pub mod storage;
pub mod settings;
