pub mod message;
pub mod event;
pub mod webhook;
pub mod notification;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;

/// Mint a fresh opaque identifier (UUID v4, 122 bits of entropy).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
