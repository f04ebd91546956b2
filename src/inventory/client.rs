use std::fmt;

use async_trait::async_trait;

use super::types::InventoryEntry;

/// Errors that can occur while talking to the inventory service.
///
/// The session controller treats every variant the same way (show and wait),
/// so only the rendered message matters downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No response was obtained (DNS, refused connection, timeout, bad URL).
    Transport(String),
    /// The service answered with a non-success status.
    Remote { status: u16, body: String },
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "could not connect to API: {msg}"),
            ClientError::Remote { status, body } if body.trim().is_empty() => {
                write!(f, "API request failed with status code {status}")
            }
            ClientError::Remote { status, body } => {
                write!(f, "API request failed (HTTP {status}): {}", body.trim())
            }
            ClientError::Decode(msg) => write!(f, "failed to decode JSON: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Fetches the whole inventory.
    async fn list(&self) -> Result<Vec<InventoryEntry>, ClientError>;

    /// Creates the entry, or replaces the one with the same name.
    async fn upsert(&self, entry: &InventoryEntry) -> Result<(), ClientError>;

    /// Removes the entry with the given name.
    async fn delete(&self, name: &str) -> Result<(), ClientError>;
}
