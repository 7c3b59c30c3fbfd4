//! Sheet store port - Remote persistence of a character sheet

use async_trait::async_trait;

use crate::application::dto::{SaveAck, SheetSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Request to sheet store failed: {0}")]
    Transport(String),
    #[error("Sheet store responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Sheet store returned a malformed sheet: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Request to sheet store failed: {0}")]
    Transport(String),
    #[error("Sheet store responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Could not encode sheet: {0}")]
    Encode(String),
}

/// Store holding a single character sheet
#[async_trait]
pub trait SheetStorePort: Send + Sync {
    /// Fetch the stored sheet
    async fn load(&self) -> Result<SheetSnapshot, LoadError>;

    /// Replace the stored sheet
    async fn save(&self, snapshot: &SheetSnapshot) -> Result<SaveAck, SaveError>;
}
