//! HTTP client for the remote sheet store

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::application::dto::{LoadResponse, SaveAck, SheetSnapshot};
use crate::application::ports::outbound::{LoadError, SaveError, SheetStorePort};

/// Client for a sheet store living at a single URL
pub struct HttpSheetStore {
    client: Client,
    url: String,
}

impl HttpSheetStore {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SheetStoreClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetch the stored sheet envelope
    pub async fn fetch(&self) -> Result<LoadResponse, SheetStoreClientError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SheetStoreClientError::ApiError(status, error_text));
        }

        Ok(response.json().await?)
    }

    /// Post a sheet as JSON
    pub async fn store(
        &self,
        snapshot: &SheetSnapshot,
    ) -> Result<serde_json::Value, SheetStoreClientError> {
        let response = self.client.post(&self.url).json(snapshot).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SheetStoreClientError::ApiError(status, error_text));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SheetStoreClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error ({0}): {1}")]
    ApiError(u16, String),
}

// =============================================================================
// SheetStorePort Implementation
// =============================================================================

#[async_trait]
impl SheetStorePort for HttpSheetStore {
    async fn load(&self) -> Result<SheetSnapshot, LoadError> {
        debug!(url = %self.url, "Loading sheet from store");
        match self.fetch().await {
            Ok(response) => Ok(response.body),
            Err(SheetStoreClientError::ApiError(status, message)) => {
                Err(LoadError::Status { status, message })
            }
            Err(SheetStoreClientError::HttpError(e)) if e.is_decode() => {
                Err(LoadError::Malformed(e.to_string()))
            }
            Err(e) => Err(LoadError::Transport(e.to_string())),
        }
    }

    async fn save(&self, snapshot: &SheetSnapshot) -> Result<SaveAck, SaveError> {
        debug!(url = %self.url, "Saving sheet to store");
        match self.store(snapshot).await {
            Ok(body) => Ok(SaveAck { body }),
            Err(SheetStoreClientError::ApiError(status, message)) => {
                Err(SaveError::Status { status, message })
            }
            Err(SheetStoreClientError::HttpError(e)) if e.is_builder() => {
                Err(SaveError::Encode(e.to_string()))
            }
            Err(e) => Err(SaveError::Transport(e.to_string())),
        }
    }
}
