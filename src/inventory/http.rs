//! HTTP implementation of [`InventoryClient`].
//!
//! Endpoints, all authenticated with `Authorization: Bearer <token>`:
//!
//! ```text
//! GET    {base}/inventory      → 200 + JSON array of entries
//! POST   {base}/report         → 200, body ignored
//! DELETE {base}/delete/{name}  → 200, body ignored
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Response, Url};

use super::client::{ClientError, InventoryClient};
use super::types::InventoryEntry;

/// Inventory client backed by `reqwest`.
///
/// Holds nothing mutable: the base URL and token are fixed for the session.
pub struct HttpInventoryClient {
    base_url: Url,
    token: String,
    client: reqwest::Client,
}

impl HttpInventoryClient {
    pub fn new(base_url: Url, token: String) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Transport(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Turns a non-success response into `ClientError::Remote` carrying the body text.
    async fn expect_success(response: Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!("Inventory API error: {} - {}", status, body.trim());
        Err(ClientError::Remote {
            status: status.as_u16(),
            body,
        })
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn list(&self) -> Result<Vec<InventoryEntry>, ClientError> {
        let url = self.endpoint(&["inventory"])?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Inventory list failed with status {status}");
            return Err(ClientError::Remote {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let entries: Vec<InventoryEntry> =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        info!("Fetched {} inventory entries", entries.len());
        Ok(entries)
    }

    async fn upsert(&self, entry: &InventoryEntry) -> Result<(), ClientError> {
        let url = self.endpoint(&["report"])?;
        debug!("POST {url} name={}", entry.name);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(entry)
            .send()
            .await
            .map_err(transport)?;

        Self::expect_success(response).await?;
        info!("Reported server '{}'", entry.name);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["delete", name])?;
        debug!("DELETE {url}");

        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;

        Self::expect_success(response).await?;
        info!("Deleted server '{name}'");
        Ok(())
    }
}
