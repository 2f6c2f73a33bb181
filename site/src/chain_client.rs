use blocktree_core::ChainSnapshot;
use log::{info, warn};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Chain service returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to parse chain response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// HTTP client for the remote chain service.
#[derive(Clone)]
pub struct ChainClient {
    base_url: String,
    http: reqwest::Client,
}

impl ChainClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChainError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ChainError::Client)?;
        Ok(ChainClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Current state of every branch.
    pub async fn fetch_chain(&self) -> Result<ChainSnapshot, ChainError> {
        let url = format!("{}/chain", self.base_url);
        let request = self.http.get(&url);
        Self::send(request, url).await
    }

    /// Ask the service to mine one block. Returns the updated state.
    pub async fn mine(&self) -> Result<ChainSnapshot, ChainError> {
        let url = format!("{}/chain/mine", self.base_url);
        let request = self.http.post(&url);
        let snapshot = Self::send(request, url).await?;
        info!("Mined block, chain now holds {} blocks", snapshot.block_count());
        Ok(snapshot)
    }

    /// Ask the service to return to its initial state.
    pub async fn reset(&self) -> Result<ChainSnapshot, ChainError> {
        let url = format!("{}/chain/reset", self.base_url);
        let request = self.http.post(&url);
        let snapshot = Self::send(request, url).await?;
        info!("Chain reset, {} blocks remain", snapshot.block_count());
        Ok(snapshot)
    }

    /// Fetch the chain, falling back to an all-empty snapshot on any failure
    /// so pages still render.
    pub async fn load_or_empty(&self) -> ChainSnapshot {
        match self.fetch_chain().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Chain load failed, rendering empty snapshot: {}", e);
                ChainSnapshot::default()
            }
        }
    }

    async fn send(
        request: reqwest::RequestBuilder,
        url: String,
    ) -> Result<ChainSnapshot, ChainError> {
        let response = match request.send().await {
            Ok(resp) => resp,
            Err(source) => return Err(ChainError::Network { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::Status { url, status });
        }

        response
            .json::<ChainSnapshot>()
            .await
            .map_err(|source| ChainError::Parse { url, source })
    }
}
