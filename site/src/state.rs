use crate::chain_client::ChainClient;
use crate::relay::ContactRelay;
use anyhow::Result;
use blocktree_config::Config;
use std::time::Duration;

/// Shared, read-only handles used by every request.
#[derive(Clone)]
pub struct AppState {
    pub chain: ChainClient,
    pub relay: ContactRelay,
}

impl AppState {
    pub fn new(chain: ChainClient, relay: ContactRelay) -> Self {
        AppState { chain, relay }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let chain = ChainClient::new(
            &cfg.chain_api_url,
            Duration::from_secs(cfg.request_timeout_secs),
        )?;
        let relay = ContactRelay::from_config(cfg)?;
        Ok(AppState::new(chain, relay))
    }
}
