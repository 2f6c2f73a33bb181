use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

pub const ENV_CHAIN_API_URL: &str = "BLOCKTREE_CHAIN_API_URL";
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "BLOCKTREE_TELEGRAM_BOT_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "BLOCKTREE_TELEGRAM_CHAT_ID";
pub const ENV_PORT: &str = "BLOCKTREE_PORT";

const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    /// Base URL of the chain service (`/chain`, `/chain/mine`, `/chain/reset`).
    pub chain_api_url: String,
    pub request_timeout_secs: u64,
    pub telegram_api_url: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl Config {
    /// Expand `~` in a user supplied path.
    pub fn expand_path(path: &str) -> PathBuf {
        let expanded = shellexpand::tilde(path);
        PathBuf::from(expanded.into_owned())
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Cannot find home directory")?;
        Ok(home.join(".blocktree").join("config.json"))
    }

    /// Load the config at `path`, writing defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(path)?;
            return Ok(cfg);
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {:?}", path))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Configuration file format error in {:?}", path))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write configuration file {:?}", path))
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_CHAIN_API_URL) {
            self.chain_api_url = url;
        }
        if let Some(token) = get(ENV_TELEGRAM_BOT_TOKEN) {
            self.telegram_bot_token = Some(token);
        }
        if let Some(chat_id) = get(ENV_TELEGRAM_CHAT_ID) {
            self.telegram_chat_id = Some(chat_id);
        }
        if let Some(port) = get(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("{} is not a valid port: {}", ENV_PORT, port))?;
        }
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "bind_address" => self.bind_address = value.to_string(),
            "port" => {
                self.port = value
                    .parse()
                    .with_context(|| format!("Invalid port: {}", value))?
            }
            "chain_api_url" => self.chain_api_url = value.to_string(),
            "request_timeout_secs" => {
                self.request_timeout_secs = value
                    .parse()
                    .with_context(|| format!("Invalid timeout: {}", value))?
            }
            "telegram_api_url" => self.telegram_api_url = value.to_string(),
            "telegram_bot_token" => self.telegram_bot_token = non_empty(value),
            "telegram_chat_id" => self.telegram_chat_id = non_empty(value),
            _ => bail!("Unknown configuration key: {}", key),
        }
        Ok(())
    }

    /// Pretty JSON with the bot token masked.
    pub fn view(&self) -> Result<String> {
        let mut shown = self.clone();
        if shown.telegram_bot_token.is_some() {
            shown.telegram_bot_token = Some(REDACTED.to_string());
        }
        Ok(serde_json::to_string_pretty(&shown)?)
    }

    pub fn init_default(path: &Path) -> Result<Self> {
        let cfg = Self::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }

    /// Token and chat id, when both are configured.
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(token), Some(chat_id)) => Some((token.as_str(), chat_id.as_str())),
            _ => None,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// `None` for blank values so a cleared credential disables the relay.
fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            chain_api_url: "http://127.0.0.1:3001".to_string(),
            request_timeout_secs: 10,
            telegram_api_url: "https://api.telegram.org".to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
        }
    }
}
