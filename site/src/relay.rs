use blocktree_config::Config;
use blocktree_core::ContactSubmission;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Contact relay is not configured (missing bot token or chat id)")]
    NotConfigured,
    #[error("Network error sending to bot API: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Bot API returned {status}: {description}")]
    Rejected {
        status: reqwest::StatusCode,
        description: String,
    },
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Clone)]
struct Credentials {
    bot_token: String,
    chat_id: String,
}

/// Forwards contact submissions to the team chat through the Telegram Bot API.
#[derive(Clone)]
pub struct ContactRelay {
    api_url: String,
    credentials: Option<Credentials>,
    http: reqwest::Client,
}

impl ContactRelay {
    pub fn new(
        api_url: &str,
        bot_token: Option<&str>,
        chat_id: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let credentials = match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(Credentials {
                bot_token: bot_token.to_string(),
                chat_id: chat_id.to_string(),
            }),
            _ => None,
        };
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(ContactRelay {
            api_url: api_url.trim_end_matches('/').to_string(),
            credentials,
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, RelayError> {
        let (token, chat_id) = cfg.telegram_credentials().unzip();
        let relay = Self::new(
            &cfg.telegram_api_url,
            token,
            chat_id,
            Duration::from_secs(cfg.request_timeout_secs),
        )?;
        if !relay.is_configured() {
            warn!("Telegram credentials not set; contact submissions cannot be delivered");
        }
        Ok(relay)
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    pub async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let creds = self.credentials.as_ref().ok_or(RelayError::NotConfigured)?;
        let url = format!("{}/bot{}/sendMessage", self.api_url, creds.bot_token);
        let text = submission.relay_text();

        let response = self
            .http
            .post(&url)
            .json(&SendMessage {
                chat_id: &creds.chat_id,
                text: &text,
            })
            .send()
            .await?;

        let status = response.status();
        let body: BotResponse = match response.json().await {
            Ok(body) => body,
            Err(e) if e.is_decode() => {
                return Err(RelayError::Rejected {
                    status,
                    description: "unreadable response".to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() || !body.ok {
            return Err(RelayError::Rejected {
                status,
                description: body.description.unwrap_or_default(),
            });
        }

        info!("Relayed contact submission from {}", submission.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::spawn_mock;
    use actix_web::{HttpResponse, web};
    use std::sync::{Arc, Mutex};

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn relay(url: &str, token: Option<&str>) -> ContactRelay {
        ContactRelay::new(url, token, Some("1001"), Duration::from_secs(5)).unwrap()
    }

    #[actix_web::test]
    async fn delivers_formatted_text_to_chat() {
        let seen: Arc<Mutex<Vec<serde_json::Value>>> = Arc::default();
        let recorded = seen.clone();
        let url = spawn_mock(move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::Data::new(recorded.clone())).route(
                "/bottest-token/sendMessage",
                web::post().to(
                    |seen: web::Data<Arc<Mutex<Vec<serde_json::Value>>>>,
                     body: web::Json<serde_json::Value>| async move {
                        seen.lock().unwrap().push(body.into_inner());
                        HttpResponse::Ok().json(serde_json::json!({"ok": true, "result": {}}))
                    },
                ),
            );
        });

        relay(&url, Some("test-token"))
            .deliver(&submission())
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["chat_id"], "1001");
        assert_eq!(seen[0]["text"], submission().relay_text());
    }

    #[actix_web::test]
    async fn rejected_by_bot_api() {
        let url = spawn_mock(|cfg: &mut web::ServiceConfig| {
            cfg.default_service(web::to(|| async {
                HttpResponse::Unauthorized()
                    .json(serde_json::json!({"ok": false, "description": "Unauthorized"}))
            }));
        });

        match relay(&url, Some("bad")).deliver(&submission()).await {
            Err(RelayError::Rejected { status, description }) => {
                assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
                assert_eq!(description, "Unauthorized");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn non_json_success_is_rejected() {
        let url = spawn_mock(|cfg: &mut web::ServiceConfig| {
            cfg.default_service(web::to(|| async { HttpResponse::Ok().body("<html>gateway</html>") }));
        });

        match relay(&url, Some("token")).deliver(&submission()).await {
            Err(RelayError::Rejected { status, description }) => {
                assert_eq!(status, reqwest::StatusCode::OK);
                assert_eq!(description, "unreadable response");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn unconfigured_relay_refuses() {
        let relay = relay("http://127.0.0.1:9", None);
        assert!(!relay.is_configured());
        assert!(matches!(
            relay.deliver(&submission()).await,
            Err(RelayError::NotConfigured)
        ));
    }

    #[test]
    fn from_config_reads_credentials() {
        let mut cfg = Config::default();
        assert!(!ContactRelay::from_config(&cfg).unwrap().is_configured());
        cfg.telegram_bot_token = Some("t".to_string());
        cfg.telegram_chat_id = Some("c".to_string());
        assert!(ContactRelay::from_config(&cfg).unwrap().is_configured());
    }
}
