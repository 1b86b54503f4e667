//! Pass-through client for the Hyperliquid info API.
//!
//! The request body is forwarded as JSON and the upstream reply is handed
//! back untouched: status, content-type and body text. Non-success
//! statuses are relayed, not treated as failures.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::RelayConfig;

/// Content-type used when the upstream does not send one.
pub const FALLBACK_CONTENT_TYPE: &str = "application/json";

/// Failure talking to the upstream.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream did not answer within {0:?}")]
    Timeout(Duration),

    #[error("upstream unreachable: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),
}

impl RelayError {
    /// HTTP status reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Timeout(_) => 504,
            RelayError::Network(_) | RelayError::Body(_) => 502,
        }
    }
}

/// Upstream reply as relayed to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

/// Client forwarding requests to one fixed upstream URL.
pub struct RelayClient {
    client: Client,
    upstream_url: String,
    timeout: Duration,
}

impl RelayClient {
    /// Create a relay to `config.upstream_url` bounded by `config.timeout`.
    pub fn with_config(config: RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            upstream_url: config.upstream_url,
            timeout: config.timeout,
        })
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// POST `body` upstream and capture the reply verbatim.
    pub async fn forward(&self, body: &Value) -> Result<RelayResponse, RelayError> {
        debug!(url = %self.upstream_url, "Relaying info request");

        let response = self
            .client
            .post(&self.upstream_url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify(e, RelayError::Network))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        if !status.is_success() {
            warn!(status = %status, url = %self.upstream_url, "Upstream returned non-success status");
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify(e, RelayError::Body))?;

        debug!(status = status.as_u16(), bytes = body.len(), "Relayed upstream reply");

        Ok(RelayResponse {
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    fn classify(&self, err: reqwest::Error, otherwise: fn(reqwest::Error) -> RelayError) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout(self.timeout)
        } else {
            otherwise(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{fake_upstream, spawn, unused_url};
    use serde_json::json;

    async fn client(path: &str, timeout: Duration) -> RelayClient {
        let base = spawn(fake_upstream()).await;
        RelayClient::with_config(RelayConfig {
            upstream_url: format!("{base}{path}"),
            timeout,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_relays_success_verbatim() {
        let relay = client("/info", Duration::from_secs(5)).await;
        let reply = relay.forward(&json!({"type": "meta"})).await.unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, r#"{"ok":true}"#);
        assert_eq!(reply.content_type, "application/json");
    }

    #[tokio::test]
    async fn test_forwards_json_body() {
        let relay = client("/echo", Duration::from_secs(5)).await;
        let body = json!({"type": "clearinghouseState", "user": "0xabc"});
        let reply = relay.forward(&body).await.unwrap();

        assert_eq!(reply.status, 200);
        let echoed: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(echoed, body);
    }

    #[tokio::test]
    async fn test_forwarded_body_keeps_key_order() {
        let relay = client("/echo", Duration::from_secs(5)).await;
        let raw = r#"{"user":"0xabc","type":"clearinghouseState","dex":""}"#;
        let body: Value = serde_json::from_str(raw).unwrap();
        let reply = relay.forward(&body).await.unwrap();

        assert_eq!(reply.body, raw);
    }

    #[tokio::test]
    async fn test_error_status_relayed_with_fallback_content_type() {
        let relay = client("/fail", Duration::from_secs(5)).await;
        let reply = relay.forward(&json!({})).await.unwrap();

        assert_eq!(reply.status, 500);
        assert_eq!(reply.content_type, FALLBACK_CONTENT_TYPE);
        assert!(reply.body.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_content_type_kept() {
        let relay = client("/text", Duration::from_secs(5)).await;
        let reply = relay.forward(&json!({})).await.unwrap();

        assert_eq!(reply.status, 404);
        assert_eq!(reply.content_type, "text/plain; charset=utf-8");
        assert_eq!(reply.body, "no such route");
    }

    #[tokio::test]
    async fn test_timeout_classified() {
        let relay = client("/slow", Duration::from_millis(200)).await;
        let err = relay.forward(&json!({})).await.unwrap_err();

        assert!(matches!(err, RelayError::Timeout(_)), "got {err:?}");
        assert_eq!(err.status_code(), 504);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_classified() {
        let relay = RelayClient::with_config(RelayConfig {
            upstream_url: unused_url().await,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        let err = relay.forward(&json!({})).await.unwrap_err();

        assert!(matches!(err, RelayError::Network(_)), "got {err:?}");
        assert_eq!(err.status_code(), 502);
    }
}
