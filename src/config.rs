//! Runtime configuration: external links and relay settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Hyperliquid mainnet info endpoint.
pub const HL_INFO_URL: &str = "https://api.hyperliquid.xyz/info";

pub const DEFAULT_TELEGRAM_BOT_URL: &str = "https://t.me/YOUR_BOT_NAME?start=app";
pub const DEFAULT_HYPERLIQUID_REF_URL: &str = "https://app.hyperliquid.xyz/?ref=YOUR_REF_CODE";

/// Default upstream timeout for relayed requests.
pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound links shown by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    /// Telegram bot subscription link
    pub telegram_bot_url: String,

    /// Hyperliquid referral link
    pub hyperliquid_ref_url: String,
}

impl Links {
    /// Read links from `TELEGRAM_BOT_URL` / `HYPERLIQUID_REF_URL`, falling
    /// back to placeholders when unset or empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, fallback: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            telegram_bot_url: read("TELEGRAM_BOT_URL", DEFAULT_TELEGRAM_BOT_URL),
            hyperliquid_ref_url: read("HYPERLIQUID_REF_URL", DEFAULT_HYPERLIQUID_REF_URL),
        }
    }
}

impl Default for Links {
    fn default() -> Self {
        Self {
            telegram_bot_url: DEFAULT_TELEGRAM_BOT_URL.to_string(),
            hyperliquid_ref_url: DEFAULT_HYPERLIQUID_REF_URL.to_string(),
        }
    }
}

/// Settings for the relay client.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Upstream URL requests are forwarded to
    pub upstream_url: String,

    /// Bound on the whole upstream exchange
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: HL_INFO_URL.to_string(),
            timeout: DEFAULT_RELAY_TIMEOUT,
        }
    }
}
