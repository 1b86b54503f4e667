//! Follow set, alert preferences and the signal feed they produce.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PositionSide, Signal, SignalEvent, Trader};
use crate::mock::Dataset;

/// Addresses the session follows.
#[derive(Debug, Clone, Default)]
pub struct FollowSet {
    addresses: HashSet<String>,
}

impl FollowSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the follow state for `address`; returns the new state.
    pub fn toggle(&mut self, address: &str) -> bool {
        let key = address.to_lowercase();
        if self.addresses.remove(&key) {
            false
        } else {
            self.addresses.insert(key);
            true
        }
    }

    pub fn is_following(&self, address: &str) -> bool {
        self.addresses.contains(&address.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Which signals are worth alerting on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPreferences {
    /// Minimum notional in USD
    pub min_size_usd: f64,

    /// Symbols to alert on
    pub symbols: Vec<String>,

    /// Event kinds to alert on
    pub events: Vec<SignalEvent>,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            min_size_usd: 5_000.0,
            symbols: vec!["ETH".to_string(), "BTC".to_string()],
            events: SignalEvent::ALL.to_vec(),
        }
    }
}

impl AlertPreferences {
    pub fn matches(&self, signal: &Signal) -> bool {
        signal.size_usd >= self.min_size_usd
            && self.symbols.iter().any(|s| s.eq_ignore_ascii_case(&signal.symbol))
            && self.events.contains(&signal.event)
    }
}

/// One alert in the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub trader: String,
    pub display_name: String,
    pub id: String,
    pub ts: DateTime<Utc>,
    pub event: SignalEvent,
    pub symbol: String,
    pub side: PositionSide,
    pub size_usd: f64,
    pub price: f64,
}

impl FeedItem {
    fn new(trader: &Trader, signal: &Signal) -> Self {
        Self {
            trader: trader.address.clone(),
            display_name: trader.display_name(),
            id: signal.id.clone(),
            ts: signal.ts,
            event: signal.event,
            symbol: signal.symbol.clone(),
            side: signal.side,
            size_usd: signal.size_usd,
            price: signal.price,
        }
    }
}

/// Matching signals of followed traders, newest first.
pub fn signal_feed(dataset: &Dataset, follows: &FollowSet, prefs: &AlertPreferences) -> Vec<FeedItem> {
    let mut feed: Vec<FeedItem> = dataset
        .traders()
        .iter()
        .filter(|t| follows.is_following(&t.address))
        .flat_map(|t| {
            t.signals
                .iter()
                .filter(|s| prefs.matches(s))
                .map(move |s| FeedItem::new(t, s))
        })
        .collect();

    feed.sort_by(|a, b| b.ts.cmp(&a.ts));
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dataset() -> Dataset {
        Dataset::generate(42, 1337, Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
    }

    fn signal(symbol: &str, event: SignalEvent, size_usd: f64) -> Signal {
        Signal {
            id: "0x1-0".to_string(),
            ts: Utc::now(),
            event,
            symbol: symbol.to_string(),
            side: PositionSide::Long,
            size_usd,
            price: 100.0,
        }
    }

    #[test]
    fn test_toggle_follow() {
        let mut follows = FollowSet::new();
        assert!(follows.toggle("0xABC"));
        assert!(follows.is_following("0xabc"));
        assert_eq!(follows.len(), 1);

        assert!(!follows.toggle("0xabc"));
        assert!(!follows.is_following("0xABC"));
        assert!(follows.is_empty());
    }

    #[test]
    fn test_preferences_match() {
        let prefs = AlertPreferences::default();
        assert!(prefs.matches(&signal("ETH", SignalEvent::Flip, 5_000.0)));
        assert!(prefs.matches(&signal("btc", SignalEvent::Open, 20_000.0)));
        assert!(!prefs.matches(&signal("SOL", SignalEvent::Open, 20_000.0)));
        assert!(!prefs.matches(&signal("ETH", SignalEvent::Close, 4_999.0)));

        let flips_only = AlertPreferences {
            events: vec![SignalEvent::Flip],
            ..Default::default()
        };
        assert!(!flips_only.matches(&signal("ETH", SignalEvent::Open, 50_000.0)));
    }

    #[test]
    fn test_feed_empty_without_follows() {
        let ds = dataset();
        assert!(signal_feed(&ds, &FollowSet::new(), &AlertPreferences::default()).is_empty());
    }

    #[test]
    fn test_feed_for_followed_traders() {
        let ds = dataset();
        let prefs = AlertPreferences {
            min_size_usd: 0.0,
            symbols: vec!["ETH".to_string(), "BTC".to_string(), "SOL".to_string()],
            events: SignalEvent::ALL.to_vec(),
        };

        let mut follows = FollowSet::new();
        let first = &ds.traders()[0];
        let second = &ds.traders()[1];
        follows.toggle(&first.address);
        follows.toggle(&second.address);

        let feed = signal_feed(&ds, &follows, &prefs);
        assert_eq!(feed.len(), first.signals.len() + second.signals.len());
        assert!(feed.iter().all(|f| f.trader == first.address || f.trader == second.address));
        for pair in feed.windows(2) {
            assert!(pair[0].ts >= pair[1].ts);
        }

        let strict = signal_feed(&ds, &follows, &AlertPreferences::default());
        assert!(strict.len() <= feed.len());
        assert!(strict
            .iter()
            .all(|f| f.size_usd >= 5_000.0 && (f.symbol == "ETH" || f.symbol == "BTC")));
    }
}
