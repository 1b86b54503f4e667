//! Signal events surfaced to the alert feed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::position::PositionSide;
use super::trade::Trade;

/// Number of history entries a trader's signals are derived from.
pub const SIGNAL_WINDOW: usize = 6;

/// Kind of event a signal reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalEvent {
    Open,
    Close,
    Flip,
}

impl SignalEvent {
    pub const ALL: [SignalEvent; 3] = [SignalEvent::Open, SignalEvent::Close, SignalEvent::Flip];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalEvent::Open => "OPEN",
            SignalEvent::Close => "CLOSE",
            SignalEvent::Flip => "FLIP",
        }
    }

    /// Event tag for the `index`-th history entry: every third is a flip,
    /// the rest alternate close (even) and open (odd).
    pub fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            SignalEvent::Flip
        } else if index % 2 == 0 {
            SignalEvent::Close
        } else {
            SignalEvent::Open
        }
    }
}

impl fmt::Display for SignalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OPEN" => Ok(SignalEvent::Open),
            "CLOSE" => Ok(SignalEvent::Close),
            "FLIP" => Ok(SignalEvent::Flip),
            other => Err(format!("unknown signal event: {other}")),
        }
    }
}

/// Derived notable event for one trader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// `<address>-<index>`
    pub id: String,
    pub ts: DateTime<Utc>,
    pub event: SignalEvent,
    pub symbol: String,
    pub side: PositionSide,
    pub size_usd: f64,
    pub price: f64,
}

impl Signal {
    /// Derive signals from the head of a trade history.
    pub fn derive(address: &str, history: &[Trade]) -> Vec<Signal> {
        history
            .iter()
            .take(SIGNAL_WINDOW)
            .enumerate()
            .map(|(i, t)| Signal {
                id: format!("{address}-{i}"),
                ts: t.ts,
                event: SignalEvent::for_index(i),
                symbol: t.symbol.clone(),
                side: t.side.position_side(),
                size_usd: t.size_usd,
                price: t.price,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeSide;

    fn trade(side: TradeSide, size_usd: f64) -> Trade {
        Trade {
            ts: Utc::now(),
            symbol: "SOL".to_string(),
            side,
            size_usd,
            price: 150.0,
            pnl_usd: None,
        }
    }

    #[test]
    fn test_event_alternation() {
        let events: Vec<_> = (0..6).map(SignalEvent::for_index).collect();
        assert_eq!(
            events,
            vec![
                SignalEvent::Flip,
                SignalEvent::Open,
                SignalEvent::Close,
                SignalEvent::Flip,
                SignalEvent::Close,
                SignalEvent::Open,
            ]
        );
    }

    #[test]
    fn test_derive_uses_first_six_trades() {
        let history: Vec<_> = (0..12)
            .map(|i| trade(if i % 2 == 0 { TradeSide::Buy } else { TradeSide::Sell }, i as f64))
            .collect();

        let signals = Signal::derive("0xabc", &history);
        assert_eq!(signals.len(), SIGNAL_WINDOW);
        assert_eq!(signals[0].id, "0xabc-0");
        assert_eq!(signals[5].id, "0xabc-5");
        assert_eq!(signals[0].side, PositionSide::Long);
        assert_eq!(signals[1].side, PositionSide::Short);
        assert_eq!(signals[4].size_usd, 4.0);
    }

    #[test]
    fn test_derive_short_history() {
        let history = vec![trade(TradeSide::Buy, 1.0)];
        assert_eq!(Signal::derive("0x1", &history).len(), 1);
        assert!(Signal::derive("0x1", &[]).is_empty());
    }
}
