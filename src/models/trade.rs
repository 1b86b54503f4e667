//! Trade model representing individual fills in a trader's history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::position::PositionSide;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }

    /// Position direction a fill on this side implies.
    pub fn position_side(&self) -> PositionSide {
        match self {
            TradeSide::Buy => PositionSide::Long,
            TradeSide::Sell => PositionSide::Short,
        }
    }
}

/// Individual trade record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// When the trade occurred
    pub ts: DateTime<Utc>,

    /// Coin symbol
    pub symbol: String,

    /// Trade direction
    pub side: TradeSide,

    /// Notional size in USD
    pub size_usd: f64,

    /// Fill price
    pub price: f64,

    /// Realized P&L in USD, if the fill closed exposure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl_usd: Option<f64>,
}

impl Trade {
    /// Returns true if the fill realized a gain.
    pub fn is_winner(&self) -> bool {
        self.pnl_usd.is_some_and(|p| p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_side_maps_to_position_side() {
        assert_eq!(TradeSide::Buy.position_side(), PositionSide::Long);
        assert_eq!(TradeSide::Sell.position_side(), PositionSide::Short);
    }

    #[test]
    fn test_is_winner() {
        let trade = Trade {
            ts: Utc::now(),
            symbol: "BTC".to_string(),
            side: TradeSide::Buy,
            size_usd: 10_000.0,
            price: 2500.5,
            pnl_usd: Some(120.0),
        };
        assert!(trade.is_winner());
        assert!(!Trade { pnl_usd: Some(-1.0), ..trade.clone() }.is_winner());
        assert!(!Trade { pnl_usd: None, ..trade }.is_winner());
    }
}
