//! Open perpetual position held by a trader.

use serde::{Deserialize, Serialize};

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSide::Long => "LONG",
            PositionSide::Short => "SHORT",
        }
    }
}

/// Current position in a perp market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Coin symbol (e.g. "ETH")
    pub symbol: String,

    pub side: PositionSide,

    /// Notional size in USD
    pub size_usd: f64,

    /// Entry price
    pub entry: f64,

    /// Liquidation price, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liq: Option<f64>,

    /// Unrealized P&L in USD
    pub unrealized_pnl_usd: f64,
}

impl Position {
    /// Distance from entry to liquidation as a fraction of entry.
    pub fn liquidation_distance(&self) -> Option<f64> {
        let liq = self.liq?;
        if self.entry <= 0.0 {
            return None;
        }
        Some((self.entry - liq).abs() / self.entry)
    }
}
