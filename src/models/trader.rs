//! Trader model representing one simulated market participant.

use serde::{Deserialize, Serialize};

use super::market::MarketFocus;
use super::position::Position;
use super::signal::Signal;
use super::stats::TraderStats;
use super::timeframe::{PerTimeframe, Timeframe};
use super::trade::Trade;
use crate::leaderboard::short_addr;

/// Trader profile with statistics, chart series, positions and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trader {
    /// Wallet address (0x-prefixed)
    pub address: String,

    /// Display handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Market the trader mostly trades
    pub market_focus: MarketFocus,

    /// Performance statistics
    pub stats: TraderStats,

    /// Normalized P&L curve per window, values in [0, 1]
    pub spark: PerTimeframe<Vec<f64>>,

    /// Current open positions
    #[serde(default)]
    pub positions: Vec<Position>,

    /// Recent trades, most relevant first
    #[serde(default)]
    pub history: Vec<Trade>,

    /// Signals derived from the history
    #[serde(default)]
    pub signals: Vec<Signal>,
}

impl Trader {
    /// Get display name (handle or shortened address).
    pub fn display_name(&self) -> String {
        match &self.handle {
            Some(handle) => handle.clone(),
            None => short_addr(&self.address),
        }
    }

    pub fn spark_for(&self, timeframe: Timeframe) -> &[f64] {
        self.spark.get(timeframe)
    }

    /// Total notional of all open positions.
    pub fn total_position_value(&self) -> f64 {
        self.positions.iter().map(|p| p.size_usd).sum()
    }

    /// Case-insensitive match against handle, address or short address.
    /// `needle` must already be trimmed and lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.handle
            .as_deref()
            .is_some_and(|h| h.to_lowercase().contains(needle))
            || self.address.to_lowercase().contains(needle)
            || short_addr(&self.address).to_lowercase().contains(needle)
    }
}
