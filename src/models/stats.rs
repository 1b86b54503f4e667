//! Trader performance statistics: P&L per window, win rate, Sharpe, etc.

use serde::{Deserialize, Serialize};

use super::timeframe::{PerTimeframe, Timeframe};

/// Aggregated performance statistics for a trader.
///
/// All figures are fixed when the dataset is generated; nothing here is
/// recomputed on query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TraderStats {
    // === Returns ===
    /// Percentage return per window
    pub pnl_pct: PerTimeframe<f64>,

    /// Dollar return per window
    pub pnl_usd: PerTimeframe<f64>,

    // === Quality ===
    /// Win rate (0.0 to 1.0)
    pub win_rate: f64,

    /// Risk-adjusted return
    pub sharpe: f64,

    /// Maximum drawdown in percent (0 to 100)
    pub max_dd_pct: f64,

    // === Activity ===
    /// Total number of trades
    pub trades: u32,

    /// Rolling 24h volume in USD
    pub volume_24h: f64,

    /// Average trade size in USD
    pub avg_trade_usd: f64,
}

impl TraderStats {
    pub fn pnl_pct_for(&self, timeframe: Timeframe) -> f64 {
        *self.pnl_pct.get(timeframe)
    }

    pub fn pnl_usd_for(&self, timeframe: Timeframe) -> f64 {
        *self.pnl_usd.get(timeframe)
    }

    /// Whether the trader is up over the given window.
    pub fn is_profitable(&self, timeframe: Timeframe) -> bool {
        self.pnl_pct_for(timeframe) >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_accessors() {
        let stats = TraderStats {
            pnl_pct: PerTimeframe::new(-1.5, 0.0, 12.0),
            pnl_usd: PerTimeframe::new(-100.0, 0.0, 5000.0),
            ..Default::default()
        };

        assert_eq!(stats.pnl_pct_for(Timeframe::Month), 12.0);
        assert_eq!(stats.pnl_usd_for(Timeframe::Day), -100.0);
        assert!(!stats.is_profitable(Timeframe::Day));
        assert!(stats.is_profitable(Timeframe::Week));
    }
}
