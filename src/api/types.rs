//! Request and response types for the HTTP service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::leaderboard::{
    fmt_count, fmt_pct, fmt_usd, hash_color, short_addr, spark_path, to_fixed, LeaderboardQuery,
    SortKey, SPARK_PROFILE, SPARK_ROW,
};
use crate::models::{MarketFilter, MarketFocus, PerTimeframe, Timeframe, Trader};

/// Query string of `GET /api/leaderboard`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardParams {
    pub timeframe: Option<String>,
    pub sort: Option<String>,
    pub market: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl LeaderboardParams {
    /// Unknown timeframe/market fall back to the UI defaults; an unknown
    /// sort key leaves results unsorted.
    pub fn to_query(&self) -> LeaderboardQuery {
        let timeframe = self
            .timeframe
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();
        let market = self
            .market
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or(MarketFilter::All);
        let sort = match self.sort.as_deref() {
            None => Some(SortKey::default()),
            Some(s) => s.parse().ok(),
        };

        LeaderboardQuery {
            market,
            search: self.search.clone().unwrap_or_default(),
            sort,
            timeframe,
        }
    }
}

/// Response of `GET /api/leaderboard`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub timeframe: Timeframe,
    pub sort: Option<SortKey>,
    pub market: String,
    /// Rows matching the filters before `limit` is applied
    pub total: usize,
    pub seed: u32,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<LeaderboardRow>,
}

/// One leaderboard line with raw and display figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub rank: usize,
    pub address: String,
    pub short_address: String,
    pub display_name: String,
    pub handle: Option<String>,
    pub market_focus: MarketFocus,
    pub color: String,
    pub positive: bool,
    pub pnl_pct: f64,
    pub pnl_pct_display: String,
    pub pnl_usd: f64,
    pub pnl_usd_display: String,
    pub win_rate: f64,
    pub win_rate_display: String,
    pub sharpe: f64,
    pub sharpe_display: String,
    pub trades: u32,
    pub trades_display: String,
    pub volume_24h: f64,
    pub volume_24h_display: String,
    pub spark_path: String,
    pub following: bool,
}

impl LeaderboardRow {
    pub fn new(rank: usize, trader: &Trader, timeframe: Timeframe, following: bool) -> Self {
        let stats = &trader.stats;
        let pnl_pct = stats.pnl_pct_for(timeframe);
        let pnl_usd = stats.pnl_usd_for(timeframe);

        Self {
            rank,
            address: trader.address.clone(),
            short_address: short_addr(&trader.address),
            display_name: trader.display_name(),
            handle: trader.handle.clone(),
            market_focus: trader.market_focus,
            color: hash_color(&trader.address),
            positive: stats.is_profitable(timeframe),
            pnl_pct,
            pnl_pct_display: fmt_pct(pnl_pct, 2),
            pnl_usd,
            pnl_usd_display: fmt_usd(pnl_usd),
            win_rate: stats.win_rate,
            win_rate_display: fmt_pct(stats.win_rate * 100.0, 1),
            sharpe: stats.sharpe,
            sharpe_display: to_fixed(stats.sharpe, 2),
            trades: stats.trades,
            trades_display: fmt_count(stats.trades),
            volume_24h: stats.volume_24h,
            volume_24h_display: fmt_usd(stats.volume_24h),
            spark_path: spark_path(trader.spark_for(timeframe), SPARK_ROW),
            following,
        }
    }
}

/// Response of `GET /api/traders/:id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderProfile {
    pub display_name: String,
    pub short_address: String,
    pub color: String,
    pub following: bool,
    pub open_exposure_usd: f64,
    /// Profile-sized P&L curve per window
    pub curve: PerTimeframe<String>,
    pub trader: Trader,
}

impl TraderProfile {
    pub fn new(trader: &Trader, following: bool) -> Self {
        let curve = |tf| spark_path(trader.spark_for(tf), SPARK_PROFILE);

        Self {
            display_name: trader.display_name(),
            short_address: short_addr(&trader.address),
            color: hash_color(&trader.address),
            following,
            open_exposure_usd: trader.total_position_value(),
            curve: PerTimeframe::new(
                curve(Timeframe::Day),
                curve(Timeframe::Week),
                curve(Timeframe::Month),
            ),
            trader: trader.clone(),
        }
    }
}

/// Response of `POST /api/follows/:address`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub address: String,
    pub following: bool,
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let q = LeaderboardParams::default().to_query();
        assert_eq!(q.timeframe, Timeframe::Week);
        assert_eq!(q.market, MarketFilter::All);
        assert_eq!(q.sort, Some(SortKey::PnlPct));
        assert!(q.search.is_empty());
    }

    #[test]
    fn test_params_parse_and_fallback() {
        let params = LeaderboardParams {
            timeframe: Some("30d".to_string()),
            sort: Some("sharpe".to_string()),
            market: Some("btc".to_string()),
            search: Some("alpha".to_string()),
            limit: None,
        };
        let q = params.to_query();
        assert_eq!(q.timeframe, Timeframe::Month);
        assert_eq!(q.sort, Some(SortKey::Sharpe));
        assert_eq!(q.market, MarketFilter::Only(MarketFocus::Btc));
        assert_eq!(q.search, "alpha");

        let params = LeaderboardParams {
            timeframe: Some("1y".to_string()),
            sort: Some("roi".to_string()),
            market: Some("SOL".to_string()),
            ..Default::default()
        };
        let q = params.to_query();
        assert_eq!(q.timeframe, Timeframe::Week);
        assert_eq!(q.sort, None);
        assert_eq!(q.market, MarketFilter::All);
    }
}
