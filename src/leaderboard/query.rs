//! Filter/search/sort over an in-memory trader set.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{MarketFilter, Timeframe, Trader};

/// Field the leaderboard is ranked by (always descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    PnlPct,
    PnlUsd,
    WinRate,
    Sharpe,
    Trades,
    #[serde(rename = "volume24h")]
    Volume24h,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::PnlPct,
        SortKey::PnlUsd,
        SortKey::WinRate,
        SortKey::Sharpe,
        SortKey::Trades,
        SortKey::Volume24h,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PnlPct => "pnlPct",
            SortKey::PnlUsd => "pnlUsd",
            SortKey::WinRate => "winRate",
            SortKey::Sharpe => "sharpe",
            SortKey::Trades => "trades",
            SortKey::Volume24h => "volume24h",
        }
    }

    /// Value of this key for a trader in the active window.
    pub fn value(&self, trader: &Trader, timeframe: Timeframe) -> f64 {
        let stats = &trader.stats;
        match self {
            SortKey::PnlPct => stats.pnl_pct_for(timeframe),
            SortKey::PnlUsd => stats.pnl_usd_for(timeframe),
            SortKey::WinRate => stats.win_rate,
            SortKey::Sharpe => stats.sharpe,
            SortKey::Trades => f64::from(stats.trades),
            SortKey::Volume24h => stats.volume_24h,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown sort key: {wanted}"))
    }
}

/// Leaderboard view parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaderboardQuery {
    pub market: MarketFilter,
    pub search: String,
    /// `None` leaves the filtered order untouched
    pub sort: Option<SortKey>,
    pub timeframe: Timeframe,
}

impl LeaderboardQuery {
    pub fn new(timeframe: Timeframe, sort: SortKey) -> Self {
        Self {
            timeframe,
            sort: Some(sort),
            ..Default::default()
        }
    }

    pub fn with_market(mut self, market: MarketFilter) -> Self {
        self.market = market;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Apply market filter, search and sort. The input is never reordered.
pub fn query<'a>(traders: &'a [Trader], params: &LeaderboardQuery) -> Vec<&'a Trader> {
    let needle = params.search.trim().to_lowercase();

    let mut rows: Vec<&Trader> = traders
        .iter()
        .filter(|t| params.market.matches(t.market_focus))
        .filter(|t| t.matches_search(&needle))
        .collect();

    if let Some(key) = params.sort {
        let tf = params.timeframe;
        rows.sort_by(|a, b| {
            key.value(b, tf)
                .partial_cmp(&key.value(a, tf))
                .unwrap_or(Ordering::Equal)
        });
    }

    rows
}
