//! Market focus tags and the leaderboard market filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Market a trader mostly trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketFocus {
    Eth,
    Btc,
    Alts,
}

impl MarketFocus {
    /// Order used when drawing a focus from the generator.
    pub const ALL: [MarketFocus; 3] = [MarketFocus::Eth, MarketFocus::Btc, MarketFocus::Alts];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketFocus::Eth => "ETH",
            MarketFocus::Btc => "BTC",
            MarketFocus::Alts => "ALTS",
        }
    }
}

impl fmt::Display for MarketFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaderboard market filter: everything, or a single focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketFilter {
    #[default]
    All,
    Only(MarketFocus),
}

impl MarketFilter {
    pub fn matches(&self, focus: MarketFocus) -> bool {
        match self {
            MarketFilter::All => true,
            MarketFilter::Only(wanted) => *wanted == focus,
        }
    }
}

impl fmt::Display for MarketFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketFilter::All => f.write_str("ALL"),
            MarketFilter::Only(focus) => focus.fmt(f),
        }
    }
}

impl FromStr for MarketFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" | "" => Ok(MarketFilter::All),
            "ETH" => Ok(MarketFilter::Only(MarketFocus::Eth)),
            "BTC" => Ok(MarketFilter::Only(MarketFocus::Btc)),
            "ALTS" => Ok(MarketFilter::Only(MarketFocus::Alts)),
            other => Err(format!("unknown market: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_filter() {
        assert!(MarketFilter::All.matches(MarketFocus::Alts));
        assert!(MarketFilter::Only(MarketFocus::Btc).matches(MarketFocus::Btc));
        assert!(!MarketFilter::Only(MarketFocus::Btc).matches(MarketFocus::Eth));

        assert_eq!("eth".parse::<MarketFilter>().unwrap(), MarketFilter::Only(MarketFocus::Eth));
        assert_eq!("ALL".parse::<MarketFilter>().unwrap(), MarketFilter::All);
        assert!("SOL".parse::<MarketFilter>().is_err());
    }
}
