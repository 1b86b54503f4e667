//! Reporting windows and per-window values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reporting window for statistics and spark series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "24h")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Day, Timeframe::Week, Timeframe::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Day => "24h",
            Timeframe::Week => "7d",
            Timeframe::Month => "30d",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "1d" | "day" => Ok(Timeframe::Day),
            "7d" | "week" => Ok(Timeframe::Week),
            "30d" | "month" => Ok(Timeframe::Month),
            other => Err(format!("unknown timeframe: {other}")),
        }
    }
}

/// One value per timeframe, serialized as `{"24h": .., "7d": .., "30d": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PerTimeframe<T> {
    #[serde(rename = "24h")]
    pub day: T,
    #[serde(rename = "7d")]
    pub week: T,
    #[serde(rename = "30d")]
    pub month: T,
}

impl<T> PerTimeframe<T> {
    pub fn new(day: T, week: T, month: T) -> Self {
        Self { day, week, month }
    }

    pub fn get(&self, timeframe: Timeframe) -> &T {
        match timeframe {
            Timeframe::Day => &self.day,
            Timeframe::Week => &self.week,
            Timeframe::Month => &self.month,
        }
    }
}
