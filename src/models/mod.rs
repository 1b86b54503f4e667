//! Data models for traders, trades, positions, signals and statistics.

mod market;
mod position;
mod signal;
mod stats;
mod timeframe;
mod trade;
mod trader;

pub use market::{MarketFilter, MarketFocus};
pub use position::{Position, PositionSide};
pub use signal::{Signal, SignalEvent};
pub use stats::TraderStats;
pub use timeframe::{PerTimeframe, Timeframe};
pub use trade::{Trade, TradeSide};
pub use trader::Trader;
