//! Synthetic trader generation.
//!
//! Draws are consumed in a fixed order per trader so that a given seed
//! always reproduces the same dataset:
//! returns, spark series, market focus, positions, history, handle, then
//! the remaining statistics. Signals and the address use no randomness.

use chrono::{DateTime, Duration, Utc};

use crate::leaderboard::to_fixed;
use crate::models::{
    MarketFocus, PerTimeframe, Position, PositionSide, Signal, Trade, TradeSide, Trader,
    TraderStats,
};

use super::rng::SeedRng;

const POSITION_SYMBOLS: [&str; 6] = ["ETH", "BTC", "SOL", "DOGE", "ARB", "OP"];
const HISTORY_SYMBOLS: [&str; 3] = ["ETH", "BTC", "SOL"];
const HISTORY_LEN: usize = 12;
const MAX_POSITIONS: f64 = 3.0;

/// Spark series lengths for 24h, 7d and 30d.
pub const SPARK_LENGTHS: [usize; 3] = [24, 56, 120];

/// Generate `count` traders from `seed`. Trade timestamps are placed
/// before `anchor`. A negative count yields no traders.
pub fn generate(count: i64, seed: u32, anchor: DateTime<Utc>) -> Vec<Trader> {
    let mut rng = SeedRng::new(seed);
    let count = u64::try_from(count).unwrap_or(0);
    (0..count).map(|idx| make_trader(idx, &mut rng, anchor)).collect()
}

/// Deterministic address for the `idx`-th trader.
pub fn mock_address(idx: u64) -> String {
    let mut address = format!("0x{:02x}a{:036x}", u128::from(idx) + 1, u128::from(idx) * 99_991);
    address.truncate(42);
    address
}

/// Random walk, exponentially smoothed then min-max normalized to [0, 1].
pub fn smoothed_series(n: usize, rng: &mut SeedRng) -> Vec<f64> {
    let mut values: Vec<f64> = (0..n).map(|_| rng.next_f64()).collect();
    for i in 1..n {
        values[i] = values[i - 1] * 0.7 + values[i] * 0.3;
    }
    normalize(values)
}

/// Min-max normalize; a constant series maps to 0.5 everywhere.
pub fn normalize(values: Vec<f64>) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .into_iter()
        .map(|v| if range != 0.0 { (v - min) / range } else { 0.5 })
        .collect()
}

fn round2(x: f64) -> f64 {
    to_fixed(x, 2).parse().unwrap_or(x)
}

fn make_trader(idx: u64, rng: &mut SeedRng, anchor: DateTime<Utc>) -> Trader {
    let address = mock_address(idx);

    let pnl_pct = PerTimeframe::new(
        skewed_return(rng, 0.4),
        skewed_return(rng, 0.9),
        skewed_return(rng, 1.3),
    );
    let pnl_usd = PerTimeframe::new(
        (rng.next_f64() - 0.4) * 50_000.0,
        (rng.next_f64() - 0.4) * 200_000.0,
        (rng.next_f64() - 0.4) * 600_000.0,
    );

    let spark = PerTimeframe::new(
        smoothed_series(SPARK_LENGTHS[0], rng),
        smoothed_series(SPARK_LENGTHS[1], rng),
        smoothed_series(SPARK_LENGTHS[2], rng),
    );

    let market_focus = *rng.pick(&MarketFocus::ALL);

    let position_count = (rng.next_f64() * MAX_POSITIONS).floor() as usize;
    let positions = (0..position_count).map(|_| make_position(rng)).collect();

    let history: Vec<Trade> = (0..HISTORY_LEN).map(|_| make_trade(rng, anchor)).collect();
    let signals = Signal::derive(&address, &history);

    let handle = rng.chance(0.6).then(|| format!("alpha_{}", idx + 1));

    let stats = TraderStats {
        pnl_pct,
        pnl_usd,
        win_rate: 0.4 + rng.next_f64() * 0.5,
        sharpe: round2(0.2 + rng.next_f64() * 2.0),
        trades: (50.0 + rng.next_f64() * 1200.0).floor() as u32,
        volume_24h: (50_000.0 + rng.next_f64() * 3_500_000.0).floor(),
        max_dd_pct: round2(rng.next_f64() * 45.0),
        avg_trade_usd: (500.0 + rng.next_f64() * 15_000.0).floor(),
    };

    Trader {
        address,
        handle,
        market_focus,
        stats,
        spark,
        positions,
        history,
        signals,
    }
}

/// `(r - 0.45) * 200 * (k + r')`, biased slightly towards gains.
fn skewed_return(rng: &mut SeedRng, k: f64) -> f64 {
    let base = rng.next_f64() - 0.45;
    let spread = k + rng.next_f64();
    base * 200.0 * spread
}

fn make_position(rng: &mut SeedRng) -> Position {
    let symbol = rng.pick(&POSITION_SYMBOLS).to_string();
    let side = if rng.chance(0.5) { PositionSide::Long } else { PositionSide::Short };
    let size_usd = (10_000.0 + rng.next_f64() * 150_000.0).floor();
    let entry = round2(100.0 + rng.next_f64() * 4000.0);
    let liq = round2(entry * (0.4 + rng.next_f64() * 0.4));
    let unrealized_pnl_usd = ((rng.next_f64() - 0.4) * 10_000.0).floor();

    Position {
        symbol,
        side,
        size_usd,
        entry,
        liq: Some(liq),
        unrealized_pnl_usd,
    }
}

fn make_trade(rng: &mut SeedRng, anchor: DateTime<Utc>) -> Trade {
    // Multiplied step by step, not by the folded 72h constant: the
    // intermediate roundings decide the floor for some draws.
    let age_ms = (rng.next_f64() * 1000.0 * 60.0 * 60.0 * 72.0).floor() as i64;
    let symbol = rng.pick(&HISTORY_SYMBOLS).to_string();
    let side = if rng.chance(0.5) { TradeSide::Buy } else { TradeSide::Sell };
    let size_usd = (1_000.0 + rng.next_f64() * 80_000.0).floor();
    let price = round2(100.0 + rng.next_f64() * 4000.0);
    let pnl_usd = ((rng.next_f64() - 0.4) * 8000.0).floor();

    Trade {
        ts: anchor - Duration::milliseconds(age_ms),
        symbol,
        side,
        size_usd,
        price,
        pnl_usd: Some(pnl_usd),
    }
}
