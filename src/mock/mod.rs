//! Deterministic mock dataset: seeded generator and the immutable trader set.

mod generator;
mod rng;

pub use generator::generate;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::leaderboard::{self, LeaderboardQuery};
use crate::models::Trader;

/// Default number of traders per session.
pub const DEFAULT_COUNT: i64 = 42;

/// Default generator seed.
pub const DEFAULT_SEED: u32 = 1337;

/// Trader set generated once per session and read many times.
#[derive(Debug, Clone)]
pub struct Dataset {
    traders: Vec<Trader>,
    seed: u32,
    anchor: DateTime<Utc>,
}

impl Dataset {
    /// Generate a dataset. A negative count yields an empty dataset.
    pub fn generate(count: i64, seed: u32, anchor: DateTime<Utc>) -> Self {
        let traders = generate(count, seed, anchor);
        info!(count = traders.len(), seed = seed, anchor = %anchor, "Generated mock dataset");

        Self {
            traders,
            seed,
            anchor,
        }
    }

    pub fn traders(&self) -> &[Trader] {
        &self.traders
    }

    pub fn len(&self) -> usize {
        self.traders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traders.is_empty()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// Look up a trader by address or handle, ignoring case.
    pub fn find(&self, id: &str) -> Option<&Trader> {
        let id = id.trim();
        self.traders.iter().find(|t| {
            t.address.eq_ignore_ascii_case(id)
                || t.handle.as_deref().is_some_and(|h| h.eq_ignore_ascii_case(id))
        })
    }

    pub fn query(&self, params: &LeaderboardQuery) -> Vec<&Trader> {
        leaderboard::query(&self.traders, params)
    }
}
