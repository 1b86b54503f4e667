//! Leaderboard queries and display formatting.

mod format;
mod query;

pub use format::{
    fmt_count, fmt_pct, fmt_usd, hash_color, short_addr, spark_path, to_fixed,
    SPARK_PROFILE, SPARK_ROW,
};
pub use query::{query, LeaderboardQuery, SortKey};
