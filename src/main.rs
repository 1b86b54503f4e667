//! HyperSignal
//!
//! Mock Hyperliquid trader leaderboard with social-signal alerts, plus a
//! pass-through relay to the Hyperliquid info API.

mod alerts;
mod api;
mod config;
mod leaderboard;
mod mock;
mod models;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::alerts::{signal_feed, AlertPreferences, FollowSet};
use crate::api::{AppState, RelayClient};
use crate::config::{Links, RelayConfig, DEFAULT_RELAY_TIMEOUT, HL_INFO_URL};
use crate::leaderboard::{fmt_count, fmt_pct, fmt_usd, to_fixed, LeaderboardQuery, SortKey};
use crate::mock::{Dataset, DEFAULT_COUNT, DEFAULT_SEED};
use crate::models::{MarketFilter, SignalEvent, Timeframe};

/// Hyperliquid social-signals CLI.
#[derive(Parser)]
#[command(name = "hypersignal")]
#[command(about = "Mock Hyperliquid leaderboard, alerts and info relay", long_about = None)]
struct Cli {
    /// Seed of the mock dataset
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Number of mock traders
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = DEFAULT_COUNT)]
    count: i64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "HYPERSIGNAL_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Upstream info endpoint for the relay
        #[arg(short, long, env = "HYPERSIGNAL_UPSTREAM", default_value = HL_INFO_URL)]
        upstream: String,

        /// Upstream timeout in seconds
        #[arg(long, env = "HYPERSIGNAL_TIMEOUT_SECS", default_value_t = DEFAULT_RELAY_TIMEOUT.as_secs())]
        timeout_secs: u64,
    },

    /// Print the leaderboard
    Leaderboard {
        /// Window (24h, 7d, 30d)
        #[arg(short, long, default_value = "7d")]
        timeframe: Timeframe,

        /// Sort key (pnlPct, pnlUsd, winRate, sharpe, trades, volume24h)
        #[arg(short, long, default_value = "pnlPct")]
        sort: SortKey,

        /// Market focus (ALL, ETH, BTC, ALTS)
        #[arg(short, long, default_value = "ALL")]
        market: MarketFilter,

        /// Search by handle or address
        #[arg(long)]
        search: Option<String>,

        /// Maximum number of rows to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show a trader profile
    Trader {
        /// Address or handle
        id: String,
    },

    /// Show the alert feed for a set of followed traders
    Alerts {
        /// Addresses or handles to follow
        #[arg(required = true)]
        follow: Vec<String>,

        /// Minimum position size in USD
        #[arg(long, default_value = "5000")]
        min_size: f64,

        /// Symbols to alert on
        #[arg(long, value_delimiter = ',', default_value = "ETH,BTC")]
        symbols: Vec<String>,

        /// Event kinds to alert on (OPEN, CLOSE, FLIP)
        #[arg(long, value_delimiter = ',', default_value = "OPEN,CLOSE,FLIP")]
        events: Vec<SignalEvent>,
    },

    /// Show configured external links
    Links,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dataset = Dataset::generate(cli.count, cli.seed, Utc::now());
    if dataset.is_empty() {
        warn!(count = cli.count, "Mock dataset is empty");
    }

    match cli.command {
        Commands::Serve {
            bind,
            upstream,
            timeout_secs,
        } => {
            info!(bind = %bind, upstream = %upstream, timeout_secs = timeout_secs, "Starting HyperSignal service");

            let relay = RelayClient::with_config(RelayConfig {
                upstream_url: upstream,
                timeout: Duration::from_secs(timeout_secs),
            })?;
            let state = AppState::new(dataset, relay, Links::from_env());

            api::serve(bind, state).await?;
        }

        Commands::Leaderboard {
            timeframe,
            sort,
            market,
            search,
            limit,
        } => {
            let query = LeaderboardQuery::new(timeframe, sort)
                .with_market(market)
                .with_search(search.unwrap_or_default());
            let rows = dataset.query(&query);

            println!(
                "\n{} traders | {} | sorted by {} | market {}",
                rows.len(),
                timeframe,
                sort,
                market
            );
            println!(
                "\n{:>3} {:<14} {:<5} {:>10} {:>10} {:>7} {:>7} {:>7} {:>10}",
                "#", "TRADER", "MKT", "PNL%", "PNL", "WIN%", "SHARPE", "TRADES", "VOL 24H"
            );
            println!("{}", "-".repeat(80));

            for (i, trader) in rows.iter().take(limit).enumerate() {
                let stats = &trader.stats;
                println!(
                    "{:>3} {:<14} {:<5} {:>10} {:>10} {:>7} {:>7} {:>7} {:>10}",
                    i + 1,
                    truncate(&trader.display_name(), 14),
                    trader.market_focus.as_str(),
                    fmt_pct(stats.pnl_pct_for(timeframe), 2),
                    fmt_usd(stats.pnl_usd_for(timeframe)),
                    fmt_pct(stats.win_rate * 100.0, 1),
                    to_fixed(stats.sharpe, 2),
                    fmt_count(stats.trades),
                    fmt_usd(stats.volume_24h)
                );
            }
        }

        Commands::Trader { id } => {
            let trader = dataset
                .find(&id)
                .ok_or_else(|| anyhow::anyhow!("Trader not found: {}", id))?;
            let stats = &trader.stats;

            println!("\n=== Trader: {} ===", trader.display_name());
            println!("Address: {}", trader.address);
            println!("Focus:   {}", trader.market_focus.as_str());

            println!("\n--- Performance ---");
            for tf in Timeframe::ALL {
                println!(
                    "{:<4} P&L:       {:>10} {:>12}",
                    tf.as_str(),
                    fmt_pct(stats.pnl_pct_for(tf), 2),
                    fmt_usd(stats.pnl_usd_for(tf))
                );
            }

            println!("\n--- Risk ---");
            println!("Win Rate:       {}", fmt_pct(stats.win_rate * 100.0, 1));
            println!("Sharpe Ratio:   {}", to_fixed(stats.sharpe, 2));
            println!("Max Drawdown:   {}%", to_fixed(stats.max_dd_pct, 2));
            println!("Trades:         {}", fmt_count(stats.trades));
            println!("Volume 24h:     {}", fmt_usd(stats.volume_24h));
            println!("Avg Trade:      {}", fmt_usd(stats.avg_trade_usd));

            println!(
                "\n--- Open Positions ({}, {} exposure) ---",
                trader.positions.len(),
                fmt_usd(trader.total_position_value())
            );
            for pos in &trader.positions {
                let liq = match (pos.liq, pos.liquidation_distance()) {
                    (Some(liq), Some(dist)) => format!("liq {} ({:.1}% away)", to_fixed(liq, 2), dist * 100.0),
                    _ => "no liq".to_string(),
                };
                println!(
                    "  {:<5} {:<5} {:>10} @ {:<10} {} (uPnL: {})",
                    pos.symbol,
                    pos.side.as_str(),
                    fmt_usd(pos.size_usd),
                    to_fixed(pos.entry, 2),
                    liq,
                    fmt_usd(pos.unrealized_pnl_usd)
                );
            }

            let closed = trader.history.iter().filter(|t| t.pnl_usd.is_some()).count();
            let winners = trader.history.iter().filter(|t| t.is_winner()).count();
            println!("\n--- Recent Trades ({winners}/{closed} closed winners) ---");
            for trade in &trader.history {
                let pnl = trade.pnl_usd.map(fmt_usd).unwrap_or_else(|| "-".to_string());
                println!(
                    "  {} {:<4} {:<4} {:>10} @ {:<10} P&L: {}",
                    trade.ts.format("%m-%d %H:%M"),
                    trade.symbol,
                    trade.side.as_str(),
                    fmt_usd(trade.size_usd),
                    to_fixed(trade.price, 2),
                    pnl
                );
            }

            println!("\n--- Signals ---");
            for signal in &trader.signals {
                println!(
                    "  {} {:<5} {:<4} {:<5} {:>10}",
                    signal.ts.format("%m-%d %H:%M"),
                    signal.event.as_str(),
                    signal.symbol,
                    signal.side.as_str(),
                    fmt_usd(signal.size_usd)
                );
            }
        }

        Commands::Alerts {
            follow,
            min_size,
            symbols,
            events,
        } => {
            let mut follows = FollowSet::new();
            for id in &follow {
                match dataset.find(id) {
                    Some(trader) if !follows.is_following(&trader.address) => {
                        follows.toggle(&trader.address);
                    }
                    Some(_) => {}
                    None => println!("Unknown trader, skipping: {}", id),
                }
            }

            if follows.is_empty() {
                println!("No known traders to follow. Use 'hypersignal leaderboard' to find some.");
                return Ok(());
            }

            let prefs = AlertPreferences {
                min_size_usd: min_size,
                symbols,
                events,
            };
            let feed = signal_feed(&dataset, &follows, &prefs);

            println!("\n=== Alerts ({} followed, {} signals) ===", follows.len(), feed.len());
            println!(
                "\n{:<12} {:<14} {:<5} {:<4} {:<5} {:>10} {:>10}",
                "TIME", "TRADER", "EVENT", "SYM", "SIDE", "SIZE", "PRICE"
            );
            println!("{}", "-".repeat(66));

            for item in &feed {
                println!(
                    "{:<12} {:<14} {:<5} {:<4} {:<5} {:>10} {:>10}",
                    item.ts.format("%m-%d %H:%M"),
                    truncate(&item.display_name, 14),
                    item.event.as_str(),
                    item.symbol,
                    item.side.as_str(),
                    fmt_usd(item.size_usd),
                    to_fixed(item.price, 2)
                );
            }
        }

        Commands::Links => {
            let links = Links::from_env();

            println!("\n=== Links ===\n");
            println!("Telegram Bot:     {}", links.telegram_bot_url);
            println!("Hyperliquid Ref:  {}", links.hyperliquid_ref_url);
            println!("Info Upstream:    {}", HL_INFO_URL);
            println!("\nDataset: {} traders, seed {}", dataset.len(), dataset.seed());
        }
    }

    Ok(())
}

/// Truncate a string with ellipsis if too long.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
