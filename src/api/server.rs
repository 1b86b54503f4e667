//! HTTP service: info relay plus leaderboard, profile and alert endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::{Body, Bytes};
use axum::extract::{Path, Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::alerts::{signal_feed, AlertPreferences, FeedItem, FollowSet};
use crate::config::Links;
use crate::mock::Dataset;

use super::relay::RelayClient;
use super::types::*;

const NO_STORE: &str = "no-store";

/// Shared state behind every handler.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub relay: Arc<RelayClient>,
    pub links: Arc<Links>,
    pub follows: Arc<RwLock<FollowSet>>,
    pub prefs: Arc<RwLock<AlertPreferences>>,
}

impl AppState {
    pub fn new(dataset: Dataset, relay: RelayClient, links: Links) -> Self {
        Self {
            dataset: Arc::new(dataset),
            relay: Arc::new(relay),
            links: Arc::new(links),
            follows: Arc::new(RwLock::new(FollowSet::new())),
            prefs: Arc::new(RwLock::new(AlertPreferences::default())),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/hl", post(relay_info))
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/traders/:id", get(trader_profile))
        .route("/api/follows/:id", post(toggle_follow))
        .route("/api/alerts", get(alerts))
        .route("/api/alerts/preferences", get(get_preferences).put(put_preferences))
        .route("/api/links", get(links))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let upstream = state.relay.upstream_url().to_string();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(addr = %addr, upstream = %upstream, traders = state.dataset.len(), "HTTP server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response<Body> {
    (
        status,
        [(CACHE_CONTROL, NO_STORE)],
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

async fn health() -> &'static str {
    "ok"
}

/// Forward the JSON body upstream and relay the reply uncached.
async fn relay_info(State(state): State<AppState>, body: Bytes) -> Response<Body> {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "Rejected malformed relay body");
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {e}"));
        }
    };

    match state.relay.forward(&payload).await {
        Ok(reply) => Response::builder()
            .status(reply.status)
            .header(CONTENT_TYPE, reply.content_type)
            .header(CACHE_CONTROL, NO_STORE)
            .body(Body::from(reply.body))
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build relay response");
                error_response(StatusCode::BAD_GATEWAY, "Invalid upstream response")
            }),
        Err(e) => {
            warn!(error = %e, "Relay failed");
            let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(status, e.to_string())
        }
    }
}

async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Json<LeaderboardResponse> {
    let query = params.to_query();
    let matched = state.dataset.query(&query);
    let total = matched.len();
    let limit = params.limit.unwrap_or(total);

    let follows = state.follows.read().await;
    let rows = matched
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, t)| LeaderboardRow::new(i + 1, t, query.timeframe, follows.is_following(&t.address)))
        .collect();

    Json(LeaderboardResponse {
        timeframe: query.timeframe,
        sort: query.sort,
        market: query.market.to_string(),
        total,
        seed: state.dataset.seed(),
        generated_at: state.dataset.anchor(),
        rows,
    })
}

async fn trader_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TraderProfile>, Response<Body>> {
    let trader = state
        .dataset
        .find(&id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("Unknown trader: {id}")))?;

    let following = state.follows.read().await.is_following(&trader.address);
    Ok(Json(TraderProfile::new(trader, following)))
}

async fn toggle_follow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FollowResponse>, Response<Body>> {
    let trader = state
        .dataset
        .find(&id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("Unknown trader: {id}")))?;

    let following = state.follows.write().await.toggle(&trader.address);
    info!(address = %trader.address, following = following, "Follow toggled");

    Ok(Json(FollowResponse {
        address: trader.address.clone(),
        following,
    }))
}

async fn alerts(State(state): State<AppState>) -> Json<Vec<FeedItem>> {
    let follows = state.follows.read().await;
    let prefs = state.prefs.read().await;
    Json(signal_feed(&state.dataset, &follows, &prefs))
}

async fn get_preferences(State(state): State<AppState>) -> Json<AlertPreferences> {
    Json(state.prefs.read().await.clone())
}

async fn put_preferences(
    State(state): State<AppState>,
    Json(prefs): Json<AlertPreferences>,
) -> Json<AlertPreferences> {
    info!(
        min_size_usd = prefs.min_size_usd,
        symbols = ?prefs.symbols,
        events = ?prefs.events,
        "Alert preferences updated"
    );
    *state.prefs.write().await = prefs.clone();
    Json(prefs)
}

async fn links(State(state): State<AppState>) -> Json<Links> {
    Json(state.links.as_ref().clone())
}
