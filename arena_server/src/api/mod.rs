//! HTTP API for the Arena gaming platform server.
//!
//! This module provides the REST API over the core managers. It handles
//! player registration and profiles, friend relations, wallet
//! withdrawals, and the leaderboard.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework for HTTP
//! - **Tower**: Middleware for CORS and request correlation
//! - **JWT**: Access tokens issued at first registration
//!
//! # Modules
//!
//! - [`players`]: registration, mobile check, profile reads/updates, avatars
//! - [`friends`]: friend requests, listing, status resolution
//! - [`wallet`]: withdrawal requests and wallet lookups
//! - [`leaderboard`]: balance ranking and top prize
//! - [`envelope`]: the uniform JSON response envelope
//! - [`rate_limiter`], [`request_id`]: cross-cutting request plumbing
//!
//! # Endpoints Overview
//!
//! ```text
//! GET   /health                              - Health check
//! POST  /api/v1/players/register             - Register or fetch by mobile
//! POST  /api/v1/players/check-mobile         - Mobile existence check
//! GET   /api/v1/players/{id}                 - Player details
//! PATCH /api/v1/players/{id}                 - Partial profile update
//! PATCH /api/v1/players/{id}/name            - Name-only update
//! POST  /api/v1/players/{id}/avatar          - Avatar upload (multipart)
//! GET   /api/v1/players/{id}/avatar          - Avatar reference
//! POST  /api/v1/friends/request              - Send friend request
//! POST  /api/v1/friends/list                 - List relations for a pair
//! POST  /api/v1/friends/status               - Resolve a pending request
//! POST  /api/v1/wallet/withdraw              - Record withdrawal request
//! GET   /api/v1/wallet/{id}                  - Wallet summary
//! GET   /api/v1/wallet/{id}/withdrawals      - Withdrawal history
//! GET   /api/v1/leaderboard                  - Top 10 by wallet balance
//! GET   /api/v1/leaderboard/top-prize        - Top scorer's prize placeholder
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively for development. In production, configure
//! appropriate origins, methods, and headers.

pub mod envelope;
pub mod friends;
pub mod leaderboard;
pub mod players;
pub mod rate_limiter;
pub mod request_id;
pub mod wallet;

use arena::{AuthManager, FriendManager, LeaderboardManager, ProfileManager, WalletManager};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::config::UploadConfig;
use rate_limiter::RateLimiter;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request (cheap due to Arc wrappers); provides access to the
/// core managers, the pool for health probes, and upload configuration.
#[derive(Clone)]
pub struct AppState {
    pub auth_manager: Arc<AuthManager>,
    pub profile_manager: Arc<ProfileManager>,
    pub friend_manager: Arc<FriendManager>,
    pub wallet_manager: Arc<WalletManager>,
    pub leaderboard: Arc<LeaderboardManager>,
    pub pool: Arc<PgPool>,
    pub uploads: UploadConfig,
    pub register_limiter: Arc<Mutex<RateLimiter>>,
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Arguments
///
/// - `state`: Application state with managers
///
/// # Returns
///
/// Configured Axum router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    let v1_routes = create_v1_router();

    let root_routes = Router::new().route("/health", get(health_check));

    // Body limit must clear the avatar size cap plus multipart framing.
    let body_limit = axum::extract::DefaultBodyLimit::max(state.uploads.max_bytes + 16 * 1024);

    Router::new()
        .merge(root_routes)
        .nest("/api/v1", v1_routes)
        .layer(body_limit)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create API v1 router with all versioned endpoints.
///
/// Versioning allows future API evolution (v2, v3, ...) while keeping
/// existing clients working.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/players/register", post(players::register))
        .route("/players/check-mobile", post(players::check_mobile))
        .route(
            "/players/{player_id}",
            get(players::get_details).patch(players::update_details),
        )
        .route("/players/{player_id}/name", axum::routing::patch(players::update_name))
        .route(
            "/players/{player_id}/avatar",
            get(players::get_avatar).post(players::upload_avatar),
        )
        .route("/friends/request", post(friends::send_request))
        .route("/friends/list", post(friends::list_relations))
        .route("/friends/status", post(friends::change_status))
        .route("/wallet/withdraw", post(wallet::request_withdrawal))
        .route("/wallet/{player_id}", get(wallet::wallet_summary))
        .route(
            "/wallet/{player_id}/withdrawals",
            get(wallet::withdrawal_history),
        )
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route("/leaderboard/top-prize", get(leaderboard::top_prize))
}

/// Health check endpoint for monitoring and load balancers.
///
/// Probes database connectivity and returns `200 OK` when healthy or
/// `503 Service Unavailable` otherwise.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","database":true,"timestamp":"2026-08-06T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = sqlx::query("SELECT 1")
        .fetch_one(state.pool.as_ref())
        .await
        .is_ok();

    let status_code = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = json!({
        "status": if db_healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "database": db_healthy,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}
