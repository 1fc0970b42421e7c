//! Arena gaming platform API server.
//!
//! Stateless HTTP handlers over a shared PostgreSQL pool: player
//! registration, profiles, friends, withdrawals, and the leaderboard.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::Error;
use ctrlc::set_handler;
use pico_args::Arguments;
use tracing::info;

use arena::{
    AuthManager, FriendManager, LeaderboardManager, ProfileManager, WalletManager, db::Database,
};
use arena_server::api::{self, rate_limiter::RateLimiter};
use arena_server::{config::ServerConfig, logging, metrics};

const HELP: &str = "\
Run the Arena gaming platform API server

USAGE:
  arena_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8080]
  --db-url     URL         Database connection string  [default: env DATABASE_URL]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  DATABASE_URL             PostgreSQL connection string
  JWT_SECRET               JWT signing secret (required)
  PLAYER_IMAGE_DIR         Avatar upload directory   [default: player_images]
  PLAYER_IMAGE_MAX_BYTES   Avatar size cap in bytes  [default: 5242880]
  METRICS_BIND             Optional Prometheus exporter address
  (See .env file for all configuration options)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let db_url_override: Option<String> = pargs.opt_value_from_str("--db-url")?;

    logging::init();

    let config = ServerConfig::from_env(bind_override, db_url_override)
        .map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    info!("Connecting to database");
    let db = Database::new(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {e}"))?;

    db.run_migrations()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
    info!("Database connected and migrated");

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(Error::msg)?;
        info!("Prometheus exporter listening on {addr}");
    }

    let pool = Arc::new(db.pool().clone());
    let state = api::AppState {
        auth_manager: Arc::new(AuthManager::new(
            pool.clone(),
            config.security.jwt_secret.clone(),
        )),
        profile_manager: Arc::new(ProfileManager::new(pool.clone())),
        friend_manager: Arc::new(FriendManager::new(pool.clone())),
        wallet_manager: Arc::new(WalletManager::new(pool.clone())),
        leaderboard: Arc::new(LeaderboardManager::new(pool.clone())),
        pool,
        uploads: config.uploads.clone(),
        register_limiter: Arc::new(Mutex::new(RateLimiter::registration())),
    };

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {e}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {e}"))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
