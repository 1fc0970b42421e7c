//! # Arena
//!
//! Core library for a multiplayer gaming platform backend.
//!
//! The platform registers players by phone number, manages their profiles
//! and avatars, tracks friend relations, records wallet withdrawal
//! requests, and computes a balance-keyed leaderboard. Every manager is a
//! thin, stateless layer over a shared PostgreSQL pool; the database
//! provides all concurrency control.
//!
//! ## Core Modules
//!
//! - [`auth`]: phone-number identity, registration, and access tokens
//! - [`profile`]: player detail projections and partial updates
//! - [`friends`]: friend-request records and status transitions
//! - [`wallet`]: withdrawal requests and wallet summaries
//! - [`leaderboard`]: balance ranking and the top-prize placeholder
//! - [`db`]: connection pooling, migrations, and repository traits
//!
//! ## Example
//!
//! ```no_run
//! use arena::auth::{AuthManager, RegisterRequest};
//! use arena::db::Database;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let auth = AuthManager::new(Arc::new(db.pool().clone()), "jwt_secret".to_string());
//!
//!     let request = RegisterRequest {
//!         mobile: "9999999999".to_string(),
//!         first_name: "Player One".to_string(),
//!         email: "player@example.com".to_string(),
//!         device_type: "android".to_string(),
//!         device_token: "fcm-token".to_string(),
//!     };
//!
//!     let outcome = auth.register_or_fetch(request).await?;
//!     println!("Player id: {}", outcome.player().id);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod db;
pub mod friends;
pub mod leaderboard;
pub mod profile;
pub mod tournament;
pub mod wallet;

pub use auth::{AuthManager, Player, PlayerId, RegisterRequest, RegistrationOutcome};
pub use friends::FriendManager;
pub use leaderboard::LeaderboardManager;
pub use profile::ProfileManager;
pub use wallet::WalletManager;
