//! Identity module providing phone-number registration and access tokens.
//!
//! This module implements the platform's trust model:
//! - A player is identified by their mobile number alone; there are no
//!   passwords or credential checks.
//! - The first registration for a mobile number creates the player record
//!   and issues a signed JWT access token (1-hour expiry).
//! - Any later registration for the same number returns the stored record
//!   unchanged, with no token.
//!
//! ## Example
//!
//! ```no_run
//! use arena::auth::{AuthManager, RegisterRequest, RegistrationOutcome};
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
//!     match auth.register_or_fetch(request).await? {
//!         RegistrationOutcome::Created { player, access_token } => {
//!             println!("New player {} with token {access_token}", player.id);
//!         }
//!         RegistrationOutcome::Existing(player) => {
//!             println!("Player {} already registered", player.id);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{AuthError, AuthResult};
pub use manager::AuthManager;
pub use models::{AccessTokenClaims, Player, PlayerId, RegisterRequest, RegistrationOutcome};
