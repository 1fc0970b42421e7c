//! Identity data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// Player model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: PlayerId,
    pub mobile: String,
    pub first_name: String,
    pub email: String,
    pub device_type: String,
    pub device_token: String,
    pub avatar_path: Option<String>,
    pub wallet_balance: i64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request keyed by mobile number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub mobile: String,
    pub first_name: String,
    pub email: String,
    pub device_type: String,
    pub device_token: String,
}

/// Outcome of a register-or-fetch call
#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
    /// The mobile number was already registered; the stored record is
    /// returned unchanged and no token is issued.
    Existing(Player),
    /// A new player record was created along with a fresh access token.
    Created {
        player: Player,
        access_token: String,
    },
}

impl RegistrationOutcome {
    /// The player record, whether newly created or pre-existing
    pub fn player(&self) -> &Player {
        match self {
            RegistrationOutcome::Existing(player) => player,
            RegistrationOutcome::Created { player, .. } => player,
        }
    }

    /// The access token, present only on first creation
    pub fn access_token(&self) -> Option<&str> {
        match self {
            RegistrationOutcome::Existing(_) => None,
            RegistrationOutcome::Created { access_token, .. } => Some(access_token),
        }
    }
}

/// JWT claims for access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String, // Registered mobile number
    pub exp: i64,    // Expiration timestamp
    pub iat: i64,    // Issued at timestamp
}
