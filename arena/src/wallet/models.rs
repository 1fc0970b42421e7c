//! Wallet data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Withdrawal request input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub player_id: i64,
    pub amount: i64,
    pub bank_account: String,
    pub bank_ifsc: String,
}

/// Stored withdrawal record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WithdrawalRecord {
    pub id: i64,
    pub player_id: i64,
    pub amount: i64,
    pub bank_account: String,
    pub bank_ifsc: String,
    pub created_at: DateTime<Utc>,
}

/// Wallet projection of a player row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WalletSummary {
    pub player_id: i64,
    pub wallet_balance: i64,
    pub score: i64,
}
