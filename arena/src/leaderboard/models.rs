//! Leaderboard data models.

use serde::{Deserialize, Serialize};

/// A ranked leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub player_id: i64,
    pub first_name: String,
    pub wallet_balance: i64,
}

/// Prize mapping for the top-scoring player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeAward {
    pub player_id: i64,
    pub first_name: String,
    pub score: i64,
    pub position: u32,
    pub winning_amount: String,
}
