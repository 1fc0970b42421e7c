//! Leaderboard manager implementation.

use super::models::{LeaderboardEntry, PrizeAward};
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

/// Leaderboard manager
#[derive(Clone)]
pub struct LeaderboardManager {
    pool: Arc<PgPool>,
}

impl LeaderboardManager {
    /// Create a new leaderboard manager
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Top players ordered by wallet balance, descending
    ///
    /// Returns at most `limit` entries with 1-based ranks.
    pub async fn top_by_balance(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, wallet_balance
            FROM players
            ORDER BY wallet_balance DESC, id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rank_entries(rows))
    }

    /// The single top player by score, mapped to its prize placeholder
    ///
    /// Returns `None` when no players exist.
    pub async fn top_prize(&self) -> Result<Option<PrizeAward>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, score
            FROM players
            ORDER BY score DESC, id
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| PrizeAward {
            player_id: r.get("id"),
            first_name: r.get("first_name"),
            score: r.get("score"),
            position: 1,
            winning_amount: placeholder_prize(1),
        }))
    }
}

/// Assign 1-based ranks to rows already ordered by balance
fn rank_entries(rows: Vec<PgRow>) -> Vec<LeaderboardEntry> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            rank: (i + 1) as i64,
            player_id: row.get("id"),
            first_name: row.get("first_name"),
            wallet_balance: row.get("wallet_balance"),
        })
        .collect()
}

/// Placeholder prize mapping by position
///
/// No real prize-distribution algorithm exists; the value is a
/// non-numeric label, as published by the platform today.
pub fn placeholder_prize(position: u32) -> String {
    format!("winning amount for position {position}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_prize_is_non_numeric() {
        let prize = placeholder_prize(1);
        assert_eq!(prize, "winning amount for position 1");
        assert!(prize.parse::<i64>().is_err());
    }

    #[test]
    fn test_placeholder_prize_tracks_position() {
        assert_ne!(placeholder_prize(1), placeholder_prize(2));
    }
}
