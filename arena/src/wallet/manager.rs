//! Wallet manager implementation.

use super::{
    errors::{WalletError, WalletResult},
    models::{WalletSummary, WithdrawalRecord, WithdrawalRequest},
};
use crate::auth::PlayerId;
use sqlx::PgPool;
use std::sync::Arc;

/// Wallet manager
#[derive(Clone)]
pub struct WalletManager {
    pool: Arc<PgPool>,
}

impl WalletManager {
    /// Create a new wallet manager
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Record a withdrawal request
    ///
    /// Field validation only: the amount must be positive and bank fields
    /// non-empty. The current wallet balance is not consulted — requests
    /// are recorded regardless of funds and settled out of band.
    ///
    /// # Errors
    ///
    /// * `WalletError::InvalidAmount` - Amount is zero or negative
    /// * `WalletError::MissingBankDetail` - Empty bank account or routing code
    /// * `WalletError::PlayerNotFound` - No player with this id
    pub async fn request_withdrawal(
        &self,
        request: WithdrawalRequest,
    ) -> WalletResult<WithdrawalRecord> {
        validate_request(&request)?;

        let player = sqlx::query("SELECT id FROM players WHERE id = $1")
            .bind(request.player_id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        if player.is_none() {
            return Err(WalletError::PlayerNotFound);
        }

        let record = sqlx::query_as::<_, WithdrawalRecord>(
            r#"
            INSERT INTO withdrawal_requests (player_id, amount, bank_account, bank_ifsc)
            VALUES ($1, $2, $3, $4)
            RETURNING id, player_id, amount, bank_account, bank_ifsc, created_at
            "#,
        )
        .bind(request.player_id)
        .bind(request.amount)
        .bind(&request.bank_account)
        .bind(&request.bank_ifsc)
        .fetch_one(self.pool.as_ref())
        .await?;

        tracing::info!(
            player_id = record.player_id,
            amount = record.amount,
            "withdrawal request recorded"
        );

        Ok(record)
    }

    /// Get a player's withdrawal records, newest first
    ///
    /// # Arguments
    ///
    /// * `player_id` - Player ID
    /// * `limit` - Maximum number of records to return
    pub async fn withdrawal_history(
        &self,
        player_id: PlayerId,
        limit: i64,
    ) -> WalletResult<Vec<WithdrawalRecord>> {
        let records = sqlx::query_as::<_, WithdrawalRecord>(
            r#"
            SELECT id, player_id, amount, bank_account, bank_ifsc, created_at
            FROM withdrawal_requests
            WHERE player_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(player_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    /// Get the wallet projection of a player row
    ///
    /// # Errors
    ///
    /// * `WalletError::PlayerNotFound` - No player with this id
    pub async fn wallet_summary(&self, player_id: PlayerId) -> WalletResult<WalletSummary> {
        let summary = sqlx::query_as::<_, WalletSummary>(
            "SELECT id AS player_id, wallet_balance, score FROM players WHERE id = $1",
        )
        .bind(player_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(WalletError::PlayerNotFound)?;

        Ok(summary)
    }
}

/// Validate a withdrawal request's fields
///
/// Note the signature: the player's balance is not an input. Any positive
/// amount passes, however large.
fn validate_request(request: &WithdrawalRequest) -> WalletResult<()> {
    if request.amount <= 0 {
        return Err(WalletError::InvalidAmount(request.amount));
    }
    if request.bank_account.trim().is_empty() {
        return Err(WalletError::MissingBankDetail("bank_account"));
    }
    if request.bank_ifsc.trim().is_empty() {
        return Err(WalletError::MissingBankDetail("bank_ifsc"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: i64) -> WithdrawalRequest {
        WithdrawalRequest {
            player_id: 1,
            amount,
            bank_account: "000111222333".to_string(),
            bank_ifsc: "AREN0001234".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_any_positive_amount() {
        assert!(validate_request(&request(1)).is_ok());
        assert!(validate_request(&request(1_000_000_000)).is_ok());
        assert!(validate_request(&request(i64::MAX)).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        assert!(matches!(
            validate_request(&request(0)),
            Err(WalletError::InvalidAmount(0))
        ));
        assert!(matches!(
            validate_request(&request(-500)),
            Err(WalletError::InvalidAmount(-500))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_bank_fields() {
        let mut r = request(100);
        r.bank_account = "  ".to_string();
        assert!(matches!(
            validate_request(&r),
            Err(WalletError::MissingBankDetail("bank_account"))
        ));

        let mut r = request(100);
        r.bank_ifsc = String::new();
        assert!(matches!(
            validate_request(&r),
            Err(WalletError::MissingBankDetail("bank_ifsc"))
        ));
    }
}
