//! Wallet and withdrawal API handlers.
//!
//! Withdrawal requests are recorded regardless of the player's current
//! balance; settlement happens out of band.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use arena::wallet::{WalletError, WalletSummary, WithdrawalRecord, WithdrawalRequest};

use super::{AppState, envelope::ApiResponse};
use crate::metrics;

/// Default page size for withdrawal history
const DEFAULT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

/// Record a withdrawal request.
///
/// Field validation only; there is no balance check.
///
/// # Errors
///
/// - `400 Bad Request`: Non-positive amount or empty bank fields
/// - `404 Not Found`: No player with this id
pub async fn request_withdrawal(
    State(state): State<AppState>,
    Json(payload): Json<WithdrawalRequest>,
) -> Result<Json<ApiResponse<WithdrawalRecord>>, ErrorReply> {
    match state.wallet_manager.request_withdrawal(payload).await {
        Ok(record) => {
            metrics::withdrawal_requests_total();
            metrics::withdrawal_amount(record.amount);
            Ok(Json(ApiResponse::success_with_message(
                record,
                "Withdrawal request sent to admin.",
            )))
        }
        Err(e) => Err(wallet_error_reply(e)),
    }
}

/// Get a player's withdrawal records, newest first.
pub async fn withdrawal_history(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<ApiResponse<Vec<WithdrawalRecord>>>, ErrorReply> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT).clamp(1, 500);

    match state
        .wallet_manager
        .withdrawal_history(player_id, limit)
        .await
    {
        Ok(records) => Ok(Json(ApiResponse::success(records))),
        Err(e) => Err(wallet_error_reply(e)),
    }
}

/// Get the wallet projection of a player row.
pub async fn wallet_summary(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<ApiResponse<WalletSummary>>, ErrorReply> {
    match state.wallet_manager.wallet_summary(player_id).await {
        Ok(summary) => Ok(Json(ApiResponse::success(summary))),
        Err(e) => Err(wallet_error_reply(e)),
    }
}

fn wallet_error_reply(err: WalletError) -> ErrorReply {
    let status = match err {
        WalletError::PlayerNotFound => StatusCode::NOT_FOUND,
        WalletError::InvalidAmount(_) | WalletError::MissingBankDetail(_) => {
            StatusCode::BAD_REQUEST
        }
        WalletError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = err.client_message();
    if status.is_server_error() {
        (status, Json(ApiResponse::error(message)))
    } else {
        (status, Json(ApiResponse::failure(message)))
    }
}
