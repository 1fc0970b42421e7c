//! Leaderboard API handlers.

use axum::{Json, extract::State, http::StatusCode};

use arena::leaderboard::{LeaderboardEntry, PrizeAward};

use super::{AppState, envelope::ApiResponse};

/// Number of entries on the public leaderboard
const LEADERBOARD_SIZE: i64 = 10;

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

/// Top 10 players by wallet balance, descending.
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LeaderboardEntry>>>, ErrorReply> {
    match state.leaderboard.top_by_balance(LEADERBOARD_SIZE).await {
        Ok(entries) => Ok(Json(ApiResponse::success(entries))),
        Err(e) => {
            tracing::error!(error = %e, "leaderboard query failed");
            Err(internal_error())
        }
    }
}

/// The top-scoring player and their placeholder prize.
pub async fn top_prize(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PrizeAward>>, ErrorReply> {
    match state.leaderboard.top_prize().await {
        Ok(Some(award)) => Ok(Json(ApiResponse::success(award))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::failure("No players registered yet.")),
        )),
        Err(e) => {
            tracing::error!(error = %e, "top prize query failed");
            Err(internal_error())
        }
    }
}

fn internal_error() -> ErrorReply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error("Internal server error")),
    )
}
