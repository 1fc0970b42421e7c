//! Friend relation API handlers.
//!
//! Requests address the target by email; resolution is performed by the
//! recipient. Rejections carry distinct messages for a missing requester,
//! a missing target, and an already-existing pair.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use std::str::FromStr;

use arena::friends::{FriendError, FriendRelation, FriendStatus};

use super::{AppState, envelope::ApiResponse};
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct SendRequestPayload {
    pub player_id: i64,
    pub email: String,
    pub friend_email: String,
}

#[derive(Debug, Deserialize)]
pub struct ListRelationsPayload {
    pub player_id: i64,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangeStatusPayload {
    pub player_id: i64,
    pub email: String,
    pub status: String,
}

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

/// Send a friend request to a target email.
///
/// # Errors
///
/// - `404 Not Found`: Requester or target does not exist (distinct messages)
/// - `400 Bad Request`: A relation for the pair already exists
pub async fn send_request(
    State(state): State<AppState>,
    Json(payload): Json<SendRequestPayload>,
) -> Result<Json<ApiResponse<FriendRelation>>, ErrorReply> {
    match state
        .friend_manager
        .send_request(payload.player_id, &payload.email, &payload.friend_email)
        .await
    {
        Ok(relation) => {
            metrics::friend_requests_total();
            Ok(Json(ApiResponse::success_with_message(
                relation,
                "Friend request sent successfully.",
            )))
        }
        Err(e) => Err(friend_error_reply(e)),
    }
}

/// List all relations owned by a (player, email) pair, as stored.
pub async fn list_relations(
    State(state): State<AppState>,
    Json(payload): Json<ListRelationsPayload>,
) -> Result<Json<ApiResponse<Vec<FriendRelation>>>, ErrorReply> {
    match state
        .friend_manager
        .list_relations(payload.player_id, &payload.email)
        .await
    {
        Ok(relations) => Ok(Json(ApiResponse::success_with_message(
            relations,
            "Friends retrieved successfully.",
        ))),
        Err(e) => Err(friend_error_reply(e)),
    }
}

/// Resolve a pending friend request, acting as the recipient.
///
/// The relation is matched by the sender's id and the recipient's email.
pub async fn change_status(
    State(state): State<AppState>,
    Json(payload): Json<ChangeStatusPayload>,
) -> Result<Json<ApiResponse<FriendRelation>>, ErrorReply> {
    let status = FriendStatus::from_str(&payload.status)
        .map_err(|raw| friend_error_reply(FriendError::InvalidStatus(raw)))?;

    match state
        .friend_manager
        .change_status(payload.player_id, &payload.email, status)
        .await
    {
        Ok(relation) => Ok(Json(ApiResponse::success_with_message(
            relation,
            "Friend request status updated.",
        ))),
        Err(e) => Err(friend_error_reply(e)),
    }
}

fn friend_error_reply(err: FriendError) -> ErrorReply {
    let status = match err {
        FriendError::RequesterNotFound
        | FriendError::TargetNotFound
        | FriendError::RelationNotFound => StatusCode::NOT_FOUND,
        FriendError::AlreadyExists
        | FriendError::AlreadyResolved(_)
        | FriendError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        FriendError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = err.client_message();
    if status.is_server_error() {
        (status, Json(ApiResponse::error(message)))
    } else {
        (status, Json(ApiResponse::failure(message)))
    }
}
