//! Player API handlers.
//!
//! This module provides HTTP REST endpoints for player identity and
//! profile operations:
//! - Registration keyed by mobile number (fetches the existing record on
//!   repeat calls, issues a 1-hour token only on first creation)
//! - Mobile-number existence check
//! - Profile reads and partial updates
//! - Avatar upload (one multipart field, `player_image`) and lookup
//!
//! # Examples
//!
//! Register a player:
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/players/register \
//!   -H "Content-Type: application/json" \
//!   -d '{"mobile": "9999999999", "first_name": "Asha", "email": "asha@example.com", "device_type": "android", "device_token": "fcm-token"}'
//! ```
//!
//! Upload an avatar:
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/players/1/avatar \
//!   -F "player_image=@avatar.png"
//! ```

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arena::auth::{AuthError, Player, RegisterRequest, RegistrationOutcome};
use arena::profile::{PlayerPatch, ProfileError};

use super::{AppState, envelope::ApiResponse};
use crate::metrics;

/// Register response: the envelope plus a top-level `token` that is
/// present only when the record was just created.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub data: Player,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckMobilePayload {
    pub mobile: String,
}

#[derive(Debug, Serialize)]
pub struct CheckMobileResponse {
    pub registered: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNamePayload {
    pub first_name: String,
}

#[derive(Debug, Serialize)]
pub struct AvatarResponse {
    pub player_image: Option<String>,
}

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

/// Register a player by mobile number, or return the existing record.
///
/// The first call for a mobile number creates the record and issues a
/// signed access token (1-hour expiry). Any later call returns the stored
/// record unchanged, with no token — registration is idempotent per
/// mobile number.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": 1, "mobile": "9999999999", ... },
///   "token": "eyJhbGciOiJIUzI1NiIs...",
///   "message": "New player created."
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Invalid mobile number format
/// - `429 Too Many Requests`: Registration rate limit hit
/// - `500 Internal Server Error`: Database failure
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ErrorReply> {
    let allowed = state
        .register_limiter
        .lock()
        .expect("register limiter lock poisoned")
        .check();
    if !allowed {
        metrics::rate_limit_hits_total("players/register");
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiResponse::failure("Too many registrations, slow down.")),
        ));
    }

    match state.auth_manager.register_or_fetch(payload).await {
        Ok(RegistrationOutcome::Created {
            player,
            access_token,
        }) => {
            metrics::registrations_total(true);
            Ok(Json(RegisterResponse {
                success: true,
                data: player,
                token: Some(access_token),
                message: "New player created.".to_string(),
            }))
        }
        Ok(RegistrationOutcome::Existing(player)) => {
            metrics::registrations_total(false);
            Ok(Json(RegisterResponse {
                success: true,
                data: player,
                token: None,
                message: "Player already exists. Returning existing data.".to_string(),
            }))
        }
        Err(e) => Err(auth_error_reply(e)),
    }
}

/// Check whether a mobile number is already registered.
pub async fn check_mobile(
    State(state): State<AppState>,
    Json(payload): Json<CheckMobilePayload>,
) -> Result<Json<ApiResponse<CheckMobileResponse>>, ErrorReply> {
    match state.auth_manager.is_mobile_registered(&payload.mobile).await {
        Ok(registered) => {
            let message = if registered {
                "Mobile number is registered."
            } else {
                "Mobile number is not registered."
            };
            Ok(Json(ApiResponse::success_with_message(
                CheckMobileResponse { registered },
                message,
            )))
        }
        Err(e) => Err(auth_error_reply(e)),
    }
}

/// Get a player's full profile.
///
/// # Errors
///
/// - `404 Not Found`: No player with this id
pub async fn get_details(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<ApiResponse<Player>>, ErrorReply> {
    match state.profile_manager.get_details(player_id).await {
        Ok(player) => Ok(Json(ApiResponse::success(player))),
        Err(e) => Err(profile_error_reply(e)),
    }
}

/// Apply a partial profile update.
///
/// Fields absent from the body keep their stored values; fields present
/// overwrite, including with an empty string.
pub async fn update_details(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(patch): Json<PlayerPatch>,
) -> Result<Json<ApiResponse<Player>>, ErrorReply> {
    match state.profile_manager.update_details(player_id, patch).await {
        Ok(player) => Ok(Json(ApiResponse::success_with_message(
            player,
            "Player updated successfully.",
        ))),
        Err(e) => Err(profile_error_reply(e)),
    }
}

/// Update only the player's display name.
pub async fn update_name(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(payload): Json<UpdateNamePayload>,
) -> Result<Json<ApiResponse<Player>>, ErrorReply> {
    match state
        .profile_manager
        .update_name(player_id, &payload.first_name)
        .await
    {
        Ok(player) => Ok(Json(ApiResponse::success_with_message(
            player,
            "Player name updated successfully.",
        ))),
        Err(e) => Err(profile_error_reply(e)),
    }
}

/// Get a player's avatar image reference.
pub async fn get_avatar(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<ApiResponse<AvatarResponse>>, ErrorReply> {
    match state.profile_manager.get_avatar(player_id).await {
        Ok(player_image) => Ok(Json(ApiResponse::success(AvatarResponse { player_image }))),
        Err(e) => Err(profile_error_reply(e)),
    }
}

/// Upload a player's avatar image.
///
/// Accepts a single multipart field named `player_image`, writes the file
/// under the configured image directory, and stores the relative path on
/// the player record.
///
/// # Errors
///
/// - `400 Bad Request`: Missing field or file too large
/// - `404 Not Found`: No player with this id
/// - `500 Internal Server Error`: Filesystem or database failure
pub async fn upload_avatar(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Player>>, ErrorReply> {
    // The player must exist before any bytes hit the disk.
    if let Err(e) = state.profile_manager.get_details(player_id).await {
        return Err(profile_error_reply(e));
    }

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(format!("Error uploading file: {e}"))),
        )
    })? {
        if field.name() != Some("player_image") {
            continue;
        }

        let extension = sanitize_extension(field.file_name());
        let bytes = field.bytes().await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(format!("Error uploading file: {e}"))),
            )
        })?;
        upload = Some((extension, bytes.to_vec()));
        break;
    }

    let Some((extension, bytes)) = upload else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure("player_image field is required.")),
        ));
    };

    if bytes.len() > state.uploads.max_bytes {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(format!(
                "player_image exceeds maximum size of {} bytes",
                state.uploads.max_bytes
            ))),
        ));
    }

    let file_name = format!("player_{player_id}_{}.{extension}", Uuid::new_v4());
    let target = state.uploads.dir.join(&file_name);

    if let Err(e) = tokio::fs::create_dir_all(&state.uploads.dir).await {
        tracing::error!(error = %e, "failed to create image directory");
        return Err(internal_error());
    }
    if let Err(e) = tokio::fs::write(&target, &bytes).await {
        tracing::error!(error = %e, path = %target.display(), "failed to write avatar");
        return Err(internal_error());
    }

    // Stored reference is relative to the image directory.
    let relative = format!("{}/{}", image_dir_name(&state), file_name);

    match state.profile_manager.set_avatar(player_id, &relative).await {
        Ok(player) => {
            metrics::avatar_uploads_total();
            Ok(Json(ApiResponse::success_with_message(
                player,
                "Player image updated successfully.",
            )))
        }
        Err(e) => Err(profile_error_reply(e)),
    }
}

/// Final path component of the configured image directory
fn image_dir_name(state: &AppState) -> String {
    state
        .uploads
        .dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "player_images".to_string())
}

/// Reduce an uploaded file name to a safe extension
fn sanitize_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| {
            !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or_else(|| "jpg".to_string())
}

fn auth_error_reply(err: AuthError) -> ErrorReply {
    let status = match err {
        AuthError::InvalidMobile(_) => StatusCode::BAD_REQUEST,
        AuthError::PlayerNotFound => StatusCode::NOT_FOUND,
        AuthError::Database(_) | AuthError::Jwt(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_reply(status, err.client_message())
}

fn profile_error_reply(err: ProfileError) -> ErrorReply {
    let status = match err {
        ProfileError::PlayerNotFound => StatusCode::NOT_FOUND,
        ProfileError::EmptyPatch | ProfileError::MobileTaken => StatusCode::BAD_REQUEST,
        ProfileError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_reply(status, err.client_message())
}

fn error_reply(status: StatusCode, message: String) -> ErrorReply {
    if status.is_server_error() {
        (status, Json(ApiResponse::error(message)))
    } else {
        (status, Json(ApiResponse::failure(message)))
    }
}

fn internal_error() -> ErrorReply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error("Internal server error")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_extension_accepts_common_images() {
        assert_eq!(sanitize_extension(Some("avatar.png")), "png");
        assert_eq!(sanitize_extension(Some("selfie.JPEG")), "jpeg");
        assert_eq!(sanitize_extension(Some("pic.with.dots.webp")), "webp");
    }

    #[test]
    fn test_sanitize_extension_defaults_on_garbage() {
        assert_eq!(sanitize_extension(None), "jpg");
        assert_eq!(sanitize_extension(Some("no_extension")), "jpg");
        assert_eq!(sanitize_extension(Some("weird.../../etc")), "jpg");
        assert_eq!(sanitize_extension(Some("trailing.")), "jpg");
        assert_eq!(sanitize_extension(Some("dotfile.averyverylongext")), "jpg");
    }

    #[test]
    fn test_register_response_omits_absent_token() {
        use chrono::Utc;
        let response = RegisterResponse {
            success: true,
            data: Player {
                id: 1,
                mobile: "9999999999".to_string(),
                first_name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                device_type: "android".to_string(),
                device_token: "fcm".to_string(),
                avatar_path: None,
                wallet_balance: 0,
                score: 0,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            token: None,
            message: "Player already exists. Returning existing data.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"token\""));
    }
}
