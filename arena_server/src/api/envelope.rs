//! JSON response envelope shared by every endpoint.
//!
//! Responses are uniformly shaped
//! `{ "success": bool, "message"?: string, "data"?: ..., "error"?: string }`.
//! Business-rule failures carry a `message`; unexpected failures carry a
//! sanitized `error`.

use serde::Serialize;

/// Uniform response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response with payload
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// Successful response with payload and message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }

    /// Business-rule failure with a client-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    /// Unexpected failure with a sanitized error string
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sets_flag_and_data() {
        let response = ApiResponse::success("ok");
        assert!(response.success);
        assert_eq!(response.data, Some("ok"));
        assert!(response.message.is_none());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_failure_has_message_but_no_data() {
        let response: ApiResponse<()> = ApiResponse::failure("Player not found");
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Player not found"));
        assert!(response.data.is_none());
    }

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let response: ApiResponse<()> = ApiResponse::failure("nope");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"nope"}"#);
    }

    #[test]
    fn test_error_envelope_shape() {
        let response: ApiResponse<()> = ApiResponse::error("Internal server error");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"Internal server error"}"#);
    }
}
