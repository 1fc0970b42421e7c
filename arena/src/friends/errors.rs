//! Friend relation error types.

use super::models::FriendStatus;
use thiserror::Error;

/// Friend relation errors
#[derive(Debug, Error)]
pub enum FriendError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requesting player not found by (id, email)
    #[error("User not found")]
    RequesterNotFound,

    /// Target player not found by email
    #[error("Friend not found")]
    TargetNotFound,

    /// A relation already exists for this pair
    #[error("Friend request already sent or friend exists")]
    AlreadyExists,

    /// No relation matched the update
    #[error("Friend request not found")]
    RelationNotFound,

    /// Relation is no longer pending
    #[error("Friend request already resolved to {0}")]
    AlreadyResolved(FriendStatus),

    /// Status is not a valid resolution
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
}

impl FriendError {
    /// Get a client-safe error message that doesn't leak sensitive information
    pub fn client_message(&self) -> String {
        match self {
            FriendError::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for friend relation operations
pub type FriendResult<T> = Result<T, FriendError>;
