//! Profile error types.

use thiserror::Error;

/// Profile errors
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Player not found
    #[error("Player not found")]
    PlayerNotFound,

    /// Patch contained no fields
    #[error("No fields provided to update")]
    EmptyPatch,

    /// Mobile number already belongs to another player
    #[error("Mobile number already registered")]
    MobileTaken,
}

impl ProfileError {
    /// Get a client-safe error message that doesn't leak sensitive information
    pub fn client_message(&self) -> String {
        match self {
            ProfileError::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;
