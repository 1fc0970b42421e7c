//! Friend relation data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Friend relation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    Pending,
    Accepted,
    Rejected,
    Blocked,
}

impl FriendStatus {
    /// Wire/storage form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendStatus::Pending => "pending",
            FriendStatus::Accepted => "accepted",
            FriendStatus::Rejected => "rejected",
            FriendStatus::Blocked => "blocked",
        }
    }

    /// True for statuses a pending request may be resolved to
    pub fn is_resolution(&self) -> bool {
        !matches!(self, FriendStatus::Pending)
    }
}

impl std::fmt::Display for FriendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FriendStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FriendStatus::Pending),
            "accepted" => Ok(FriendStatus::Accepted),
            "rejected" => Ok(FriendStatus::Rejected),
            "blocked" => Ok(FriendStatus::Blocked),
            other => Err(other.to_string()),
        }
    }
}

/// Directed friend relation between an owner and a target email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRelation {
    pub id: i64,
    pub player_id: i64,
    pub email: String,
    pub friend_email: String,
    pub status: FriendStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for status in [
            FriendStatus::Pending,
            FriendStatus::Accepted,
            FriendStatus::Rejected,
            FriendStatus::Blocked,
        ] {
            assert_eq!(FriendStatus::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(FriendStatus::from_str("friendzoned").is_err());
        assert!(FriendStatus::from_str("Pending").is_err());
    }

    #[test]
    fn test_pending_is_not_a_resolution() {
        assert!(!FriendStatus::Pending.is_resolution());
        assert!(FriendStatus::Accepted.is_resolution());
        assert!(FriendStatus::Rejected.is_resolution());
        assert!(FriendStatus::Blocked.is_resolution());
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        let json = serde_json::to_string(&FriendStatus::Accepted).unwrap();
        assert_eq!(json, r#""accepted""#);
    }
}
