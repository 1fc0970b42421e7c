//! Profile data models.

use serde::{Deserialize, Serialize};

/// Partial update of a player's profile fields.
///
/// `None` keeps the stored value; `Some` overwrites it, including with an
/// empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl PlayerPatch {
    /// True when no field is provided
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.email.is_none() && self.mobile.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_deserialize_to_none() {
        let patch: PlayerPatch = serde_json::from_str(r#"{"first_name": "Asha"}"#).unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Asha"));
        assert!(patch.email.is_none());
        assert!(patch.mobile.is_none());
    }

    #[test]
    fn test_empty_string_is_distinct_from_absent() {
        let patch: PlayerPatch = serde_json::from_str(r#"{"email": ""}"#).unwrap();
        assert_eq!(patch.email.as_deref(), Some(""));
        assert!(patch.first_name.is_none());
    }

    #[test]
    fn test_is_empty() {
        let patch: PlayerPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: PlayerPatch = serde_json::from_str(r#"{"mobile": "9999999999"}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
