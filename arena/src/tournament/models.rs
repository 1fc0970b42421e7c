//! Typed tournament definition records.

use serde::{Deserialize, Serialize};

/// Tournament kind, stored as a small integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum TournamentKind {
    /// Free entry, no bet
    Free,
    /// Bet amount collected from each entrant
    Cash,
}

impl From<TournamentKind> for i16 {
    fn from(kind: TournamentKind) -> Self {
        match kind {
            TournamentKind::Free => 0,
            TournamentKind::Cash => 1,
        }
    }
}

impl TryFrom<i16> for TournamentKind {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TournamentKind::Free),
            1 => Ok(TournamentKind::Cash),
            other => Err(format!("unknown tournament kind: {other}")),
        }
    }
}

/// Tournament lifecycle status, stored as a small integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum TournamentStatus {
    Inactive,
    Open,
    Running,
    Completed,
}

impl From<TournamentStatus> for i16 {
    fn from(status: TournamentStatus) -> Self {
        match status {
            TournamentStatus::Inactive => 0,
            TournamentStatus::Open => 1,
            TournamentStatus::Running => 2,
            TournamentStatus::Completed => 3,
        }
    }
}

impl TryFrom<i16> for TournamentStatus {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TournamentStatus::Inactive),
            1 => Ok(TournamentStatus::Open),
            2 => Ok(TournamentStatus::Running),
            3 => Ok(TournamentStatus::Completed),
            other => Err(format!("unknown tournament status: {other}")),
        }
    }
}

/// Tournament definition
///
/// The winning amount is a display string, consistent with the
/// leaderboard's placeholder prize mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentDefinition {
    #[serde(default)]
    pub tournament_name: String,
    #[serde(default)]
    pub bet_amount: i64,
    #[serde(default)]
    pub no_of_players: u32,
    #[serde(default)]
    pub winning_amount: String,
    #[serde(default = "default_interval")]
    pub tournament_interval: String,
    #[serde(default)]
    pub kind: TournamentKind,
    #[serde(default)]
    pub status: TournamentStatus,
}

impl Default for TournamentKind {
    fn default() -> Self {
        TournamentKind::Free
    }
}

impl Default for TournamentStatus {
    fn default() -> Self {
        TournamentStatus::Inactive
    }
}

fn default_interval() -> String {
    "00:00:00".to_string()
}

impl Default for TournamentDefinition {
    fn default() -> Self {
        Self {
            tournament_name: String::new(),
            bet_amount: 0,
            no_of_players: 0,
            winning_amount: String::new(),
            tournament_interval: default_interval(),
            kind: TournamentKind::default(),
            status: TournamentStatus::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_documents() {
        let def = TournamentDefinition::default();
        assert_eq!(def.tournament_name, "");
        assert_eq!(def.bet_amount, 0);
        assert_eq!(def.no_of_players, 0);
        assert_eq!(def.winning_amount, "");
        assert_eq!(def.tournament_interval, "00:00:00");
        assert_eq!(def.kind, TournamentKind::Free);
        assert_eq!(def.status, TournamentStatus::Inactive);
    }

    #[test]
    fn test_enums_serialize_as_integers() {
        let json = serde_json::to_string(&TournamentStatus::Running).unwrap();
        assert_eq!(json, "2");
        let json = serde_json::to_string(&TournamentKind::Cash).unwrap();
        assert_eq!(json, "1");
    }

    #[test]
    fn test_unknown_integers_rejected() {
        assert!(serde_json::from_str::<TournamentStatus>("9").is_err());
        assert!(serde_json::from_str::<TournamentKind>("-1").is_err());
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let def: TournamentDefinition = serde_json::from_str("{}").unwrap();
        assert_eq!(def.status, TournamentStatus::Inactive);
        assert_eq!(def.tournament_interval, "00:00:00");
    }

    #[test]
    fn test_full_round_trip() {
        let def = TournamentDefinition {
            tournament_name: "Friday Knockout".to_string(),
            bet_amount: 250,
            no_of_players: 16,
            winning_amount: "winning amount for position 1".to_string(),
            tournament_interval: "01:30:00".to_string(),
            kind: TournamentKind::Cash,
            status: TournamentStatus::Open,
        };
        let json = serde_json::to_string(&def).unwrap();
        let back: TournamentDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tournament_name, def.tournament_name);
        assert_eq!(back.kind, def.kind);
        assert_eq!(back.status, def.status);
    }
}
