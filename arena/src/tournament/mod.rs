//! Tournament data models.
//!
//! Definitions only: no handler consumes these yet. They exist so
//! tournament records created by operators deserialize into typed values
//! instead of loose documents.

pub mod models;

pub use models::{TournamentDefinition, TournamentKind, TournamentStatus};
