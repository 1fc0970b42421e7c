//! Friends module providing friend-request records and status transitions.
//!
//! A relation is directed: the owner (`player_id`, `email`) sends a
//! request to a target identified by `friend_email`. Each (owner, target
//! email) pair has at most one relation, enforced by a unique index so
//! concurrent duplicate requests cannot both land. Only a `pending`
//! relation can be resolved, and resolution is performed by the
//! recipient.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{FriendError, FriendResult};
pub use manager::FriendManager;
pub use models::{FriendRelation, FriendStatus};
