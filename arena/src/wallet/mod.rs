//! Wallet module providing withdrawal requests and balance lookups.
//!
//! Withdrawal requests are recorded unconditionally and settled out of
//! band by an operator; there is deliberately no balance check, no
//! minimum or maximum, and no approval lifecycle on the record itself.
//! The history queries are plain player-scoped, time-ordered listings.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{WalletError, WalletResult};
pub use manager::WalletManager;
pub use models::{WalletSummary, WithdrawalRecord, WithdrawalRequest};
