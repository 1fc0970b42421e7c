//! HTTP API server for the Arena gaming platform.
//!
//! Exposes the platform's player, friend, wallet, and leaderboard
//! operations as a JSON REST API over the `arena` core library.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
