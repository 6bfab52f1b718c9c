#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use adapters::HttpGameApi;
pub use api::GameApi;
pub use auth::AuthSession;
pub use config::ClientConfig;
pub use domain::{
    AutoStartLatch, Card, CardValue, GameStatus, GameTableView, PhaseDialog,
    PhaseDialogController, Rank, SelectionStore, Suit,
};
pub use error::ClientError;
pub use services::{ActionKind, MutationState, SessionMode, TableFeed, TableSession, TableSync};

// Prelude for test convenience
pub mod prelude {
    pub use super::api::types::*;
    pub use super::api::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::services::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    client_test_support::logging::init();
}
