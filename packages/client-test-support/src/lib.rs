//! Client test support utilities
//!
//! Scripted game-service double, snapshot fixtures, and unified logging
//! initialization shared by unit and integration tests.

pub mod fake_api;
pub mod fixtures;
pub mod logging;

pub use fake_api::{FakeCall, FakeGameApi};
