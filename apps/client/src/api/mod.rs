//! Typed boundary with the remote game service.

pub mod game_api;
pub mod types;

pub use game_api::GameApi;
