//! Boundary with the remote game engine.
//!
//! Rules, shuffling, trick legality, and scoring all live behind these
//! request/response operations; the client submits intents and observes
//! snapshots. Services depend on this trait, not on any transport, so tests
//! drive them with a scripted double.

use async_trait::async_trait;

use crate::api::types::{
    AckResponse, ActionsResponse, CallDealerRequest, CallFriendRequest, DiscardRequest,
    PlayRequest, ReplayResponse, TableResponse,
};
use crate::error::ClientError;

#[async_trait]
pub trait GameApi: Send + Sync {
    /// `GET /game/{id}/table`: polled snapshot of the table.
    async fn fetch_table(&self, game_id: &str) -> Result<TableResponse, ClientError>;

    /// `POST /game/singleplayer`: create a fresh single-player table.
    async fn create_single(&self) -> Result<TableResponse, ClientError>;

    /// `POST /game/{id}/start`
    async fn start_game(&self, game_id: &str) -> Result<AckResponse, ClientError>;

    /// `POST /game/{id}/start-single`
    async fn start_single(&self, game_id: &str) -> Result<TableResponse, ClientError>;

    /// `POST /game/{id}/join`
    async fn join_game(&self, game_id: &str) -> Result<AckResponse, ClientError>;

    /// `POST /game/{id}/call-dealer`
    async fn call_dealer(
        &self,
        game_id: &str,
        req: &CallDealerRequest,
    ) -> Result<TableResponse, ClientError>;

    /// `POST /game/{id}/discard-bottom`
    async fn discard_bottom(
        &self,
        game_id: &str,
        req: &DiscardRequest,
    ) -> Result<TableResponse, ClientError>;

    /// `POST /game/{id}/call-friend`
    async fn call_friend(
        &self,
        game_id: &str,
        req: &CallFriendRequest,
    ) -> Result<TableResponse, ClientError>;

    /// `POST /game/{id}/play`
    async fn play_cards(
        &self,
        game_id: &str,
        req: &PlayRequest,
    ) -> Result<TableResponse, ClientError>;

    /// `POST /game/{id}/ai-play`: automated play on the viewer's behalf.
    async fn ai_play(&self, game_id: &str) -> Result<TableResponse, ClientError>;

    /// `GET /game/{id}/replay`: read-only, outside the live-sync loop.
    async fn fetch_replay(&self, game_id: &str) -> Result<ReplayResponse, ClientError>;

    /// `GET /game/{id}/actions`: read-only, outside the live-sync loop.
    async fn fetch_actions(&self, game_id: &str) -> Result<ActionsResponse, ClientError>;
}
