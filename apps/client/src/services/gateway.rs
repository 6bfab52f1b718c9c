//! Player-intent submission with per-action in-flight tracking.
//!
//! One operation per intent. Each kind allows at most one in-flight request;
//! a second submission of the same kind while pending is dropped client-side
//! rather than queued. Remote rejections land in that kind's error slot and
//! never touch local table state, so the player can amend and retry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::api::types::{
    AckResponse, CallDealerRequest, CallFriendRequest, DiscardRequest, PlayRequest, TableResponse,
};
use crate::api::GameApi;
use crate::domain::rules::BOTTOM_CARDS;
use crate::domain::{CardValue, GameTableView, Suit};
use crate::error::ClientError;
use crate::errors::domain::{DomainError, ValidationKind};

/// Every player intent the table screen can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    StartGame,
    StartSingle,
    Join,
    CallDealer,
    DiscardBottom,
    CallFriend,
    PlayCards,
    AiPlay,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::StartGame => "start-game",
            ActionKind::StartSingle => "start-single",
            ActionKind::Join => "join",
            ActionKind::CallDealer => "call-dealer",
            ActionKind::DiscardBottom => "discard-bottom",
            ActionKind::CallFriend => "call-friend",
            ActionKind::PlayCards => "play-cards",
            ActionKind::AiPlay => "ai-play",
        }
    }
}

/// Lifecycle of one action kind's submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Error(String),
}

/// Submits intents to the remote service and tracks per-kind state.
///
/// The state map sits behind a mutex only because submissions are futures; no
/// lock is ever held across an await and nothing here runs in parallel.
pub struct ActionGateway {
    api: Arc<dyn GameApi>,
    game_id: String,
    states: Mutex<HashMap<ActionKind, MutationState>>,
}

impl ActionGateway {
    pub fn new(api: Arc<dyn GameApi>, game_id: impl Into<String>) -> Self {
        Self {
            api,
            game_id: game_id.into(),
            states: Mutex::new(HashMap::new()),
        }
    }

    pub fn state(&self, kind: ActionKind) -> MutationState {
        self.states
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_pending(&self, kind: ActionKind) -> bool {
        matches!(self.state(kind), MutationState::Pending)
    }

    /// Claim the in-flight slot for `kind`, rejecting a duplicate submission.
    fn begin(&self, kind: ActionKind) -> Result<(), ClientError> {
        let mut states = self.states.lock().unwrap();
        if matches!(states.get(&kind), Some(MutationState::Pending)) {
            debug!(kind = kind.as_str(), "dropping duplicate submission");
            return Err(ClientError::already_pending(kind.as_str()));
        }
        states.insert(kind, MutationState::Pending);
        Ok(())
    }

    fn settle<T>(
        &self,
        kind: ActionKind,
        result: Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        let state = match &result {
            Ok(_) => MutationState::Idle,
            Err(e) => MutationState::Error(e.to_string()),
        };
        self.states.lock().unwrap().insert(kind, state);
        result
    }

    /// A `success: false` envelope is a remote rejection, not new table state.
    fn check_table(resp: TableResponse) -> Result<Option<GameTableView>, ClientError> {
        if resp.success {
            Ok(resp.game)
        } else {
            Err(ClientError::rejected(resp.error_detail()))
        }
    }

    fn check_ack(resp: AckResponse) -> Result<(), ClientError> {
        if resp.success {
            Ok(())
        } else {
            Err(ClientError::rejected(resp.error_detail()))
        }
    }

    pub async fn start_game(&self) -> Result<(), ClientError> {
        self.begin(ActionKind::StartGame)?;
        debug!(game_id = %self.game_id, "starting match");
        let result = self
            .api
            .start_game(&self.game_id)
            .await
            .and_then(Self::check_ack);
        self.settle(ActionKind::StartGame, result)
    }

    pub async fn start_single(&self) -> Result<Option<GameTableView>, ClientError> {
        self.begin(ActionKind::StartSingle)?;
        debug!(game_id = %self.game_id, "starting single-player match");
        let result = self
            .api
            .start_single(&self.game_id)
            .await
            .and_then(Self::check_table);
        self.settle(ActionKind::StartSingle, result)
    }

    pub async fn join_game(&self) -> Result<(), ClientError> {
        self.begin(ActionKind::Join)?;
        debug!(game_id = %self.game_id, "joining table");
        let result = self
            .api
            .join_game(&self.game_id)
            .await
            .and_then(Self::check_ack);
        self.settle(ActionKind::Join, result)
    }

    pub async fn call_dealer(
        &self,
        suit: Suit,
        card_indices: Vec<usize>,
    ) -> Result<Option<GameTableView>, ClientError> {
        self.begin(ActionKind::CallDealer)?;
        debug!(game_id = %self.game_id, ?suit, count = card_indices.len(), "calling dealer");
        let req = CallDealerRequest { suit, card_indices };
        let result = self
            .api
            .call_dealer(&self.game_id, &req)
            .await
            .and_then(Self::check_table);
        self.settle(ActionKind::CallDealer, result)
    }

    /// Rejected client-side unless exactly [`BOTTOM_CARDS`] indices are given;
    /// an invalid size is never sent and never claims the in-flight slot.
    pub async fn discard_bottom(
        &self,
        card_indices: Vec<usize>,
    ) -> Result<Option<GameTableView>, ClientError> {
        if card_indices.len() != BOTTOM_CARDS {
            return Err(DomainError::validation(
                ValidationKind::DiscardSize,
                format!(
                    "discard requires exactly {BOTTOM_CARDS} cards, got {}",
                    card_indices.len()
                ),
            )
            .into());
        }
        self.begin(ActionKind::DiscardBottom)?;
        debug!(game_id = %self.game_id, "discarding bottom cards");
        let req = DiscardRequest { card_indices };
        let result = self
            .api
            .discard_bottom(&self.game_id, &req)
            .await
            .and_then(Self::check_table);
        self.settle(ActionKind::DiscardBottom, result)
    }

    pub async fn call_friend(
        &self,
        suit: Suit,
        value: CardValue,
        position: u8,
    ) -> Result<Option<GameTableView>, ClientError> {
        self.begin(ActionKind::CallFriend)?;
        debug!(game_id = %self.game_id, ?suit, ?value, position, "calling friend");
        let req = CallFriendRequest {
            suit,
            value,
            position,
        };
        let result = self
            .api
            .call_friend(&self.game_id, &req)
            .await
            .and_then(Self::check_table);
        self.settle(ActionKind::CallFriend, result)
    }

    /// An empty selection is a no-op intent and is never sent.
    pub async fn play_cards(
        &self,
        card_indices: Vec<usize>,
    ) -> Result<Option<GameTableView>, ClientError> {
        if card_indices.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptySelection,
                "no cards selected",
            )
            .into());
        }
        self.begin(ActionKind::PlayCards)?;
        debug!(game_id = %self.game_id, count = card_indices.len(), "playing cards");
        let req = PlayRequest { card_indices };
        let result = self
            .api
            .play_cards(&self.game_id, &req)
            .await
            .and_then(Self::check_table);
        self.settle(ActionKind::PlayCards, result)
    }

    pub async fn ai_play(&self) -> Result<Option<GameTableView>, ClientError> {
        self.begin(ActionKind::AiPlay)?;
        debug!(game_id = %self.game_id, "requesting automated play");
        let result = self
            .api
            .ai_play(&self.game_id)
            .await
            .and_then(Self::check_table);
        self.settle(ActionKind::AiPlay, result)
    }
}
