//! Scripted in-memory implementation of the game service boundary.
//!
//! Tests queue table snapshots and mutation outcomes, then assert on the
//! calls the code under test actually made.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use client::api::types::{
    AckResponse, ActionsResponse, CallDealerRequest, CallFriendRequest, DiscardRequest,
    PlayRequest, ReplayResponse, TableResponse,
};
use client::api::GameApi;
use client::domain::GameTableView;
use client::error::ClientError;

/// One recorded call with its payload, for assertions.
#[derive(Debug, Clone)]
pub enum FakeCall {
    FetchTable,
    CreateSingle,
    StartGame,
    StartSingle,
    JoinGame,
    CallDealer(CallDealerRequest),
    DiscardBottom(DiscardRequest),
    CallFriend(CallFriendRequest),
    PlayCards(PlayRequest),
    AiPlay,
    FetchReplay,
    FetchActions,
}

impl FakeCall {
    pub fn name(&self) -> &'static str {
        match self {
            FakeCall::FetchTable => "fetch-table",
            FakeCall::CreateSingle => "create-single",
            FakeCall::StartGame => "start-game",
            FakeCall::StartSingle => "start-single",
            FakeCall::JoinGame => "join",
            FakeCall::CallDealer(_) => "call-dealer",
            FakeCall::DiscardBottom(_) => "discard-bottom",
            FakeCall::CallFriend(_) => "call-friend",
            FakeCall::PlayCards(_) => "play-cards",
            FakeCall::AiPlay => "ai-play",
            FakeCall::FetchReplay => "fetch-replay",
            FakeCall::FetchActions => "fetch-actions",
        }
    }
}

fn ok_with(view: Option<GameTableView>) -> TableResponse {
    TableResponse {
        success: true,
        game: view,
        error: None,
    }
}

/// Scripted double for [`GameApi`].
///
/// Table polls consume a queue; when the queue runs dry the last successful
/// response repeats, which keeps a steady-state poll loop simple to script.
/// Mutations consume a second queue and default to plain success.
#[derive(Default)]
pub struct FakeGameApi {
    table_queue: Mutex<VecDeque<Result<TableResponse, ClientError>>>,
    last_table: Mutex<Option<TableResponse>>,
    table_delay: Mutex<Option<Duration>>,
    mutation_queue: Mutex<VecDeque<Result<TableResponse, ClientError>>>,
    mutation_delay: Mutex<Option<Duration>>,
    calls: Mutex<Vec<FakeCall>>,
}

impl FakeGameApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_table(&self, result: Result<TableResponse, ClientError>) {
        self.table_queue.lock().unwrap().push_back(result);
    }

    pub fn queue_table_view(&self, view: GameTableView) {
        self.queue_table(Ok(ok_with(Some(view))));
    }

    /// Make every table fetch take `delay` before answering.
    pub fn set_table_delay(&self, delay: Duration) {
        *self.table_delay.lock().unwrap() = Some(delay);
    }

    /// Make every mutation take `delay` before answering.
    pub fn set_mutation_delay(&self, delay: Duration) {
        *self.mutation_delay.lock().unwrap() = Some(delay);
    }

    pub fn queue_mutation(&self, result: Result<TableResponse, ClientError>) {
        self.mutation_queue.lock().unwrap().push_back(result);
    }

    pub fn queue_mutation_rejected(&self, message: &str) {
        self.queue_mutation(Ok(TableResponse {
            success: false,
            game: None,
            error: Some(message.to_string()),
        }));
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name() == name)
            .count()
    }

    fn record(&self, call: FakeCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn next_mutation(&self) -> Result<TableResponse, ClientError> {
        let delay = *self.mutation_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.mutation_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ok_with(None)))
    }

    async fn next_ack(&self) -> Result<AckResponse, ClientError> {
        self.next_mutation().await.map(|resp| AckResponse {
            success: resp.success,
            error: resp.error,
        })
    }
}

#[async_trait]
impl GameApi for FakeGameApi {
    async fn fetch_table(&self, _game_id: &str) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::FetchTable);
        let delay = *self.table_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.table_queue.lock().unwrap().pop_front();
        match next {
            Some(Ok(resp)) => {
                if resp.success && resp.game.is_some() {
                    *self.last_table.lock().unwrap() = Some(resp.clone());
                }
                Ok(resp)
            }
            Some(Err(e)) => Err(e),
            None => self
                .last_table
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| ClientError::transport("no scripted table response")),
        }
    }

    async fn create_single(&self) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::CreateSingle);
        self.next_mutation().await
    }

    async fn start_game(&self, _game_id: &str) -> Result<AckResponse, ClientError> {
        self.record(FakeCall::StartGame);
        self.next_ack().await
    }

    async fn start_single(&self, _game_id: &str) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::StartSingle);
        self.next_mutation().await
    }

    async fn join_game(&self, _game_id: &str) -> Result<AckResponse, ClientError> {
        self.record(FakeCall::JoinGame);
        self.next_ack().await
    }

    async fn call_dealer(
        &self,
        _game_id: &str,
        req: &CallDealerRequest,
    ) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::CallDealer(req.clone()));
        self.next_mutation().await
    }

    async fn discard_bottom(
        &self,
        _game_id: &str,
        req: &DiscardRequest,
    ) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::DiscardBottom(req.clone()));
        self.next_mutation().await
    }

    async fn call_friend(
        &self,
        _game_id: &str,
        req: &CallFriendRequest,
    ) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::CallFriend(req.clone()));
        self.next_mutation().await
    }

    async fn play_cards(
        &self,
        _game_id: &str,
        req: &PlayRequest,
    ) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::PlayCards(req.clone()));
        self.next_mutation().await
    }

    async fn ai_play(&self, _game_id: &str) -> Result<TableResponse, ClientError> {
        self.record(FakeCall::AiPlay);
        self.next_mutation().await
    }

    async fn fetch_replay(&self, _game_id: &str) -> Result<ReplayResponse, ClientError> {
        self.record(FakeCall::FetchReplay);
        Ok(ReplayResponse {
            success: true,
            replay: None,
            error: None,
        })
    }

    async fn fetch_actions(&self, _game_id: &str) -> Result<ActionsResponse, ClientError> {
        self.record(FakeCall::FetchActions);
        Ok(ActionsResponse {
            success: true,
            actions: Some(Vec::new()),
            error: None,
        })
    }
}
