//! Owned context for one table-viewing session.
//!
//! `TableSession` composes the polling feed, the action gateway, the card
//! selection, the phase dialogs, and the single-player auto-start latch, and
//! keeps them mutually consistent as snapshots arrive. It is created when the
//! player opens a table and torn down when they navigate away. State lives
//! here, not in ambient globals, so teardown and tests stay deterministic.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::GameApi;
use crate::config::ClientConfig;
use crate::domain::{
    AutoStartLatch, CardValue, GameStatus, GameTableView, PhaseDialog, PhaseDialogController,
    SelectionStore, Suit,
};
use crate::error::ClientError;
use crate::services::gateway::{ActionGateway, ActionKind, MutationState};
use crate::services::table_sync::{TableFeed, TableSync};

/// Whether the session drives a single-player table (auto-start applies) or a
/// shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    MultiPlayer,
    SinglePlayer,
}

pub struct TableSession {
    game_id: String,
    sync: TableSync,
    feed: watch::Receiver<TableFeed>,
    gateway: ActionGateway,
    selection: SelectionStore,
    dialogs: PhaseDialogController,
    auto_start: Option<AutoStartLatch>,
    last_status: Option<GameStatus>,
}

impl TableSession {
    /// Open a session: spawns the polling feed for `game_id` immediately.
    pub fn new(
        api: Arc<dyn GameApi>,
        game_id: impl Into<String>,
        mode: SessionMode,
        config: &ClientConfig,
    ) -> Self {
        let game_id = game_id.into();
        let sync = TableSync::spawn(Arc::clone(&api), game_id.clone(), config.table_poll_interval);
        let feed = sync.subscribe();
        let gateway = ActionGateway::new(api, game_id.clone());
        let auto_start = match mode {
            SessionMode::SinglePlayer => Some(AutoStartLatch::new()),
            SessionMode::MultiPlayer => None,
        };
        info!(game_id, ?mode, "table session opened");
        Self {
            game_id,
            sync,
            feed,
            gateway,
            selection: SelectionStore::new(),
            dialogs: PhaseDialogController::new(),
            auto_start,
            last_status: None,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Wait for the next feed update, apply the local bookkeeping it implies,
    /// and return it.
    pub async fn next_change(&mut self) -> Result<TableFeed, ClientError> {
        self.feed
            .changed()
            .await
            .map_err(|_| ClientError::transport("table feed ended"))?;
        let feed = self.feed.borrow_and_update().clone();
        self.apply(&feed).await;
        Ok(feed)
    }

    /// Latest feed without waiting.
    pub fn latest(&self) -> TableFeed {
        self.sync.latest()
    }

    pub fn latest_view(&self) -> Option<GameTableView> {
        self.sync.latest().view
    }

    /// Fold a snapshot into the session-local state machines.
    ///
    /// Selection indices are only meaningful against the hand and phase that
    /// produced them: the hand length is re-synced on every snapshot and the
    /// whole selection is dropped on any status transition.
    async fn apply(&mut self, feed: &TableFeed) {
        let Some(view) = feed.view.as_ref() else {
            return;
        };
        self.selection.set_hand_size(view.my_hand.len());
        if self.last_status != Some(view.status) {
            self.last_status = Some(view.status);
            self.dialogs.observe(view.status);
            self.selection.clear();
        }
        let fire_start = self
            .auto_start
            .as_mut()
            .is_some_and(|latch| latch.should_fire(view.status));
        if fire_start {
            info!(game_id = %self.game_id, "auto-starting single-player match");
            if let Err(e) = self.start_single_inner().await {
                // The latch stays consumed: auto-start fires once per
                // session, success or not.
                warn!(game_id = %self.game_id, error = %e, "auto-start failed");
            }
        }
    }

    // ---- selection ----------------------------------------------------

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn toggle_card(&mut self, index: usize) -> Result<(), ClientError> {
        self.selection.toggle(index).map_err(Into::into)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    // ---- dialogs ------------------------------------------------------

    pub fn active_dialog(&self) -> Option<PhaseDialog> {
        self.dialogs.active()
    }

    /// Dialog the current phase offers, shown or not (drives the manual
    /// re-open control).
    pub fn available_dialog(&self) -> Option<PhaseDialog> {
        self.dialogs.available()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialogs.dismiss();
    }

    pub fn reopen_dialog(&mut self) {
        self.dialogs.reopen();
    }

    // ---- actions ------------------------------------------------------
    //
    // Ordering on success is deliberate: local cleanup first (selection,
    // dialog), forced refresh last, so the next rendered view can never pair
    // a cleared selection with a stale phase.

    pub fn mutation_state(&self, kind: ActionKind) -> MutationState {
        self.gateway.state(kind)
    }

    pub async fn start_game(&mut self) -> Result<(), ClientError> {
        self.gateway.start_game().await?;
        self.sync.force_refresh();
        Ok(())
    }

    async fn start_single_inner(&mut self) -> Result<(), ClientError> {
        self.gateway.start_single().await?;
        self.sync.force_refresh();
        Ok(())
    }

    pub async fn join_game(&mut self) -> Result<(), ClientError> {
        self.gateway.join_game().await?;
        self.sync.force_refresh();
        Ok(())
    }

    /// Submit a dealer call: the declared trump suit plus the indices backing
    /// the call. Supplied by the dialog rather than the shared selection.
    pub async fn call_dealer(
        &mut self,
        suit: Suit,
        card_indices: Vec<usize>,
    ) -> Result<(), ClientError> {
        self.gateway.call_dealer(suit, card_indices).await?;
        self.selection.clear();
        self.dialogs.dismiss();
        self.sync.force_refresh();
        Ok(())
    }

    /// Discard the currently selected cards back to the bottom.
    pub async fn discard_selected(&mut self) -> Result<(), ClientError> {
        let indices = self.selection.indices();
        self.gateway.discard_bottom(indices).await?;
        self.selection.clear();
        self.dialogs.dismiss();
        self.sync.force_refresh();
        Ok(())
    }

    pub async fn call_friend(
        &mut self,
        suit: Suit,
        value: CardValue,
        position: u8,
    ) -> Result<(), ClientError> {
        self.gateway.call_friend(suit, value, position).await?;
        self.dialogs.dismiss();
        self.sync.force_refresh();
        Ok(())
    }

    /// Play the currently selected cards.
    pub async fn play_selected(&mut self) -> Result<(), ClientError> {
        let indices = self.selection.indices();
        self.gateway.play_cards(indices).await?;
        self.selection.clear();
        self.sync.force_refresh();
        Ok(())
    }

    /// Ask the service to play this turn on the viewer's behalf.
    pub async fn ai_play(&mut self) -> Result<(), ClientError> {
        self.gateway.ai_play().await?;
        self.sync.force_refresh();
        Ok(())
    }

    /// Navigate away: stops polling; an in-flight poll response is discarded.
    pub fn leave(self) {
        info!(game_id = %self.game_id, "table session closed");
        self.sync.shutdown();
    }
}
