//! Continuous table synchronization over a polling feed.
//!
//! The remote service has no push channel; a spawned task polls the table on
//! a fixed cadence and publishes each snapshot wholesale over a watch
//! channel. Consumers read the latest value; intermediate snapshots may be
//! skipped. A failed poll keeps the previous snapshot visible and flags it
//! stale; the next scheduled tick is the only retry.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::api::types::TableResponse;
use crate::api::GameApi;
use crate::domain::GameTableView;
use crate::error::ClientError;

/// Why the polling loop stopped for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStop {
    /// The table id no longer resolves; nothing left to poll.
    GameNotFound,
    /// Credential rejected; the session must re-authenticate.
    Unauthorized,
}

/// Latest published table state.
///
/// `view` is retained across failed polls (stale-but-present); `stale` is a
/// diagnostics flag, never a reason to blank the screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFeed {
    pub view: Option<GameTableView>,
    pub stale: bool,
    pub stopped: Option<SyncStop>,
}

/// Handle to the polling task for one table id.
///
/// Dropping the handle (or calling [`shutdown`](Self::shutdown)) cancels the
/// task; a response already in flight at that point is discarded, never
/// written into the feed. With no table id there is nothing to spawn: no
/// handle, no requests.
pub struct TableSync {
    feed: watch::Receiver<TableFeed>,
    refresh: Arc<Notify>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl TableSync {
    /// Start polling `game_id` every `interval`, fetching once immediately.
    pub fn spawn(api: Arc<dyn GameApi>, game_id: impl Into<String>, interval: Duration) -> Self {
        let game_id = game_id.into();
        let (tx, rx) = watch::channel(TableFeed::default());
        let refresh = Arc::new(Notify::new());
        let cancel = CancellationToken::new();
        let task = tokio::spawn(poll_loop(
            api,
            game_id,
            interval,
            tx,
            Arc::clone(&refresh),
            cancel.clone(),
        ));
        Self {
            feed: rx,
            refresh,
            cancel,
            task,
        }
    }

    /// Fresh receiver for the feed.
    pub fn subscribe(&self) -> watch::Receiver<TableFeed> {
        self.feed.clone()
    }

    /// Latest published feed value.
    pub fn latest(&self) -> TableFeed {
        self.feed.borrow().clone()
    }

    /// Fetch now instead of waiting for the next tick. Used right after a
    /// successful mutation so the player sees their own action land.
    pub fn force_refresh(&self) {
        self.refresh.notify_one();
    }

    /// Stop polling and discard any in-flight response.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TableSync {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn poll_loop(
    api: Arc<dyn GameApi>,
    game_id: String,
    interval: Duration,
    tx: watch::Sender<TableFeed>,
    refresh: Arc<Notify>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
            _ = refresh.notified() => {
                debug!(game_id, "forced refresh");
            }
        }

        // Cancellation wins against an in-flight fetch: a response resolving
        // after teardown is never applied.
        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            result = api.fetch_table(&game_id) => result,
        };

        if let Some(stop) = apply(&tx, &game_id, result) {
            warn!(game_id, ?stop, "table polling stopped");
            break;
        }
    }
}

/// Fold one poll outcome into the feed. Returns a stop reason when polling
/// must not continue.
fn apply(
    tx: &watch::Sender<TableFeed>,
    game_id: &str,
    result: Result<TableResponse, ClientError>,
) -> Option<SyncStop> {
    match result {
        Ok(TableResponse {
            success: true,
            game: Some(view),
            ..
        }) => {
            tx.send_modify(|feed| {
                feed.view = Some(view);
                feed.stale = false;
            });
            None
        }
        Ok(resp) => {
            // success=false or a body without a snapshot: nothing to render,
            // same handling as a transport failure.
            warn!(game_id, error = %resp.error_detail(), "table poll rejected");
            tx.send_modify(|feed| feed.stale = true);
            None
        }
        Err(ClientError::GameNotFound { detail }) => {
            warn!(game_id, %detail, "table gone");
            tx.send_modify(|feed| {
                feed.stale = true;
                feed.stopped = Some(SyncStop::GameNotFound);
            });
            Some(SyncStop::GameNotFound)
        }
        Err(ClientError::Unauthorized) => {
            tx.send_modify(|feed| {
                feed.stale = true;
                feed.stopped = Some(SyncStop::Unauthorized);
            });
            Some(SyncStop::Unauthorized)
        }
        Err(e) => {
            warn!(game_id, error = %e, "table poll failed");
            tx.send_modify(|feed| feed.stale = true);
            None
        }
    }
}
