//! One-shot start trigger for single-player sessions.

use crate::domain::table_view::GameStatus;

/// Latch that requests the automatic match start exactly once per session.
///
/// Set irreversibly on the first observed `waiting` snapshot; a later return
/// to `waiting` (rematch) never re-fires. Re-arming requires a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoStartLatch {
    fired: bool,
}

impl AutoStartLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once: on the first `waiting` observation.
    pub fn should_fire(&mut self, status: GameStatus) -> bool {
        if self.fired || status != GameStatus::Waiting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
