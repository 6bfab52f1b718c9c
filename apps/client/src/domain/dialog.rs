//! Phase-driven dialog visibility.
//!
//! Each of the three dealer phases has a dialog that must present itself
//! automatically when the remote phase is entered (so a reload mid-phase
//! still prompts the player) without forcing itself back open every poll
//! tick after a manual dismiss. The whole rule is a small state machine over
//! `(last observed status, dismissed-for-this-phase-instance)`.

use crate::domain::table_view::GameStatus;

/// The mutually exclusive action dialogs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PhaseDialog {
    CallDealer,
    Discard,
    CallFriend,
}

fn dialog_for(status: GameStatus) -> Option<PhaseDialog> {
    match status {
        GameStatus::Calling => Some(PhaseDialog::CallDealer),
        GameStatus::Discarding => Some(PhaseDialog::Discard),
        GameStatus::CallingFriend => Some(PhaseDialog::CallFriend),
        _ => None,
    }
}

/// Derives dialog visibility from the polled status.
///
/// `observe` reacts only to status *changes*; an unchanged polled value never
/// re-opens a dismissed dialog or otherwise flickers the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseDialogController {
    status: Option<GameStatus>,
    dismissed: bool,
}

impl PhaseDialogController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest polled status. Returns true when this observation
    /// started a new phase instance.
    pub fn observe(&mut self, status: GameStatus) -> bool {
        if self.status == Some(status) {
            return false;
        }
        self.status = Some(status);
        // A new phase instance always resets to auto-shown; non-dialog
        // statuses clear any manual override.
        self.dismissed = false;
        true
    }

    /// The dialog that should currently be visible, if any.
    pub fn active(&self) -> Option<PhaseDialog> {
        if self.dismissed {
            return None;
        }
        self.status.and_then(dialog_for)
    }

    /// Manual close for the current phase instance. A later `reopen` or a
    /// transition into a new phase instance reverses it.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Manual re-open control.
    pub fn reopen(&mut self) {
        self.dismissed = false;
    }

    /// The dialog the current status maps to, ignoring the dismiss override.
    /// The view layer uses this to offer the manual re-open control.
    pub fn available(&self) -> Option<PhaseDialog> {
        self.status.and_then(dialog_for)
    }
}
