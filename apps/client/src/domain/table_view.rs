//! Read-only table snapshot observed from the remote game service.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Rank, Suit};

/// Remote player identifier.
pub type PlayerId = i64;
/// Seat index at the table (1..=5).
pub type Seat = u8;

/// Match progression phases as reported by the remote service.
///
/// `status` is the single source of truth for which action the viewer may
/// take; no other snapshot field overrides it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Table created, waiting for players or a start request.
    Waiting,
    /// Dealer bidding: players may declare trump to claim dealership.
    Calling,
    /// Dealer names a hidden card to designate the hidden teammate.
    CallingFriend,
    /// Dealer returns exactly seven cards to the bottom.
    Discarding,
    /// Trick play.
    Playing,
    /// Match complete.
    Finished,
}

/// Public info about a single seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub username: String,
    pub seat: Seat,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    pub card_count: u8,
}

/// One player's contribution to the in-progress trick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedCards {
    pub player_id: PlayerId,
    pub cards: Vec<Card>,
}

/// Immutable snapshot of the table, replaced wholesale on every poll or
/// forced refresh. Never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTableView {
    pub id: String,
    pub status: GameStatus,
    /// Rank the match is currently played at.
    pub current_level: Rank,
    /// Seat whose turn it is; meaningful only while `status` is `Playing`.
    #[serde(default)]
    pub current_player_seat: Seat,
    /// Players on the dealer's side.
    #[serde(default)]
    pub dealer_team: BTreeSet<PlayerId>,
    /// Ordered plays already made into the current trick.
    #[serde(default)]
    pub current_trick: Vec<PlayedCards>,
    #[serde(default)]
    pub players: Vec<PlayerInfo>,
    /// Viewer's hand; empty once exhausted.
    #[serde(default)]
    pub my_hand: Vec<Card>,
    #[serde(default)]
    pub my_position: Seat,
    /// Set once a dealer call has resolved.
    #[serde(default)]
    pub trump_suit: Option<Suit>,
    /// Cards set aside for the dealer; visible to the dealer during discard.
    #[serde(default)]
    pub bottom_cards: Vec<Card>,
    /// Accumulated point totals.
    #[serde(default)]
    pub scores: BTreeMap<PlayerId, i64>,
}

impl GameTableView {
    /// The viewing player's seat entry, if seated.
    pub fn me(&self) -> Option<&PlayerInfo> {
        self.player_at(self.my_position)
    }

    pub fn player_at(&self, seat: Seat) -> Option<&PlayerInfo> {
        self.players.iter().find(|p| p.seat == seat)
    }

    pub fn player_by_id(&self, id: PlayerId) -> Option<&PlayerInfo> {
        self.players.iter().find(|p| p.id == id)
    }

    /// True when the snapshot says it is the viewer's turn to play cards.
    pub fn is_my_turn(&self) -> bool {
        self.status == GameStatus::Playing && self.current_player_seat == self.my_position
    }

    pub fn hand_size(&self) -> usize {
        self.my_hand.len()
    }
}
