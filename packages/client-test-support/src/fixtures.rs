//! Snapshot fixture builders for table-layer tests.

use client::api::types::TableResponse;
use client::domain::{try_parse_cards, GameStatus, GameTableView, PlayerInfo, Rank};

/// Five-seat table with the viewer at seat 1 and AI filling the rest.
pub fn table_view(game_id: &str, status: GameStatus) -> GameTableView {
    let players = (1u8..=5)
        .map(|seat| PlayerInfo {
            id: 10 + seat as i64,
            username: if seat == 1 {
                "host".to_string()
            } else {
                format!("AI-{seat}")
            },
            seat,
            is_ai: seat != 1,
            card_count: 31,
        })
        .collect();

    GameTableView {
        id: game_id.to_string(),
        status,
        current_level: Rank::Two,
        current_player_seat: 0,
        dealer_team: Default::default(),
        current_trick: Vec::new(),
        players,
        my_hand: Vec::new(),
        my_position: 1,
        trump_suit: None,
        bottom_cards: Vec::new(),
        scores: Default::default(),
    }
}

/// Same table with the viewer's hand set from compact tokens ("AH", "SJ").
pub fn table_view_with_hand(game_id: &str, status: GameStatus, hand: &[&str]) -> GameTableView {
    let mut view = table_view(game_id, status);
    view.my_hand = try_parse_cards(hand).expect("hardcoded valid card tokens");
    view
}

/// Successful poll envelope around a snapshot.
pub fn table_ok(view: GameTableView) -> TableResponse {
    TableResponse {
        success: true,
        game: Some(view),
        error: None,
    }
}
