// Session-level orchestration: the full calling -> discarding flow, cleanup
// ordering after successful mutations, selection lifecycle across phase
// transitions, and the single-player auto-start latch.

mod common;

use std::time::Duration;

use client::domain::{GameStatus, PhaseDialog, Suit};
use client::error::ClientError;
use client::services::{ActionKind, MutationState, SessionMode, TableSession};
use client_test_support::fixtures::{table_view, table_view_with_hand};
use client_test_support::FakeCall;
use common::test_config;

use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn call_dealer_flow_reaches_discard_dialog_without_manual_reopen() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Calling,
        &["2H", "5D", "AH", "7C", "2S"],
    ));

    let config = test_config();
    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &config);

    let feed = session.next_change().await.unwrap();
    assert_eq!(feed.view.unwrap().status, GameStatus::Calling);
    assert_eq!(session.active_dialog(), Some(PhaseDialog::CallDealer));

    // The next table fetch (the forced refresh) serves the discarding phase.
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Discarding,
        &["2H", "5D", "AH", "7C", "2S", "KD", "QD", "3C"],
    ));

    let submitted = Instant::now();
    session.call_dealer(Suit::Hearts, vec![0, 3]).await.unwrap();

    // Wire payload carries exactly what was chosen.
    let call = fake
        .calls()
        .into_iter()
        .find_map(|c| match c {
            FakeCall::CallDealer(req) => Some(req),
            _ => None,
        })
        .expect("call-dealer request recorded");
    assert_eq!(call.suit, Suit::Hearts);
    assert_eq!(call.card_indices, vec![0, 3]);

    // Local cleanup happened before the refresh.
    assert!(session.selection().is_empty());
    assert_eq!(session.active_dialog(), None);

    // The forced refresh lands well before the next scheduled poll and the
    // new phase auto-shows its own dialog.
    let feed = session.next_change().await.unwrap();
    assert!(submitted.elapsed() < config.table_poll_interval);
    assert_eq!(feed.view.unwrap().status, GameStatus::Discarding);
    assert_eq!(session.active_dialog(), Some(PhaseDialog::Discard));
    assert_eq!(fake.count("fetch-table"), 2);
}

#[tokio::test(start_paused = true)]
async fn play_selected_clears_selection_and_forces_refresh() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Playing,
        &["2H", "5D", "AH", "7C", "2S", "KD"],
    ));

    let config = test_config();
    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &config);
    session.next_change().await.unwrap();

    session.toggle_card(2).unwrap();
    session.toggle_card(5).unwrap();
    assert_eq!(session.selection().indices(), vec![2, 5]);

    let submitted = Instant::now();
    session.play_selected().await.unwrap();

    let play = fake
        .calls()
        .into_iter()
        .find_map(|c| match c {
            FakeCall::PlayCards(req) => Some(req),
            _ => None,
        })
        .expect("play request recorded");
    assert_eq!(play.card_indices, vec![2, 5]);

    assert!(session.selection().is_empty());
    assert_eq!(session.active_dialog(), None);

    session.next_change().await.unwrap();
    assert!(
        submitted.elapsed() < config.table_poll_interval,
        "refresh must be issued before any poll-driven state arrives"
    );
    assert_eq!(fake.count("fetch-table"), 2);
}

#[tokio::test(start_paused = true)]
async fn empty_play_is_rejected_without_touching_state() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Playing,
        &["2H", "5D"],
    ));

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();

    let result = session.play_selected().await;
    assert!(matches!(result, Err(ClientError::Validation { .. })));
    assert_eq!(fake.count("play-cards"), 0);
    assert_eq!(fake.count("fetch-table"), 1, "no refresh on rejection");
}

#[tokio::test(start_paused = true)]
async fn discard_size_is_enforced_before_the_wire() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Discarding,
        &["2H", "5D", "AH", "7C", "2S", "KD", "QD", "3C", "4C", "6S"],
    ));

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();

    for index in 0..6 {
        session.toggle_card(index).unwrap();
    }
    let result = session.discard_selected().await;
    assert!(matches!(result, Err(ClientError::Validation { .. })));
    assert_eq!(fake.count("discard-bottom"), 0);
    // The six picked cards stay selected for the player to amend.
    assert_eq!(session.selection().len(), 6);

    session.toggle_card(6).unwrap();
    session.discard_selected().await.unwrap();
    assert_eq!(fake.count("discard-bottom"), 1);
    assert!(session.selection().is_empty());
}

#[tokio::test(start_paused = true)]
async fn remote_rejection_preserves_selection_for_retry() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Playing,
        &["2H", "5D", "AH"],
    ));
    fake.queue_mutation_rejected("cards do not follow suit");

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();

    session.toggle_card(0).unwrap();
    session.toggle_card(1).unwrap();

    let result = session.play_selected().await;
    assert!(matches!(result, Err(ClientError::Rejected { .. })));
    assert_eq!(
        session.selection().indices(),
        vec![0, 1],
        "a rejected submission is retry-able without re-selecting"
    );
    assert!(matches!(
        session.mutation_state(ActionKind::PlayCards),
        MutationState::Error(_)
    ));
    assert_eq!(fake.count("fetch-table"), 1, "no refresh on rejection");

    session.play_selected().await.unwrap();
    assert!(session.selection().is_empty());
}

#[tokio::test(start_paused = true)]
async fn status_transition_drops_the_selection() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Discarding,
        &["2H", "5D", "AH", "7C"],
    ));

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();

    session.toggle_card(0).unwrap();
    session.toggle_card(2).unwrap();

    // The server moves on (another device finished the discard); the local
    // discard-phase selection must not leak into the play phase.
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Playing,
        &["2H", "5D", "AH", "7C"],
    ));
    session.next_change().await.unwrap();

    assert!(session.selection().is_empty());
    assert_eq!(session.active_dialog(), None);
}

#[tokio::test(start_paused = true)]
async fn hand_shrink_drops_out_of_range_indices() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Playing,
        &["2H", "5D", "AH", "7C", "2S"],
    ));

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();

    session.toggle_card(1).unwrap();
    session.toggle_card(4).unwrap();

    // Same phase, smaller hand (our play landed): index 4 is gone.
    fake.queue_table_view(table_view_with_hand(
        "g-1",
        GameStatus::Playing,
        &["2H", "5D", "AH"],
    ));
    session.next_change().await.unwrap();

    assert_eq!(session.selection().indices(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn dismissed_dialog_stays_closed_until_reentry() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view("g-1", GameStatus::Calling));

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();
    assert_eq!(session.active_dialog(), Some(PhaseDialog::CallDealer));

    session.dismiss_dialog();
    assert_eq!(session.active_dialog(), None);

    // Polls keep reporting the same phase: the dialog stays closed, but the
    // manual control can bring it back.
    fake.queue_table_view(table_view("g-1", GameStatus::Calling));
    session.next_change().await.unwrap();
    assert_eq!(session.active_dialog(), None);
    assert_eq!(session.available_dialog(), Some(PhaseDialog::CallDealer));

    session.reopen_dialog();
    assert_eq!(session.active_dialog(), Some(PhaseDialog::CallDealer));

    // Leave and re-enter the phase: auto-shown again.
    session.dismiss_dialog();
    fake.queue_table_view(table_view("g-1", GameStatus::Playing));
    session.next_change().await.unwrap();
    fake.queue_table_view(table_view("g-1", GameStatus::Calling));
    session.next_change().await.unwrap();
    assert_eq!(session.active_dialog(), Some(PhaseDialog::CallDealer));
}

#[tokio::test(start_paused = true)]
async fn single_player_session_auto_starts_exactly_once() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view("g-1", GameStatus::Waiting));
    fake.queue_table_view(table_view("g-1", GameStatus::Waiting));
    fake.queue_table_view(table_view("g-1", GameStatus::Calling));

    let mut session = TableSession::new(api, "g-1", SessionMode::SinglePlayer, &test_config());

    session.next_change().await.unwrap();
    assert_eq!(fake.count("start-single"), 1);

    // Further waiting snapshots and later phases never re-fire.
    session.next_change().await.unwrap();
    session.next_change().await.unwrap();
    assert_eq!(fake.count("start-single"), 1);
}

#[tokio::test(start_paused = true)]
async fn multi_player_session_never_auto_starts() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view("g-1", GameStatus::Waiting));

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(fake.count("start-single"), 0);
}

#[tokio::test(start_paused = true)]
async fn leave_stops_the_feed() {
    let (fake, api) = common::fake_api();
    fake.queue_table_view(table_view("g-1", GameStatus::Playing));

    let mut session = TableSession::new(api, "g-1", SessionMode::MultiPlayer, &test_config());
    session.next_change().await.unwrap();
    session.leave();

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(fake.count("fetch-table"), 1);
}
