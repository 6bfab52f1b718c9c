//! Headless table client.
//!
//! Creates (or attaches to) a single-player table and plays it to completion
//! against the service: the auto-start latch kicks the match off, dealer
//! dialogs are answered with simple scripted choices, and every turn of the
//! viewer's is delegated to the service's automated play.

use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use client::domain::rules::BOTTOM_CARDS;
use client::domain::{CardValue, GameStatus, GameTableView, PhaseDialog, Suit};
use client::error::ClientError;
use client::services::{SessionMode, TableSession};
use client::{AuthSession, ClientConfig, GameApi, HttpGameApi};

#[derive(Parser)]
#[command(name = "client")]
#[command(about = "Headless Tractor table client for single-player smoke runs")]
struct Args {
    /// Bearer token for the game service (obtain via the login endpoint)
    #[arg(long)]
    token: String,

    /// Base URL of the game service API (overrides API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Existing table to attach to; a fresh single-player table is created
    /// when omitted
    #[arg(long)]
    game_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    client::telemetry::init_tracing();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }
    let auth = AuthSession::new(args.token);
    let api: Arc<dyn GameApi> = Arc::new(HttpGameApi::new(&config, auth)?);

    let game_id = match args.game_id {
        Some(id) => id,
        None => {
            let resp = api.create_single().await?;
            if !resp.success {
                return Err(ClientError::rejected(resp.error_detail()).into());
            }
            resp.game
                .map(|g| g.id)
                .ok_or_else(|| ClientError::transport("create response carried no game"))?
        }
    };
    info!(game_id, "driving single-player table");

    let mut session = TableSession::new(
        Arc::clone(&api),
        game_id.as_str(),
        SessionMode::SinglePlayer,
        &config,
    );
    let mut last_logged: Option<GameStatus> = None;

    loop {
        let feed = session.next_change().await?;
        if let Some(stop) = feed.stopped {
            warn!(?stop, "session terminated by service");
            break;
        }
        let Some(view) = feed.view else { continue };

        if last_logged != Some(view.status) {
            last_logged = Some(view.status);
            info!(
                status = ?view.status,
                level = %view.current_level,
                hand = view.my_hand.len(),
                "phase"
            );
        }

        if view.status == GameStatus::Finished {
            for (player, score) in &view.scores {
                info!(player, score, "final score");
            }
            break;
        }

        if let Some(dialog) = session.active_dialog() {
            answer_dialog(&mut session, dialog, &view).await;
        } else if view.is_my_turn() {
            if let Err(e) = session.ai_play().await {
                warn!(error = %e, "automated play rejected");
            }
        }
    }

    match api.fetch_actions(&game_id).await {
        Ok(resp) => {
            let recorded = resp.actions.map(|a| a.len()).unwrap_or(0);
            info!(recorded, "action history");
        }
        Err(e) => warn!(error = %e, "action history unavailable"),
    }

    session.leave();
    Ok(())
}

/// Answer a dealer-phase dialog with the simplest legal-looking choice; a
/// rejection dismisses the dialog and leaves the table to the service's own
/// countdown handling.
async fn answer_dialog(session: &mut TableSession, dialog: PhaseDialog, view: &GameTableView) {
    let result = match dialog {
        PhaseDialog::CallDealer => match call_candidate(view) {
            Some((suit, index)) => session.call_dealer(suit, vec![index]).await,
            None => {
                info!("no level card to call with");
                session.dismiss_dialog();
                Ok(())
            }
        },
        PhaseDialog::Discard => {
            session.clear_selection();
            let take = BOTTOM_CARDS.min(view.my_hand.len());
            for index in 0..take {
                if let Err(e) = session.toggle_card(index) {
                    warn!(error = %e, "could not build discard selection");
                    session.dismiss_dialog();
                    return;
                }
            }
            session.discard_selected().await
        }
        PhaseDialog::CallFriend => session.call_friend(Suit::Hearts, CardValue::Ace, 1).await,
    };

    if let Err(e) = result {
        warn!(error = %e, ?dialog, "dialog action rejected");
        session.dismiss_dialog();
    }
}

/// First card in hand matching the current level rank, usable for a dealer
/// call.
fn call_candidate(view: &GameTableView) -> Option<(Suit, usize)> {
    let level_value = CardValue::from(view.current_level);
    view.my_hand
        .iter()
        .enumerate()
        .find(|(_, card)| card.value == level_value && card.suit != Suit::Joker)
        .map(|(index, card)| (card.suit, index))
}
