//! Domain layer: pure table-state types and helpers.

pub mod auto_start;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dialog;
pub mod rules;
pub mod selection;
pub mod table_view;

// Re-exports for ergonomics
pub use auto_start::AutoStartLatch;
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, CardValue, Rank, Suit};
pub use dialog::{PhaseDialog, PhaseDialogController};
pub use selection::SelectionStore;
pub use table_view::{GameStatus, GameTableView, PlayedCards, PlayerId, PlayerInfo, Seat};
