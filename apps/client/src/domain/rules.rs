//! Fixed table parameters for the five-player, three-deck game.

/// Seats at the table.
pub const PLAYERS: usize = 5;

/// Full decks shuffled together, jokers included.
pub const DECK_COUNT: usize = 3;

/// Cards per deck (52 + 2 jokers).
pub const CARDS_PER_DECK: usize = 54;

/// Cards set aside for the dealer; a discard must return exactly this many.
pub const BOTTOM_CARDS: usize = 7;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = (DECK_COUNT * CARDS_PER_DECK - BOTTOM_CARDS) / PLAYERS;
