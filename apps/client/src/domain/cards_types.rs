//! Core card-related types: Card, CardValue, Rank, Suit

use std::fmt;

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    /// Jokers live in their own pseudo-suit on the wire.
    Joker,
}

/// Face value of a card in a three-deck pack, jokers included.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CardValue {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    SmallJoker,
    BigJoker,
}

/// Level rank the match is played at (`2`..`A`). Jokers are not ranks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl From<Rank> for CardValue {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Two => CardValue::Two,
            Rank::Three => CardValue::Three,
            Rank::Four => CardValue::Four,
            Rank::Five => CardValue::Five,
            Rank::Six => CardValue::Six,
            Rank::Seven => CardValue::Seven,
            Rank::Eight => CardValue::Eight,
            Rank::Nine => CardValue::Nine,
            Rank::Ten => CardValue::Ten,
            Rank::Jack => CardValue::Jack,
            Rank::Queen => CardValue::Queen,
            Rank::King => CardValue::King,
            Rank::Ace => CardValue::Ace,
        }
    }
}

impl TryFrom<CardValue> for Rank {
    type Error = DomainError;

    fn try_from(value: CardValue) -> Result<Self, Self::Error> {
        match value {
            CardValue::Two => Ok(Rank::Two),
            CardValue::Three => Ok(Rank::Three),
            CardValue::Four => Ok(Rank::Four),
            CardValue::Five => Ok(Rank::Five),
            CardValue::Six => Ok(Rank::Six),
            CardValue::Seven => Ok(Rank::Seven),
            CardValue::Eight => Ok(Rank::Eight),
            CardValue::Nine => Ok(Rank::Nine),
            CardValue::Ten => Ok(Rank::Ten),
            CardValue::Jack => Ok(Rank::Jack),
            CardValue::Queen => Ok(Rank::Queen),
            CardValue::King => Ok(Rank::King),
            CardValue::Ace => Ok(Rank::Ace),
            CardValue::SmallJoker | CardValue::BigJoker => Err(DomainError::validation(
                ValidationKind::InvalidRankConversion,
                "Cannot convert a joker value to a rank",
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub value: CardValue,
}

impl Card {
    pub const fn new(suit: Suit, value: CardValue) -> Self {
        Self { suit, value }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self.value, CardValue::SmallJoker | CardValue::BigJoker)
    }
}

// Note: Ord/Eq on Card is only for stable sorting: suit order H<D<C<S<Joker
// then value order. Trick comparison is server-owned and never uses this.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            CardValue::SmallJoker => write!(f, "Small Joker"),
            CardValue::BigJoker => write!(f, "Big Joker"),
            _ => write!(f, "{}{}", self.value.as_wire_str(), self.suit.symbol()),
        }
    }
}

impl Suit {
    /// Glyph used in logs and the headless runner's output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Joker => "★",
        }
    }
}

impl CardValue {
    /// Exact string the remote service uses for this value.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            CardValue::Two => "2",
            CardValue::Three => "3",
            CardValue::Four => "4",
            CardValue::Five => "5",
            CardValue::Six => "6",
            CardValue::Seven => "7",
            CardValue::Eight => "8",
            CardValue::Nine => "9",
            CardValue::Ten => "10",
            CardValue::Jack => "J",
            CardValue::Queen => "Q",
            CardValue::King => "K",
            CardValue::Ace => "A",
            CardValue::SmallJoker => "Small",
            CardValue::BigJoker => "Big",
        }
    }
}

impl Rank {
    pub fn as_wire_str(&self) -> &'static str {
        CardValue::from(*self).as_wire_str()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}
