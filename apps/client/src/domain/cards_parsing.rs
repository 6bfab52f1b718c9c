//! Card parsing from compact string tokens (e.g., "AH", "TC", "SJ")
//!
//! The wire format for cards is the JSON object in `cards_serde`; these
//! tokens exist for fixtures, logs, and tests.

use std::str::FromStr;

use super::cards_types::{Card, CardValue, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Jokers first: "SJ" = small joker, "BJ" = big joker.
        match s {
            "SJ" => return Ok(Card::new(Suit::Joker, CardValue::SmallJoker)),
            "BJ" => return Ok(Card::new(Suit::Joker, CardValue::BigJoker)),
            _ => {}
        }

        if s.len() != 2 {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s}"),
            ));
        }
        let mut chars = s.chars();
        let value_ch = chars.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let suit_ch = chars.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let value = match value_ch {
            '2' => CardValue::Two,
            '3' => CardValue::Three,
            '4' => CardValue::Four,
            '5' => CardValue::Five,
            '6' => CardValue::Six,
            '7' => CardValue::Seven,
            '8' => CardValue::Eight,
            '9' => CardValue::Nine,
            'T' => CardValue::Ten,
            'J' => CardValue::Jack,
            'Q' => CardValue::Queen,
            'K' => CardValue::King,
            'A' => CardValue::Ace,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        let suit = match suit_ch {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        Ok(Card { suit, value })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordinary_tokens() {
        assert_eq!(
            "AH".parse::<Card>().unwrap(),
            Card::new(Suit::Hearts, CardValue::Ace)
        );
        assert_eq!(
            "TC".parse::<Card>().unwrap(),
            Card::new(Suit::Clubs, CardValue::Ten)
        );
        assert_eq!(
            "2S".parse::<Card>().unwrap(),
            Card::new(Suit::Spades, CardValue::Two)
        );
    }

    #[test]
    fn parses_joker_tokens() {
        assert_eq!(
            "SJ".parse::<Card>().unwrap(),
            Card::new(Suit::Joker, CardValue::SmallJoker)
        );
        assert_eq!(
            "BJ".parse::<Card>().unwrap(),
            Card::new(Suit::Joker, CardValue::BigJoker)
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "A", "AHH", "XH", "AX", "10H"] {
            assert!(bad.parse::<Card>().is_err(), "expected failure for {bad}");
        }
    }

    #[test]
    fn try_parse_cards_collects_or_fails() {
        let cards = try_parse_cards(["AH", "SJ", "2C"]).unwrap();
        assert_eq!(cards.len(), 3);
        assert!(try_parse_cards(["AH", "??"]).is_err());
    }
}
