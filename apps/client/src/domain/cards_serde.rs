//! Serialization and deserialization for card types
//!
//! The remote service speaks lowercase suit names ("hearts", "joker") and the
//! value strings "2".."10", "J", "Q", "K", "A", "Small", "Big".

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, CardValue, Rank, Suit};

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Joker => "joker",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "hearts" => Ok(Suit::Hearts),
            "diamonds" => Ok(Suit::Diamonds),
            "clubs" => Ok(Suit::Clubs),
            "spades" => Ok(Suit::Spades),
            "joker" => Ok(Suit::Joker),
            _ => Err(serde::de::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

// CardValue serde
impl Serialize for CardValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_wire_str())
    }
}

impl<'de> Deserialize<'de> for CardValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "2" => Ok(CardValue::Two),
            "3" => Ok(CardValue::Three),
            "4" => Ok(CardValue::Four),
            "5" => Ok(CardValue::Five),
            "6" => Ok(CardValue::Six),
            "7" => Ok(CardValue::Seven),
            "8" => Ok(CardValue::Eight),
            "9" => Ok(CardValue::Nine),
            "10" => Ok(CardValue::Ten),
            "J" => Ok(CardValue::Jack),
            "Q" => Ok(CardValue::Queen),
            "K" => Ok(CardValue::King),
            "A" => Ok(CardValue::Ace),
            "Small" => Ok(CardValue::SmallJoker),
            "Big" => Ok(CardValue::BigJoker),
            _ => Err(serde::de::Error::custom(format!("Invalid card value: {s}"))),
        }
    }
}

// Rank serde (same strings as CardValue, jokers excluded)
impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_wire_str())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = CardValue::deserialize(deserializer)?;
        Rank::try_from(value).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

// Card serde ({"suit": "hearts", "value": "A"} objects)
#[derive(Serialize, Deserialize)]
struct CardWire {
    suit: Suit,
    value: CardValue,
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardWire {
            suit: self.suit,
            value: self.value,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CardWire::deserialize(deserializer)?;
        Ok(Card {
            suit: wire.suit,
            value: wire.value,
        })
    }
}
