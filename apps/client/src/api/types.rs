//! Wire shapes for the remote game service.
//!
//! Every mutation answers with `{success, game?, error?}`; the table poll
//! uses the same envelope. History endpoints return opaque payloads the
//! client never interprets.

use serde::{Deserialize, Serialize};

use crate::domain::{CardValue, GameTableView, Suit};

/// Envelope for the table poll and for mutations that echo a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub success: bool,
    #[serde(default)]
    pub game: Option<GameTableView>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TableResponse {
    /// Error message to surface when `success` is false.
    pub fn error_detail(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| "request rejected".to_string())
    }
}

/// Envelope for mutations that answer with a bare acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl AckResponse {
    pub fn error_detail(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| "request rejected".to_string())
    }
}

/// `POST /game/{id}/call-dealer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDealerRequest {
    pub suit: Suit,
    pub card_indices: Vec<usize>,
}

/// `POST /game/{id}/discard-bottom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscardRequest {
    pub card_indices: Vec<usize>,
}

/// `POST /game/{id}/call-friend`
///
/// `position` is the ordinal of the named card: 1 means the first copy played
/// reveals the friend, 2 the second (three decks carry three copies).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFriendRequest {
    pub suit: Suit,
    pub value: CardValue,
    pub position: u8,
}

/// `POST /game/{id}/play`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    pub card_indices: Vec<usize>,
}

/// `GET /game/{id}/replay`: historical data, consumed opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayResponse {
    pub success: bool,
    #[serde(default)]
    pub replay: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /game/{id}/actions`: historical data, consumed opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsResponse {
    pub success: bool,
    #[serde(default)]
    pub actions: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_serialize_camel_case() {
        let req = CallDealerRequest {
            suit: Suit::Hearts,
            card_indices: vec![0, 3],
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"suit":"hearts","cardIndices":[0,3]}"#
        );

        let req = CallFriendRequest {
            suit: Suit::Spades,
            value: CardValue::Ace,
            position: 1,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"suit":"spades","value":"A","position":1}"#
        );
    }

    #[test]
    fn rejection_envelope_parses() {
        let resp: TableResponse =
            serde_json::from_str(r#"{"success":false,"error":"not your turn"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.game.is_none());
        assert_eq!(resp.error_detail(), "not your turn");

        let resp: TableResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(resp.error_detail(), "request rejected");
    }
}
