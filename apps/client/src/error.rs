use thiserror::Error;

use crate::errors::domain::{DomainError, ValidationKind};

/// Client-facing error type covering every failure the table layer can hit.
///
/// Transport failures are transient: the next scheduled poll is the retry and
/// the previous snapshot stays visible as stale data. `Unauthorized` and
/// `GameNotFound` are terminal for the session and stop the polling loop.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {detail}")]
    Transport { detail: String },
    #[error("Rejected by server: {detail}")]
    Rejected { detail: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Game not found: {detail}")]
    GameNotFound { detail: String },
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Action already in flight: {action}")]
    AlreadyPending { action: &'static str },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl ClientError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    pub fn rejected(detail: impl Into<String>) -> Self {
        Self::Rejected {
            detail: detail.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn game_not_found(detail: impl Into<String>) -> Self {
        Self::GameNotFound {
            detail: detail.into(),
        }
    }

    pub fn validation(code: &'static str, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn already_pending(action: &'static str) -> Self {
        Self::AlreadyPending { action }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// True for failures that end the table session rather than one request.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthorized | ClientError::GameNotFound { .. }
        )
    }
}

impl From<DomainError> for ClientError {
    fn from(e: DomainError) -> Self {
        let code = match e.kind() {
            ValidationKind::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ValidationKind::EmptySelection => "EMPTY_SELECTION",
            ValidationKind::DiscardSize => "DISCARD_SIZE",
            ValidationKind::InvalidRankConversion => "INVALID_RANK",
            ValidationKind::ParseCard => "PARSE_CARD",
            _ => "VALIDATION",
        };
        ClientError::validation(code, e.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        // Decode failures count as transport: a malformed body is handled the
        // same way as a dropped connection.
        ClientError::transport(e.to_string())
    }
}
