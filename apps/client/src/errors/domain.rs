//! Domain-level error type used by the pure table-state modules.
//!
//! This error type is transport-agnostic. Services return
//! `Result<T, crate::error::ClientError>` and convert from `DomainError`
//! using the provided `From<DomainError> for ClientError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for pure operations on local table state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Hand index outside the current hand.
    IndexOutOfRange,
    /// Play submitted with nothing selected.
    EmptySelection,
    /// Discard selection is not exactly the bottom-card count.
    DiscardSize,
    /// Joker value where a level rank is required.
    InvalidRankConversion,
    ParseCard,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or local business rule violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
