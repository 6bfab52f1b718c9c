//! Session credential handling.
//!
//! Token acquisition (login, refresh) is an external collaborator's job; the
//! table layer only attaches an existing bearer credential to each request.
//! Absence or expiry is terminal for the session and surfaces as
//! `ClientError::Unauthorized`, on which the caller routes the user back to
//! re-authenticate.

use serde::{Deserialize, Serialize};

/// Bearer credential scoped to one table-viewing session.
///
/// Owned by the session context and torn down with it; deliberately not an
/// ambient global so tests and teardown stay deterministic.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthSession {
    token: String,
}

impl AuthSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_format() {
        let auth = AuthSession::new("abc.def.ghi");
        assert_eq!(auth.bearer(), "Bearer abc.def.ghi");
    }
}
