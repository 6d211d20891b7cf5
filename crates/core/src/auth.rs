use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

/// Platform bearer token carried by an authenticated admin session.
///
/// The token is opaque to Coachdesk. `Debug` output is redacted so the value
/// never reaches logs through structured fields.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a token from a raw value, accepting an optional `Bearer ` prefix.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        let raw = match trimmed.split_once(char::is_whitespace) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
            _ if trimmed.eq_ignore_ascii_case("bearer") => "",
            _ => trimmed,
        };

        if raw.is_empty() {
            return Err(AppError::Unauthorized(
                "access token must not be empty".to_owned(),
            ));
        }

        if raw.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "access token must not contain whitespace".to_owned(),
            ));
        }

        Ok(Self(raw.to_owned()))
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl Debug for AccessToken {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("AccessToken(<redacted>)")
    }
}
