//! API token handling.

use std::fmt;

/// Bearer token authenticating every API request.
///
/// The token never appears in `Debug` or `Display` output; the value is
/// only reachable through [`ApiToken::peek`], which the client uses to
/// build the authorization header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

/// Rejection of a token at construction time.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("API token must not be empty")]
pub struct InvalidApiToken;

impl ApiToken {
    /// Wraps a token, rejecting empty or blank values.
    pub fn new(token: impl Into<String>) -> Result<Self, InvalidApiToken> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidApiToken);
        }
        Ok(Self(token))
    }

    /// Exposes the token value for header construction.
    pub(crate) fn peek(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*** redacted ***)")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** redacted ***")
    }
}
