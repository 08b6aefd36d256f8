//! Bearer token authentication.
//!
//! Promoter calls are authenticated with the token the [`crate::promoter::Client`] was built
//! with. Status changes authenticate as the consultant instead, with a token supplied per call.

use reqwest::header::HeaderValue;
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::Result;

/// An opaque bearer token sent in the `Authorization` header.
///
/// The token is never printed: its [`std::fmt::Debug`] output is redacted and the generated
/// header value is marked as sensitive.
#[derive(Clone, Debug)]
pub struct BearerToken(SecretString);

impl BearerToken {
    #[must_use]
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Returns the wrapped secret.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.0
    }

    /// Builds the `Bearer <token>` header value.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0.expose_secret()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    #[test]
    fn header_value_should_succeed() -> Result<()> {
        let token = BearerToken::new("promoter-token");
        let value = token.header_value()?;

        assert_eq!(value.to_str().expect("ascii header"), "Bearer promoter-token");
        assert!(value.is_sensitive());

        Ok(())
    }

    #[test]
    fn debug_should_not_leak_token() {
        let token = BearerToken::from("super-secret");

        assert!(!format!("{token:?}").contains("super-secret"));
    }

    #[test]
    fn token_with_newline_should_fail() {
        let token = BearerToken::from("bad\ntoken");

        let err = token.header_value().unwrap_err();
        assert_eq!(err.kind(), Kind::Internal);
    }
}
