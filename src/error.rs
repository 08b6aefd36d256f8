use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The sort option is not one of `status`, `rating` or `rate`
    InvalidSortOption,
    /// A filter key is not `chat`/`premium`, or its value is not `on`/`off`
    InvalidFilterOption,
    /// The status is not numeric, or is not one the client is allowed to set
    InvalidStatus,
    /// The API rejected the bearer token with HTTP 401
    InvalidCredentials,
    /// Any other failing HTTP status, transport fault or malformed body
    UnexpectedResponse,
    /// Error building the client itself (bad host URL, header value, TLS setup)
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    #[must_use]
    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Creates a validation error of the given kind. Used for the checks that run before any
    /// request is sent.
    pub fn validation<S: Into<String>>(kind: Kind, message: S) -> Self {
        Self::with_source(
            kind,
            Validation {
                reason: message.into(),
            },
        )
    }

    /// Creates an error from a failing HTTP response. A `401` maps to
    /// [`Kind::InvalidCredentials`], everything else to [`Kind::UnexpectedResponse`].
    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            message: message.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        let kind = if err.status_code == StatusCode::UNAUTHORIZED {
            Kind::InvalidCredentials
        } else {
            Kind::UnexpectedResponse
        };

        Error::with_source(kind, err)
    }
}

// Everything reqwest reports once a request is in flight (connect, timeout, body decoding) is
// an unexpected response from the caller's point of view. Builder errors are ours.
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_builder() {
            Kind::Internal
        } else {
            Kind::UnexpectedResponse
        };

        Error::with_source(kind, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::UnexpectedResponse, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_should_map_to_invalid_credentials() {
        let error = Error::status(
            StatusCode::UNAUTHORIZED,
            Method::GET,
            "/api/promoter/consultants".to_owned(),
            "Unauthenticated.",
        );

        assert_eq!(error.kind(), Kind::InvalidCredentials);
    }

    #[test]
    fn other_status_should_map_to_unexpected_response() {
        for status_code in [
            StatusCode::CREATED,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let error = Error::status(status_code, Method::GET, "/".to_owned(), "");
            assert_eq!(
                error.kind(),
                Kind::UnexpectedResponse,
                "{status_code} should be unexpected"
            );
        }
    }

    #[test]
    fn status_display_should_carry_diagnostics() {
        let error = Error::status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Method::POST,
            "/api/promoter/consultants/create".to_owned(),
            "Server Error",
        );

        assert_eq!(
            error.to_string(),
            "UnexpectedResponse: error(500 Internal Server Error) making POST call to \
             /api/promoter/consultants/create with Server Error"
        );

        let status = error.downcast_ref::<Status>().expect("status source");
        assert_eq!(status.message, "Server Error");
    }

    #[test]
    fn validation_display_should_succeed() {
        let error = Error::validation(Kind::InvalidSortOption, "unknown sort option `price`");

        assert_eq!(error.kind(), Kind::InvalidSortOption);
        assert_eq!(
            error.to_string(),
            "InvalidSortOption: invalid: unknown sort option `price`"
        );
    }

    #[test]
    fn malformed_json_should_be_unexpected_response() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();

        assert_eq!(error.kind(), Kind::UnexpectedResponse);
    }
}
