//! Error types for the PokeAPI client and the save services.
//!
//! # Design
//! Every transport failure is folded into one `ApiError` carrying the
//! original message and an `ApiErrorKind` tag, so callers never match on
//! `ureq` types. Mapping failures and store failures get their own variants
//! on the crate-level `Error`.

use std::fmt;

/// Category of a failed round trip with the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Connect or read timeout elapsed.
    Timeout,
    /// The connection could not be established (refused, reset, unknown host).
    Connection,
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The response body was not a JSON object.
    Decode,
    /// The request payload could not be serialized to JSON.
    Encode,
    /// Any other transport failure.
    Transport,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::Connection => write!(f, "connection failed"),
            ApiErrorKind::Status(status) => write!(f, "HTTP {status}"),
            ApiErrorKind::Decode => write!(f, "decode failed"),
            ApiErrorKind::Encode => write!(f, "encode failed"),
            ApiErrorKind::Transport => write!(f, "transport error"),
        }
    }
}

/// The single error surfaced by `PokeApi` calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status code of the response, when the failure was a non-2xx answer.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Status(status) => Some(status),
            _ => None,
        }
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        let kind = match &err {
            ureq::Error::Timeout(_) => ApiErrorKind::Timeout,
            ureq::Error::StatusCode(status) => ApiErrorKind::Status(*status),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => ApiErrorKind::Connection,
            ureq::Error::Io(io) => match io.kind() {
                std::io::ErrorKind::TimedOut => ApiErrorKind::Timeout,
                std::io::ErrorKind::ConnectionRefused
                | std::io::ErrorKind::ConnectionReset
                | std::io::ErrorKind::ConnectionAborted
                | std::io::ErrorKind::NotConnected
                | std::io::ErrorKind::AddrNotAvailable => ApiErrorKind::Connection,
                _ => ApiErrorKind::Transport,
            },
            _ => ApiErrorKind::Transport,
        };
        ApiError::new(kind, err.to_string())
    }
}

/// A decoded response body could not be mapped onto an entity.
///
/// `message` is the deserializer's description, such as "missing field `cost`".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity}: {message}")]
pub struct ValidationError {
    pub entity: &'static str,
    pub message: String,
}

/// Errors returned by the save services.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
