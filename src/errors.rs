use std::fmt;

use reqwest::StatusCode;

/// Result shorthand for a `std::result::Result` wrapping our own `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Type of error, exposed through `Error` member `kind`
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ErrorKind {
    /// Event could not be turned into its JSON body. No request was made.
    Serialization,

    /// The HTTP request could not be completed (DNS, connection, TLS, I/O)
    Transport,

    /// The collector answered with a status other than 200
    RemoteRejection,
}

/// Error
///
/// `Display` prints `message` and nothing else: for a `RemoteRejection` that is the body
/// returned by the collector, for a `Transport` error the diagnostic reported by the HTTP
/// client.
#[derive(Debug)]
pub struct Error {
    /// Error message
    pub message: String,
    /// Type of error
    pub kind: ErrorKind,
    /// HTTP status returned by the collector, only set for `RemoteRejection`
    pub status: Option<StatusCode>,
}

impl Error {
    pub(crate) fn remote_rejection(status: StatusCode, body: String) -> Self {
        Self {
            message: body,
            kind: ErrorKind::RemoteRejection,
            status: Some(status),
        }
    }

    pub(crate) fn with_description(description: &str, kind: ErrorKind) -> Self {
        Self {
            message: description.to_string(),
            kind,
            status: None,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::with_description(&e.to_string(), ErrorKind::Serialization)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::with_description(&e.to_string(), ErrorKind::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim_body() {
        let err = Error::remote_rejection(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal error".to_string(),
        );
        assert_eq!(err.to_string(), "internal error");
        assert_eq!(err.kind, ErrorKind::RemoteRejection);
        assert_eq!(err.status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_from_serde_json() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let text = e.to_string();
        let err: Error = e.into();
        assert_eq!(err.kind, ErrorKind::Serialization);
        assert_eq!(err.message, text);
        assert_eq!(err.status, None);
    }
}
