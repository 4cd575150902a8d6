//! Unified error type for ragdesk.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Unified error type for client operations.
#[derive(Debug, Error)]
pub enum DeskError {
    /// The request never produced a usable response.
    #[error("{endpoint}: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: HttpError,
    },

    /// The backend answered with a failure status or envelope.
    #[error("{endpoint} rejected the request ({status}): {message}")]
    Rejected {
        endpoint: &'static str,
        status: String,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("{endpoint} returned an unreadable response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl DeskError {
    pub fn http(endpoint: &'static str, source: HttpError) -> Self {
        DeskError::Http { endpoint, source }
    }

    pub fn decode(endpoint: &'static str, source: serde_json::Error) -> Self {
        DeskError::Decode { endpoint, source }
    }

    pub fn rejected(
        endpoint: &'static str,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        DeskError::Rejected {
            endpoint,
            status: status.into(),
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeskError::Http { source, .. } => match source {
                HttpError::ServerError { .. } => ErrorCategory::Server,
                HttpError::InvalidUrl(_) => ErrorCategory::Configuration,
                _ => ErrorCategory::Network,
            },
            DeskError::Rejected { .. } | DeskError::Decode { .. } => ErrorCategory::Server,
            DeskError::Validation(_) => ErrorCategory::User,
            DeskError::Io(_) => ErrorCategory::System,
            DeskError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DeskError::Http { source, .. } => match source {
                HttpError::ConnectionFailed(_) => "E_NET_CONN",
                HttpError::Timeout(_) => "E_NET_TIMEOUT",
                HttpError::ServerError { .. } => "E_NET_HTTP",
                HttpError::Cancelled => "E_NET_CANCEL",
                HttpError::Io(_) => "E_NET_IO",
                HttpError::InvalidUrl(_) => "E_NET_URL",
                HttpError::Other(_) => "E_NET_OTHER",
            },
            DeskError::Rejected { .. } => "E_API_REJECTED",
            DeskError::Decode { .. } => "E_API_DECODE",
            DeskError::Validation(_) => "E_INPUT",
            DeskError::Io(_) => "E_SYS_IO",
            DeskError::Config(_) => "E_CONFIG",
        }
    }

    /// Message suitable for a notification or an in-transcript error.
    ///
    /// Server-supplied messages are passed through when present.
    pub fn user_message(&self) -> String {
        match self {
            DeskError::Http { source, .. } => match source {
                HttpError::ConnectionFailed(_) => {
                    "Unable to connect to the server. Please check your connection.".to_string()
                }
                HttpError::Timeout(_) => "The server took too long to respond.".to_string(),
                HttpError::ServerError { status, .. } => {
                    format!("The server returned an error (HTTP {}).", status)
                }
                other => other.to_string(),
            },
            DeskError::Rejected { message, .. } => message.clone(),
            DeskError::Decode { .. } => {
                "Received an invalid response from the server.".to_string()
            }
            DeskError::Validation(message) => message.clone(),
            DeskError::Io(err) => format!("File error: {}", err),
            DeskError::Config(message) => format!("Configuration problem: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            DeskError::http("chat", HttpError::ConnectionFailed("x".into())).category(),
            ErrorCategory::Network
        );
        assert_eq!(
            DeskError::http(
                "chat",
                HttpError::ServerError {
                    status: 500,
                    message: "boom".into()
                }
            )
            .category(),
            ErrorCategory::Server
        );
        assert_eq!(
            DeskError::rejected("delete-file", "404", "not found").category(),
            ErrorCategory::Server
        );
        assert_eq!(
            DeskError::Validation("Folder name cannot be empty".into()).category(),
            ErrorCategory::User
        );
    }

    #[test]
    fn test_display_includes_endpoint() {
        let err = DeskError::http("get-final-files", HttpError::Timeout("30s".into()));
        assert_eq!(err.to_string(), "get-final-files: Request timeout: 30s");
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_rejected_passes_server_message_through() {
        let err = DeskError::rejected("create-knowledge-base", "error", "Quota exceeded");
        assert_eq!(err.user_message(), "Quota exceeded");
        assert_eq!(
            err.to_string(),
            "create-knowledge-base rejected the request (error): Quota exceeded"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DeskError = io.into();
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_decode_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DeskError::decode("get-files-and-folders", source);
        assert_eq!(err.error_code(), "E_API_DECODE");
        assert!(std::error::Error::source(&err).is_some());
    }
}
