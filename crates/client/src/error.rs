use shared_types::ErrorBody;
use std::fmt;

/// Failure of a call to the authentication backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    Server { status: u16, detail: Option<String> },
    /// The request never produced a response (connection refused, CORS, DNS).
    Network(String),
}

impl ApiError {
    /// Build a server error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Server {
            status,
            detail: ErrorBody::detail_from_text(body),
        }
    }

    pub fn network(error: impl fmt::Display) -> Self {
        ApiError::Network(error.to_string())
    }

    /// The backend's detail message, when it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            ApiError::Network(_) => None,
        }
    }

    /// Message to show the user: the backend detail verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server {
                status,
                detail: Some(detail),
            } => write!(f, "server returned {status}: {detail}"),
            ApiError::Server { status, detail: None } => write!(f, "server returned {status}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
