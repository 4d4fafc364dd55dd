//! Client Error Types
//!
//! Every failure surfaced by the client is an [`ApiError`]. The view layer only
//! ever needs two things from it: a human-readable message and, for HTTP
//! failures, the status code.
//!
//! # Error Categories
//!
//! - HTTP status failures (`Unauthorized`, `Forbidden`, `NotFound`,
//!   `RateLimited`, `Server`, `Http`)
//! - Transport and decoding failures (`Network`, `Decode`)
//! - Local failures (`NotAuthenticated`, `Validation`, `Upload`, `Io`, `Config`)
//!
//! # Usage
//!
//! ```rust
//! use cloudvault::shared::error::ApiError;
//!
//! let error = ApiError::from_status(404, None);
//! assert_eq!(error.user_message(), "Resource not found");
//! ```
use std::path::PathBuf;

use thiserror::Error;

use crate::shared::config::ConfigError;
use crate::shared::models::FileItem;

/// Shown for any transport-level failure (DNS, refused connection, TLS, timeout).
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401. The session has already been cleared when this is returned.
    #[error("Authentication required")]
    Unauthorized,

    /// HTTP 403
    #[error("Access forbidden")]
    Forbidden,

    /// HTTP 404
    #[error("Resource not found")]
    NotFound,

    /// HTTP 429
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    /// Any 5xx status
    #[error("Server error. Please try again later.")]
    Server {
        /// HTTP status code
        status: u16,
    },

    /// Any other non-2xx status
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message from the response body, or `HTTP <status>`
        message: String,
    },

    /// Request never produced a response
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network(#[source] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Unexpected response from server: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// An authenticated call was attempted without a token
    #[error("Not signed in. Run `cloudvault login` first.")]
    NotAuthenticated,

    /// Input rejected before any request was made
    #[error("{message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A batch upload stopped part-way through
    #[error("Upload of {} failed after {} file(s) succeeded: {source}", .path.display(), .completed.len())]
    Upload {
        /// Records for the files that were uploaded before the failure
        completed: Vec<FileItem>,
        /// The file that failed
        path: PathBuf,
        /// Why it failed
        #[source]
        source: Box<ApiError>,
    },

    /// Local filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Map a non-2xx status to an error.
    ///
    /// Fixed messages win over whatever the body says; for the remaining
    /// statuses the body's `message` is used when non-empty.
    pub fn from_status(status: u16, body_message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            s if s >= 500 => Self::Server { status: s },
            s => Self::Http {
                status: s,
                message: body_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("HTTP {}", s)),
            },
        }
    }

    /// A 401 answering a login or register request. Uses the body's
    /// `message` when there is one.
    pub fn credentials_rejected(body_message: Option<String>, fallback: &str) -> Self {
        Self::Http {
            status: 401,
            message: body_message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status behind this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::RateLimited => Some(429),
            Self::Server { status } | Self::Http { status, .. } => Some(*status),
            Self::Upload { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Message suitable for showing to the user. Never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "An unexpected error occurred".to_string()
        } else {
            message
        }
    }

    /// Whether the session was dropped because of this error
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Unauthorized | Self::NotAuthenticated => true,
            Self::Upload { source, .. } => source.is_auth_failure(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}
