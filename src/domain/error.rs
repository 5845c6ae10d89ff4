//! Error types for dashboard domain operations.
//!
//! This module defines the error type shared by the API client, the
//! session store and the command line front-end.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for dashboard operations.
///
/// Each variant maps to one failure mode seen when talking to the
/// subscription backend or when interpreting user input.
#[derive(Debug, Error)]
pub enum DashError {
    /// Transport-level errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Http {
        /// The HTTP status code.
        status: u16,
    },

    /// The backend rejected the session token (HTTP 401).
    #[error("Session expired, please log in again")]
    Unauthorized,

    /// No session token is stored.
    #[error("No authentication token found")]
    NotAuthenticated,

    /// The backend answered 2xx but reported a failure in its envelope.
    #[error("API error: {message}")]
    Api {
        /// Message reported by the backend.
        message: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Entity not found on the backend.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "subscription").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading or writing the local session file failed.
    #[error("Session store error: {0}")]
    Session(String),
}

impl DashError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns `true` if the error means the user has to log in again.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::NotAuthenticated)
    }
}

// ============================================================================
// Tests
// ============================================================================
