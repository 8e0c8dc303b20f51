//! Error taxonomy for account-process dispatch.
//!
//! Validation failures carry a stable code so callers can branch on the
//! failure kind without matching message strings. Transport failures are
//! opaque and propagate unmodified; ordinary unsuccessful HTTP responses are
//! not errors at all — they come back as [`DispatchResult`](crate::client::DispatchResult)s.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::TransportError;

/// Validation failure kinds, in check-precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No session was provided to the client.
    NoSession,
    /// Account identifier set is empty or contains an empty token.
    InvalidAccountsId,
    /// Process name is empty.
    InvalidProcessName,
    /// Status is not a member of the fixed enumeration.
    InvalidStatus,
    /// Content was supplied but is not a JSON object.
    InvalidContent,
    /// Options were supplied but are not a JSON object.
    InvalidOptions,
}

impl ErrorCode {
    /// Stable numeric code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::NoSession => 1,
            Self::InvalidAccountsId => 2,
            Self::InvalidProcessName => 3,
            Self::InvalidStatus => 4,
            Self::InvalidContent => 5,
            Self::InvalidOptions => 6,
        }
    }

    /// Stable symbolic reason.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::NoSession => "NO_SESSION",
            Self::InvalidAccountsId => "INVALID_ACCOUNTS_ID",
            Self::InvalidProcessName => "INVALID_PROCESS_NAME",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidContent => "INVALID_CONTENT",
            Self::InvalidOptions => "INVALID_OPTIONS",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// A rejected parameter set. Raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct ValidationError {
    code: ErrorCode,
    message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the failure kind.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience constructors, one per failure kind.
impl ValidationError {
    /// No session found.
    #[must_use]
    pub fn no_session() -> Self {
        Self::new(ErrorCode::NoSession, "No session found")
    }

    /// Invalid account identifiers.
    #[must_use]
    pub fn invalid_accounts_id(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAccountsId, message)
    }

    /// Invalid process name.
    #[must_use]
    pub fn invalid_process_name() -> Self {
        Self::new(ErrorCode::InvalidProcessName, "Process name must be a non-empty string")
    }

    /// Status outside the fixed enumeration.
    #[must_use]
    pub fn invalid_status(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidStatus,
            format!("Invalid status '{value}', expected one of: pending, processing, success, error"),
        )
    }

    /// Content is not an object.
    #[must_use]
    pub fn invalid_content() -> Self {
        Self::new(ErrorCode::InvalidContent, "Content must be a JSON object")
    }

    /// Options are not an object.
    #[must_use]
    pub fn invalid_options() -> Self {
        Self::new(ErrorCode::InvalidOptions, "Options must be a JSON object")
    }
}

/// Top-level error returned by [`send`](crate::client::AccountProcessClient::send).
#[derive(Debug, Error)]
pub enum AccountProcessError {
    /// The input was malformed; no call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A transport call could not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl AccountProcessError {
    /// The validation code, if this is a validation failure.
    #[must_use]
    pub const fn validation_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Validation(err) => Some(err.code()),
            Self::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes_are_stable() {
        assert_eq!(ErrorCode::NoSession.code(), 1);
        assert_eq!(ErrorCode::InvalidAccountsId.code(), 2);
        assert_eq!(ErrorCode::InvalidProcessName.code(), 3);
        assert_eq!(ErrorCode::InvalidStatus.code(), 4);
        assert_eq!(ErrorCode::InvalidContent.code(), 5);
        assert_eq!(ErrorCode::InvalidOptions.code(), 6);
    }

    #[test]
    fn reasons_are_stable() {
        assert_eq!(ErrorCode::NoSession.reason(), "NO_SESSION");
        assert_eq!(ErrorCode::InvalidAccountsId.reason(), "INVALID_ACCOUNTS_ID");
        assert_eq!(ErrorCode::InvalidOptions.reason(), "INVALID_OPTIONS");
    }

    #[test]
    fn error_code_serde() {
        let json = serde_json::to_string(&ErrorCode::InvalidProcessName).unwrap();
        assert_eq!(json, "\"INVALID_PROCESS_NAME\"");

        let parsed: ErrorCode = serde_json::from_str("\"NO_SESSION\"").unwrap();
        assert_eq!(parsed, ErrorCode::NoSession);
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::no_session();
        assert_eq!(err.to_string(), "[NO_SESSION] No session found");
    }

    #[test]
    fn invalid_status_names_the_value() {
        let err = ValidationError::invalid_status("testing");
        assert_eq!(err.code(), ErrorCode::InvalidStatus);
        assert!(err.message().contains("testing"));
    }

    #[test]
    fn validation_code_branching() {
        let err = AccountProcessError::from(ValidationError::invalid_content());
        assert_eq!(err.validation_code(), Some(ErrorCode::InvalidContent));

        let err = AccountProcessError::from(TransportError::Network("timed out".to_string()));
        assert_eq!(err.validation_code(), None);
    }
}
