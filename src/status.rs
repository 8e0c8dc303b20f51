//! Account-process lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an account process as tracked by VTEX Commerce.
///
/// The set is fixed by the remote service; anything outside it is rejected
/// during validation before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    /// Process registered but not started.
    Pending,
    /// Process currently running.
    Processing,
    /// Process finished successfully.
    Success,
    /// Process finished with an error.
    Error,
}

impl ProcessStatus {
    /// Every status accepted by the service, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Processing, Self::Success, Self::Error];

    /// Get the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Parse a wire value into a status, `None` if it is not a member.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == value)
    }

    /// Returns true if the process will not change status again.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_member() {
        for status in ProcessStatus::ALL {
            assert_eq!(ProcessStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(ProcessStatus::parse("testing"), None);
        assert_eq!(ProcessStatus::parse("PENDING"), None);
        assert_eq!(ProcessStatus::parse(""), None);
    }

    #[test]
    fn as_str_round_trip() {
        assert_eq!(ProcessStatus::Pending.as_str(), "pending");
        assert_eq!(ProcessStatus::Processing.as_str(), "processing");
        assert_eq!(ProcessStatus::Success.as_str(), "success");
        assert_eq!(ProcessStatus::Error.as_str(), "error");
    }

    #[test]
    fn terminal_statuses() {
        assert!(!ProcessStatus::Pending.is_terminal());
        assert!(!ProcessStatus::Processing.is_terminal());
        assert!(ProcessStatus::Success.is_terminal());
        assert!(ProcessStatus::Error.is_terminal());
    }

    #[test]
    fn status_display() {
        assert_eq!(format!("{}", ProcessStatus::Processing), "processing");
    }

    #[test]
    fn status_serde_lowercase() {
        let json = serde_json::to_string(&ProcessStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let parsed: ProcessStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, ProcessStatus::Error);
    }
}
