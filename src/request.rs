//! Outgoing request payload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::status::ProcessStatus;
use crate::validate::is_truthy;

/// Payload sent to the account-process API.
///
/// `process` and `status` are always present; the rest is included only when
/// the corresponding input was supplied and truthy. Built once per dispatch
/// and shared across every targeted account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessUpdate {
    /// Business process being tracked.
    pub process: String,
    /// New lifecycle status.
    pub status: ProcessStatus,
    /// Extra data to inform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    /// Moment the process started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Moment the process ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl ProcessUpdate {
    /// Build the payload, stamping date flags with the current UTC time.
    #[must_use]
    pub fn build(
        process_name: &str,
        status: ProcessStatus,
        content: Option<&Value>,
        options: Option<&Value>,
    ) -> Self {
        Self::build_at(process_name, status, content, options, Utc::now())
    }

    /// Build the payload against a fixed clock instant.
    ///
    /// `startDate`/`endDate` are stamped with `now` when the matching option
    /// flag is truthy; unrecognized option keys are ignored.
    #[must_use]
    pub fn build_at(
        process_name: &str,
        status: ProcessStatus,
        content: Option<&Value>,
        options: Option<&Value>,
        now: DateTime<Utc>,
    ) -> Self {
        let date_flag = |flag: &str| {
            options
                .and_then(|opts| opts.get(flag))
                .is_some_and(is_truthy)
                .then_some(now)
        };

        Self {
            process: process_name.to_string(),
            status,
            content: content.filter(|value| is_truthy(value)).cloned(),
            start_date: date_flag("startDate"),
            end_date: date_flag("endDate"),
        }
    }
}
