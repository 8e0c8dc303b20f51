//! Parameter validation for account-process dispatch.
//!
//! Checks run in a fixed precedence order and fail on the first violation,
//! before any payload is built or any network call is issued. Validation is
//! pure: it rejects or passes through, it never normalizes.

use serde_json::Value;

use crate::account::AccountIds;
use crate::error::ValidationError;
use crate::session::Session;
use crate::status::ProcessStatus;

/// Truthiness of a dynamic JSON value.
///
/// Mirrors the platform's rules: `null`, `false`, `0` and `""` are falsy;
/// objects (including empty ones), arrays and everything else are truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Account identifier predicate: a non-empty set of non-empty tokens.
fn is_valid_accounts(accounts: &AccountIds) -> bool {
    !accounts.is_empty() && accounts.as_slice().iter().all(|id| !id.is_empty())
}

/// Validate the parameters of a dispatch, in precedence order:
/// session, accounts, process name, status, content, options.
///
/// On success returns the parsed [`ProcessStatus`]; everything else is
/// passed through untouched.
pub fn validate_params(
    session: Option<&Session>,
    accounts: &AccountIds,
    process_name: &str,
    new_status: &str,
    content: Option<&Value>,
    options: Option<&Value>,
) -> Result<ProcessStatus, ValidationError> {
    if session.is_none() {
        return Err(ValidationError::no_session());
    }

    if !is_valid_accounts(accounts) {
        return Err(ValidationError::invalid_accounts_id(
            "Account ids must be a non-empty set of non-empty tokens",
        ));
    }

    if process_name.is_empty() {
        return Err(ValidationError::invalid_process_name());
    }

    let status = ProcessStatus::parse(new_status)
        .ok_or_else(|| ValidationError::invalid_status(new_status))?;

    if content.is_some_and(|value| is_truthy(value) && !value.is_object()) {
        return Err(ValidationError::invalid_content());
    }

    if options.is_some_and(|value| is_truthy(value) && !value.is_object()) {
        return Err(ValidationError::invalid_options());
    }

    Ok(status)
}
