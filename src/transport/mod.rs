//! Microservice-call transport port.
//!
//! The dispatcher core talks to the platform through [`MicroserviceCall`];
//! implementations own everything wire-level (routing tables, auth headers,
//! timeouts, retries). [`HttpMicroserviceClient`] is the production adapter.

mod config;
mod http;

pub use config::{Environment, RetryConfig, TransportConfig};
pub use http::HttpMicroserviceClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Per-call routing descriptor distinguishing otherwise-identical calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routing {
    /// The account the call is addressed to.
    pub id: String,
}

impl Routing {
    /// Route a call to one account.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Response of a settled microservice call.
///
/// Any HTTP status is a response, including 4xx/5xx — an `Err` from the
/// transport means the call itself could not complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResponse {
    /// HTTP status code returned by the service.
    pub status_code: u16,
    /// Parsed response body; `Null` when the service sent none.
    pub body: Value,
}

impl CallResponse {
    /// Returns true for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

/// Errors from a transport implementation.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Network-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Retries exhausted without reaching the service.
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// The session is missing the credentials the transport needs.
    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// The method has no route on this transport.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
}

/// Port for performing a call against a platform microservice.
#[async_trait]
pub trait MicroserviceCall: Send + Sync {
    /// Call `method` on `namespace` of `service` with a JSON payload.
    ///
    /// Ordinary unsuccessful HTTP responses settle as `Ok` with that status
    /// code; only a call that cannot complete is an `Err`.
    async fn safe_call<B>(
        &self,
        service: &str,
        namespace: &str,
        method: &str,
        payload: &B,
        query: Option<&Value>,
        routing: &Routing,
    ) -> Result<CallResponse, TransportError>
    where
        B: Serialize + Sync;
}
