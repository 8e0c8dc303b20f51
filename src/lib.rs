// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::needless_pass_by_value,
        clippy::default_trait_access
    )
)]

//! VTEX account-process client.
//!
//! Reports the lifecycle status of account processes to the VTEX Commerce
//! service, fanning a single update out across one or many accounts:
//!
//! - **Validation** (`validate`): fail-fast parameter checks with stable
//!   error codes, before any network activity.
//! - **Request formatting** (`request`): one normalized payload per
//!   dispatch, with conditional content and date stamps.
//! - **Dispatch** (`client`): one concurrent transport call per account,
//!   results aggregated in input order.
//! - **Transport** (`transport`): the microservice-call port and its
//!   reqwest-based HTTP adapter; ordinary unsuccessful HTTP responses are
//!   data, not errors.
//!
//! ```no_run
//! use vtex_account_processes::{
//!     AccountProcessClient, Environment, HttpMicroserviceClient, Session, TransportConfig,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::new("defaultClient", "api-key", "api-secret");
//! let transport =
//!     HttpMicroserviceClient::new(TransportConfig::new(Environment::Production), &session)?;
//! let client = AccountProcessClient::new(transport).with_session(session);
//!
//! let results = client
//!     .send("5dea9fc691240d00084083f8", "import-products", "pending", None, None)
//!     .await?;
//! assert!(results[0].is_success());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Account identifier set.
pub mod account;

/// Dispatch client and service target constants.
pub mod client;

/// Error taxonomy.
pub mod error;

/// Outgoing payload formatting.
pub mod request;

/// Session context.
pub mod session;

/// Process status enumeration.
pub mod status;

/// Transport port and HTTP adapter.
pub mod transport;

/// Parameter validation.
pub mod validate;

pub use account::AccountIds;
pub use client::{AccountProcessClient, DispatchResult};
pub use error::{AccountProcessError, ErrorCode, ValidationError};
pub use request::ProcessUpdate;
pub use session::Session;
pub use status::ProcessStatus;
pub use transport::{
    CallResponse, Environment, HttpMicroserviceClient, MicroserviceCall, RetryConfig, Routing,
    TransportConfig, TransportError,
};
