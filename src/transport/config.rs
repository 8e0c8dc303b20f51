//! HTTP transport configuration.

use std::time::Duration;

/// Platform environment the transport resolves services against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Development environment.
    Beta,
    /// Quality-assurance environment.
    Qa,
    /// Production environment.
    Production,
}

impl Environment {
    /// Base domain for service hosts in this environment.
    #[must_use]
    pub const fn base_domain(&self) -> &'static str {
        match self {
            Self::Beta => "janisdev.in",
            Self::Qa => "janisqa.in",
            Self::Production => "janis.in",
        }
    }

    /// Resolve the base URL of a service in this environment.
    #[must_use]
    pub fn service_url(&self, service: &str) -> String {
        format!("https://{service}.{}", self.base_domain())
    }

    /// Check if this is the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beta => write!(f, "BETA"),
            Self::Qa => write!(f, "QA"),
            Self::Production => write!(f, "PRODUCTION"),
        }
    }
}

/// Configuration for [`HttpMicroserviceClient`](super::HttpMicroserviceClient).
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Target environment.
    pub environment: Environment,
    /// Explicit base URL, overriding environment resolution. Used for tests
    /// and local gateways.
    pub base_url: Option<String>,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Retry policy for network failures.
    pub retry: RetryConfig,
}

impl TransportConfig {
    /// Create a configuration for an environment.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            base_url: None,
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }

    /// Override the resolved base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Base URL for a service, honoring the override.
    #[must_use]
    pub fn service_url(&self, service: &str) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.environment.service_url(service))
    }
}

/// Retry configuration for network-level failures.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts.
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(5),
            multiplier: 2.0,
        }
    }
}
