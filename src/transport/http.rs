//! HTTP implementation of the microservice-call port.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use async_trait::async_trait;

use crate::session::Session;

use super::config::{RetryConfig, TransportConfig};
use super::{CallResponse, MicroserviceCall, Routing, TransportError};

const CLIENT_HEADER: &str = "janis-client";
const API_KEY_HEADER: &str = "janis-api-key";
const API_SECRET_HEADER: &str = "janis-api-secret";
const USER_HEADER: &str = "janis-user";

/// HTTP client for platform microservices, bound to one session.
///
/// Service methods map onto the platform's REST conventions; any HTTP status
/// the service answers with settles as a [`CallResponse`]. Only network
/// failures are retried.
#[derive(Debug, Clone)]
pub struct HttpMicroserviceClient {
    client: Client,
    config: TransportConfig,
    client_code: String,
    api_key: String,
    api_secret: String,
    user_id: Option<String>,
}

impl HttpMicroserviceClient {
    /// Create a client bound to a session's credentials.
    pub fn new(config: TransportConfig, session: &Session) -> Result<Self, TransportError> {
        if session.client_code().is_empty() {
            return Err(TransportError::MissingCredentials("client code"));
        }
        if session.api_key().is_empty() {
            return Err(TransportError::MissingCredentials("api key"));
        }
        if session.api_secret().is_empty() {
            return Err(TransportError::MissingCredentials("api secret"));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            client,
            config,
            client_code: session.client_code().to_string(),
            api_key: session.api_key().to_string(),
            api_secret: session.api_secret().to_string(),
            user_id: session.user_id().map(str::to_string),
        })
    }

    /// Resolve a service method to an HTTP verb and URL.
    fn route(
        &self,
        service: &str,
        namespace: &str,
        method: &str,
        routing: &Routing,
    ) -> Result<(Method, String), TransportError> {
        let base = self.config.service_url(service);
        let collection = format!("{base}/api/{namespace}");
        Ok(match method {
            "list" => (Method::GET, collection),
            "create" => (Method::POST, collection),
            "get" => (Method::GET, format!("{collection}/{}", routing.id)),
            "update" => (Method::PUT, format!("{collection}/{}", routing.id)),
            "remove" => (Method::DELETE, format!("{collection}/{}", routing.id)),
            other => return Err(TransportError::UnsupportedMethod(other.to_string())),
        })
    }
}

#[async_trait]
impl MicroserviceCall for HttpMicroserviceClient {
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
        B: Serialize + Sync,
    {
        let (verb, url) = self.route(service, namespace, method, routing)?;
        let pairs = query_pairs(query);
        let mut backoff = Backoff::new(&self.config.retry);

        loop {
            let mut request = self
                .client
                .request(verb.clone(), &url)
                .header(CLIENT_HEADER, &self.client_code)
                .header(API_KEY_HEADER, &self.api_key)
                .header(API_SECRET_HEADER, &self.api_secret);

            if let Some(user_id) = &self.user_id {
                request = request.header(USER_HEADER, user_id);
            }
            if !pairs.is_empty() {
                request = request.query(&pairs);
            }
            if verb == Method::POST || verb == Method::PUT {
                request = request.json(payload);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    if let Some(delay) = backoff.next_delay() {
                        tracing::warn!(
                            error = %e,
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt,
                            "Network error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(TransportError::MaxRetriesExceeded {
                        attempts: backoff.attempt,
                    });
                }
            };

            let status_code = response.status().as_u16();
            let text = response
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            return Ok(CallResponse {
                status_code,
                body: parse_body(&text),
            });
        }
    }
}

/// Parse a response body: JSON when possible, `Null` when empty, raw
/// string otherwise.
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Flatten a JSON-object query into URL pairs.
fn query_pairs(query: Option<&Value>) -> Vec<(String, String)> {
    match query {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Exponential backoff over network failures.
struct Backoff {
    attempt: u32,
    max_attempts: u32,
    next: Duration,
    max: Duration,
    multiplier: f64,
}

impl Backoff {
    const fn new(config: &RetryConfig) -> Self {
        Self {
            attempt: 0,
            max_attempts: config.max_attempts,
            next: config.initial_backoff,
            max: config.max_backoff,
            multiplier: config.multiplier,
        }
    }

    fn next_delay(&mut self) -> Option<Duration> {
        self.attempt += 1;
        if self.attempt >= self.max_attempts {
            return None;
        }

        let delay = self.next;
        self.next = Duration::from_secs_f64(
            (self.next.as_secs_f64() * self.multiplier).min(self.max.as_secs_f64()),
        );
        Some(delay)
    }
}
