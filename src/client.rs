//! Account-process dispatch client.

use futures::future;
use serde_json::Value;

use crate::account::AccountIds;
use crate::error::AccountProcessError;
use crate::request::ProcessUpdate;
use crate::session::Session;
use crate::transport::{CallResponse, MicroserviceCall, Routing};
use crate::validate;

/// Service the updates are dispatched to.
pub const SERVICE_NAME: &str = "vtex-commerce";

/// API namespace inside the service.
pub const SERVICE_NAMESPACE: &str = "account-process";

/// Service method used for status updates.
pub const SERVICE_METHOD: &str = "update";

/// One settled response per dispatched account, aligned with input order.
pub type DispatchResult = CallResponse;

/// Client that reports account-process status to VTEX Commerce.
///
/// A single [`send`](Self::send) validates its inputs, builds one shared
/// payload, and issues one independent transport call per targeted account.
#[derive(Debug, Clone)]
pub struct AccountProcessClient<T> {
    session: Option<Session>,
    transport: T,
}

impl<T: MicroserviceCall> AccountProcessClient<T> {
    /// Create a client without a session. Every `send` on it rejects with
    /// [`NoSession`](crate::error::ErrorCode::NoSession) until one is attached.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            session: None,
            transport,
        }
    }

    /// Attach the session the dispatches are made on behalf of.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Access the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a status update for `process_name` to every targeted account.
    ///
    /// Validation failures reject before any network activity. The payload is
    /// built once and shared by all calls; per-account calls run concurrently
    /// and settle into a vector aligned with the input order. A transport
    /// failure on any account propagates as-is — unsuccessful HTTP responses
    /// are not failures and come back as ordinary [`DispatchResult`]s.
    pub async fn send(
        &self,
        accounts: impl Into<AccountIds>,
        process_name: &str,
        new_status: &str,
        content: Option<Value>,
        options: Option<Value>,
    ) -> Result<Vec<DispatchResult>, AccountProcessError> {
        let accounts = accounts.into();

        let status = validate::validate_params(
            self.session.as_ref(),
            &accounts,
            process_name,
            new_status,
            content.as_ref(),
            options.as_ref(),
        )?;

        // Shared by every call in this invocation.
        let update = ProcessUpdate::build(process_name, status, content.as_ref(), options.as_ref());

        tracing::info!(
            process = process_name,
            status = %status,
            accounts = accounts.len(),
            "Dispatching account process update"
        );

        let calls = accounts.as_slice().iter().map(|account_id| {
            let update = &update;
            let transport = &self.transport;
            async move {
                let routing = Routing::new(account_id.clone());
                transport
                    .safe_call(
                        SERVICE_NAME,
                        SERVICE_NAMESPACE,
                        SERVICE_METHOD,
                        update,
                        None,
                        &routing,
                    )
                    .await
            }
        });

        let results = future::try_join_all(calls).await?;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::RwLock;

    use async_trait::async_trait;
    use serde::Serialize;
    use serde_json::json;

    use crate::error::ErrorCode;
    use crate::transport::TransportError;

    #[derive(Debug)]
    struct RecordedCall {
        service: String,
        namespace: String,
        method: String,
        payload: Value,
        query: Option<Value>,
        routing: Routing,
    }

    /// Records every call and answers echoing the routed account id.
    struct MockTransport {
        status_code: u16,
        calls: RwLock<Vec<RecordedCall>>,
    }

    impl MockTransport {
        fn new(status_code: u16) -> Self {
            Self {
                status_code,
                calls: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MicroserviceCall for MockTransport {
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
            self.calls.write().unwrap().push(RecordedCall {
                service: service.to_string(),
                namespace: namespace.to_string(),
                method: method.to_string(),
                payload: serde_json::to_value(payload).unwrap(),
                query: query.cloned(),
                routing: routing.clone(),
            });
            Ok(CallResponse {
                status_code: self.status_code,
                body: json!({ "id": routing.id }),
            })
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl MicroserviceCall for FailingTransport {
        async fn safe_call<B>(
            &self,
            _service: &str,
            _namespace: &str,
            _method: &str,
            _payload: &B,
            _query: Option<&Value>,
            _routing: &Routing,
        ) -> Result<CallResponse, TransportError>
        where
            B: Serialize + Sync,
        {
            Err(TransportError::Network("connection refused".to_string()))
        }
    }

    fn session() -> Session {
        Session::new("defaultClient", "key", "secret")
    }

    #[tokio::test]
    async fn single_account_dispatches_one_call() {
        let client = AccountProcessClient::new(MockTransport::new(200)).with_session(session());

        let results = client
            .send("5dea9fc691240d00084083f8", "test-process", "pending", None, None)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status_code, 200);
        assert_eq!(results[0].body, json!({ "id": "5dea9fc691240d00084083f8" }));

        let calls = client.transport.calls.read().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].service, SERVICE_NAME);
        assert_eq!(calls[0].namespace, SERVICE_NAMESPACE);
        assert_eq!(calls[0].method, SERVICE_METHOD);
        assert_eq!(calls[0].query, None);
        assert_eq!(calls[0].routing, Routing::new("5dea9fc691240d00084083f8"));
        assert_eq!(
            calls[0].payload,
            json!({ "process": "test-process", "status": "pending" })
        );
    }

    #[tokio::test]
    async fn fan_out_shares_the_payload_and_keeps_order() {
        let client = AccountProcessClient::new(MockTransport::new(200)).with_session(session());

        let results = client
            .send(
                vec!["acc-3", "acc-1", "acc-2"],
                "import-products",
                "processing",
                None,
                None,
            )
            .await
            .unwrap();

        let ids: Vec<&Value> = results.iter().map(|r| &r.body["id"]).collect();
        assert_eq!(ids, [&json!("acc-3"), &json!("acc-1"), &json!("acc-2")]);

        let calls = client.transport.calls.read().unwrap();
        assert_eq!(calls.len(), 3);
        assert!(calls.windows(2).all(|w| w[0].payload == w[1].payload));
    }

    #[tokio::test]
    async fn no_session_rejects_before_any_call() {
        let client = AccountProcessClient::new(MockTransport::new(200));

        let err = client
            .send("acc-1", "test-process", "pending", None, None)
            .await
            .unwrap_err();

        assert_eq!(err.validation_code(), Some(ErrorCode::NoSession));
        assert!(client.transport.calls.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_status_rejects_before_any_call() {
        let client = AccountProcessClient::new(MockTransport::new(200)).with_session(session());

        let err = client
            .send("acc-1", "test-process", "testing", None, None)
            .await
            .unwrap_err();

        assert_eq!(err.validation_code(), Some(ErrorCode::InvalidStatus));
        assert!(client.transport.calls.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let client = AccountProcessClient::new(FailingTransport).with_session(session());

        let err = client
            .send("acc-1", "test-process", "pending", None, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AccountProcessError::Transport(TransportError::Network(_))
        ));
    }
}
