//! Authenticated client session context.

/// Session context for calls made on behalf of a Janis client.
///
/// The session is read-only: the dispatcher only checks its presence and the
/// HTTP transport binds its credentials as request headers. It is passed in
/// explicitly at construction instead of being pulled from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    client_code: String,
    api_key: String,
    api_secret: String,
    user_id: Option<String>,
}

impl Session {
    /// Create a session for a client.
    #[must_use]
    pub fn new(
        client_code: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_code: client_code.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            user_id: None,
        }
    }

    /// Attach the acting user.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The client code the calls are made for.
    #[must_use]
    pub fn client_code(&self) -> &str {
        &self.client_code
    }

    /// API key credential.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// API secret credential.
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// The acting user, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}
