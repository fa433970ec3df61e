//! Main PayablesClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Error;
use crate::session::Session;

/// The main client for interacting with the Payables backend API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use payables_lib::{PayablesClient, session::StaticSession};
///
/// let client = PayablesClient::builder()
///     .url("https://payables.example.com")
///     .session(StaticSession::new("my-token"))
///     .build();
///
/// let profile = client.connect().await?;
/// println!("signed in as {}", profile.display_name);
/// ```
#[derive(Clone)]
pub struct PayablesClient {
    inner: Arc<PayablesClientInner>,
}

pub(crate) struct PayablesClientInner {
    pub(crate) base_url: String,
    pub(crate) api_root: String,
    pub(crate) session: Arc<dyn Session>,
    pub(crate) http_client: Client,
    pub(crate) timeout: Option<Duration>,
}

impl PayablesClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> PayablesClientBuilder<Missing, Missing> {
        PayablesClientBuilder::new()
    }

    /// Validates connectivity to the backend.
    ///
    /// Fetches the caller's profile to verify the URL and session are valid.
    pub async fn connect(&self) -> Result<Profile, Error> {
        self.get_json("me").await
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the API root path segment.
    pub fn api_root(&self) -> &str {
        &self.inner.api_root
    }

    pub(crate) fn inner(&self) -> &PayablesClientInner {
        &self.inner
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.inner.base_url.trim_end_matches('/'),
            self.inner.api_root.trim_matches('/'),
            path
        )
    }
}

impl std::fmt::Debug for PayablesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayablesClient")
            .field("base_url", &self.inner.base_url)
            .field("api_root", &self.inner.api_root)
            .finish_non_exhaustive()
    }
}

/// The signed-in caller's profile, as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The user's ID.
    pub user_id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Role name used for approval routing (e.g., `"approver"`).
    pub role: String,
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`PayablesClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile
/// time.
///
/// # Required Fields
///
/// - `url` - The backend base URL
/// - `session` - A [`Session`] implementation supplying bearer tokens
pub struct PayablesClientBuilder<Url, S> {
    url: Url,
    session: S,
    api_root: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl PayablesClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            session: Missing,
            api_root: "api".to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for PayablesClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> PayablesClientBuilder<Missing, S> {
    /// Sets the backend base URL.
    pub fn url(self, url: impl Into<String>) -> PayablesClientBuilder<Set<String>, S> {
        PayablesClientBuilder {
            url: Set(url.into()),
            session: self.session,
            api_root: self.api_root,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> PayablesClientBuilder<U, Missing> {
    /// Sets the session supplying bearer tokens.
    pub fn session<S: Session + 'static>(
        self,
        session: S,
    ) -> PayablesClientBuilder<U, Set<Arc<dyn Session>>> {
        PayablesClientBuilder {
            url: self.url,
            session: Set(Arc::new(session) as Arc<dyn Session>),
            api_root: self.api_root,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, S> PayablesClientBuilder<U, S> {
    /// Sets the API root path segment.
    ///
    /// Defaults to `api`.
    pub fn api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = root.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl PayablesClientBuilder<Set<String>, Set<Arc<dyn Session>>> {
    /// Builds the [`PayablesClient`].
    ///
    /// This method is only available when both `url` and `session` have been
    /// set.
    pub fn build(self) -> PayablesClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        PayablesClient {
            inner: Arc::new(PayablesClientInner {
                base_url: self.url.0,
                api_root: self.api_root,
                session: self.session.0,
                http_client,
                timeout: self.timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StaticSession;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = PayablesClient::builder()
            .url("https://payables.example.com/")
            .session(StaticSession::new("t"))
            .build();

        assert_eq!(
            client.endpoint("invoices"),
            "https://payables.example.com/api/invoices"
        );
    }

    #[test]
    fn test_custom_api_root() {
        let client = PayablesClient::builder()
            .url("https://payables.example.com")
            .session(StaticSession::new("t"))
            .api_root("/api/v2/")
            .build();

        assert_eq!(
            client.endpoint("me"),
            "https://payables.example.com/api/v2/me"
        );
    }
}
