//! Session token handling
//!
//! Credentials travel with the client instead of living in process-global
//! state: the host application constructs the client with whatever
//! [`Session`] implementation it uses, and every request asks the session
//! for a fresh bearer token.

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::error::SessionError;

/// A bearer token scoped to one signed-in user.
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// The bearer token used for API authentication.
    pub bearer: String,
    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Creates a new session token with just the token string.
    pub fn new(bearer: impl Into<String>) -> Self {
        Self {
            bearer: bearer.into(),
            expires_at: None,
        }
    }

    /// Creates a new session token with an expiration time.
    pub fn with_expiry(bearer: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            bearer: bearer.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Returns `true` if the token has expired.
    ///
    /// Returns `false` if expiration time is unknown.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Utc::now() >= exp)
    }

    /// Returns the token as an `Authorization` header value.
    pub fn as_authorization(&self) -> String {
        format!("Bearer {}", self.bearer)
    }
}

/// Provides the bearer token for API requests.
///
/// Implementations may hold a fixed token, read one from the host
/// application's credential store, or refresh against an identity provider.
#[async_trait]
pub trait Session: Send + Sync {
    /// Returns a token valid for the next request.
    async fn token(&self) -> Result<SessionToken, SessionError>;
}

/// A session with a fixed, caller-supplied token.
#[derive(Debug, Clone)]
pub struct StaticSession {
    token: String,
}

impl StaticSession {
    /// Creates a session around a fixed bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl Session for StaticSession {
    async fn token(&self) -> Result<SessionToken, SessionError> {
        Ok(SessionToken::new(self.token.clone()))
    }
}
