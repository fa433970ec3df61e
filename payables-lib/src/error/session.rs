//! Session error types

/// Errors that can occur while obtaining a session token.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session has expired and could not be renewed.
    #[error("Session expired")]
    Expired,

    /// No token is available for the current user.
    #[error("Session token unavailable: {0}")]
    Unavailable(String),

    /// Network error while refreshing the session.
    #[error("Network error during session refresh: {0}")]
    Network(#[from] reqwest::Error),
}
