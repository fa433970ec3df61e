//! Error types

mod api;
mod backend;
mod session;
mod validation;

pub use api::*;
pub use backend::*;
pub use session::*;
pub use validation::*;

/// Top-level error type for Payables client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session token could not be obtained.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Client-side validation rejected the submission.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested operation is not valid in the current state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
