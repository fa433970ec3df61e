//! Upload error types

use hyper::StatusCode;

/// Errors that can occur while handling an upload request.
#[derive(Debug, thiserror::Error)]
pub(crate) enum UploadError {
    /// The request is not multipart or carries no boundary parameter.
    #[error("Content-Type must be multipart/form-data with a boundary")]
    MissingBoundary,

    /// The multipart body could not be parsed.
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    /// The request body exceeded the configured cap.
    #[error("File exceeds the {limit}-byte upload limit")]
    TooLarge { limit: usize },

    /// The file's content type is not on the accepted list.
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    /// Writing the file to disk failed.
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingBoundary | UploadError::Malformed(_) => StatusCode::BAD_REQUEST,
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            UploadError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code for the JSON envelope.
    pub fn code(&self) -> &'static str {
        match self {
            UploadError::MissingBoundary => "missing_boundary",
            UploadError::Malformed(_) => "malformed_multipart",
            UploadError::TooLarge { .. } => "file_too_large",
            UploadError::UnsupportedType(_) => "unsupported_type",
            UploadError::Io(_) => "storage_failure",
        }
    }
}
