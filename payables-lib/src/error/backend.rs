//! Backend error payload

use serde::Deserialize;

use super::FieldValidationError;

/// Structured error information from backend API responses.
///
/// The backend wraps failures in a JSON envelope with an error code, a
/// human-readable message, optional per-field validation failures, and an
/// optional nested cause.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendErrorDetail {
    /// The error code (e.g., `"invoice_locked"`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Per-field validation failures, if any.
    #[serde(default)]
    pub field_errors: Vec<FieldValidationError>,
    /// Nested cause, if any.
    #[serde(default)]
    pub inner_error: Option<Box<BackendErrorDetail>>,
}

impl BackendErrorDetail {
    /// Creates a new error detail with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field_errors: Vec::new(),
            inner_error: None,
        }
    }

    /// Returns the innermost error in the chain.
    pub fn innermost(&self) -> &BackendErrorDetail {
        let mut current = self;
        while let Some(inner) = &current.inner_error {
            current = inner;
        }
        current
    }

    /// Checks if this error or any nested cause has the given code.
    pub fn has_code(&self, code: &str) -> bool {
        if self.code == code {
            return true;
        }
        if let Some(inner) = &self.inner_error {
            return inner.has_code(code);
        }
        false
    }
}

impl std::fmt::Display for BackendErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_envelope() {
        let detail: BackendErrorDetail = serde_json::from_str(
            r#"{
                "code": "validation_failed",
                "message": "Submission rejected",
                "fieldErrors": [
                    {"field": "amount", "message": "must be positive"}
                ],
                "innerError": {"code": "bad_amount", "message": "-3.00"}
            }"#,
        )
        .unwrap();

        assert_eq!(detail.code, "validation_failed");
        assert_eq!(detail.field_errors.len(), 1);
        assert!(detail.has_code("bad_amount"));
        assert_eq!(detail.innermost().code, "bad_amount");
    }
}
