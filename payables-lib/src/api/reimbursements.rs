//! Reimbursement operations

use uuid::Uuid;

use super::multipart::build_file_body;
use super::multipart::generate_boundary;
use crate::PayablesClient;
use crate::error::Error;
use crate::model::DocumentMeta;
use crate::model::NewReimbursement;
use crate::model::Reimbursement;
use crate::model::ReimbursementStatus;

impl PayablesClient {
    /// Lists reimbursement requests, optionally narrowed to one status.
    pub async fn list_reimbursements(
        &self,
        status: Option<ReimbursementStatus>,
    ) -> Result<Vec<Reimbursement>, Error> {
        let path = match status {
            Some(status) => format!(
                "reimbursements?status={}",
                urlencoding::encode(status.as_str())
            ),
            None => "reimbursements".to_string(),
        };
        self.get_json(&path).await
    }

    /// Fetches one reimbursement request.
    pub async fn get_reimbursement(&self, id: Uuid) -> Result<Reimbursement, Error> {
        self.get_json(&format!("reimbursements/{}", id)).await
    }

    /// Submits a new reimbursement request.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Validation`] before any network traffic when the
    /// form data is invalid; the per-field failures map back onto the form.
    pub async fn submit_reimbursement(
        &self,
        request: &NewReimbursement,
    ) -> Result<Reimbursement, Error> {
        request.validate()?;
        self.post_json("reimbursements", request).await
    }

    /// Approves a reimbursement request.
    pub async fn approve_reimbursement(&self, id: Uuid) -> Result<Reimbursement, Error> {
        self.post_json(
            &format!("reimbursements/{}/approve", id),
            &serde_json::json!({}),
        )
        .await
    }

    /// Rejects a reimbursement request with a reason.
    pub async fn reject_reimbursement(
        &self,
        id: Uuid,
        reason: &str,
    ) -> Result<Reimbursement, Error> {
        self.post_json(
            &format!("reimbursements/{}/reject", id),
            &serde_json::json!({ "reason": reason }),
        )
        .await
    }

    /// Uploads a receipt file and returns its stored metadata.
    ///
    /// The body is a hand-built `multipart/form-data` payload with the file
    /// under the `file` field, which is what the upload endpoint expects.
    pub async fn upload_receipt(
        &self,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<DocumentMeta, Error> {
        let boundary = generate_boundary("receipt");
        let body = build_file_body(&boundary, "file", file_name, content_type, data);
        log::debug!("uploading receipt {} ({} bytes)", file_name, data.len());
        self.post_multipart("reimbursements/receipts", &boundary, body)
            .await
    }
}
