//! Document operations

use uuid::Uuid;

use crate::PayablesClient;
use crate::error::Error;
use crate::model::DocumentMeta;

impl PayablesClient {
    /// Lists all uploaded documents.
    pub async fn list_documents(&self) -> Result<Vec<DocumentMeta>, Error> {
        self.get_json("documents").await
    }

    /// Fetches one document's metadata.
    pub async fn get_document(&self, id: Uuid) -> Result<DocumentMeta, Error> {
        self.get_json(&format!("documents/{}", id)).await
    }

    /// Deletes an uploaded document.
    pub async fn delete_document(&self, id: Uuid) -> Result<(), Error> {
        self.delete(&format!("documents/{}", id)).await
    }
}
